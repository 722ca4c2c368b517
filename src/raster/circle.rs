use crate::{
    canvas::Canvas,
    foundation::{color::Color, math::abs},
    raster::{blend::blend_color, clip::normalize_rect_wide},
};

impl Canvas<'_> {
    /// Blends a filled disk: every pixel with `(x - cx)² + (y - cy)² <= r²`.
    ///
    /// A negative radius draws the same disk as its magnitude; radius `0`
    /// plots the centre pixel only.
    pub fn circle(&mut self, cx: i32, cy: i32, r: i32, color: Color) {
        let (cx, cy) = (i64::from(cx), i64::from(cy));
        let r = abs(i64::from(r));

        // one pixel wider than the disk on every side
        let r1 = r + 1;
        let Some(bb) = normalize_rect_wide(
            cx - r1,
            cy - r1,
            2 * r1 + 1,
            2 * r1 + 1,
            self.width(),
            self.height(),
        ) else {
            return;
        };

        let rr = (r as u64) * (r as u64);
        for y in bb.y1..=bb.y2 {
            let dy = (y as i64 - cy).unsigned_abs();
            let dy2 = dy * dy;
            if dy2 > rr {
                continue;
            }
            let row = self.row_mut(y);
            for x in bb.x1..=bb.x2 {
                let dx = (x as i64 - cx).unsigned_abs();
                if dx * dx + dy2 <= rr {
                    blend_color(&mut row[x], color);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/circle.rs"]
mod tests;
