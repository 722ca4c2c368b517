use crate::{
    canvas::Canvas,
    foundation::color::Color,
    raster::{blend::blend_color, clip::normalize_rect},
};

impl Canvas<'_> {
    /// Blends a filled rectangle anchored at `(x, y)` with signed size `(w, h)`.
    pub fn rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        let Some(r) = normalize_rect(x, y, w, h, self.width(), self.height()) else {
            return;
        };
        for row in r.y1..=r.y2 {
            for px in &mut self.row_mut(row)[r.x1..=r.x2] {
                blend_color(px, color);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/rect.rs"]
mod tests;
