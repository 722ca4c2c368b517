use crate::{canvas::Canvas, foundation::color::Color, foundation::math::ordered};

impl Canvas<'_> {
    /// Blends the segment from `(x1, y1)` to `(x2, y2)`, both ends included.
    ///
    /// The segment is scanned column by column: each column `x` covers the
    /// y-interval between the slope evaluated at `x` and at `x + 1`, with
    /// truncating integer division. Steep segments therefore come out as a
    /// staircase of short vertical runs.
    pub fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        // i128 keeps every product of i32 coordinates and canvas indices exact
        let (x1, y1, x2, y2) = (
            i128::from(x1),
            i128::from(y1),
            i128::from(x2),
            i128::from(y2),
        );
        let width = self.width() as i128;
        let height = self.height() as i128;

        let dx = x2 - x1;
        let dy = y2 - y1;

        if dx != 0 {
            let c = y1 - dy * x1 / dx;
            let (xa, xb) = ordered(x1, x2);
            for x in xa.max(0)..=xb.min(width - 1) {
                let (sy1, sy2) = ordered(dy * x / dx + c, dy * (x + 1) / dx + c);
                for y in sy1.max(0)..=sy2.min(height - 1) {
                    self.blend_pixel(x as i64, y as i64, color);
                }
            }
        } else {
            if x1 < 0 || x1 >= width {
                return;
            }
            let (ya, yb) = ordered(y1, y2);
            for y in ya.max(0)..=yb.min(height - 1) {
                self.blend_pixel(x1 as i64, y as i64, color);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/line.rs"]
mod tests;
