use crate::{canvas::Canvas, foundation::color::Color, foundation::math::ordered};

/// Two edges sharing one anchor vertex, interpolated per scanline.
struct EdgePair {
    ax: i128,
    ay: i128,
    edges: [(i128, i128); 2],
}

impl EdgePair {
    fn new(anchor: (i128, i128), a: (i128, i128), b: (i128, i128)) -> Self {
        let (ax, ay) = anchor;
        Self {
            ax,
            ay,
            edges: [(a.0 - ax, a.1 - ay), (b.0 - ax, b.1 - ay)],
        }
    }

    fn x_at(&self, y: i128, (dx, dy): (i128, i128)) -> i128 {
        if dy != 0 {
            (y - self.ay) * dx / dy + self.ax
        } else {
            self.ax
        }
    }

    fn span(&self, y: i128) -> (i128, i128) {
        ordered(self.x_at(y, self.edges[0]), self.x_at(y, self.edges[1]))
    }
}

impl Canvas<'_> {
    /// Blends a filled triangle by scanline edge interpolation.
    ///
    /// Vertices are sorted by y. Rows above the middle vertex interpolate the
    /// edges leaving the top vertex, rows below it the edges leaving the
    /// bottom vertex; the middle row is the union of both and is blended once.
    /// A zero-height triangle touches only the top and bottom anchor columns.
    #[allow(clippy::too_many_arguments)]
    pub fn triangle(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        x3: i32,
        y3: i32,
        color: Color,
    ) {
        let mut v = [
            (i128::from(x1), i128::from(y1)),
            (i128::from(x2), i128::from(y2)),
            (i128::from(x3), i128::from(y3)),
        ];
        if v[0].1 > v[1].1 {
            v.swap(0, 1);
        }
        if v[1].1 > v[2].1 {
            v.swap(1, 2);
        }
        if v[0].1 > v[1].1 {
            v.swap(0, 1);
        }
        let [top, mid, bottom] = v;

        let upper = EdgePair::new(top, mid, bottom);
        let lower = EdgePair::new(bottom, mid, top);

        let height = self.height() as i128;
        for y in top.1.max(0)..=bottom.1.min(height - 1) {
            if y < mid.1 {
                let (lo, hi) = upper.span(y);
                self.blend_span(y, lo, hi, color);
            } else if y > mid.1 {
                let (lo, hi) = lower.span(y);
                self.blend_span(y, lo, hi, color);
            } else {
                let (a, b) = upper.span(y);
                let (c, d) = lower.span(y);
                if b < c || d < a {
                    // flat triangle: each half contributes only its anchor
                    self.blend_span(y, a, b, color);
                    self.blend_span(y, c, d, color);
                } else {
                    self.blend_span(y, a.min(c), b.max(d), color);
                }
            }
        }
    }

    fn blend_span(&mut self, y: i128, lo: i128, hi: i128, color: Color) {
        let width = self.width() as i128;
        if y < 0 || y >= self.height() as i128 {
            return;
        }
        for x in lo.max(0)..=hi.min(width - 1) {
            self.blend_pixel(x as i64, y as i64, color);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/triangle.rs"]
mod tests;
