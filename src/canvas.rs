use crate::{
    foundation::color::Color,
    foundation::error::{RasterError, RasterResult},
    raster::blend::blend_color,
    raster::clip::normalize_rect,
};

/// A rectangular view over a caller-owned pixel buffer.
///
/// The pixel at `(x, y)` lives at `pixels[y * stride + x]`. The canvas never
/// allocates; it only borrows. Sub-canvases reborrow the same slice at an
/// offset, so drawing into one is visible through the parent once the
/// sub-canvas goes out of scope.
#[derive(Debug)]
pub struct Canvas<'a> {
    pixels: &'a mut [u32],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a> Canvas<'a> {
    /// Full, non-strided view: `stride == width`.
    pub fn new(pixels: &'a mut [u32], width: usize, height: usize) -> RasterResult<Self> {
        Self::with_stride(pixels, width, height, width)
    }

    /// Strided view: row `y` starts at `pixels[y * stride]`.
    ///
    /// A zero `width` or `height` yields [`Canvas::null`]. Fails when
    /// `stride < width` or when `pixels` is shorter than
    /// `(height - 1) * stride + width`.
    pub fn with_stride(
        pixels: &'a mut [u32],
        width: usize,
        height: usize,
        stride: usize,
    ) -> RasterResult<Self> {
        if width == 0 || height == 0 {
            return Ok(Self::null());
        }
        if stride < width {
            return Err(RasterError::validation(format!(
                "canvas stride ({stride}) must be >= width ({width})"
            )));
        }
        let needed = required_len(width, height, stride).ok_or_else(|| {
            RasterError::validation(format!(
                "canvas {width}x{height} with stride {stride} overflows usize"
            ))
        })?;
        if pixels.len() < needed {
            return Err(RasterError::BufferTooSmall {
                needed,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
            stride,
        })
    }

    /// The "no drawable region" canvas.
    pub fn null() -> Self {
        Self {
            pixels: Default::default(),
            width: 0,
            height: 0,
            stride: 0,
        }
    }

    pub fn is_null(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Clipped sub-view at `(x, y)` with signed size `(w, h)`.
    ///
    /// Negative sizes extend up/left from the anchor, as for [`Canvas::rect`].
    /// Returns [`Canvas::null`] when nothing of the request lies on this canvas.
    pub fn subcanvas(&mut self, x: i32, y: i32, w: i32, h: i32) -> Canvas<'_> {
        let Some(r) = normalize_rect(x, y, w, h, self.width, self.height) else {
            tracing::trace!(x, y, w, h, "subcanvas request is off-canvas");
            return Canvas::null();
        };
        let offset = r.y1 * self.stride + r.x1;
        Canvas {
            pixels: &mut self.pixels[offset..],
            width: r.width(),
            height: r.height(),
            stride: self.stride,
        }
    }

    /// Writes the zero color to every pixel; padding columns past `width` are untouched.
    pub fn clear(&mut self) {
        self.fill(Color::TRANSPARENT);
    }

    /// Overwrites every pixel with `color` (no blending).
    pub fn fill(&mut self, color: Color) {
        for y in 0..self.height {
            self.row_mut(y).fill(color.0);
        }
    }

    /// Reads the pixel at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x < self.width && y < self.height {
            Some(Color(self.pixels[y * self.stride + x]))
        } else {
            None
        }
    }

    /// Visible rows, each exactly `width` pixels long.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        (0..self.height).map(move |y| {
            let start = y * self.stride;
            &self.pixels[start..start + self.width]
        })
    }

    /// Blends `color` at `(x, y)` if it lies on the canvas. Returns whether a pixel was touched.
    #[inline]
    pub fn blend_pixel(&mut self, x: i64, y: i64, color: Color) -> bool {
        let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
            return false;
        };
        if x >= self.width || y >= self.height {
            return false;
        }
        blend_color(self.at_mut(x, y), color);
        true
    }

    /// Caller guarantees `x < width && y < height`.
    #[inline]
    pub(crate) fn at_mut(&mut self, x: usize, y: usize) -> &mut u32 {
        &mut self.pixels[y * self.stride + x]
    }

    #[inline]
    pub(crate) fn row_mut(&mut self, y: usize) -> &mut [u32] {
        let start = y * self.stride;
        &mut self.pixels[start..start + self.width]
    }
}

fn required_len(width: usize, height: usize, stride: usize) -> Option<usize> {
    (height - 1).checked_mul(stride)?.checked_add(width)
}

#[cfg(test)]
#[path = "../tests/unit/canvas.rs"]
mod tests;
