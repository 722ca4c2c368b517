use std::path::Path;

use crate::{
    canvas::Canvas,
    foundation::color::Color,
    foundation::error::{RasterError, RasterResult},
};

/// An owned, tightly packed pixel buffer for callers that do not bring their own.
///
/// The rasterizer itself never allocates; `Frame` exists for the scene
/// renderer, the gallery, the regression harness and tests. `pixels` always
/// holds exactly `width * height` words; only [`Frame::new`] and
/// [`Frame::from_rgba8`] build one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Frame {
    /// A fully transparent frame.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major packed pixels, `width * height` long.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    /// Full-frame canvas. A frame whose buffer does not match its size yields
    /// [`Canvas::null`], so drawing stays total.
    pub fn canvas(&mut self) -> Canvas<'_> {
        let (width, height) = (self.width as usize, self.height as usize);
        match Canvas::new(&mut self.pixels, width, height) {
            Ok(canvas) => canvas,
            Err(error) => {
                tracing::error!(%error, "frame buffer does not match its size");
                Canvas::null()
            }
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x < self.width && y < self.height {
            let i = y as usize * self.width as usize + x as usize;
            self.pixels.get(i).copied().map(Color)
        } else {
            None
        }
    }

    /// Bytes in memory order of the packed words: R, G, B, A per pixel.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_le_bytes()).collect()
    }

    pub fn from_rgba8(width: u32, height: u32, data: &[u8]) -> RasterResult<Self> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(RasterError::validation(format!(
                "rgba8 buffer for {width}x{height} must be {expected} bytes, got {}",
                data.len()
            )));
        }
        let pixels = data
            .chunks_exact(4)
            .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    #[tracing::instrument(skip(self), fields(width = self.width, height = self.height))]
    pub fn save_png(&self, path: &Path) -> RasterResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| RasterError::io(parent, e))?;
        }
        image::save_buffer_with_format(
            path,
            &self.to_rgba8(),
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )?;
        tracing::debug!("wrote png");
        Ok(())
    }

    #[tracing::instrument]
    pub fn load_png(path: &Path) -> RasterResult<Self> {
        let img = image::open(path)?.to_rgba8();
        let (width, height) = img.dimensions();
        Self::from_rgba8(width, height, img.as_raw())
    }
}

#[cfg(test)]
#[path = "../tests/unit/frame.rs"]
mod tests;
