//! Showcase images for the README: a checkerboard, a field of growing
//! circles and a fan of lines.

use std::path::{Path, PathBuf};

use crate::{
    canvas::Canvas, foundation::color::Color, foundation::error::RasterResult, frame::Frame,
};

pub const GALLERY_WIDTH: u32 = 800;
pub const GALLERY_HEIGHT: u32 = 600;

const COLS: i32 = 8 * 2;
const ROWS: i32 = 6 * 2;
const CELL_WIDTH: i32 = GALLERY_WIDTH as i32 / COLS;
const CELL_HEIGHT: i32 = GALLERY_HEIGHT as i32 / ROWS;

const BACKGROUND_COLOR: Color = Color(0xFF202020);
const FOREGROUND_COLOR: Color = Color(0xFF2020FF);
const ACCENT_GREEN: Color = Color(0xFF20FF20);
const ACCENT_BLUE: Color = Color(0xFFFF3030);

#[derive(Clone, Copy, Debug)]
pub struct GalleryImage {
    pub name: &'static str,
    draw: fn(&mut Canvas<'_>),
}

impl GalleryImage {
    pub fn render(&self) -> Frame {
        let mut frame = Frame::new(GALLERY_WIDTH, GALLERY_HEIGHT);
        (self.draw)(&mut frame.canvas());
        frame
    }
}

pub fn gallery_images() -> &'static [GalleryImage] {
    &IMAGES
}

/// Renders every gallery image to `<dir>/<name>.png`.
#[tracing::instrument]
pub fn render_gallery(dir: &Path) -> RasterResult<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(IMAGES.len());
    for image in &IMAGES {
        let path = dir.join(format!("{}.png", image.name));
        image.render().save_png(&path)?;
        tracing::info!(path = %path.display(), "generated");
        written.push(path);
    }
    Ok(written)
}

static IMAGES: [GalleryImage; 3] = [
    GalleryImage {
        name: "checker",
        draw: checker,
    },
    GalleryImage {
        name: "circle",
        draw: circles,
    },
    GalleryImage {
        name: "lines",
        draw: lines,
    },
];

fn checker(c: &mut Canvas<'_>) {
    c.fill(BACKGROUND_COLOR);
    for y in 0..ROWS {
        for x in 0..COLS {
            let color = if (x + y) % 2 == 0 {
                FOREGROUND_COLOR
            } else {
                BACKGROUND_COLOR
            };
            c.rect(x * CELL_WIDTH, y * CELL_HEIGHT, CELL_WIDTH, CELL_HEIGHT, color);
        }
    }
}

fn circles(c: &mut Canvas<'_>) {
    fn lerp(a: f32, b: f32, t: f32) -> f32 {
        a + (b - a) * t
    }

    c.fill(BACKGROUND_COLOR);
    let radius = CELL_WIDTH.min(CELL_HEIGHT) as f32;
    for y in 0..ROWS {
        for x in 0..COLS {
            let u = x as f32 / COLS as f32;
            let v = y as f32 / ROWS as f32;
            let t = (u + v) / 2.0;
            c.circle(
                x * CELL_WIDTH + CELL_WIDTH / 2,
                y * CELL_HEIGHT + CELL_HEIGHT / 2,
                lerp(radius / 8.0, radius / 2.0, t) as i32,
                FOREGROUND_COLOR,
            );
        }
    }
}

fn lines(c: &mut Canvas<'_>) {
    let (w, h) = (GALLERY_WIDTH as i32, GALLERY_HEIGHT as i32);
    c.fill(BACKGROUND_COLOR);
    c.line(0, 0, w, h, FOREGROUND_COLOR);
    c.line(w, 0, 0, h, FOREGROUND_COLOR);
    c.line(0, 0, w / 4, h, ACCENT_GREEN);
    c.line(w / 4, 0, 0, h, ACCENT_GREEN);
    c.line(w, 0, w / 4 * 3, h, ACCENT_GREEN);
    c.line(w / 4 * 3, 0, w, h, ACCENT_GREEN);
    c.line(0, h / 2, w, h / 2, ACCENT_BLUE);
    c.line(w / 2, 0, w / 2, h, ACCENT_BLUE);
}

#[cfg(test)]
#[path = "../tests/unit/gallery.rs"]
mod tests;
