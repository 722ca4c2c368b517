use std::path::Path;

use crate::{
    canvas::Canvas,
    foundation::color::Color,
    foundation::error::{RasterError, RasterResult},
    frame::Frame,
};

/// Largest accepted scene canvas side, in pixels.
pub const MAX_SCENE_DIM: u32 = 16_384;
/// Deepest accepted `subcanvas` nesting.
pub const MAX_SCENE_NESTING: usize = 32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SceneCanvas {
    pub width: u32,
    pub height: u32,
}

/// A JSON-described list of draw calls rendered onto a fresh frame.
///
/// ```json
/// { "canvas": { "width": 64, "height": 64 },
///   "background": "#202020",
///   "shapes": [ { "circle": { "cx": 32, "cy": 32, "r": 12, "color": "#ff000080" } } ] }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scene {
    pub canvas: SceneCanvas,
    /// Initial fill; the frame starts cleared when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    #[serde(default)]
    pub shapes: Vec<Shape>,
}

/// One draw call. Shapes are applied in order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    Fill {
        color: Color,
    },
    Clear {},
    Rect {
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: Color,
    },
    Circle {
        cx: i32,
        cy: i32,
        r: i32,
        color: Color,
    },
    Line {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Color,
    },
    Triangle {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        x3: i32,
        y3: i32,
        color: Color,
    },
    /// Draws nested shapes into a clipped sub-view; coordinates are relative to it.
    Subcanvas {
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        #[serde(default)]
        shapes: Vec<Shape>,
    },
}

impl Scene {
    pub fn from_json_str(s: &str) -> RasterResult<Self> {
        let scene: Self = serde_json::from_str(s)
            .map_err(|e| RasterError::scene(format!("parse scene JSON: {e}")))?;
        scene.validate()?;
        Ok(scene)
    }

    pub fn from_path(path: &Path) -> RasterResult<Self> {
        let s = std::fs::read_to_string(path).map_err(|e| RasterError::io(path, e))?;
        Self::from_json_str(&s)
    }

    pub fn validate(&self) -> RasterResult<()> {
        let SceneCanvas { width, height } = self.canvas;
        if width == 0 || height == 0 {
            return Err(RasterError::scene("scene canvas width/height must be > 0"));
        }
        if width > MAX_SCENE_DIM || height > MAX_SCENE_DIM {
            return Err(RasterError::scene(format!(
                "scene canvas {width}x{height} exceeds {MAX_SCENE_DIM} pixels per side"
            )));
        }
        if nesting_depth(&self.shapes) > MAX_SCENE_NESTING {
            return Err(RasterError::scene(format!(
                "subcanvas nesting deeper than {MAX_SCENE_NESTING}"
            )));
        }
        Ok(())
    }

    /// Draws the background and every shape onto `canvas`.
    pub fn draw(&self, canvas: &mut Canvas<'_>) {
        match self.background {
            Some(color) => canvas.fill(color),
            None => canvas.clear(),
        }
        draw_shapes(canvas, &self.shapes);
    }

    #[tracing::instrument(skip(self), fields(
        width = self.canvas.width,
        height = self.canvas.height,
        shapes = self.shapes.len(),
    ))]
    pub fn render(&self) -> RasterResult<Frame> {
        self.validate()?;
        let mut frame = Frame::new(self.canvas.width, self.canvas.height);
        self.draw(&mut frame.canvas());
        Ok(frame)
    }
}

impl Shape {
    pub fn draw(&self, canvas: &mut Canvas<'_>) {
        match *self {
            Shape::Fill { color } => canvas.fill(color),
            Shape::Clear {} => canvas.clear(),
            Shape::Rect { x, y, w, h, color } => canvas.rect(x, y, w, h, color),
            Shape::Circle { cx, cy, r, color } => canvas.circle(cx, cy, r, color),
            Shape::Line {
                x1,
                y1,
                x2,
                y2,
                color,
            } => canvas.line(x1, y1, x2, y2, color),
            Shape::Triangle {
                x1,
                y1,
                x2,
                y2,
                x3,
                y3,
                color,
            } => canvas.triangle(x1, y1, x2, y2, x3, y3, color),
            Shape::Subcanvas {
                x,
                y,
                w,
                h,
                ref shapes,
            } => {
                let mut sub = canvas.subcanvas(x, y, w, h);
                if sub.is_null() {
                    tracing::debug!(x, y, w, h, "subcanvas is off-canvas, skipping nested shapes");
                    return;
                }
                draw_shapes(&mut sub, shapes);
            }
        }
    }
}

fn draw_shapes(canvas: &mut Canvas<'_>, shapes: &[Shape]) {
    for shape in shapes {
        tracing::trace!(?shape, "draw");
        shape.draw(canvas);
    }
}

fn nesting_depth(shapes: &[Shape]) -> usize {
    shapes
        .iter()
        .map(|s| match s {
            Shape::Subcanvas { shapes, .. } => 1 + nesting_depth(shapes),
            _ => 0,
        })
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
#[path = "../tests/unit/scene.rs"]
mod tests;
