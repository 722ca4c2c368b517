//! Olive is a minimal software rasterizer.
//!
//! It draws filled rectangles, circles, lines and triangles straight into a
//! caller-owned buffer of packed RGBA pixels, with no GPU and no windowing
//! system involved.
//!
//! # Model
//!
//! - [`Canvas`] borrows a `&mut [u32]` plus width, height and row stride. It
//!   never allocates. [`Canvas::subcanvas`] reborrows a clipped window of it.
//! - [`Color`] is one packed pixel: red in the low byte, alpha in the high byte,
//!   straight (non-premultiplied) alpha.
//! - [`normalize_rect`] turns an anchor plus signed size into an in-bounds
//!   inclusive range, or `None` when nothing is visible.
//! - [`blend_color`] is the single compositing rule every primitive writes through.
//!
//! Drawing never fails: off-canvas, negative or degenerate geometry simply
//! produces no pixels. Only the collaborator layers ([`Frame`] PNG I/O,
//! [`Scene`] JSON, the [`regression`] harness) return [`RasterError`].
//!
//! ```
//! use olive::{Canvas, Color};
//!
//! let mut pixels = vec![0u32; 10 * 10];
//! let mut canvas = Canvas::new(&mut pixels, 10, 10).unwrap();
//! canvas.rect(2, 2, 5, 5, Color(0xFF0000FF));
//! assert_eq!(canvas.pixel(6, 6), Some(Color(0xFF0000FF)));
//! assert_eq!(canvas.pixel(7, 7), Some(Color(0)));
//! ```
#![forbid(unsafe_code)]

mod canvas;
mod foundation;
mod frame;
mod raster;
mod scene;

pub mod gallery;
pub mod regression;

pub use canvas::Canvas;
pub use foundation::color::Color;
pub use foundation::error::{RasterError, RasterResult};
pub use frame::Frame;
pub use raster::blend::blend_color;
pub use raster::clip::{NormalizedRect, normalize_rect};
pub use scene::{MAX_SCENE_DIM, MAX_SCENE_NESTING, Scene, SceneCanvas, Shape};
