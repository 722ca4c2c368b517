//! Golden-image regression harness.
//!
//! Each case draws onto a fresh 128×128 frame. `record` stores the result as
//! `<dir>/<name>_expected.png`; `replay` renders again and compares pixel by
//! pixel, leaving `<name>_actual.png` and `<name>_diff.png` next to the
//! baseline when they disagree.

use std::path::{Path, PathBuf};

use crate::{
    canvas::Canvas,
    foundation::color::Color,
    foundation::error::{RasterError, RasterResult},
    frame::Frame,
};

pub const REGRESSION_WIDTH: u32 = 128;
pub const REGRESSION_HEIGHT: u32 = 128;

/// Painted over every mismatching pixel in a diff image.
pub const ERROR_COLOR: Color = Color(0xFFFF00FF);

const BACKGROUND_COLOR: Color = Color(0xFF202020);
const RED_COLOR: Color = Color(0xFF2020AA);
const GREEN_COLOR: Color = Color(0xFF20AA20);
const BLUE_COLOR: Color = Color(0xFFAA2020);

const W: i32 = REGRESSION_WIDTH as i32;
const H: i32 = REGRESSION_HEIGHT as i32;

#[derive(Clone, Copy, Debug)]
pub struct RegressionCase {
    pub name: &'static str,
    draw: fn(&mut Canvas<'_>),
}

impl RegressionCase {
    pub fn render(&self) -> Frame {
        let mut frame = Frame::new(REGRESSION_WIDTH, REGRESSION_HEIGHT);
        (self.draw)(&mut frame.canvas());
        frame
    }

    pub fn expected_path(&self, dir: &Path) -> PathBuf {
        dir.join(format!("{}_expected.png", self.name))
    }

    pub fn actual_path(&self, dir: &Path) -> PathBuf {
        dir.join(format!("{}_actual.png", self.name))
    }

    pub fn diff_path(&self, dir: &Path) -> PathBuf {
        dir.join(format!("{}_diff.png", self.name))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReplayFailure {
    SizeMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
    PixelMismatch {
        count: usize,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReplayOutcome {
    Passed,
    Failed(ReplayFailure),
}

impl ReplayOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }
}

pub fn regression_cases() -> &'static [RegressionCase] {
    &CASES
}

pub fn find_case(name: &str) -> Option<&'static RegressionCase> {
    CASES.iter().find(|c| c.name == name)
}

#[tracing::instrument(skip(case), fields(case = case.name))]
pub fn record(case: &RegressionCase, dir: &Path) -> RasterResult<PathBuf> {
    let path = case.expected_path(dir);
    case.render().save_png(&path)?;
    tracing::info!(path = %path.display(), "recorded baseline");
    Ok(path)
}

#[tracing::instrument(skip(case), fields(case = case.name))]
pub fn replay(case: &RegressionCase, dir: &Path) -> RasterResult<ReplayOutcome> {
    let expected_path = case.expected_path(dir);
    if !expected_path.is_file() {
        return Err(RasterError::MissingBaseline {
            path: expected_path,
        });
    }
    let expected = Frame::load_png(&expected_path)?;
    let actual = case.render();

    if (expected.width(), expected.height()) != (actual.width(), actual.height()) {
        let failure = ReplayFailure::SizeMismatch {
            expected: (expected.width(), expected.height()),
            actual: (actual.width(), actual.height()),
        };
        tracing::warn!(?failure, "unexpected image size");
        return Ok(ReplayOutcome::Failed(failure));
    }

    let Some((diff, count)) = diff_frames(&expected, &actual) else {
        tracing::info!("ok");
        return Ok(ReplayOutcome::Passed);
    };

    let actual_path = case.actual_path(dir);
    let diff_path = case.diff_path(dir);
    actual.save_png(&actual_path)?;
    diff.save_png(&diff_path)?;
    tracing::warn!(
        count,
        actual = %actual_path.display(),
        diff = %diff_path.display(),
        "unexpected pixels in generated image"
    );
    Ok(ReplayOutcome::Failed(ReplayFailure::PixelMismatch { count }))
}

/// Per-pixel comparison of two equally sized frames.
///
/// Returns `None` when identical, otherwise the diff image (expected pixels
/// with mismatches painted [`ERROR_COLOR`]) and the number of mismatches.
pub fn diff_frames(expected: &Frame, actual: &Frame) -> Option<(Frame, usize)> {
    debug_assert_eq!(
        (expected.width(), expected.height()),
        (actual.width(), actual.height())
    );
    let mut diff = expected.clone();
    let mut count = 0usize;
    for (d, &a) in diff.pixels_mut().iter_mut().zip(actual.pixels()) {
        if *d != a {
            *d = ERROR_COLOR.0;
            count += 1;
        }
    }
    (count > 0).then_some((diff, count))
}

static CASES: [RegressionCase; 6] = [
    RegressionCase {
        name: "fill_rect",
        draw: fill_rect,
    },
    RegressionCase {
        name: "fill_circle",
        draw: fill_circle,
    },
    RegressionCase {
        name: "draw_line",
        draw: draw_line,
    },
    RegressionCase {
        name: "fill_triangle",
        draw: fill_triangle,
    },
    RegressionCase {
        name: "alpha_blending",
        draw: alpha_blending,
    },
    RegressionCase {
        name: "transparency",
        draw: transparency,
    },
];

fn fill_rect(c: &mut Canvas<'_>) {
    c.fill(BACKGROUND_COLOR);
    c.rect(W / 2 - W / 8, H / 2 - H / 8, W / 4, H / 4, RED_COLOR);
    c.rect(W - 1, H - 1, -W / 2, -H / 2, GREEN_COLOR);
    c.rect(-W / 4, -H / 4, W / 2, H / 2, BLUE_COLOR);
}

fn fill_circle(c: &mut Canvas<'_>) {
    c.fill(BACKGROUND_COLOR);
    c.circle(0, 0, W / 2, RED_COLOR);
    c.circle(W / 2, H / 2, W / 4, BLUE_COLOR);
    c.circle(W * 3 / 4, H * 3 / 4, -W / 4, GREEN_COLOR);
}

fn draw_line(c: &mut Canvas<'_>) {
    c.fill(BACKGROUND_COLOR);
    c.line(0, 0, W, H, RED_COLOR);
    c.line(W, 0, 0, H, BLUE_COLOR);
    c.line(W / 2, 0, W / 2, H, GREEN_COLOR);
}

fn fill_triangle(c: &mut Canvas<'_>) {
    c.fill(BACKGROUND_COLOR);
    c.triangle(W / 2, H / 8, W / 8, H / 2, W * 7 / 8, H * 7 / 8, RED_COLOR);
    c.triangle(W / 2, H * 2 / 8, W * 2 / 8, H / 2, W * 6 / 8, H / 2, GREEN_COLOR);
    c.triangle(W / 8, H / 8, W / 8, H * 3 / 8, W * 3 / 8, H * 3 / 8, BLUE_COLOR);
}

fn alpha_blending(c: &mut Canvas<'_>) {
    c.fill(BACKGROUND_COLOR);
    c.rect(0, 0, W * 3 / 4, H * 3 / 4, RED_COLOR);
    c.rect(W - 1, H - 1, -W * 3 / 4, -H * 3 / 4, Color(0x5520AA20));
    c.circle(W / 2, H / 2, W / 4, Color(0xBBAA2020));
    c.triangle(0, H, W, H, W / 2, 0, Color(0xBB20AAAA));
}

fn transparency(c: &mut Canvas<'_>) {
    c.clear();
    c.rect(W / 6, H / 6, W, H, Color(0x01FFFFFF));
    c.rect(W * 2 / 6, H * 2 / 6, W, H, Color(0x54FFFFFF));
    c.rect(W * 3 / 6, H * 3 / 6, W, H, Color(0x55FFFFFF));
    c.rect(W * 4 / 6, H * 4 / 6, W, H, Color(0x54FFFFFF));
    c.rect(W * 5 / 6, H * 5 / 6, W, H, Color(0x01FFFFFF));
}

#[cfg(test)]
#[path = "../tests/unit/regression.rs"]
mod tests;
