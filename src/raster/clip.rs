use crate::foundation::math::{abs, ordered, sign};

/// Closed, in-bounds pixel range `[x1, x2] × [y1, y2]`.
///
/// Produced only by [`normalize_rect`], which guarantees `x1 <= x2 < width`
/// and `y1 <= y2 < height` for the surface it was normalized against, so the
/// range can be iterated inclusively without further bounds checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NormalizedRect {
    pub x1: usize,
    pub x2: usize,
    pub y1: usize,
    pub y2: usize,
}

impl NormalizedRect {
    #[inline]
    pub fn width(&self) -> usize {
        self.x2 - self.x1 + 1
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.y2 - self.y1 + 1
    }
}

/// Normalizes an anchor plus signed size against a `width`×`height` surface.
///
/// `w = 5` spans five columns starting at `x`; `w = -5` spans five columns
/// ending at `x`. A zero width or height is empty. Returns `None` when the
/// rectangle is empty or lies entirely outside the surface.
///
/// ```
/// use olive::normalize_rect;
///
/// let r = normalize_rect(-3, 8, 5, -4, 10, 10).unwrap();
/// assert_eq!((r.x1, r.x2, r.y1, r.y2), (0, 1, 5, 8));
/// assert!(normalize_rect(10, 0, 3, 3, 10, 10).is_none());
/// ```
pub fn normalize_rect(
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    width: usize,
    height: usize,
) -> Option<NormalizedRect> {
    normalize_rect_wide(
        i64::from(x),
        i64::from(y),
        i64::from(w),
        i64::from(h),
        width,
        height,
    )
}

/// Same as [`normalize_rect`] for callers whose box arithmetic may leave `i32`.
pub(crate) fn normalize_rect_wide(
    x: i64,
    y: i64,
    w: i64,
    h: i64,
    width: usize,
    height: usize,
) -> Option<NormalizedRect> {
    let (x1, x2) = clip_span(x, w, width)?;
    let (y1, y2) = clip_span(y, h, height)?;
    Some(NormalizedRect { x1, x2, y1, y2 })
}

fn clip_span(start: i64, size: i64, limit: usize) -> Option<(usize, usize)> {
    let limit = i64::try_from(limit).unwrap_or(i64::MAX);
    if size == 0 || limit == 0 {
        return None;
    }

    let (lo, hi) = ordered(start, start + sign(size) * (abs(size) - 1));

    // cull
    if lo >= limit || hi < 0 {
        return None;
    }

    // clamp; both ends are now inside [0, limit)
    let lo = lo.max(0);
    let hi = hi.min(limit - 1);
    Some((lo as usize, hi as usize))
}

#[cfg(test)]
#[path = "../../tests/unit/raster/clip.rs"]
mod tests;
