use std::path::PathBuf;

/// Convenience result type used across olive.
pub type RasterResult<T> = Result<T, RasterError>;

/// Errors from the collaborator layers; rasterizers themselves never fail.
#[derive(thiserror::Error, Debug)]
pub enum RasterError {
    /// Invalid caller-provided dimensions or buffers.
    #[error("validation error: {0}")]
    Validation(String),

    /// Pixel slice shorter than the requested canvas needs.
    #[error("buffer too small: need {needed} pixels, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    /// Malformed or out-of-range scene document.
    #[error("scene error: {0}")]
    Scene(String),

    /// Regression baseline PNG not recorded yet.
    #[error("missing baseline image '{}' (run `olive record` to create it)", path.display())]
    MissingBaseline { path: PathBuf },

    /// Filesystem failure at `path`.
    #[error("io error at '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// PNG encode or decode failure.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RasterError {
    /// Build a [`RasterError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RasterError::Scene`] value.
    pub fn scene(msg: impl Into<String>) -> Self {
        Self::Scene(msg.into())
    }

    /// Build a [`RasterError::Io`] value.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
