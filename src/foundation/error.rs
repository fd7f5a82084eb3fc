use std::path::PathBuf;

/// Convenience result type used across glassmock.
pub type MockupResult<T> = Result<T, MockupError>;

/// Top-level error taxonomy used by rendering APIs.
#[derive(thiserror::Error, Debug)]
pub enum MockupError {
    /// Invalid caller-provided geometry or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Failures while rasterizing or compositing pixels.
    #[error("render error: {0}")]
    Render(String),

    /// Failures while shaping or laying out text.
    #[error("layout error: {0}")]
    Layout(String),

    /// A typeface could not be loaded. Font sets recover from this locally.
    #[error(transparent)]
    Font(#[from] FontLoadError),

    /// Image encoding or decoding failure.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MockupError {
    /// Build a [`MockupError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MockupError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`MockupError::Layout`] value.
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }
}

/// Reasons a typeface file could not be turned into a usable face.
#[derive(thiserror::Error, Debug)]
pub enum FontLoadError {
    /// The file does not exist.
    #[error("font file '{}' not found", path.display())]
    Missing { path: PathBuf },

    /// The file exists but could not be read.
    #[error("failed to read font file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The bytes do not contain a face the shaper can register.
    #[error("font file '{}' contains no usable face", path.display())]
    Unparsable { path: PathBuf },
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
