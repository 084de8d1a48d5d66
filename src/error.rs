//! Error taxonomy shared by ingestion, sweep configuration and output.
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LensError>;

#[derive(Debug, Error)]
pub enum LensError {
    /// The bytes could not be parsed as an image.
    #[error("failed to decode image: {0}")]
    Decode(String),
    /// The bytes are not one of the accepted raster formats.
    #[error("unsupported image format: {0} (expected JPEG, PNG or TIFF)")]
    UnsupportedFormat(String),
    /// Decoding succeeded but produced no pixels.
    #[error("image has zero area ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },
    /// A raw pixel buffer whose length does not match its dimensions.
    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode {}: {message}", .path.display())]
    Encode { path: PathBuf, message: String },
    #[error("JSON error: {0}")]
    Json(String),
}

impl LensError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True for errors raised while turning input bytes into a grayscale image.
    pub fn is_decode_failure(&self) -> bool {
        matches!(
            self,
            Self::Decode(_) | Self::UnsupportedFormat(_) | Self::EmptyImage { .. }
        )
    }
}
