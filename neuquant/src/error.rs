//! Error types for palette quantization

use thiserror::Error;

use crate::constants::SAMPLE_FACTOR_RNG;

#[derive(Debug, Error)]
pub enum QuantizeError {
    /// Fewer pixels than the prime-step traversal needs
    #[error("Image is too small: {pixels} pixels, need at least {min}")]
    ImageTooSmall { pixels: usize, min: usize },

    #[error(
        "Invalid sample factor {0}: must be between {min} and {max}",
        min = SAMPLE_FACTOR_RNG.start(),
        max = SAMPLE_FACTOR_RNG.end()
    )]
    InvalidSampleFactor(usize),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, QuantizeError>;
