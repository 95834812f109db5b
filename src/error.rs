// File: src/error.rs
use thiserror::Error;

/// Malformed color input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid hex color '{0}': expected six hex digits, optionally prefixed with '#'")]
    InvalidHex(String),
}

/// Failures of the palette generators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("a palette needs at least one color (got {0})")]
    InvalidColorCount(usize),
    #[error(transparent)]
    Color(#[from] ColorError),
}

/// The backend response did not honor the documented contract.
#[derive(Debug, Error)]
pub enum ContractError {
    #[error("malformed palette response: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("{0}")]
    EmptyPalette(String),
    #[error("palette entry {index} is invalid: {source}")]
    InvalidColor { index: usize, source: ColorError },
}

/// Image extraction failures, mirroring the backend's 4xx/5xx cases.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("number of colors must be between 1 and {max} (got {requested})")]
    InvalidColorCount { requested: usize, max: usize },
    #[error("image file too large: {size} bytes, maximum is {max} bytes")]
    TooLarge { size: usize, max: usize },
    #[error("could not decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("could not extract any dominant colors from the image")]
    NoColors,
}
