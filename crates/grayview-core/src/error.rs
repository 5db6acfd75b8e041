use thiserror::Error;

#[derive(Error, Debug)]
pub enum GrayviewError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("Decode failure: {0}")]
    DecodeFailure(String),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Unknown palette: {0}")]
    UnknownPalette(String),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, GrayviewError>;
