// Author: Dustin Pilgrim
// License: MIT

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MatteError>;

#[derive(Debug, Error)]
pub enum MatteError {
    #[error("background removal unavailable: {0}")]
    Unavailable(String),

    #[error("invalid image")]
    InvalidImage,

    #[error("mask extraction failed: {0}")]
    MaskExtraction(String),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}
