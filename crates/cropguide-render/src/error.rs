// Author: Dustin Pilgrim
// License: MIT

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("pixmap allocation failed ({width}x{height})")]
    Alloc { width: u32, height: u32 },

    #[error("png encoding failed: {0}")]
    Encode(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
