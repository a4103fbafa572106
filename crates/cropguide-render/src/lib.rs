// Author: Dustin Pilgrim
// License: MIT

pub mod draw;
pub mod error;
pub mod path;
pub mod pixmap;
pub mod surface;

pub use draw::draw_overlay;
pub use error::RenderError;
pub use pixmap::PixmapSurface;
pub use surface::{Dash, DisplayList, DrawOp, Layer, Surface};
