// Author: Dustin Pilgrim
// License: MIT

pub mod colour;
pub mod config;
pub mod error;
pub mod geometry;
pub mod guide;
pub mod handle;
pub mod hit_test;
pub mod mode;
pub mod overlay;
pub mod rect;

pub use config::{HandleMetrics, OverlayColours, OverlayConfig};
pub use error::ConfigError;
pub use geometry::{GridLine, HandleSet, Layout, Orientation};
pub use guide::{GuideShape, GuideStroke};
pub use handle::{ActiveEdge, Handle};
pub use hit_test::{HotZone, HotZoneSet};
pub use mode::{Emphasis, GridMode, GuideVariant, Style};
pub use overlay::{Overlay, Redraw, RenderState, Snapshot};
pub use rect::{Point, Rect};
