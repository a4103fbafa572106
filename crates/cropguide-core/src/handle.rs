// Author: Dustin Pilgrim
// License: MIT

#[cfg(feature = "clap")]
use clap::ValueEnum;

/// A draggable resize point on the crop box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handle {
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Handle {
    pub const CORNERS: [Handle; 4] = [
        Handle::TopLeft,
        Handle::TopRight,
        Handle::BottomRight,
        Handle::BottomLeft,
    ];

    pub const EDGES: [Handle; 4] = [Handle::Top, Handle::Right, Handle::Bottom, Handle::Left];

    pub fn is_corner(self) -> bool {
        matches!(
            self,
            Handle::TopLeft | Handle::TopRight | Handle::BottomLeft | Handle::BottomRight
        )
    }
}

/// Which handle the controller reports as engaged.
#[cfg_attr(feature = "clap", derive(ValueEnum))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ActiveEdge {
    #[default]
    None,
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ActiveEdge {
    pub fn handle(self) -> Option<Handle> {
        match self {
            ActiveEdge::None => None,
            ActiveEdge::Top => Some(Handle::Top),
            ActiveEdge::Bottom => Some(Handle::Bottom),
            ActiveEdge::Left => Some(Handle::Left),
            ActiveEdge::Right => Some(Handle::Right),
            ActiveEdge::TopLeft => Some(Handle::TopLeft),
            ActiveEdge::TopRight => Some(Handle::TopRight),
            ActiveEdge::BottomLeft => Some(Handle::BottomLeft),
            ActiveEdge::BottomRight => Some(Handle::BottomRight),
        }
    }

    pub fn is_none(self) -> bool {
        self == ActiveEdge::None
    }
}

impl From<Handle> for ActiveEdge {
    fn from(h: Handle) -> Self {
        match h {
            Handle::Top => ActiveEdge::Top,
            Handle::Bottom => ActiveEdge::Bottom,
            Handle::Left => ActiveEdge::Left,
            Handle::Right => ActiveEdge::Right,
            Handle::TopLeft => ActiveEdge::TopLeft,
            Handle::TopRight => ActiveEdge::TopRight,
            Handle::BottomLeft => ActiveEdge::BottomLeft,
            Handle::BottomRight => ActiveEdge::BottomRight,
        }
    }
}
