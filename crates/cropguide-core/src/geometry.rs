// Author: Dustin Pilgrim
// License: MIT

use crate::config::OverlayConfig;
use crate::guide::{self, GuideShape};
use crate::handle::{ActiveEdge, Handle};
use crate::hit_test::HotZone;
use crate::mode::{Emphasis, GridMode};
use crate::rect::{Point, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// One of the two perpendicular strokes drawn at a corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerSegment {
    pub handle: Handle,
    pub orientation: Orientation,
    pub rect: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeSegment {
    pub handle: Handle,
    pub rect: Rect,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HandleSet {
    pub corners: Vec<CornerSegment>,
    pub edges: Vec<EdgeSegment>,
}

impl HandleSet {
    pub fn is_empty(&self) -> bool {
        self.corners.is_empty() && self.edges.is_empty()
    }

    /// Bounding box of the visible pieces belonging to `handle`.
    pub fn handle_rect(&self, handle: Handle) -> Option<Rect> {
        let corner_rects = self
            .corners
            .iter()
            .filter(|c| c.handle == handle)
            .map(|c| c.rect);
        let edge_rects = self.edges.iter().filter(|e| e.handle == handle).map(|e| e.rect);

        corner_rects
            .chain(edge_rects)
            .reduce(|acc, r| acc.union(&r))
    }

    pub fn rects(&self) -> impl Iterator<Item = Rect> + '_ {
        self.corners
            .iter()
            .map(|c| c.rect)
            .chain(self.edges.iter().map(|e| e.rect))
    }
}

/// Corner strokes and edge segments straddling the border of `bounds`.
pub fn compute_handles(bounds: Rect, thickness: f64, corner_length: f64, edge_length: f64) -> HandleSet {
    if bounds.is_empty() {
        return HandleSet::default();
    }

    let t = thickness;
    let (x, y, w, h) = (bounds.x, bounds.y, bounds.w, bounds.h);

    let tl_horizontal = Rect::new(x - t, y - t, corner_length, t);
    let tl_vertical = Rect::new(x - t, y - t, t, corner_length);

    let h_dist_for_h_corner = w + 2.0 * t - corner_length;
    let v_dist_for_h_corner = h + t;
    let h_dist_for_v_corner = w + t;
    let v_dist_for_v_corner = h + 2.0 * t - corner_length;

    let offsets = [
        (Handle::TopLeft, (0.0, 0.0), (0.0, 0.0)),
        (Handle::TopRight, (h_dist_for_h_corner, 0.0), (h_dist_for_v_corner, 0.0)),
        (
            Handle::BottomRight,
            (h_dist_for_h_corner, v_dist_for_h_corner),
            (h_dist_for_v_corner, v_dist_for_v_corner),
        ),
        (Handle::BottomLeft, (0.0, v_dist_for_h_corner), (0.0, v_dist_for_v_corner)),
    ];

    let mut corners = Vec::with_capacity(8);
    for (handle, (hdx, hdy), (vdx, vdy)) in offsets {
        corners.push(CornerSegment {
            handle,
            orientation: Orientation::Horizontal,
            rect: tl_horizontal.offset_by(hdx, hdy),
        });
        corners.push(CornerSegment {
            handle,
            orientation: Orientation::Vertical,
            rect: tl_vertical.offset_by(vdx, vdy),
        });
    }

    let half = edge_length / 2.0;
    let edges = vec![
        EdgeSegment {
            handle: Handle::Top,
            rect: Rect::new(x + w / 2.0 - half, y - t, edge_length, t),
        },
        EdgeSegment {
            handle: Handle::Right,
            rect: Rect::new(x + w, y + h / 2.0 - half, t, edge_length),
        },
        EdgeSegment {
            handle: Handle::Bottom,
            rect: Rect::new(x + w / 2.0 - half, y + h, edge_length, t),
        },
        EdgeSegment {
            handle: Handle::Left,
            rect: Rect::new(x - t, y + h / 2.0 - half, t, edge_length),
        },
    ];

    HandleSet { corners, edges }
}

/// Border outline: `bounds` grown so the stroke sits outside the box.
pub fn compute_border(bounds: Rect, border_thickness: f64) -> Option<Rect> {
    if bounds.is_empty() {
        return None;
    }
    Some(bounds.outset(border_thickness))
}

pub fn compute_hint_line(border: Rect, active_edge: ActiveEdge, hint_thickness: f64) -> Option<Rect> {
    let ht = hint_thickness;
    match active_edge {
        ActiveEdge::Top => Some(Rect::new(border.min_x(), border.min_y(), border.w, ht)),
        ActiveEdge::Bottom => Some(Rect::new(border.min_x(), border.max_y() - ht, border.w, ht)),
        ActiveEdge::Left => Some(Rect::new(border.min_x(), border.min_y(), ht, border.h)),
        ActiveEdge::Right => Some(Rect::new(border.max_x() - ht, border.min_y(), ht, border.h)),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub orientation: Orientation,
    /// Distance from the bounds origin along the perpendicular axis.
    pub offset: f64,
    pub emphasis: Emphasis,
}

impl GridLine {
    /// Absolute endpoints of this line inside `bounds`.
    pub fn segment(&self, bounds: Rect) -> (Point, Point) {
        match self.orientation {
            Orientation::Horizontal => {
                let y = bounds.y + self.offset;
                (Point::new(bounds.min_x(), y), Point::new(bounds.max_x(), y))
            }
            Orientation::Vertical => {
                let x = bounds.x + self.offset;
                (Point::new(x, bounds.min_y()), Point::new(x, bounds.max_y()))
            }
        }
    }
}

/// `n` horizontal lines followed by `n` vertical lines, never on the edges.
pub fn compute_grid_lines(bounds: Rect, grid_mode: GridMode) -> Vec<GridLine> {
    if bounds.is_empty() {
        return Vec::new();
    }

    let n = grid_mode.line_count();
    let step = |len: f64, i: usize| len * i as f64 / (n + 1) as f64;

    let mut lines = Vec::with_capacity(n * 2);
    for (orientation, len) in [
        (Orientation::Horizontal, bounds.h),
        (Orientation::Vertical, bounds.w),
    ] {
        for i in 1..=n {
            lines.push(GridLine {
                orientation,
                offset: step(len, i),
                emphasis: grid_mode.emphasis(i),
            });
        }
    }
    lines
}

/// Hot zones: each handle's visible box grown by half the unit per side.
/// Corners come first so a corner wins where zones overlap.
pub fn compute_hot_zones(handles: &HandleSet, hot_area_unit: f64) -> Vec<HotZone> {
    Handle::CORNERS
        .iter()
        .chain(Handle::EDGES.iter())
        .filter_map(|&handle| {
            handles.handle_rect(handle).map(|r| HotZone {
                handle,
                rect: r.outset(hot_area_unit / 2.0),
            })
        })
        .collect()
}

/// Everything derived from the bounding rectangle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    pub bounds: Rect,
    pub border: Option<Rect>,
    pub handles: HandleSet,
    pub hot_zones: Vec<HotZone>,
    pub guide: Option<GuideShape>,
}

impl Layout {
    pub fn is_empty(&self) -> bool {
        self.border.is_none()
    }
}

pub fn compute_layout(bounds: Rect, config: &OverlayConfig) -> Layout {
    let m = &config.metrics;

    let Some(border) = compute_border(bounds, m.border_thickness) else {
        return Layout {
            bounds,
            ..Layout::default()
        };
    };

    let guide = guide::compute_guide_shape(bounds, config.guide_variant);

    if config.disable_deformation {
        return Layout {
            bounds,
            border: Some(border),
            handles: HandleSet::default(),
            hot_zones: Vec::new(),
            guide,
        };
    }

    let handles = compute_handles(bounds, m.thickness, m.corner_length, m.edge_length);
    let hot_zones = compute_hot_zones(&handles, config.hot_area_unit);

    Layout {
        bounds,
        border: Some(border),
        handles,
        hot_zones,
        guide,
    }
}
