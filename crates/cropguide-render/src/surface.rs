// Author: Dustin Pilgrim
// License: MIT

use cropguide_core::{Point, Rect};

/// Dash pattern: `on` units painted, `off` units skipped, starting at `phase`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dash {
    pub on: f64,
    pub off: f64,
    pub phase: f64,
}

impl Dash {
    pub const GUIDE: Dash = Dash {
        on: 4.0,
        off: 4.0,
        phase: 0.0,
    };
}

/// Paint groups, back to front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Layer {
    Handles,
    Border,
    Grid,
    HintLine,
    Guide,
}

/// Drawing target. Colours are ARGB (0xAARRGGBB).
pub trait Surface {
    /// Marks the start of a paint group. Backends may ignore it.
    fn begin_layer(&mut self, _layer: Layer) {}

    fn fill_rect(&mut self, rect: Rect, argb: u32);

    /// Stroke lying entirely inside `rect`, `width` thick.
    fn stroke_rect(&mut self, rect: Rect, width: f64, argb: u32);

    fn stroke_polyline(&mut self, points: &[Point], closed: bool, width: f64, argb: u32, dash: Option<Dash>);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Layer(Layer),
    FillRect {
        rect: Rect,
        argb: u32,
    },
    StrokeRect {
        rect: Rect,
        width: f64,
        argb: u32,
    },
    StrokePolyline {
        points: Vec<Point>,
        closed: bool,
        width: f64,
        argb: u32,
        dash: Option<Dash>,
    },
}

/// Records drawing instructions instead of rasterising them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    ops: Vec<DrawOp>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Layers in the order they were started.
    pub fn layers(&self) -> Vec<Layer> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Layer(l) => Some(*l),
                _ => None,
            })
            .collect()
    }

    /// Ops recorded under `layer`.
    pub fn ops_in(&self, layer: Layer) -> Vec<&DrawOp> {
        let mut current = None;
        let mut out = Vec::new();
        for op in &self.ops {
            match op {
                DrawOp::Layer(l) => current = Some(*l),
                other if current == Some(layer) => out.push(other),
                _ => {}
            }
        }
        out
    }
}

impl Surface for DisplayList {
    fn begin_layer(&mut self, layer: Layer) {
        self.ops.push(DrawOp::Layer(layer));
    }

    fn fill_rect(&mut self, rect: Rect, argb: u32) {
        self.ops.push(DrawOp::FillRect { rect, argb });
    }

    fn stroke_rect(&mut self, rect: Rect, width: f64, argb: u32) {
        self.ops.push(DrawOp::StrokeRect { rect, width, argb });
    }

    fn stroke_polyline(&mut self, points: &[Point], closed: bool, width: f64, argb: u32, dash: Option<Dash>) {
        self.ops.push(DrawOp::StrokePolyline {
            points: points.to_vec(),
            closed,
            width,
            argb,
            dash,
        });
    }
}
