// Author: Dustin Pilgrim
// License: MIT

use cropguide_core::geometry::Orientation;
use cropguide_core::{Emphasis, Layout, OverlayConfig, RenderState, Snapshot, Style};

use crate::path;
use crate::surface::{Dash, Layer, Surface};

const GRID_LINE_WIDTH: f64 = 1.0;
const GUIDE_LINE_WIDTH: f64 = 2.0;

/// Paint one frame of the overlay, back to front.
pub fn draw_overlay<S: Surface + ?Sized>(surface: &mut S, snap: Snapshot<'_>) {
    let Snapshot { config, layout, state } = snap;

    if layout.is_empty() {
        return;
    }

    // Transparent overlays keep only their (invisible) hot zones.
    if config.style == Style::Transparent {
        return;
    }

    draw_handles(surface, config, layout);
    draw_border(surface, config, layout);

    if !state.grid_hidden {
        draw_grid(surface, &snap);
    }

    draw_hint_line(surface, config, state);

    if config.show_guide && state.guide_visible {
        draw_guide(surface, config, layout);
    }
}

fn draw_handles<S: Surface + ?Sized>(surface: &mut S, config: &OverlayConfig, layout: &Layout) {
    if layout.handles.is_empty() {
        return;
    }

    surface.begin_layer(Layer::Handles);
    for c in &layout.handles.corners {
        surface.fill_rect(c.rect, config.colours.corner_handle);
    }
    for e in &layout.handles.edges {
        surface.fill_rect(e.rect, config.colours.edge_handle);
    }
}

fn draw_border<S: Surface + ?Sized>(surface: &mut S, config: &OverlayConfig, layout: &Layout) {
    let Some(border) = layout.border else {
        return;
    };

    surface.begin_layer(Layer::Border);
    surface.stroke_rect(border, config.metrics.border_thickness, config.colours.border);
}

fn draw_grid<S: Surface + ?Sized>(surface: &mut S, snap: &Snapshot<'_>) {
    let lines = snap.grid_lines();
    if lines.is_empty() {
        return;
    }

    let colours = &snap.config.colours;
    let bounds = snap.layout.bounds;

    surface.begin_layer(Layer::Grid);

    // Horizontal lines first, matching compute order.
    for orientation in [Orientation::Horizontal, Orientation::Vertical] {
        for line in lines.iter().filter(|l| l.orientation == orientation) {
            let (from, to) = line.segment(bounds);
            let argb = match line.emphasis {
                Emphasis::Main => colours.grid_main,
                Emphasis::Secondary => colours.grid_secondary,
            };
            surface.stroke_polyline(&[from, to], false, GRID_LINE_WIDTH, argb, Some(Dash::GUIDE));
        }
    }
}

fn draw_hint_line<S: Surface + ?Sized>(surface: &mut S, config: &OverlayConfig, state: &RenderState) {
    let Some(hint) = state.hint_line else {
        return;
    };

    surface.begin_layer(Layer::HintLine);
    surface.fill_rect(hint, config.colours.border_hint);
}

fn draw_guide<S: Surface + ?Sized>(surface: &mut S, config: &OverlayConfig, layout: &Layout) {
    let Some(guide) = layout.guide.as_ref() else {
        return;
    };

    surface.begin_layer(Layer::Guide);
    for stroke in &guide.strokes {
        let (points, closed) = path::flatten(stroke);
        surface.stroke_polyline(&points, closed, GUIDE_LINE_WIDTH, config.colours.guide, Some(Dash::GUIDE));
    }
}
