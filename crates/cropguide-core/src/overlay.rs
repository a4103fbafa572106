// Author: Dustin Pilgrim
// License: MIT

use crate::config::OverlayConfig;
use crate::geometry::{self, Layout};
use crate::handle::ActiveEdge;
use crate::hit_test::{HotZone, HotZoneSet};
use crate::mode::GridMode;
use crate::rect::{Point, Rect};

/// Token handed out whenever the current rendering is invalidated.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redraw {
    pub generation: u64,
}

/// Visibility state consulted by the drawing routines.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub active_edge: ActiveEdge,
    pub grid_hidden: bool,
    pub grid_mode: GridMode,
    pub hint_line: Option<Rect>,
    pub guide_visible: bool,
}

impl RenderState {
    fn initial(config: &OverlayConfig) -> Self {
        Self {
            active_edge: ActiveEdge::None,
            grid_hidden: true,
            grid_mode: config.grid_mode,
            hint_line: None,
            guide_visible: config.show_guide,
        }
    }
}

/// Borrowed view of everything needed to paint one frame.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub config: &'a OverlayConfig,
    pub layout: &'a Layout,
    pub state: &'a RenderState,
}

impl Snapshot<'_> {
    pub fn grid_lines(&self) -> Vec<geometry::GridLine> {
        if self.state.grid_hidden {
            return Vec::new();
        }
        geometry::compute_grid_lines(self.layout.bounds, self.state.grid_mode)
    }
}

type RedrawFn = Box<dyn FnMut(Redraw)>;

/// Crop-box overlay driven by exactly one controller.
pub struct Overlay {
    config: OverlayConfig,
    layout: Layout,
    state: RenderState,
    generation: u64,
    on_redraw: Option<RedrawFn>,
}

impl std::fmt::Debug for Overlay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Overlay")
            .field("config", &self.config)
            .field("layout", &self.layout)
            .field("state", &self.state)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

impl Overlay {
    pub fn new(config: OverlayConfig) -> Self {
        let state = RenderState::initial(&config);
        Self {
            config,
            layout: Layout::default(),
            state,
            generation: 0,
            on_redraw: None,
        }
    }

    /// Register the redraw callback. Replaces any previous one.
    pub fn on_redraw<F>(&mut self, f: F)
    where
        F: FnMut(Redraw) + 'static,
    {
        self.on_redraw = Some(Box::new(f));
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn state(&self) -> &RenderState {
        &self.state
    }

    pub fn bounds(&self) -> Rect {
        self.layout.bounds
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            config: &self.config,
            layout: &self.layout,
            state: &self.state,
        }
    }

    pub fn hot_zones(&self) -> HotZoneSet<'_> {
        HotZoneSet::new(&self.layout.hot_zones)
    }

    pub fn contains_point(&self, p: Point) -> bool {
        self.hot_zones().contains_point(p)
    }

    pub fn matched_zone(&self, p: Point) -> Option<&HotZone> {
        self.hot_zones().matched_zone(p)
    }

    /// Recompute the whole layout and keep an engaged hint line glued to
    /// the new border.
    pub fn set_bounds(&mut self, bounds: Rect) -> Option<Redraw> {
        self.layout = geometry::compute_layout(bounds, &self.config);

        if !self.state.active_edge.is_none() {
            self.engage(self.state.active_edge);
        }

        Some(self.request_redraw())
    }

    pub fn handle_touched(&mut self, edge: ActiveEdge) -> Option<Redraw> {
        if edge.is_none() {
            return None;
        }

        let before = self.state.clone();
        self.engage(edge);
        self.redraw_if_changed(&before)
    }

    pub fn handle_released(&mut self) -> Option<Redraw> {
        let before = self.state.clone();

        self.state.grid_hidden = true;
        self.state.hint_line = None;
        self.state.active_edge = ActiveEdge::None;

        self.redraw_if_changed(&before)
    }

    /// Switch grid density at runtime, e.g. to `Rotate` while rotating.
    pub fn set_grid_mode(&mut self, mode: GridMode) -> Option<Redraw> {
        let before = self.state.clone();
        self.state.grid_mode = mode;
        self.redraw_if_changed(&before)
    }

    pub fn set_grid_hidden(&mut self, hidden: bool) -> Option<Redraw> {
        let before = self.state.clone();
        self.state.grid_hidden = hidden;
        self.redraw_if_changed(&before)
    }

    /// No-op while the config turns the guide off entirely.
    pub fn set_guide_visible(&mut self, visible: bool) -> Option<Redraw> {
        if !self.config.show_guide {
            return None;
        }

        let before = self.state.clone();
        self.state.guide_visible = visible;
        self.redraw_if_changed(&before)
    }

    fn engage(&mut self, edge: ActiveEdge) {
        self.state.active_edge = edge;
        self.state.grid_hidden = false;
        self.state.grid_mode = GridMode::Crop;

        self.state.hint_line = self.layout.border.and_then(|border| {
            geometry::compute_hint_line(border, edge, self.config.metrics.hint_thickness)
        });
    }

    fn redraw_if_changed(&mut self, before: &RenderState) -> Option<Redraw> {
        if *before == self.state {
            return None;
        }
        Some(self.request_redraw())
    }

    fn request_redraw(&mut self) -> Redraw {
        self.generation += 1;
        let token = Redraw {
            generation: self.generation,
        };
        if let Some(cb) = self.on_redraw.as_mut() {
            cb(token);
        }
        token
    }
}
