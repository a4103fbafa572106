// Author: Dustin Pilgrim
// License: MIT

use std::path::Path;

use cropguide_core::colour;
use cropguide_core::{Point, Rect};
use tiny_skia::{Paint, PathBuilder, Pixmap, Stroke, StrokeDash, Transform};

use crate::error::RenderError;
use crate::surface::{Dash, Surface};

/// Raster surface backed by a tiny-skia pixmap.
pub struct PixmapSurface {
    pixmap: Pixmap,
    transform: Transform,
}

impl PixmapSurface {
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        let pixmap = Pixmap::new(width, height).ok_or(RenderError::Alloc { width, height })?;
        Ok(Self {
            pixmap,
            transform: Transform::identity(),
        })
    }

    /// Shift overlay-local coordinates so handles outside the box stay visible.
    pub fn with_origin(mut self, dx: f64, dy: f64) -> Self {
        self.transform = Transform::from_translate(dx as f32, dy as f32);
        self
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn clear(&mut self, argb: u32) {
        self.pixmap.fill(tiny_skia::Color::from_rgba8(
            colour::r(argb),
            colour::g(argb),
            colour::b(argb),
            colour::a(argb),
        ));
    }

    /// Unpremultiplied ARGB at device pixel `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some(colour::argb(c.alpha(), c.red(), c.green(), c.blue()))
    }

    pub fn encode_png(&self) -> Result<Vec<u8>, RenderError> {
        self.pixmap
            .encode_png()
            .map_err(|e| RenderError::Encode(e.to_string()))
    }

    pub fn save_png(&self, path: &Path) -> Result<(), RenderError> {
        let bytes = self.encode_png()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }
}

fn paint(argb: u32) -> Paint<'static> {
    let mut p = Paint::default();
    p.set_color_rgba8(colour::r(argb), colour::g(argb), colour::b(argb), colour::a(argb));
    p.anti_alias = true;
    p
}

fn skia_rect(r: Rect) -> Option<tiny_skia::Rect> {
    tiny_skia::Rect::from_xywh(r.x as f32, r.y as f32, r.w as f32, r.h as f32)
}

impl Surface for PixmapSurface {
    fn fill_rect(&mut self, rect: Rect, argb: u32) {
        let Some(r) = skia_rect(rect) else {
            return;
        };
        self.pixmap.fill_rect(r, &paint(argb), self.transform, None);
    }

    fn stroke_rect(&mut self, rect: Rect, width: f64, argb: u32) {
        // tiny-skia centres strokes on the path; pull it in by half a width.
        let Some(r) = skia_rect(rect.outset(-width / 2.0)) else {
            return;
        };
        let path = PathBuilder::from_rect(r);
        let stroke = Stroke {
            width: width as f32,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &paint(argb), &stroke, self.transform, None);
    }

    fn stroke_polyline(&mut self, points: &[Point], closed: bool, width: f64, argb: u32, dash: Option<Dash>) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };

        let mut pb = PathBuilder::new();
        pb.move_to(first.x as f32, first.y as f32);
        for p in rest {
            pb.line_to(p.x as f32, p.y as f32);
        }
        if closed {
            pb.close();
        }
        let Some(path) = pb.finish() else {
            return;
        };

        let stroke = Stroke {
            width: width as f32,
            dash: dash.and_then(|d| StrokeDash::new(vec![d.on as f32, d.off as f32], d.phase as f32)),
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &paint(argb), &stroke, self.transform, None);
    }
}
