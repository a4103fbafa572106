// Author: Dustin Pilgrim
// License: MIT

use std::f64::consts::TAU;

use cropguide_core::{GuideStroke, Point, Rect};

/// Segments used to flatten a full ellipse; arcs use a share of it.
pub const ELLIPSE_SEGMENTS: usize = 48;

pub fn ellipse_points(rect: Rect, segments: usize) -> Vec<Point> {
    let segments = segments.max(3);
    let (cx, cy) = (rect.mid_x(), rect.mid_y());
    let (rx, ry) = (rect.w / 2.0, rect.h / 2.0);

    (0..segments)
        .map(|i| {
            let a = TAU * i as f64 / segments as f64;
            Point::new(cx + rx * a.cos(), cy + ry * a.sin())
        })
        .collect()
}

/// Arc sweeping from `start` to `end`, both endpoints included.
pub fn arc_points(center: Point, radius: f64, start: f64, end: f64, segments: usize) -> Vec<Point> {
    let segments = segments.max(1);
    let sweep = end - start;

    (0..=segments)
        .map(|i| {
            let a = start + sweep * i as f64 / segments as f64;
            Point::new(center.x + radius * a.cos(), center.y + radius * a.sin())
        })
        .collect()
}

/// Flatten a guide stroke into a polyline; the flag says whether it closes.
pub fn flatten(stroke: &GuideStroke) -> (Vec<Point>, bool) {
    match *stroke {
        GuideStroke::Ellipse(rect) => (ellipse_points(rect, ELLIPSE_SEGMENTS), true),
        GuideStroke::Arc {
            center,
            radius,
            start,
            end,
        } => {
            let share = ((end - start).abs() / TAU * ELLIPSE_SEGMENTS as f64).ceil() as usize;
            (arc_points(center, radius, start, end, share), false)
        }
        GuideStroke::Line { from, to } => (vec![from, to], false),
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;

    #[test]
    fn ellipse_points_lie_on_the_ellipse() {
        let r = Rect::new(10.0, 20.0, 40.0, 20.0);
        for p in ellipse_points(r, 32) {
            let nx = (p.x - r.mid_x()) / (r.w / 2.0);
            let ny = (p.y - r.mid_y()) / (r.h / 2.0);
            assert!((nx * nx + ny * ny - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn arc_includes_both_endpoints() {
        let c = Point::new(0.0, 0.0);
        let pts = arc_points(c, 10.0, 0.0, PI, 4);
        assert_eq!(pts.len(), 5);
        assert!((pts[0].x - 10.0).abs() < 1e-9);
        assert!((pts[4].x + 10.0).abs() < 1e-9);
        // y-down space: the midpoint of a 0..pi sweep sits below the centre.
        assert!((pts[2].y - 10.0).abs() < 1e-9);
    }

    #[test]
    fn flatten_line() {
        let from = Point::new(1.0, 2.0);
        let to = Point::new(3.0, 4.0);
        assert_eq!(flatten(&GuideStroke::Line { from, to }), (vec![from, to], false));
    }
}
