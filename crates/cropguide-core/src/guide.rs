// Author: Dustin Pilgrim
// License: MIT

//! Decorative alignment guide drawn inside the crop box.
//!
//! The guide never takes part in hit-testing. All proportions come from a
//! constant table so a caller can swap in its own tuning.

use std::f64::consts::PI;

use crate::mode::GuideVariant;
use crate::rect::{Point, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectBucket {
    Square,
    Wide,
    Tall,
}

impl AspectBucket {
    pub fn of(bounds: Rect) -> AspectBucket {
        let ratio = bounds.w / bounds.h;
        if (ratio - 1.0).abs() < 0.05 {
            AspectBucket::Square
        } else if ratio > 1.2 {
            AspectBucket::Wide
        } else {
            AspectBucket::Tall
        }
    }
}

/// Fractions of the box height, plus oval width relative to its height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortraitProportions {
    pub top: f64,
    pub chin: f64,
    pub eyes: f64,
    pub oval_width: f64,
}

/// Fractions of the box size, measured from its centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenteredProportions {
    pub face_half_width: f64,
    pub face_half_height: f64,
    pub eye_radius: f64,
    pub eye_dx: f64,
    pub eye_dy: f64,
    pub nose_top: f64,
    pub nose_bottom: f64,
    pub mouth_dy: f64,
    pub mouth_half_width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuideTable {
    pub square: PortraitProportions,
    pub wide: PortraitProportions,
    pub tall: PortraitProportions,
    pub centered: CenteredProportions,
}

impl GuideTable {
    pub fn portrait(&self, bucket: AspectBucket) -> PortraitProportions {
        match bucket {
            AspectBucket::Square => self.square,
            AspectBucket::Wide => self.wide,
            AspectBucket::Tall => self.tall,
        }
    }
}

// Hand-tuned; no derivation behind these numbers.
pub const DEFAULT_GUIDE_TABLE: GuideTable = GuideTable {
    square: PortraitProportions { top: 0.15, chin: 0.70, eyes: 0.40, oval_width: 0.75 },
    wide: PortraitProportions { top: 0.18, chin: 0.72, eyes: 0.42, oval_width: 0.80 },
    tall: PortraitProportions { top: 0.12, chin: 0.68, eyes: 0.38, oval_width: 0.68 },
    centered: CenteredProportions {
        face_half_width: 0.18,
        face_half_height: 0.28,
        eye_radius: 0.03,
        eye_dx: 0.07,
        eye_dy: 0.09,
        nose_top: 0.06,
        nose_bottom: 0.04,
        mouth_dy: 0.11,
        mouth_half_width: 0.06,
    },
};

const EYE_SPACING: f64 = 0.35;
const EYE_RADIUS: f64 = 0.07;
const CHIN_ARC_RADIUS: f64 = 0.24;
const CHIN_ARC_LIFT: f64 = 0.15;

/// One stroked piece of the guide. Angles are radians, measured in the
/// y-down overlay space, and sweep from `start` to `end` increasing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GuideStroke {
    Ellipse(Rect),
    Arc {
        center: Point,
        radius: f64,
        start: f64,
        end: f64,
    },
    Line {
        from: Point,
        to: Point,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct GuideShape {
    pub variant: GuideVariant,
    pub bucket: AspectBucket,
    /// Head or face oval.
    pub outline: Rect,
    /// Outline first, then landmarks.
    pub strokes: Vec<GuideStroke>,
}

pub fn compute_guide_shape(bounds: Rect, variant: GuideVariant) -> Option<GuideShape> {
    compute_guide_shape_with(bounds, variant, &DEFAULT_GUIDE_TABLE)
}

pub fn compute_guide_shape_with(bounds: Rect, variant: GuideVariant, table: &GuideTable) -> Option<GuideShape> {
    if bounds.is_empty() {
        return None;
    }

    let bucket = AspectBucket::of(bounds);
    let shape = match variant {
        GuideVariant::Portrait => portrait(bounds, bucket, table.portrait(bucket)),
        GuideVariant::Centered => centered(bounds, bucket, &table.centered),
    };
    Some(shape)
}

fn portrait(bounds: Rect, bucket: AspectBucket, p: PortraitProportions) -> GuideShape {
    let top_y = bounds.y + bounds.h * p.top;
    let chin_y = bounds.y + bounds.h * p.chin;
    let eyes_y = bounds.y + bounds.h * p.eyes;

    let oval_h = chin_y - top_y;
    let oval_w = oval_h * p.oval_width;
    let oval = Rect::new(bounds.x + (bounds.w - oval_w) / 2.0, top_y, oval_w, oval_h);

    let cx = bounds.mid_x();
    let eye_spacing = oval_w * EYE_SPACING;
    let eye_r = oval_w * EYE_RADIUS;

    let chin_r = oval_w * CHIN_ARC_RADIUS;

    GuideShape {
        variant: GuideVariant::Portrait,
        bucket,
        outline: oval,
        strokes: vec![
            GuideStroke::Ellipse(oval),
            GuideStroke::Ellipse(circle(Point::new(cx - eye_spacing / 2.0, eyes_y), eye_r)),
            GuideStroke::Ellipse(circle(Point::new(cx + eye_spacing / 2.0, eyes_y), eye_r)),
            GuideStroke::Arc {
                center: Point::new(cx, chin_y - chin_r * CHIN_ARC_LIFT),
                radius: chin_r,
                start: PI * 1.1,
                end: PI * 1.9,
            },
        ],
    }
}

fn centered(bounds: Rect, bucket: AspectBucket, c: &CenteredProportions) -> GuideShape {
    let (w, h) = (bounds.w, bounds.h);
    let (mx, my) = (bounds.mid_x(), bounds.mid_y());

    let face = Rect::new(
        mx - w * c.face_half_width,
        my - h * c.face_half_height,
        w * c.face_half_width * 2.0,
        h * c.face_half_height * 2.0,
    );

    let eye_r = w * c.eye_radius;
    let eye_y = my - h * c.eye_dy;

    GuideShape {
        variant: GuideVariant::Centered,
        bucket,
        outline: face,
        strokes: vec![
            GuideStroke::Ellipse(face),
            GuideStroke::Ellipse(circle(Point::new(mx - w * c.eye_dx, eye_y), eye_r)),
            GuideStroke::Ellipse(circle(Point::new(mx + w * c.eye_dx, eye_y), eye_r)),
            GuideStroke::Line {
                from: Point::new(mx, my - h * c.nose_top),
                to: Point::new(mx, my + h * c.nose_bottom),
            },
            GuideStroke::Arc {
                center: Point::new(mx, my + h * c.mouth_dy),
                radius: w * c.mouth_half_width,
                start: PI * 0.1,
                end: PI * 0.9,
            },
        ],
    }
}

fn circle(center: Point, radius: f64) -> Rect {
    Rect::new(center.x - radius, center.y - radius, radius * 2.0, radius * 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn aspect_buckets() {
        assert_eq!(AspectBucket::of(Rect::new(0.0, 0.0, 100.0, 100.0)), AspectBucket::Square);
        assert_eq!(AspectBucket::of(Rect::new(0.0, 0.0, 104.0, 100.0)), AspectBucket::Square);
        assert_eq!(AspectBucket::of(Rect::new(0.0, 0.0, 130.0, 100.0)), AspectBucket::Wide);
        // Between the square band and the wide threshold falls back to tall.
        assert_eq!(AspectBucket::of(Rect::new(0.0, 0.0, 110.0, 100.0)), AspectBucket::Tall);
        assert_eq!(AspectBucket::of(Rect::new(0.0, 0.0, 60.0, 100.0)), AspectBucket::Tall);
    }

    #[test]
    fn square_portrait_oval() {
        let g = compute_guide_shape(Rect::new(0.0, 0.0, 200.0, 200.0), GuideVariant::Portrait).unwrap();
        assert_eq!(g.bucket, AspectBucket::Square);
        // top 30, chin 140 -> height 110, width 82.5
        assert!(close(g.outline.y, 30.0));
        assert!(close(g.outline.h, 110.0));
        assert!(close(g.outline.w, 82.5));
        assert!(close(g.outline.mid_x(), 100.0));
        assert_eq!(g.strokes.len(), 4);
        assert_eq!(g.strokes[0], GuideStroke::Ellipse(g.outline));
    }

    #[test]
    fn portrait_respects_bounds_origin() {
        let a = compute_guide_shape(Rect::new(0.0, 0.0, 300.0, 200.0), GuideVariant::Portrait).unwrap();
        let b = compute_guide_shape(Rect::new(40.0, 25.0, 300.0, 200.0), GuideVariant::Portrait).unwrap();
        assert!(close(b.outline.x - a.outline.x, 40.0));
        assert!(close(b.outline.y - a.outline.y, 25.0));
        assert_eq!(a.bucket, AspectBucket::Wide);
    }

    #[test]
    fn eyes_are_symmetric_about_the_centre() {
        let bounds = Rect::new(10.0, 10.0, 120.0, 200.0);
        let g = compute_guide_shape(bounds, GuideVariant::Portrait).unwrap();
        let (GuideStroke::Ellipse(l), GuideStroke::Ellipse(r)) = (g.strokes[1], g.strokes[2]) else {
            panic!("expected eye ellipses");
        };
        assert!(close(bounds.mid_x() - l.mid_x(), r.mid_x() - bounds.mid_x()));
        assert!(close(l.mid_y(), bounds.y + bounds.h * 0.38));
    }

    #[test]
    fn centered_face_has_nose_and_mouth() {
        let g = compute_guide_shape(Rect::new(0.0, 0.0, 100.0, 100.0), GuideVariant::Centered).unwrap();
        assert_eq!(g.strokes.len(), 5);
        assert!(close(g.outline.w, 36.0));
        assert!(close(g.outline.h, 56.0));
        assert!(matches!(g.strokes[3], GuideStroke::Line { .. }));
        assert!(matches!(g.strokes[4], GuideStroke::Arc { .. }));
    }

    #[test]
    fn custom_table_is_used() {
        let mut table = DEFAULT_GUIDE_TABLE;
        table.square.top = 0.0;
        table.square.chin = 1.0;
        let g = compute_guide_shape_with(Rect::new(0.0, 0.0, 50.0, 50.0), GuideVariant::Portrait, &table).unwrap();
        assert!(close(g.outline.y, 0.0));
        assert!(close(g.outline.h, 50.0));
    }

    #[test]
    fn empty_bounds_have_no_guide() {
        assert!(compute_guide_shape(Rect::ZERO, GuideVariant::Portrait).is_none());
    }
}
