// Author: Dustin Pilgrim
// License: MIT

use crate::handle::Handle;
use crate::rect::{Point, Rect};

/// Invisible enlarged region answering hit-tests for one handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HotZone {
    pub handle: Handle,
    pub rect: Rect,
}

impl HotZone {
    pub fn contains(&self, p: Point) -> bool {
        let local = self.rect.to_local(p);
        local.x >= 0.0 && local.y >= 0.0 && local.x < self.rect.w && local.y < self.rect.h
    }
}

/// All hot zones of an overlay, answering as a single opaque unit.
#[derive(Debug, Clone, Copy)]
pub struct HotZoneSet<'a> {
    zones: &'a [HotZone],
}

impl<'a> HotZoneSet<'a> {
    pub fn new(zones: &'a [HotZone]) -> Self {
        Self { zones }
    }

    pub fn contains_point(&self, p: Point) -> bool {
        self.zones.iter().any(|z| z.contains(p))
    }

    /// First zone containing `p`, in registration order (corners first).
    pub fn matched_zone(&self, p: Point) -> Option<&'a HotZone> {
        self.zones.iter().find(|z| z.contains(p))
    }

    /// Every zone containing `p`, for callers that resolve overlaps themselves.
    pub fn matches(&self, p: Point) -> impl Iterator<Item = &'a HotZone> + '_ {
        self.zones.iter().filter(move |z| z.contains(p))
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{compute_handles, compute_hot_zones};

    fn zones_for(bounds: Rect) -> Vec<HotZone> {
        let set = compute_handles(bounds, 3.0, 20.0, 30.0);
        compute_hot_zones(&set, 42.0)
    }

    #[test]
    fn corner_zone_centre_hits() {
        let zones = zones_for(Rect::new(0.0, 0.0, 400.0, 300.0));
        let hits = HotZoneSet::new(&zones);
        for z in zones.iter().filter(|z| z.handle.is_corner()) {
            assert!(hits.contains_point(z.rect.center()));
            assert_eq!(hits.matched_zone(z.rect.center()).map(|m| m.handle), Some(z.handle));
        }
    }

    #[test]
    fn box_centre_misses_when_no_zone_spans_it() {
        let bounds = Rect::new(0.0, 0.0, 400.0, 300.0);
        let zones = zones_for(bounds);
        let hits = HotZoneSet::new(&zones);
        assert!(!hits.contains_point(bounds.center()));
        assert!(hits.matched_zone(bounds.center()).is_none());
    }

    #[test]
    fn point_near_top_edge_matches_top_handle() {
        let zones = zones_for(Rect::new(0.0, 0.0, 400.0, 300.0));
        let hits = HotZoneSet::new(&zones);
        let m = hits.matched_zone(Point::new(200.0, 10.0)).unwrap();
        assert_eq!(m.handle, Handle::Top);
    }

    #[test]
    fn overlapping_zones_prefer_corners() {
        // Small box: corner and edge zones overlap around the edge midpoints.
        let zones = zones_for(Rect::new(0.0, 0.0, 40.0, 40.0));
        let hits = HotZoneSet::new(&zones);
        let p = Point::new(20.0, 0.0);
        assert!(hits.matches(p).count() > 1);
        assert!(hits.matched_zone(p).unwrap().handle.is_corner());
    }

    #[test]
    fn zone_membership_is_half_open() {
        let z = HotZone {
            handle: Handle::Left,
            rect: Rect::new(10.0, 10.0, 5.0, 5.0),
        };
        assert!(z.contains(Point::new(10.0, 10.0)));
        assert!(!z.contains(Point::new(15.0, 12.0)));
    }

    #[test]
    fn empty_set_never_hits() {
        let hits = HotZoneSet::new(&[]);
        assert!(hits.is_empty());
        assert!(!hits.contains_point(Point::new(0.0, 0.0)));
    }
}
