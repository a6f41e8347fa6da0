use crate::geometry::Point;
use crate::path::{NavPathPoint, PortalEdge};

/// Which funnel bound was turned into a waypoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Funnel state at the moment a waypoint is emitted. Not needed to place the
/// waypoint; available to sinks that tag or inspect emissions.
#[derive(Clone, Copy, Debug)]
pub struct EmitContext<'a> {
    /// Apex of the funnel that collapsed.
    pub funnel_apex: Point,
    /// Corridor index at which the emitted vertex was accepted as a bound.
    pub edge_index: usize,
    pub side: Side,
    pub portals: &'a [PortalEdge],
}

/// Destination of the smoothed path. The funnel calls [`WaypointSink::push`]
/// for the start and end points and [`WaypointSink::add_path_point`] for every
/// corner it emits in between.
pub trait WaypointSink {
    fn push(&mut self, waypoint: NavPathPoint);

    fn last(&self) -> Option<&NavPathPoint>;

    fn add_path_point(&mut self, waypoint: NavPathPoint, _context: &EmitContext<'_>) {
        self.push(waypoint);
    }
}

impl WaypointSink for Vec<NavPathPoint> {
    #[inline]
    fn push(&mut self, waypoint: NavPathPoint) {
        Vec::push(self, waypoint);
    }

    #[inline]
    fn last(&self) -> Option<&NavPathPoint> {
        self.as_slice().last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_sink_appends_in_order() {
        let mut out: Vec<NavPathPoint> = Vec::new();
        let ctx = EmitContext {
            funnel_apex: Point::xy(0.0, 0.0),
            edge_index: 0,
            side: Side::Left,
            portals: &[],
        };
        WaypointSink::push(&mut out, Point::xy(0.0, 0.0).into());
        out.add_path_point(NavPathPoint::new(Point::xy(1.0, 1.0), Some(4)), &ctx);
        assert_eq!(out.len(), 2);
        assert_eq!(WaypointSink::last(&out).and_then(|p| p.cell), Some(4));
    }
}
