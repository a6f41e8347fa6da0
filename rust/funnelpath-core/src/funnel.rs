//! Funnel (string-pulling) algorithm that reduces an ordered portal corridor
//! to the taut sequence of waypoints through it.
//!
//! Deterministic, allocation-free apart from what the sink stores.
use tracing::{debug, trace};

use crate::emitter::{EmitContext, Side, WaypointSink};
use crate::geometry::{signed_2d_area, Point};
use crate::options::SmoothOptions;
use crate::path::{CellId, NavPathPoint, PortalEdge};
use crate::stats::FunnelStats;

/// Apex plus the two bounding vertices, with the corridor index (and cell)
/// each bound was last accepted from.
#[derive(Clone, Copy, Debug)]
struct Funnel {
    apex: Point,
    left: Point,
    right: Point,
    left_index: usize,
    right_index: usize,
    left_cell: Option<CellId>,
    right_cell: Option<CellId>,
}

impl Funnel {
    fn collapsed_at(waypoint: NavPathPoint, index: usize) -> Self {
        Self {
            apex: waypoint.location,
            left: waypoint.location,
            right: waypoint.location,
            left_index: index,
            right_index: index,
            left_cell: waypoint.cell,
            right_cell: waypoint.cell,
        }
    }

    #[inline]
    fn accept_left(&mut self, p: Point, index: usize, cell: Option<CellId>) {
        self.left = p;
        self.left_index = index;
        self.left_cell = cell;
    }

    #[inline]
    fn accept_right(&mut self, p: Point, index: usize, cell: Option<CellId>) {
        self.right = p;
        self.right_index = index;
        self.right_cell = cell;
    }
}

/// Pulls a string from `start` to `end` through `portals` and writes the result
/// to `sink`: `start`, each corner the string bends around, then `end`.
///
/// Portal `left` vertices must lie on the traveller's left. An empty corridor
/// yields the straight segment `[start, end]`.
pub fn string_pull<S>(
    portals: &[PortalEdge],
    start: NavPathPoint,
    end: NavPathPoint,
    options: &SmoothOptions,
    sink: &mut S,
) -> FunnelStats
where
    S: WaypointSink + ?Sized,
{
    let tol = options.equal_tolerance;
    let num_edges = portals.len();
    let mut stats = FunnelStats::default();
    let mut funnel = Funnel::collapsed_at(start, 0);

    sink.push(start);

    // One extra iteration for the synthetic portal collapsed onto the end point.
    let mut edge_index = 0usize;
    while edge_index <= num_edges {
        stats.iterations += 1;
        let (new_left, new_right, cell) = match portals.get(edge_index) {
            Some(e) => (e.left, e.right, e.to_cell),
            None => (end.location, end.location, end.cell),
        };

        // Right vertex
        if signed_2d_area(funnel.apex, funnel.right, new_right) <= 0.0 {
            if funnel.apex.equals(&funnel.right, tol)
                || signed_2d_area(funnel.apex, funnel.left, new_right) > 0.0
            {
                funnel.accept_right(new_right, edge_index, cell);
                stats.accepts += 1;
            } else {
                // Crossed over the left bound: the left vertex becomes the new apex.
                if funnel.left.equals(&end.location, tol) {
                    break;
                }
                let waypoint = NavPathPoint::new(funnel.left, funnel.left_cell);
                let index = funnel.left_index;
                let context = EmitContext {
                    funnel_apex: funnel.apex,
                    edge_index: index,
                    side: Side::Left,
                    portals,
                };
                emit(sink, waypoint, &context, options, &mut stats);
                funnel = Funnel::collapsed_at(waypoint, index);
                edge_index = restart_after(index, edge_index, &mut stats);
                continue;
            }
        }

        // Left vertex
        if signed_2d_area(funnel.apex, funnel.left, new_left) >= 0.0 {
            if funnel.apex.equals(&funnel.left, tol)
                || signed_2d_area(funnel.apex, funnel.right, new_left) < 0.0
            {
                funnel.accept_left(new_left, edge_index, cell);
                stats.accepts += 1;
            } else {
                // Crossed over the right bound: the right vertex becomes the new apex.
                if funnel.right.equals(&end.location, tol) {
                    break;
                }
                let waypoint = NavPathPoint::new(funnel.right, funnel.right_cell);
                let index = funnel.right_index;
                let context = EmitContext {
                    funnel_apex: funnel.apex,
                    edge_index: index,
                    side: Side::Right,
                    portals,
                };
                emit(sink, waypoint, &context, options, &mut stats);
                funnel = Funnel::collapsed_at(waypoint, index);
                edge_index = restart_after(index, edge_index, &mut stats);
                continue;
            }
        }

        edge_index += 1;
    }

    sink.push(end);

    debug!(
        portals = num_edges,
        iterations = stats.iterations,
        accepts = stats.accepts,
        emits = stats.emits,
        rewinds = stats.rewinds,
        "string_pull_done"
    );
    stats
}

#[inline]
fn emit<S>(
    sink: &mut S,
    waypoint: NavPathPoint,
    context: &EmitContext<'_>,
    options: &SmoothOptions,
    stats: &mut FunnelStats,
) where
    S: WaypointSink + ?Sized,
{
    stats.emits += 1;
    let repeated = sink
        .last()
        .is_some_and(|last| last.location.equals(&waypoint.location, options.equal_tolerance));
    if options.dedupe_waypoints && repeated {
        trace!(x = waypoint.location.x, y = waypoint.location.y, "waypoint_repeated");
        return;
    }
    trace!(
        x = waypoint.location.x,
        y = waypoint.location.y,
        side = ?context.side,
        edge_index = context.edge_index,
        "waypoint"
    );
    sink.add_path_point(waypoint, context);
}

/// Next corridor index to examine after the funnel collapsed onto the vertex
/// accepted at `accepted_at`.
#[inline]
fn restart_after(accepted_at: usize, current: usize, stats: &mut FunnelStats) -> usize {
    let next = accepted_at + 1;
    if next <= current {
        stats.rewinds += 1;
    }
    next
}
