use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Opaque id of a navmesh cell (polygon/triangle) owned by the upstream search.
pub type CellId = u64;

/// One path vertex, optionally tagged with the cell it lies in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NavPathPoint {
    pub location: Point,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell: Option<CellId>,
}

impl NavPathPoint {
    #[inline]
    pub const fn new(location: Point, cell: Option<CellId>) -> Self {
        Self { location, cell }
    }
}

impl From<Point> for NavPathPoint {
    fn from(location: Point) -> Self {
        Self { location, cell: None }
    }
}

/// Shared boundary between two consecutive corridor cells, oriented so that
/// `left` is on the traveller's left when moving from start to end.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PortalEdge {
    pub left: Point,
    pub right: Point,
    /// Cell entered through this portal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_cell: Option<CellId>,
}

impl PortalEdge {
    #[inline]
    pub const fn new(left: Point, right: Point) -> Self {
        Self { left, right, to_cell: None }
    }

    #[inline]
    pub fn with_cell(mut self, cell: CellId) -> Self {
        self.to_cell = Some(cell);
        self
    }
}

/// A path produced by an upstream search. Paths that carry a portal corridor
/// expose it through [`NavPath::as_corridor`].
pub trait NavPath {
    fn path_points(&self) -> &[NavPathPoint];

    fn as_corridor(&self) -> Option<&CorridorPath> {
        None
    }
}

/// Raw vertex path without corridor information.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PolylinePath {
    pub points: Vec<NavPathPoint>,
}

impl PolylinePath {
    pub fn new(points: Vec<NavPathPoint>) -> Self {
        Self { points }
    }
}

impl NavPath for PolylinePath {
    fn path_points(&self) -> &[NavPathPoint] {
        &self.points
    }
}

/// Path through a navmesh together with the portal corridor it crossed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CorridorPath {
    pub points: Vec<NavPathPoint>,
    #[serde(default)]
    pub corridor_edges: Vec<PortalEdge>,
    pub start: Point,
    pub end: Point,
}

impl CorridorPath {
    /// Builds a corridor path whose raw points are the portal midpoints
    /// bracketed by `start` and `end`.
    pub fn from_portals(start: Point, end: Point, corridor_edges: Vec<PortalEdge>) -> Self {
        let mut points = Vec::with_capacity(corridor_edges.len() + 2);
        points.push(NavPathPoint::from(start));
        for e in &corridor_edges {
            let mid = Point::new(
                (e.left.x + e.right.x) * 0.5,
                (e.left.y + e.right.y) * 0.5,
                (e.left.z + e.right.z) * 0.5,
            );
            points.push(NavPathPoint::new(mid, e.to_cell));
        }
        points.push(NavPathPoint::from(end));
        Self { points, corridor_edges, start, end }
    }

    #[inline]
    pub fn corridor_edges(&self) -> &[PortalEdge] {
        &self.corridor_edges
    }

    #[inline]
    pub fn start_location(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn end_location(&self) -> Point {
        self.end
    }
}

impl NavPath for CorridorPath {
    fn path_points(&self) -> &[NavPathPoint] {
        &self.points
    }

    fn as_corridor(&self) -> Option<&CorridorPath> {
        Some(self)
    }
}

/// Horizontal length of the polyline through `points`.
pub fn path_length_2d(points: &[NavPathPoint]) -> f64 {
    points
        .iter()
        .tuple_windows()
        .map(|(a, b)| a.location.distance_2d(&b.location))
        .sum()
}
