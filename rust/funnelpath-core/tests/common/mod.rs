#![allow(dead_code)]

use funnelpath_core::{NavPathPoint, Point, PortalEdge};
use tracing_subscriber::{fmt, EnvFilter};

/// Start point, end point and portals.
pub type Corridor = (Point, Point, Vec<PortalEdge>);

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt().with_env_filter(filter).with_test_writer().try_init();
}

pub fn p(x: f64, y: f64) -> Point {
    Point::xy(x, y)
}

pub fn portal(l: (f64, f64), r: (f64, f64)) -> PortalEdge {
    PortalEdge::new(p(l.0, l.1), p(r.0, r.1))
}

pub fn locations(points: &[NavPathPoint]) -> Vec<Point> {
    points.iter().map(|w| w.location).collect()
}

/// Vertical portals at x = 1..=n whose centreline follows `amp * sin(freq * x)`.
pub fn wavy_corridor(n: usize, amp: f64, freq: f64, half_width: f64) -> Corridor {
    let centre = |x: f64| amp * (freq * x).sin();
    let portals = (1..=n)
        .map(|i| {
            let x = i as f64;
            let c = centre(x);
            portal((x, c + half_width), (x, c - half_width))
        })
        .collect();
    let end_x = (n + 1) as f64;
    (p(0.0, centre(0.0)), p(end_x, centre(end_x)), portals)
}

/// Height of an x-monotone polyline at `x`.
pub fn y_at(path: &[Point], x: f64) -> Option<f64> {
    path.windows(2).find_map(|w| {
        let (a, b) = (w[0], w[1]);
        if x < a.x.min(b.x) || x > a.x.max(b.x) {
            return None;
        }
        if (b.x - a.x).abs() < f64::EPSILON {
            return Some(a.y);
        }
        let t = (x - a.x) / (b.x - a.x);
        Some(a.y + t * (b.y - a.y))
    })
}

/// True when the polyline crosses every vertical portal between its vertices.
pub fn stays_in_vertical_corridor(path: &[Point], portals: &[PortalEdge], eps: f64) -> bool {
    portals.iter().all(|e| match y_at(path, e.left.x) {
        Some(y) => y <= e.left.y + eps && y >= e.right.y - eps,
        None => false,
    })
}

/// Left-turning annulus sector: `n` radial portals across radii `inner..outer`,
/// sweeping `sweep` radians counter-clockwise from the +X axis. The inner wall
/// is on the traveller's left.
pub fn arc_corridor(n: usize, inner: f64, outer: f64, sweep: f64) -> Corridor {
    let at = |r: f64, theta: f64| p(r * theta.cos(), r * theta.sin());
    let step = sweep / (n + 1) as f64;
    let portals = (1..=n)
        .map(|i| {
            let theta = step * i as f64;
            PortalEdge::new(at(inner, theta), at(outer, theta))
        })
        .collect();
    let mid = 0.5 * (inner + outer);
    (at(mid, 0.0), at(mid, sweep), portals)
}
