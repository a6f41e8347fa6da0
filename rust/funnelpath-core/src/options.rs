use serde::{Deserialize, Serialize};

/// Default per-axis tolerance for positional equality.
pub const DEFAULT_EQUAL_TOLERANCE: f64 = 1e-4;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothOptions {
    /// Per-axis tolerance for "apex coincides with bound" and "bound is the end point".
    pub equal_tolerance: f64,
    /// Drop an emitted waypoint that repeats the previous one.
    pub dedupe_waypoints: bool,
}

impl Default for SmoothOptions {
    fn default() -> Self {
        Self { equal_tolerance: DEFAULT_EQUAL_TOLERANCE, dedupe_waypoints: true }
    }
}
