use tracing::debug;

use crate::errors::SmoothError;
use crate::funnel::string_pull;
use crate::options::SmoothOptions;
use crate::path::{path_length_2d, NavPath, NavPathPoint};
use crate::stats::{FunnelStats, ScopeTimer};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SmoothOutcome {
    /// Two points or fewer; copied verbatim without consulting the corridor.
    Trivial,
    Smoothed(FunnelStats),
}

/// Turns navmesh corridor paths into string-pulled waypoint lists.
///
/// Both output buffers are rebuilt from scratch on every call. A smoother is
/// borrowed mutably for the whole run, so one buffer never serves two runs at
/// once; use one smoother per thread for parallel work.
#[derive(Clone, Debug, Default)]
pub struct FunnelPathSmoother {
    options: SmoothOptions,
    funnel_path: Vec<NavPathPoint>,
    original_path: Vec<NavPathPoint>,
    last_stats: Option<FunnelStats>,
}

impl FunnelPathSmoother {
    pub fn new(options: SmoothOptions) -> Self {
        Self { options, ..Self::default() }
    }

    /// Smoothed waypoints of the last successful call.
    pub fn funnel_path(&self) -> &[NavPathPoint] {
        &self.funnel_path
    }

    /// Raw corridor points of the last smoothed call, kept for comparison.
    pub fn original_path(&self) -> &[NavPathPoint] {
        &self.original_path
    }

    pub fn last_stats(&self) -> Option<FunnelStats> {
        self.last_stats
    }

    /// Horizontal distance saved by the last smoothed call.
    pub fn length_saved(&self) -> Option<f64> {
        self.last_stats
            .map(|_| path_length_2d(&self.original_path) - path_length_2d(&self.funnel_path))
    }

    /// Returns `false` on any failure; callers should fall back to the raw path.
    pub fn smooth_path(&mut self, path: Option<&dyn NavPath>) -> bool {
        match self.try_smooth_path(path) {
            Ok(_) => true,
            Err(e) => {
                debug!(error = %e, "smooth_path_failed");
                false
            }
        }
    }

    pub fn try_smooth_path(
        &mut self,
        path: Option<&dyn NavPath>,
    ) -> Result<SmoothOutcome, SmoothError> {
        let _timer = ScopeTimer::new("smooth_path");

        self.funnel_path.clear();
        self.original_path.clear();
        self.last_stats = None;

        let path = path.ok_or(SmoothError::InvalidInput)?;
        let points = path.path_points();
        if points.len() <= 2 {
            self.funnel_path.extend_from_slice(points);
            return Ok(SmoothOutcome::Trivial);
        }

        let corridor = path.as_corridor().ok_or(SmoothError::WrongPathType)?;
        let edges = corridor.corridor_edges();
        if edges.is_empty() {
            return Err(SmoothError::EmptyCorridor);
        }

        self.original_path.extend_from_slice(points);

        let start_cell = points.first().and_then(|p| p.cell);
        let end_cell = points.last().and_then(|p| p.cell);
        let start = NavPathPoint::new(corridor.start_location(), start_cell);
        let end = NavPathPoint::new(corridor.end_location(), end_cell);
        let stats = string_pull(edges, start, end, &self.options, &mut self.funnel_path);
        self.last_stats = Some(stats);

        debug!(
            portals = edges.len(),
            original_points = self.original_path.len(),
            waypoints = self.funnel_path.len(),
            "smooth_path_done"
        );
        Ok(SmoothOutcome::Smoothed(stats))
    }
}
