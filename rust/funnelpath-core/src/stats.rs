use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Counters gathered by one run of the funnel loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunnelStats {
    /// Loop entries, including those that end in a collapse.
    pub iterations: usize,
    /// Candidate vertices accepted as a new left or right bound.
    pub accepts: usize,
    /// Collapses that produced a waypoint (before deduplication).
    pub emits: usize,
    /// Times the loop jumped back to an earlier corridor index.
    pub rewinds: usize,
}

/// Logs the elapsed time of a scope at `debug` level when dropped.
pub struct ScopeTimer {
    scope: &'static str,
    started_at: Instant,
}

impl ScopeTimer {
    pub fn new(scope: &'static str) -> Self {
        Self { scope, started_at: Instant::now() }
    }

    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }
}

impl Drop for ScopeTimer {
    fn drop(&mut self) {
        let duration_us = u64::try_from(self.elapsed().as_micros()).unwrap_or(u64::MAX);
        debug!(scope = self.scope, duration_us, "scope_done");
    }
}
