pub mod config;
pub mod emitter;
pub mod errors;
pub mod funnel;
pub mod geometry;
pub mod options;
pub mod path;
pub mod smoother;
pub mod stats;

pub use emitter::{EmitContext, Side, WaypointSink};
pub use errors::{ConfigError, SmoothError};
pub use funnel::string_pull;
pub use geometry::{signed_2d_area, Point};
pub use options::SmoothOptions;
pub use path::{CellId, CorridorPath, NavPath, NavPathPoint, PolylinePath, PortalEdge};
pub use smoother::{FunnelPathSmoother, SmoothOutcome};
pub use stats::{FunnelStats, ScopeTimer};
