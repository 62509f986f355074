// Domain models: per-tick snapshot, feed counters, rendered frame, theme

mod frame;
mod snapshot;
mod status;
mod theme;

pub use frame::{ChartFrame, DashboardFrame, Polyline, SeriesStyle, SparklineFrame};
pub use snapshot::{Snapshot, SyntheticMetrics};
pub use status::StatusCounters;
pub use theme::Theme;
