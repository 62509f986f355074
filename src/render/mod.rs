// Renderer: pushes one snapshot and the history into a view

mod format;
mod sparkline;
mod view;

pub use format::{
    CMD_ERROR_PREFIX, CMD_OK_PREFIX, CMD_TOTAL_PREFIX, format_percent, format_uptime, prefixed,
};
pub use sparkline::{BOTTOM_MARGIN, STROKE_COLOR, STROKE_WIDTH, VERTICAL_SCALE, sparkline_points};
pub use view::{
    BroadcastView, CHART_Y_MAX, CHART_Y_MIN, CPU_SERIES_COLOR, Counter, DashboardView, FrameView,
    Gauge, RAM_SERIES_COLOR, Spark, SparklineSize,
};

use crate::history::HistorySnapshot;
use crate::models::Snapshot;

/// Updates gauges and counters, swaps the chart series and redraws the three
/// mini charts, then commits the frame.
pub fn render<V: DashboardView + ?Sized>(
    view: &mut V,
    snapshot: &Snapshot,
    history: &HistorySnapshot,
) {
    view.set_gauge(Gauge::Cpu, snapshot.cpu);
    view.set_gauge(Gauge::Ram, snapshot.ram);
    view.set_gauge(Gauge::Disk, snapshot.disk);
    view.set_counter(Counter::Uptime, &format_uptime(snapshot.uptime));

    view.set_counter(Counter::Users, &snapshot.users.to_string());
    view.set_counter(Counter::Guilds, &snapshot.guilds.to_string());
    view.set_counter(
        Counter::CommandsTotal,
        &prefixed(CMD_TOTAL_PREFIX, snapshot.commands_total),
    );
    view.set_counter(
        Counter::CommandsOk,
        &prefixed(CMD_OK_PREFIX, snapshot.commands_ok),
    );
    view.set_counter(
        Counter::CommandsError,
        &prefixed(CMD_ERROR_PREFIX, snapshot.commands_error),
    );

    view.push_series(&history.cpu, &history.ram);

    view.draw_sparkline(Spark::Cpu, &history.cpu);
    view.draw_sparkline(Spark::Ram, &history.ram);
    view.draw_sparkline(Spark::Disk, &history.disk_trace());

    view.commit(snapshot.timestamp);
}
