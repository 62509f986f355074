// View seam between the renderer and whatever displays the dashboard

use tokio::sync::{broadcast, watch};
use tokio::time::{Duration, Instant};

use super::format::format_percent;
use super::sparkline::{STROKE_COLOR, STROKE_WIDTH, sparkline_points};
use crate::models::{ChartFrame, DashboardFrame, SeriesStyle, SparklineFrame};

/// Fixed y-axis of the main chart.
pub const CHART_Y_MIN: f64 = 0.0;
pub const CHART_Y_MAX: f64 = 100.0;
pub const CPU_SERIES_COLOR: &str = "#ff6868";
pub const RAM_SERIES_COLOR: &str = "#4da3ff";

/// Rate limit for the "no subscribers" debug line.
const NO_RECEIVERS_LOG_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gauge {
    Cpu,
    Ram,
    Disk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Counter {
    Users,
    Guilds,
    Uptime,
    CommandsTotal,
    CommandsOk,
    CommandsError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spark {
    Cpu,
    Ram,
    Disk,
}

impl Gauge {
    pub fn id(self) -> &'static str {
        match self {
            Gauge::Cpu => "cpuVal",
            Gauge::Ram => "ramVal",
            Gauge::Disk => "diskVal",
        }
    }
}

impl Counter {
    pub fn id(self) -> &'static str {
        match self {
            Counter::Users => "usersVal",
            Counter::Guilds => "guildsVal",
            Counter::Uptime => "uptimeText",
            Counter::CommandsTotal => "cmdTotal",
            Counter::CommandsOk => "cmdSuccess",
            Counter::CommandsError => "cmdErrors",
        }
    }
}

impl Spark {
    pub fn id(self) -> &'static str {
        match self {
            Spark::Cpu => "cpuMini",
            Spark::Ram => "ramMini",
            Spark::Disk => "diskMini",
        }
    }
}

/// Named setters the renderer drives once per tick, closed by `commit`.
pub trait DashboardView {
    fn set_gauge(&mut self, gauge: Gauge, value: f64);
    fn set_counter(&mut self, counter: Counter, text: &str);
    /// Replaces both chart series wholesale; redraw without animation.
    fn push_series(&mut self, cpu: &[f64], ram: &[f64]);
    /// Clears and redraws one mini canvas from `values`.
    fn draw_sparkline(&mut self, spark: Spark, values: &[f64]);
    fn commit(&mut self, timestamp: u64);
}

/// Canvas size used for mini charts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SparklineSize {
    pub width: f64,
    pub height: f64,
}

impl Default for SparklineSize {
    fn default() -> Self {
        Self {
            width: 120.0,
            height: 40.0,
        }
    }
}

/// Accumulates a `DashboardFrame`; the frame keeps the last committed state.
#[derive(Debug, Clone, Default)]
pub struct FrameView {
    size: SparklineSize,
    frame: DashboardFrame,
    commits: u64,
}

impl FrameView {
    pub fn new(size: SparklineSize) -> Self {
        Self {
            size,
            frame: DashboardFrame::default(),
            commits: 0,
        }
    }

    pub fn frame(&self) -> &DashboardFrame {
        &self.frame
    }

    pub fn commits(&self) -> u64 {
        self.commits
    }

    fn set_text(&mut self, id: &str, text: String) {
        self.frame.text.insert(id.to_string(), text);
    }
}

impl DashboardView for FrameView {
    fn set_gauge(&mut self, gauge: Gauge, value: f64) {
        self.set_text(gauge.id(), format_percent(value));
    }

    fn set_counter(&mut self, counter: Counter, text: &str) {
        self.set_text(counter.id(), text.to_string());
    }

    fn push_series(&mut self, cpu: &[f64], ram: &[f64]) {
        self.frame.chart = ChartFrame {
            cpu: cpu.to_vec(),
            ram: ram.to_vec(),
            cpu_style: SeriesStyle {
                label: "CPU".to_string(),
                color: CPU_SERIES_COLOR.to_string(),
            },
            ram_style: SeriesStyle {
                label: "RAM".to_string(),
                color: RAM_SERIES_COLOR.to_string(),
            },
            y_min: CHART_Y_MIN,
            y_max: CHART_Y_MAX,
            animate: false,
        };
    }

    fn draw_sparkline(&mut self, spark: Spark, values: &[f64]) {
        let SparklineSize { width, height } = self.size;
        self.frame.sparklines.insert(
            spark.id().to_string(),
            SparklineFrame {
                width,
                height,
                stroke_width: STROKE_WIDTH,
                stroke_color: STROKE_COLOR.to_string(),
                points: sparkline_points(values, width, height),
            },
        );
    }

    fn commit(&mut self, timestamp: u64) {
        self.frame.timestamp = timestamp;
        self.commits += 1;
    }
}

/// Publishes every committed frame to WebSocket subscribers and keeps the
/// latest one for HTTP readers.
pub struct BroadcastView {
    inner: FrameView,
    tx: broadcast::Sender<DashboardFrame>,
    latest: watch::Sender<Option<DashboardFrame>>,
    last_no_receivers_log: Option<Instant>,
}

impl BroadcastView {
    pub fn new(
        size: SparklineSize,
        tx: broadcast::Sender<DashboardFrame>,
        latest: watch::Sender<Option<DashboardFrame>>,
    ) -> Self {
        Self {
            inner: FrameView::new(size),
            tx,
            latest,
            last_no_receivers_log: None,
        }
    }
}

impl DashboardView for BroadcastView {
    fn set_gauge(&mut self, gauge: Gauge, value: f64) {
        self.inner.set_gauge(gauge, value);
    }

    fn set_counter(&mut self, counter: Counter, text: &str) {
        self.inner.set_counter(counter, text);
    }

    fn push_series(&mut self, cpu: &[f64], ram: &[f64]) {
        self.inner.push_series(cpu, ram);
    }

    fn draw_sparkline(&mut self, spark: Spark, values: &[f64]) {
        self.inner.draw_sparkline(spark, values);
    }

    fn commit(&mut self, timestamp: u64) {
        self.inner.commit(timestamp);
        let frame = self.inner.frame().clone();
        self.latest.send_replace(Some(frame.clone()));
        if self.tx.send(frame).is_err() {
            let should_log = self
                .last_no_receivers_log
                .is_none_or(|t| t.elapsed() >= NO_RECEIVERS_LOG_INTERVAL);
            if should_log {
                tracing::debug!(
                    operation = "broadcast_frame",
                    "No active WebSocket clients; broadcast channel has no receivers"
                );
                self.last_no_receivers_log = Some(Instant::now());
            }
        }
    }
}
