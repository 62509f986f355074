// Poll loop: drives the dashboard on a fixed timer until shutdown.
// Ticks run inside the loop body, so a slow feed delays the next tick instead
// of overlapping it.

use crate::dashboard::Dashboard;
use crate::feed::StatusSource;
use crate::render::DashboardView;
use rand::Rng;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use tokio::time::{Duration, Instant, interval};
use tracing::Instrument;

pub struct WorkerDeps<S, V, R> {
    pub dashboard: Dashboard<S, V, R>,
    pub ws_clients: Arc<AtomicUsize>,
    pub ticks_total: Arc<AtomicU64>,
    pub shutdown_rx: tokio::sync::oneshot::Receiver<()>,
}

/// Worker timing and logging config.
pub struct WorkerConfig {
    pub poll_interval_ms: u64,
    /// How often to log app stats (real seconds).
    pub stats_log_interval_secs: u64,
}

/// Spawns the poll loop. The first tick fires immediately; later ticks that
/// would land while one is still running are skipped. Returns the dashboard
/// once shutdown is received.
pub fn spawn<S, V, R>(
    deps: WorkerDeps<S, V, R>,
    config: WorkerConfig,
) -> tokio::task::JoinHandle<Dashboard<S, V, R>>
where
    S: StatusSource + 'static,
    V: DashboardView + Send + 'static,
    R: Rng + Send + 'static,
{
    let WorkerDeps {
        mut dashboard,
        ws_clients,
        ticks_total,
        mut shutdown_rx,
    } = deps;
    let WorkerConfig {
        poll_interval_ms,
        stats_log_interval_secs,
    } = config;

    let poll_interval = Duration::from_millis(poll_interval_ms);
    let stats_log_interval = Duration::from_secs(stats_log_interval_secs);

    let worker_span = tracing::span!(tracing::Level::DEBUG, "worker", poll_interval_ms);

    tokio::spawn(
        async move {
            let mut tick = interval(poll_interval);
            tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            let mut stats_log_tick = interval(stats_log_interval);
            stats_log_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            // interval fires at once; the first stats line would be all zeros
            stats_log_tick.tick().await;

            loop {
                tokio::select! {
                    _ = tick.tick() => {
                        let started = Instant::now();
                        let snapshot = dashboard.tick().await;
                        ticks_total.fetch_add(1, Ordering::Relaxed);
                        let elapsed = started.elapsed();
                        if elapsed > poll_interval {
                            tracing::debug!(
                                operation = "tick",
                                elapsed_ms = elapsed.as_millis() as u64,
                                "tick overran poll interval; next tick skipped"
                            );
                        }
                        tracing::trace!(
                            cpu = snapshot.cpu,
                            ram = snapshot.ram,
                            disk = snapshot.disk,
                            "tick rendered"
                        );
                    }
                    _ = &mut shutdown_rx => {
                        tracing::debug!("Worker shutting down");
                        break;
                    }
                    _ = stats_log_tick.tick() => {
                        tracing::info!(
                            ws_dashboard_clients = ws_clients.load(Ordering::Relaxed),
                            ticks_total = ticks_total.load(Ordering::Relaxed),
                            feed_failures_total = dashboard.sampler().source().failures(),
                            "app stats"
                        );
                    }
                }
            }
            dashboard
        }
        .instrument(worker_span),
    )
}
