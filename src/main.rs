use anyhow::Result;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize};
use std::time::Duration;
use tokio::sync::{Mutex, broadcast, watch};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;
use waveshape::*;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

fn feed_source(config: &config::FeedConfig) -> Result<feed::FeedSource> {
    match &config.url {
        Some(url) => {
            let client =
                feed::StatusFeedClient::new(url.clone(), Duration::from_millis(config.timeout_ms))?;
            tracing::info!(feed = %url, "Polling status feed");
            Ok(feed::FeedSource::Http(client))
        }
        None => {
            tracing::info!("No feed.url configured; counters stay at zero");
            Ok(feed::FeedSource::Static(feed::StaticStatus::default()))
        }
    }
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        let mut sigterm =
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(s) => s,
                Err(_) => {
                    let _ = tokio::signal::ctrl_c().await;
                    return;
                }
            };
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = sigterm.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .init();

    let app_config = config::AppConfig::load()?;
    let (frames_tx, _) =
        broadcast::channel::<models::DashboardFrame>(app_config.publishing.broadcast_capacity);
    let (latest_tx, latest_rx) = watch::channel(None);

    let theme = Arc::new(Mutex::new(page::ThemeStore::open(&app_config.theme.path)));
    let ws_clients = Arc::new(AtomicUsize::new(0));
    let ticks_total = Arc::new(AtomicU64::new(0));

    let view = render::BroadcastView::new(
        render::SparklineSize {
            width: app_config.render.sparkline_width,
            height: app_config.render.sparkline_height,
        },
        frames_tx.clone(),
        latest_tx,
    );
    let dashboard = dashboard::Dashboard::new(
        sampler::Sampler::new(feed_source(&app_config.feed)?),
        history::HistoryBuffer::new(
            app_config.monitoring.history_length,
            app_config.monitoring.history_fill,
        ),
        view,
    );

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
    let worker_handle = worker::spawn(
        worker::WorkerDeps {
            dashboard,
            ws_clients: ws_clients.clone(),
            ticks_total,
            shutdown_rx,
        },
        worker::WorkerConfig {
            poll_interval_ms: app_config.monitoring.poll_interval_ms,
            stats_log_interval_secs: app_config.monitoring.stats_log_interval_secs,
        },
    );

    let app = routes::app(frames_tx, latest_rx, theme, ws_clients);
    let addr = format!("{}:{}", app_config.server.host, app_config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on http://{}", addr);

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = shutdown_signal() => {
            tracing::info!("Received shutdown signal");
            let _ = shutdown_tx.send(());
            let _ = worker_handle.await;
        }
    }

    Ok(())
}
