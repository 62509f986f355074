use serde::Deserialize;

use crate::history::{HISTORY_FILL, HISTORY_LENGTH};

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub feed: FeedConfig,
    pub publishing: PublishingConfig,
    #[serde(default)]
    pub monitoring: MonitoringConfig,
    #[serde(default)]
    pub render: RenderConfig,
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    /// Status JSON URL. Without it counters stay at zero.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default = "default_feed_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout_ms: default_feed_timeout_ms(),
        }
    }
}

fn default_feed_timeout_ms() -> u64 {
    5000
}

#[derive(Debug, Clone, Deserialize)]
pub struct PublishingConfig {
    /// Max number of frames kept in the broadcast channel for /ws/dashboard (slow clients may lag).
    pub broadcast_capacity: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonitoringConfig {
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    #[serde(default = "default_history_length")]
    pub history_length: usize,
    #[serde(default = "default_history_fill")]
    pub history_fill: f64,
    /// How often to log app stats (ws clients, ticks, feed failures) at INFO level.
    #[serde(default = "default_stats_log_interval_secs")]
    pub stats_log_interval_secs: u64,
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            history_length: default_history_length(),
            history_fill: default_history_fill(),
            stats_log_interval_secs: default_stats_log_interval_secs(),
        }
    }
}

fn default_poll_interval_ms() -> u64 {
    1800
}

fn default_history_length() -> usize {
    HISTORY_LENGTH
}

fn default_history_fill() -> f64 {
    HISTORY_FILL
}

fn default_stats_log_interval_secs() -> u64 {
    60
}

/// Mini-chart canvas size in pixels.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_sparkline_width")]
    pub sparkline_width: f64,
    #[serde(default = "default_sparkline_height")]
    pub sparkline_height: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            sparkline_width: default_sparkline_width(),
            sparkline_height: default_sparkline_height(),
        }
    }
}

fn default_sparkline_width() -> f64 {
    120.0
}

fn default_sparkline_height() -> f64 {
    40.0
}

#[derive(Debug, Clone, Deserialize)]
pub struct ThemeConfig {
    pub path: String,
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        if let Some(url) = &self.feed.url {
            anyhow::ensure!(
                url.starts_with("http://") || url.starts_with("https://"),
                "feed.url must be an http(s) URL, got {:?}",
                url
            );
        }
        anyhow::ensure!(
            self.feed.timeout_ms > 0,
            "feed.timeout_ms must be > 0, got {}",
            self.feed.timeout_ms
        );
        anyhow::ensure!(
            self.publishing.broadcast_capacity > 0,
            "publishing.broadcast_capacity must be > 0, got {}",
            self.publishing.broadcast_capacity
        );
        anyhow::ensure!(
            self.monitoring.poll_interval_ms > 0,
            "monitoring.poll_interval_ms must be > 0, got {}",
            self.monitoring.poll_interval_ms
        );
        anyhow::ensure!(
            self.monitoring.history_length > 0,
            "monitoring.history_length must be > 0, got {}",
            self.monitoring.history_length
        );
        anyhow::ensure!(
            (0.0..=100.0).contains(&self.monitoring.history_fill),
            "monitoring.history_fill must be within 0..=100, got {}",
            self.monitoring.history_fill
        );
        anyhow::ensure!(
            self.monitoring.stats_log_interval_secs > 0,
            "monitoring.stats_log_interval_secs must be > 0, got {}",
            self.monitoring.stats_log_interval_secs
        );
        anyhow::ensure!(
            self.render.sparkline_width > 0.0 && self.render.sparkline_height > 0.0,
            "render.sparkline_width and render.sparkline_height must be > 0"
        );
        anyhow::ensure!(!self.theme.path.is_empty(), "theme.path must be non-empty");
        Ok(())
    }
}
