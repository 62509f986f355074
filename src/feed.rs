// Status feed client: polls the bot status JSON for counters

use crate::models::StatusCounters;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::instrument;

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("status feed request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("status feed returned HTTP {0}")]
    Status(u16),
    #[error("status feed body is not JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Source of feed counters. Never fails from the caller's view: any problem
/// is logged by the implementation and reported as all-zero counters.
pub trait StatusSource: Send + Sync {
    fn fetch(&self) -> impl Future<Output = StatusCounters> + Send;

    /// Fetches that fell back to zero counters so far.
    fn failures(&self) -> u64 {
        0
    }
}

/// Fixed counters; used when no feed URL is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticStatus(pub StatusCounters);

impl StatusSource for StaticStatus {
    async fn fetch(&self) -> StatusCounters {
        self.0
    }
}

/// HTTP client for the status JSON.
pub struct StatusFeedClient {
    url: String,
    http: reqwest::Client,
    failures: AtomicU64,
}

impl StatusFeedClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, FeedError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            url: url.into(),
            http,
            failures: AtomicU64::new(0),
        })
    }

    /// Fetches and decodes the feed, surfacing every failure.
    pub async fn try_fetch(&self) -> Result<StatusCounters, FeedError> {
        let url = cache_busted_url(&self.url, now_ms());
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status.as_u16()));
        }
        let body = response.bytes().await?;
        let json: serde_json::Value = serde_json::from_slice(&body)?;
        Ok(StatusCounters::from_json(&json))
    }
}

impl StatusSource for StatusFeedClient {
    #[instrument(skip(self), fields(feed = %self.url, operation = "fetch_status"))]
    async fn fetch(&self) -> StatusCounters {
        match self.try_fetch().await {
            Ok(counters) => counters,
            Err(e) => {
                self.failures.fetch_add(1, Ordering::Relaxed);
                tracing::warn!(error = %e, "Failed to load status feed");
                StatusCounters::default()
            }
        }
    }

    fn failures(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }
}

/// Feed chosen from config: HTTP when a URL is set, zero counters otherwise.
pub enum FeedSource {
    Http(StatusFeedClient),
    Static(StaticStatus),
}

impl StatusSource for FeedSource {
    async fn fetch(&self) -> StatusCounters {
        match self {
            FeedSource::Http(client) => client.fetch().await,
            FeedSource::Static(fixed) => fixed.fetch().await,
        }
    }

    fn failures(&self) -> u64 {
        match self {
            FeedSource::Http(client) => client.failures(),
            FeedSource::Static(_) => 0,
        }
    }
}

/// Appends a `_=<timestamp>` query parameter so caches never answer the poll.
pub fn cache_busted_url(url: &str, timestamp_ms: u64) -> String {
    let sep = if url.contains('?') { '&' } else { '?' };
    format!("{url}{sep}_={timestamp_ms}")
}

pub(crate) fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, operation = "get_timestamp", "system time error");
            0
        })
}
