// HTTP + WebSocket routes

mod http;
mod ws;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use tokio::sync::{Mutex, broadcast, watch};
use tower_http::cors::{Any, CorsLayer};

use crate::models::DashboardFrame;
use crate::page::ThemeStore;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) frames_tx: broadcast::Sender<DashboardFrame>,
    pub(crate) latest: watch::Receiver<Option<DashboardFrame>>,
    pub(crate) theme: Arc<Mutex<ThemeStore>>,
    pub(crate) ws_clients: Arc<AtomicUsize>,
}

pub fn app(
    frames_tx: broadcast::Sender<DashboardFrame>,
    latest: watch::Receiver<Option<DashboardFrame>>,
    theme: Arc<Mutex<ThemeStore>>,
    ws_clients: Arc<AtomicUsize>,
) -> Router {
    let state = AppState {
        frames_tx,
        latest,
        theme,
        ws_clients,
    };
    Router::new()
        .route("/", get(|| async { "Waveshape status dashboard" })) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/dashboard", get(http::dashboard_handler)) // GET /api/dashboard
        .route("/api/theme", get(http::theme_handler)) // GET /api/theme
        .route("/api/theme/toggle", post(http::toggle_theme_handler)) // POST /api/theme/toggle
        .route("/ws/dashboard", get(ws::ws_dashboard)) // WS /ws/dashboard
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
