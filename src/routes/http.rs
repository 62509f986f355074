// GET/POST handlers: version, latest frame, theme

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::AppState;
use crate::page::toggle_shared;
use crate::version::{NAME, VERSION};

/// GET /version — returns service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// GET /api/dashboard — last rendered frame; 204 until the first tick lands.
pub(super) async fn dashboard_handler(State(state): State<AppState>) -> Response {
    let latest = state.latest.borrow().clone();
    match latest {
        Some(frame) => axum::Json(frame).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

/// GET /api/theme
pub(super) async fn theme_handler(State(state): State<AppState>) -> impl IntoResponse {
    let store = state.theme.lock().await;
    axum::Json(serde_json::json!({
        "theme": store.theme(),
        "pulse": store.pulse_active(),
    }))
}

/// POST /api/theme/toggle — flips and persists the theme.
pub(super) async fn toggle_theme_handler(State(state): State<AppState>) -> Response {
    match toggle_shared(state.theme.clone()).await {
        Ok(toggle) => axum::Json(toggle).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, operation = "toggle_theme", "Theme toggle failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                axum::Json(serde_json::json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}
