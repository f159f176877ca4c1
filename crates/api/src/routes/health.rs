//! Health check endpoint.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /health
///
/// Liveness probe: reports the service version and whether the theme
/// registry finished seeding its system defaults.
pub async fn health_check(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let stats = state.read_registry()?.get_stats();

    Ok(Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "registry_initialized": stats.initialized,
        "themes_registered": stats.total_themes,
    })))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
