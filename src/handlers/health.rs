use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use super::AppState;

/// Liveness probe
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "version": env!("CARGO_PKG_VERSION"),
        })),
    )
}

/// Readiness probe: reports where the current catalog came from
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.catalog.snapshot();
    (
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "catalog": {
                "source": snapshot.source.as_str(),
                "materials": snapshot.materials.len(),
                "loaded_at": snapshot.loaded_at.to_rfc3339(),
            },
        })),
    )
}
