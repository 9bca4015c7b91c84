use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

/// GET /health - Liveness probe
///
/// Returns 200 OK if the process is alive. The app holds no local state
/// worth a separate readiness check; upstream availability surfaces per
/// request instead.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}
