use axum::{response::IntoResponse, Json};
use serde_json::json;

/// Liveness probe. Never calls the provider.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "blog-relay-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
