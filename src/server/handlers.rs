//! HTTP request handlers

use std::sync::Arc;
use axum::{extract::State, Json};

use super::state::AppState;

pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ml service running",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn service_status(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "started_at": state.started_at().to_rfc3339(),
        "uptime_secs": state.uptime_secs(),
    }))
}
