//! Health API Handlers

use axum::{Json, extract::State};
use serde::Serialize;

use crate::core::ServerState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthInfo {
    pub status: &'static str,
    pub name: &'static str,
    pub version: &'static str,
    pub environment: String,
    pub uptime_secs: u64,
}

/// GET /api/health - liveness check
pub async fn health(State(state): State<ServerState>) -> Json<HealthInfo> {
    Json(HealthInfo {
        status: "ok",
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.clone(),
        uptime_secs: state.uptime_secs(),
    })
}
