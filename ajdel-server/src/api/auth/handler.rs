//! Auth API Handlers

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::auth::AdminSession;
use crate::core::ServerState;
use crate::utils::{AppError, AppResponse, AppResult, ok};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub passcode: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// POST /api/auth/login - trade the admin passcode for a session token
pub async fn login(
    State(state): State<ServerState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<AppResponse<LoginResponse>>> {
    if payload.passcode != state.config.admin_passcode {
        tracing::warn!("Rejected admin login attempt");
        return Err(AppError::invalid("Invalid passcode"));
    }

    let token = state.sessions.issue();
    tracing::info!("Admin session opened");
    Ok(ok(LoginResponse { token }))
}

/// POST /api/auth/logout - revoke the current session token
pub async fn logout(
    admin: AdminSession,
    State(state): State<ServerState>,
) -> AppResult<Json<AppResponse<()>>> {
    state.sessions.revoke(&admin.token);
    tracing::info!("Admin session closed");
    Ok(ok(()))
}
