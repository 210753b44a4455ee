use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
}

/// POST /api/auth/login
///
/// Single-admin credential check against the configured username and
/// password. Failures get a fixed delay so timing does not leak which
/// field was wrong.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let config = &state.config;

    let ok = req.username == config.admin_username && req.password == config.admin_password;
    if !ok {
        warn!(username = %req.username, "Login failed");
        tokio::time::sleep(std::time::Duration::from_millis(500)).await;
        return Err(AppError::Unauthorized);
    }

    let token = state.jwt.issue(&req.username)?;
    info!(username = %req.username, "Login successful");

    Ok(Json(LoginResponse {
        token,
        username: req.username,
    }))
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub username: String,
}

/// GET /api/auth/me
pub async fn me(Extension(user): Extension<CurrentUser>) -> AppResult<Json<MeResponse>> {
    Ok(Json(MeResponse {
        username: user.username,
    }))
}
