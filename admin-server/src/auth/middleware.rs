//! Authentication middleware
//!
//! Verifies the bearer token on every protected route and attaches the
//! caller as a [`CurrentUser`] extension.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use super::CurrentUser;
use crate::core::ServerState;
use crate::utils::AppError;

pub async fn require_auth(
    State(state): State<ServerState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or(AppError::Unauthorized)?;

    let claims = state.jwt.verify(token)?;
    request.extensions_mut().insert(CurrentUser {
        username: claims.sub,
    });

    Ok(next.run(request).await)
}
