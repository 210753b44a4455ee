//! Authentication endpoints

pub mod handler;

use axum::{
    routing::{get, post},
    Router,
};

use crate::core::ServerState;

/// Public routes (no token required)
pub fn router() -> Router<ServerState> {
    Router::new().route("/api/auth/login", post(handler::login))
}

/// Routes that require a valid token
pub fn protected_router() -> Router<ServerState> {
    Router::new().route("/api/auth/me", get(handler::me))
}
