//! Quote request endpoints
//!
//! Quotes arrive from the storefront; the dashboard reads them and walks
//! them through the status pipeline. The detail view expands the
//! shortlist entries into full product records.

pub mod handler;

use axum::{
    routing::{get, put},
    Router,
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/quotes", get(handler::list))
        .route("/api/quotes/{id}", get(handler::get_by_id))
        .route("/api/quotes/{id}/status", put(handler::update_status))
}
