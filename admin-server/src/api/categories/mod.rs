//! Category endpoints
//!
//! Besides plain CRUD, `/api/categories/options` serves the product form:
//! given the currently selected main and primary it returns the legal
//! option list for each of the three levels plus the display type label.

pub mod handler;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/categories", get(handler::list))
        .route("/api/categories", post(handler::create))
        .route("/api/categories/options", get(handler::options))
        .route("/api/categories/{id}", get(handler::get_by_id))
        .route("/api/categories/{id}", put(handler::update))
        .route("/api/categories/{id}", delete(handler::remove))
}
