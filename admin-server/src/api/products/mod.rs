//! Product endpoints
//!
//! The product form's invariants are enforced here at the write boundary:
//! the category chain must be consistent (`catalog::hierarchy`) and the
//! persisted image roles are resolved through `catalog::gallery`, so a row
//! can never be written with display and hover pointing at the same image.

pub mod handler;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/products", get(handler::list))
        .route("/api/products", post(handler::create))
        .route("/api/products/{id}", get(handler::get_by_id))
        .route("/api/products/{id}", put(handler::update))
        .route("/api/products/{id}", delete(handler::remove))
}
