//! Portfolio endpoints

pub mod handler;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/portfolio", get(handler::list))
        .route("/api/portfolio", post(handler::create))
        .route("/api/portfolio/{id}", get(handler::get_by_id))
        .route("/api/portfolio/{id}", put(handler::update))
        .route("/api/portfolio/{id}", delete(handler::remove))
}
