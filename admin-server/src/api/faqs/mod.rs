//! FAQ endpoints

pub mod handler;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/faqs", get(handler::list))
        .route("/api/faqs", post(handler::create))
        .route("/api/faqs/{id}", get(handler::get_by_id))
        .route("/api/faqs/{id}", put(handler::update))
        .route("/api/faqs/{id}", delete(handler::remove))
}
