//! Blog endpoints

pub mod handler;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/blogs", get(handler::list))
        .route("/api/blogs", post(handler::create))
        .route("/api/blogs/categories", get(handler::list_categories))
        .route("/api/blogs/{id}", get(handler::get_by_id))
        .route("/api/blogs/{id}", put(handler::update))
        .route("/api/blogs/{id}", delete(handler::remove))
}
