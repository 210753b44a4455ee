//! Testimonial endpoints

pub mod handler;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/testimonials", get(handler::list))
        .route("/api/testimonials", post(handler::create))
        .route("/api/testimonials/{id}", get(handler::get_by_id))
        .route("/api/testimonials/{id}", put(handler::update))
        .route("/api/testimonials/{id}", delete(handler::remove))
}
