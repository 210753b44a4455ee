//! Image upload endpoints
//!
//! Accepts PNG, JPEG and WebP, re-encodes to JPG and pushes the result to
//! the hosted storage bucket. Deletion takes the public URL and is
//! idempotent: an already-gone object deletes successfully.

pub mod handler;

use axum::{
    routing::{delete, post},
    Router,
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/upload", post(handler::upload))
        .route("/api/upload", delete(handler::remove))
}
