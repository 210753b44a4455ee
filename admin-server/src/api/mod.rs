//! API routing
//!
//! One submodule per resource, each contributing its own `Router`.
//! Everything except the health check and the login endpoint sits behind
//! the bearer-token middleware.

pub mod auth;
pub mod blogs;
pub mod categories;
pub mod faqs;
pub mod health;
pub mod portfolio;
pub mod products;
pub mod quotes;
pub mod testimonials;
pub mod upload;

use axum::{middleware, Router};

use crate::auth::require_auth;
use crate::core::ServerState;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};

pub fn router(state: ServerState) -> Router {
    let protected = Router::new()
        .merge(auth::protected_router())
        .merge(products::router())
        .merge(categories::router())
        .merge(quotes::router())
        .merge(testimonials::router())
        .merge(blogs::router())
        .merge(faqs::router())
        .merge(portfolio::router())
        .merge(upload::router())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_auth,
        ));

    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(protected)
        .with_state(state)
}
