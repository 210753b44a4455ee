//! Tisorah Admin Server
//!
//! Backend for the corporate-gifting admin dashboard. Persistence is
//! delegated to a hosted record store and object storage service; this
//! server owns authentication, validation and the catalog view logic.
//!
//! # Module structure
//!
//! ```text
//! admin-server/src/
//! ├── core/          # Configuration, state, server bootstrap
//! ├── auth/          # Token service and bearer middleware
//! ├── db/            # Record-store / storage clients, models, repositories
//! ├── catalog/       # Hierarchy resolver, image roles, paginated feed
//! ├── api/           # HTTP routes and handlers
//! └── utils/         # Errors, response envelope, logging
//! ```

pub mod api;
pub mod auth;
pub mod catalog;
pub mod core;
pub mod db;
pub mod utils;

// Re-export public types
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResponse, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env` and initialize logging from the environment
pub fn setup_environment() {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());
}
