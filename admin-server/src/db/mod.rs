//! Hosted-backend data layer
//!
//! All persistence is delegated to a hosted record store and object storage
//! service. This module owns the two HTTP clients and the typed repositories
//! built on top of them.

pub mod models;
pub mod repository;
pub mod rest;
pub mod storage;

pub use rest::{ListQuery, ListResult, RestClient, SortDirection};
pub use storage::StorageClient;

use thiserror::Error;

/// Data-layer error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Decode error: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for RepoError {
    fn from(err: reqwest::Error) -> Self {
        RepoError::Backend(err.to_string())
    }
}

/// Result type for data-layer operations
pub type RepoResult<T> = Result<T, RepoError>;
