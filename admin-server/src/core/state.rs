//! Server state
//!
//! Shared handles for the HTTP layer: the record-store client, the object
//! storage client, and the token service. All are cheap to clone; the
//! state is the axum router's state type.

use std::sync::Arc;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::{RestClient, StorageClient};

#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    /// Hosted record-store client
    pub rest: RestClient,
    /// Hosted object-storage client
    pub storage: StorageClient,
    /// Token service (shared ownership)
    pub jwt: Arc<JwtService>,
}

impl ServerState {
    pub fn initialize(config: &Config) -> Self {
        let rest = RestClient::new(&config.backend_url, &config.backend_api_key);
        let storage = StorageClient::new(
            &config.backend_url,
            &config.backend_api_key,
            &config.storage_bucket,
        );
        let jwt = Arc::new(JwtService::new(&config.jwt_secret));

        Self {
            config: config.clone(),
            rest,
            storage,
            jwt,
        }
    }
}
