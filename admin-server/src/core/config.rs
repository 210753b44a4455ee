//! Server configuration
//!
//! All settings are read once from the environment at process start;
//! there is no runtime reconfiguration.
//!
//! | Environment variable | Default | Purpose |
//! |----------------------|---------|---------|
//! | HTTP_PORT | 3000 | HTTP API port |
//! | BACKEND_URL | http://localhost:54321 | Hosted record-store endpoint |
//! | BACKEND_API_KEY | (empty) | Record-store API key |
//! | STORAGE_BUCKET | tisorah | Object storage bucket |
//! | ADMIN_USERNAME | admin | Dashboard login |
//! | ADMIN_PASSWORD | (empty) | Dashboard login |
//! | JWT_SECRET | (random) | Token signing secret |
//! | LOG_DIR | (none) | Optional rolling-file log directory |
//! | ENVIRONMENT | development | development \| staging \| production |

use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// Hosted record-store endpoint URL
    pub backend_url: String,
    /// Record-store API key (sent as `apikey` + bearer)
    pub backend_api_key: String,
    /// Object storage bucket name
    pub storage_bucket: String,
    /// Dashboard admin username
    pub admin_username: String,
    /// Dashboard admin password
    pub admin_password: String,
    /// Token signing secret
    pub jwt_secret: String,
    /// Optional log directory for daily-rolling files
    pub log_dir: Option<String>,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            backend_url: std::env::var("BACKEND_URL")
                .unwrap_or_else(|_| "http://localhost:54321".into()),
            backend_api_key: std::env::var("BACKEND_API_KEY").unwrap_or_default(),
            storage_bucket: std::env::var("STORAGE_BUCKET").unwrap_or_else(|_| "tisorah".into()),
            admin_username: std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".into()),
            admin_password: std::env::var("ADMIN_PASSWORD").unwrap_or_default(),
            // A random secret means tokens do not survive a restart unless
            // the operator pins one in the environment.
            jwt_secret: std::env::var("JWT_SECRET").unwrap_or_else(|_| Uuid::new_v4().to_string()),
            log_dir: std::env::var("LOG_DIR").ok(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
