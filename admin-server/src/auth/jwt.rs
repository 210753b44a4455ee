//! Token service
//!
//! HS256 bearer tokens for the dashboard session. Tokens carry no expiry:
//! the dashboard keeps its session until the secret rotates, matching the
//! storefront admin's long-lived login behavior.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::utils::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Username
    pub sub: String,
    /// Issued-at (unix seconds)
    pub iat: i64,
}

/// The authenticated caller, attached to the request by the auth middleware
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub username: String,
}

#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    pub fn issue(&self, username: &str) -> AppResult<String> {
        let claims = Claims {
            sub: username.to_string(),
            iat: chrono::Utc::now().timestamp(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to issue token: {}", e)))
    }

    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Tokens are non-expiring; no exp claim is present
        validation.required_spec_claims.clear();
        validation.validate_exp = false;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|_| AppError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_tokens_verify() {
        let service = JwtService::new("test-secret");
        let token = service.issue("admin").unwrap();
        let claims = service.verify(&token).unwrap();
        assert_eq!(claims.sub, "admin");
    }

    #[test]
    fn tokens_from_another_secret_are_rejected() {
        let service = JwtService::new("secret-a");
        let token = service.issue("admin").unwrap();
        let other = JwtService::new("secret-b");
        assert!(other.verify(&token).is_err());
    }

    #[test]
    fn garbage_tokens_are_rejected() {
        let service = JwtService::new("test-secret");
        assert!(service.verify("not-a-token").is_err());
    }
}
