//! Authentication against the console backend.
//!
//! `login` stores the issued bearer token on the shared client; `logout`
//! drops it locally (the backend keeps no session state to invalidate).

use crate::error::ApiError;
use crate::http::ConsoleClient;
use async_trait::async_trait;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Validate)]
pub struct AuthCredentials {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,

    #[validate(length(min = 8, message = "must be at least 8 characters"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub status: String,
    pub message: String,
    pub token: String,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterResponse {
    pub status: String,
    pub message: String,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthStatus {
    pub status: String,
    #[serde(default)]
    pub authenticated: bool,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HealthCheck {
    pub status: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiStatus {
    pub status: String,
    pub version: Option<String>,
}

#[async_trait]
pub trait AuthApi {
    async fn health_check(&self) -> Result<HealthCheck, ApiError>;

    async fn api_status(&self) -> Result<ApiStatus, ApiError>;

    async fn register(&self, credentials: &AuthCredentials) -> Result<RegisterResponse, ApiError>;

    /// Authenticates and stores the issued bearer token for subsequent calls.
    async fn login(&self, credentials: &AuthCredentials) -> Result<AuthResponse, ApiError>;

    /// Drops the stored token. Purely local.
    fn logout(&self);

    async fn auth_status(&self) -> Result<AuthStatus, ApiError>;
}

#[async_trait]
impl AuthApi for ConsoleClient {
    async fn health_check(&self) -> Result<HealthCheck, ApiError> {
        self.request_json(Method::GET, "/health", &[], None::<&()>)
            .await
    }

    async fn api_status(&self) -> Result<ApiStatus, ApiError> {
        self.request_json(Method::GET, "/api/v1/status", &[], None::<&()>)
            .await
    }

    async fn register(&self, credentials: &AuthCredentials) -> Result<RegisterResponse, ApiError> {
        credentials.validate()?;
        self.request_json(Method::POST, "/api/v1/register", &[], Some(credentials))
            .await
    }

    async fn login(&self, credentials: &AuthCredentials) -> Result<AuthResponse, ApiError> {
        credentials.validate()?;
        let response: AuthResponse = self
            .request_json(Method::POST, "/api/v1/login", &[], Some(credentials))
            .await?;
        if !response.token.is_empty() {
            self.set_token(&response.token);
        }
        Ok(response)
    }

    fn logout(&self) {
        self.clear_token();
    }

    async fn auth_status(&self) -> Result<AuthStatus, ApiError> {
        self.request_json(Method::GET, "/api/v1/auth/status", &[], None::<&()>)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_validated_locally() {
        let bad_email = AuthCredentials {
            email: "not-an-email".to_string(),
            password: "longenough".to_string(),
        };
        assert!(bad_email.validate().is_err());

        let short_password = AuthCredentials {
            email: "admin@example.com".to_string(),
            password: "short".to_string(),
        };
        assert!(short_password.validate().is_err());

        let valid = AuthCredentials {
            email: "admin@example.com".to_string(),
            password: "correct horse battery".to_string(),
        };
        assert!(valid.validate().is_ok());
    }

    #[tokio::test]
    async fn test_invalid_login_never_dispatches() {
        let config = crate::config::Config::load_for_test(&[]).unwrap();
        let client = ConsoleClient::new(&config).unwrap();
        let credentials = AuthCredentials {
            email: "bad".to_string(),
            password: "x".to_string(),
        };
        // A validation failure returns before any request is attempted, so
        // this must fail fast even with no backend listening.
        let err = client.login(&credentials).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert!(!client.has_token());
    }
}
