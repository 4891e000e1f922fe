//! Signup URL creation; the first step of the enterprise signup flow.

use crate::error::ApiError;
use crate::http::ConsoleClient;
use amapi::enterprise::SignupUrl;
use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;
use validator::Validate;

/// Parameters for a signup URL. The admin is redirected to `callback_url`
/// with an appended `enterpriseToken` query parameter once signup completes.
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct CreateSignupUrlRequest {
    pub project_id: Option<String>,

    #[validate(url(message = "must be a valid URL"))]
    pub callback_url: Option<String>,

    /// Hint only; prefills the admin field of the signup form.
    #[validate(email(message = "must be a valid email address"))]
    pub admin_email: Option<String>,

    /// Domains permitted for the admin email. Empty means any valid domain.
    #[serde(default)]
    pub allowed_domains: Vec<String>,
}

#[async_trait]
pub trait SignupUrlsApi {
    async fn create_signup_url(
        &self,
        request: &CreateSignupUrlRequest,
    ) -> Result<SignupUrl, ApiError>;
}

#[async_trait]
impl SignupUrlsApi for ConsoleClient {
    async fn create_signup_url(
        &self,
        request: &CreateSignupUrlRequest,
    ) -> Result<SignupUrl, ApiError> {
        request.validate()?;
        let mut query = Vec::new();
        if let Some(project_id) = &request.project_id {
            query.push(("projectId", project_id.clone()));
        }
        if let Some(callback_url) = &request.callback_url {
            query.push(("callbackUrl", callback_url.clone()));
        }
        if let Some(admin_email) = &request.admin_email {
            query.push(("adminEmail", admin_email.clone()));
        }
        for domain in &request.allowed_domains {
            query.push(("allowedDomains", domain.clone()));
        }
        self.request_json(Method::POST, "/v1/signupUrls", &query, None::<&()>)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callback_url_validated() {
        let request = CreateSignupUrlRequest {
            callback_url: Some("not a url".to_string()),
            ..CreateSignupUrlRequest::default()
        };
        assert!(request.validate().is_err());

        let request = CreateSignupUrlRequest {
            callback_url: Some("https://console.example.com/callback".to_string()),
            admin_email: Some("it-admin@example.com".to_string()),
            ..CreateSignupUrlRequest::default()
        };
        assert!(request.validate().is_ok());
    }
}
