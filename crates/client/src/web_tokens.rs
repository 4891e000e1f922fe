//! Web tokens for the embeddable managed Google Play UI.

use crate::error::ApiError;
use crate::http::ConsoleClient;
use amapi::enterprise::WebToken;
use async_trait::async_trait;
use reqwest::Method;
use shared::resource::EnterpriseName;

#[async_trait]
pub trait WebTokensApi {
    /// Creates a web token scoped to `payload.parent_frame_url`; a token
    /// created without one is valid from any URL.
    async fn create_web_token(
        &self,
        parent: &EnterpriseName,
        payload: &WebToken,
    ) -> Result<WebToken, ApiError>;
}

#[async_trait]
impl WebTokensApi for ConsoleClient {
    async fn create_web_token(
        &self,
        parent: &EnterpriseName,
        payload: &WebToken,
    ) -> Result<WebToken, ApiError> {
        self.request_json(
            Method::POST,
            &format!("/v1/{parent}/webTokens"),
            &[],
            Some(payload),
        )
        .await
    }
}
