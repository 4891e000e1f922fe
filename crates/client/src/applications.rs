//! Play Store application metadata lookup.

use crate::error::ApiError;
use crate::http::ConsoleClient;
use amapi::application::Application;
use async_trait::async_trait;
use reqwest::Method;
use shared::resource::ApplicationName;

#[async_trait]
pub trait ApplicationsApi {
    /// Fetches app metadata (title, permissions, managed properties).
    /// `language_code` is a BCP 47 tag for localized fields; the server
    /// default applies when omitted.
    async fn get_application(
        &self,
        name: &ApplicationName,
        language_code: Option<&str>,
    ) -> Result<Application, ApiError>;
}

#[async_trait]
impl ApplicationsApi for ConsoleClient {
    async fn get_application(
        &self,
        name: &ApplicationName,
        language_code: Option<&str>,
    ) -> Result<Application, ApiError> {
        let mut query = Vec::new();
        if let Some(code) = language_code {
            query.push(("languageCode", code.to_string()));
        }
        self.request_json(Method::GET, &format!("/v1/{name}"), &query, None::<&()>)
            .await
    }
}
