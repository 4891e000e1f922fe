//! Shared HTTP plumbing: the [`ConsoleClient`] every resource surface hangs
//! off, bearer-token handling, and response decoding.

use crate::config::Config;
use crate::error::{self, ApiError};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::RwLock;
use std::time::Duration;
use tracing::{debug, warn};

/// HTTP client for the console backend.
///
/// Holds the session bearer token behind a lock so one client can be shared
/// across tasks. A 401 response clears the token before the error is
/// surfaced, so subsequent calls fail fast until the host re-authenticates.
pub struct ConsoleClient {
    http: Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl ConsoleClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.backend.request_timeout_secs))
            .user_agent(config.backend.user_agent.clone())
            .build()?;
        Ok(Self {
            http,
            base_url: config.backend.base_url.trim_end_matches('/').to_string(),
            token: RwLock::new(None),
        })
    }

    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write().unwrap() = Some(token.into());
    }

    pub fn clear_token(&self) {
        *self.token.write().unwrap() = None;
    }

    pub fn has_token(&self) -> bool {
        self.token.read().unwrap().is_some()
    }

    pub(crate) async fn request_json<T, B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let bytes = self.execute(method, path, query, body).await?;
        serde_json::from_slice(&bytes).map_err(ApiError::from)
    }

    /// Sends a request and treats any 2xx as success, ignoring the body.
    /// Used for deletes and cancels, which are best-effort on the remote
    /// side.
    pub(crate) async fn request_unit<B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.execute(method, path, query, body).await.map(|_| ())
    }

    async fn execute<B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<Vec<u8>, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "dispatching request");

        let mut request = self.http.request(method, &url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(token) = self.token.read().unwrap().as_deref() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "request failed");
            if status == StatusCode::UNAUTHORIZED {
                self.clear_token();
            }
            return Err(error::normalize(status.as_u16(), &bytes));
        }
        Ok(bytes.to_vec())
    }
}

/// Expands a [`shared::pagination::PageQuery`] into query-string pairs,
/// forwarding the page size exactly as given.
pub(crate) fn page_params(query: &shared::pagination::PageQuery) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if let Some(size) = query.page_size {
        params.push(("pageSize", size.to_string()));
    }
    if let Some(token) = &query.page_token {
        params.push(("pageToken", token.clone()));
    }
    params
}

/// Query pairs for a patch call. No mask given means no `updateMask`
/// parameter at all; the server then replaces every modifiable field.
pub(crate) fn update_mask_param(update_mask: Option<&str>) -> Vec<(&'static str, String)> {
    match update_mask {
        Some(mask) => vec![("updateMask", mask.to_string())],
        None => Vec::new(),
    }
}

/// Renders an enum's wire tag for use as a query-string value. Only valid
/// for enums that serialize to a plain string.
pub(crate) fn enum_param<T: Serialize>(value: &T) -> String {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::String(tag)) => tag,
        other => {
            debug_assert!(false, "query parameter did not serialize to a string: {other:?}");
            String::new()
        }
    }
}

/// The backend proxy's response envelope: `{status: "success", data}` or
/// `{status: "error", error: {code, message}}`.
#[derive(Debug, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub(crate) enum ProxyResponse<T> {
    Success { data: T },
    Error { error: ProxyErrorBody },
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProxyErrorBody {
    pub code: u16,
    pub message: String,
}

impl<T> ProxyResponse<T> {
    /// Unwraps the envelope, mapping the error arm onto the normalized error
    /// shape.
    pub(crate) fn into_result(self) -> Result<T, ApiError> {
        match self {
            ProxyResponse::Success { data } => Ok(data),
            ProxyResponse::Error { error } => Err(ApiError::Http {
                status: error.code,
                message: error.message,
                code: None,
                details: None,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> ConsoleClient {
        let config = Config::load_for_test(&[]).expect("Failed to load config");
        ConsoleClient::new(&config).expect("Failed to build client")
    }

    #[test]
    fn test_token_lifecycle() {
        let client = test_client();
        assert!(!client.has_token());
        client.set_token("abc123");
        assert!(client.has_token());
        client.clear_token();
        assert!(!client.has_token());
    }

    #[test]
    fn test_page_size_forwarded_unmodified() {
        let query = shared::pagination::PageQuery::with_size(500);
        assert_eq!(page_params(&query), vec![("pageSize", "500".to_string())]);

        let next = query.next("tok-2");
        assert_eq!(
            page_params(&next),
            vec![
                ("pageSize", "500".to_string()),
                ("pageToken", "tok-2".to_string()),
            ]
        );
    }

    #[test]
    #[should_panic(expected = "did not serialize to a string")]
    fn test_enum_param_rejects_non_string_values() {
        enum_param(&42);
    }

    #[test]
    fn test_no_mask_means_no_parameter() {
        assert!(update_mask_param(None).is_empty());
        assert_eq!(
            update_mask_param(Some("applications")),
            vec![("updateMask", "applications".to_string())]
        );
    }

    #[test]
    fn test_proxy_success_envelope() {
        let json = r#"{"status":"success","data":{"name":"enterprises/e1"}}"#;
        let envelope: ProxyResponse<serde_json::Value> = serde_json::from_str(json).unwrap();
        let data = envelope.into_result().unwrap();
        assert_eq!(data["name"], "enterprises/e1");
    }

    #[test]
    fn test_proxy_error_envelope() {
        let json = r#"{"status":"error","error":{"code":409,"message":"already registered"}}"#;
        let envelope: ProxyResponse<serde_json::Value> = serde_json::from_str(json).unwrap();
        let err = envelope.into_result().unwrap_err();
        assert_eq!(err.status(), Some(409));
        assert_eq!(err.to_string(), "already registered");
    }
}
