//! Error normalization at the client boundary.
//!
//! Every failure surfaces as [`ApiError`] with the normalized
//! `{status, message, code, details}` shape. A 401 is fatal to the session
//! (the stored token is cleared by the transport layer before this error is
//! returned); everything else is recoverable by retrying the call.

use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The backend rejected the bearer token. The client has already cleared
    /// its stored token; the host must re-authenticate.
    #[error("unauthorized: {message}")]
    Unauthorized { message: String },

    /// Any other non-2xx HTTP response, with the error body parsed
    /// best-effort.
    #[error("{message}")]
    Http {
        status: u16,
        message: String,
        code: Option<String>,
        details: Option<Value>,
    },

    /// Transport-level failure (connect, TLS, timeout); no HTTP status
    /// available.
    #[error("request failed: {message}")]
    Transport { message: String },

    /// Local payload validation failed; the request never reached the
    /// network.
    #[error("validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error(transparent)]
    ResourceName(#[from] shared::resource::ResourceNameError),

    /// A 2xx response whose body could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized { .. } => Some(401),
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether retrying the same call can succeed. Auth failures and local
    /// validation failures cannot.
    pub fn is_retryable(&self) -> bool {
        !matches!(
            self,
            ApiError::Unauthorized { .. }
                | ApiError::Validation(_)
                | ApiError::ResourceName(_)
        )
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport {
            message: err.to_string(),
        }
    }
}

/// Normalizes a non-2xx response into [`ApiError`].
///
/// The message falls back through `message`, then `error` (string or the
/// proxy's `error.message` object form), then a generic string. The raw body
/// is kept in `details` when it parses as JSON.
pub(crate) fn normalize(status: u16, body: &[u8]) -> ApiError {
    let details: Option<Value> = serde_json::from_slice(body).ok();
    let message = details
        .as_ref()
        .and_then(|v| {
            v.get("message")
                .and_then(Value::as_str)
                .or_else(|| v.get("error").and_then(Value::as_str))
                .or_else(|| {
                    v.get("error")
                        .and_then(|e| e.get("message"))
                        .and_then(Value::as_str)
                })
        })
        .unwrap_or("Request failed")
        .to_string();
    if status == 401 {
        return ApiError::Unauthorized { message };
    }
    let code = details
        .as_ref()
        .and_then(|v| v.get("code"))
        .and_then(Value::as_str)
        .map(str::to_string);
    ApiError::Http {
        status,
        message,
        code,
        details,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_field_preferred() {
        let err = normalize(400, br#"{"message":"bad policy","error":"ignored"}"#);
        match err {
            ApiError::Http {
                status, message, ..
            } => {
                assert_eq!(status, 400);
                assert_eq!(message, "bad policy");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_error_string_fallback() {
        let err = normalize(409, br#"{"error":"enterprise already registered"}"#);
        assert_eq!(err.to_string(), "enterprise already registered");
        assert_eq!(err.status(), Some(409));
    }

    #[test]
    fn test_nested_proxy_error_message() {
        let err = normalize(404, br#"{"status":"error","error":{"code":404,"message":"not found"}}"#);
        assert_eq!(err.to_string(), "not found");
    }

    #[test]
    fn test_unparseable_body_generic_message() {
        let err = normalize(500, b"<html>boom</html>");
        match err {
            ApiError::Http {
                message, details, ..
            } => {
                assert_eq!(message, "Request failed");
                assert!(details.is_none());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_401_maps_to_unauthorized() {
        let err = normalize(401, br#"{"message":"token expired"}"#);
        assert!(matches!(err, ApiError::Unauthorized { .. }));
        assert!(!err.is_retryable());
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn test_http_errors_are_retryable() {
        assert!(normalize(503, b"{}").is_retryable());
        assert!(ApiError::Transport {
            message: "timeout".into()
        }
        .is_retryable());
    }
}
