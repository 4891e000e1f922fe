//! Enrollment token lifecycle for bringing devices under management.

use crate::error::ApiError;
use crate::http::{page_params, ConsoleClient};
use amapi::enterprise::EnrollmentToken;
use async_trait::async_trait;
use reqwest::Method;
use serde::Deserialize;
use shared::pagination::{Page, PageQuery};
use shared::resource::{EnrollmentTokenName, EnterpriseName};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListEnrollmentTokensResponse {
    #[serde(default)]
    enrollment_tokens: Vec<EnrollmentToken>,
    next_page_token: Option<String>,
}

#[async_trait]
pub trait EnrollmentTokensApi {
    /// Creates an enrollment token. `payload.policy_name` may be a bare
    /// policy id; the server resolves it against the parent enterprise.
    async fn create_enrollment_token(
        &self,
        parent: &EnterpriseName,
        payload: &EnrollmentToken,
    ) -> Result<EnrollmentToken, ApiError>;

    /// Fetches an active token. Only a partial view comes back: the `value`
    /// and `qr_code` fields are never populated after creation.
    async fn get_enrollment_token(
        &self,
        name: &EnrollmentTokenName,
    ) -> Result<EnrollmentToken, ApiError>;

    /// Lists active, unexpired tokens (partial view).
    async fn list_enrollment_tokens(
        &self,
        parent: &EnterpriseName,
        query: PageQuery,
    ) -> Result<Page<EnrollmentToken>, ApiError>;

    async fn list_all_enrollment_tokens(
        &self,
        parent: &EnterpriseName,
        mut query: PageQuery,
    ) -> Result<Vec<EnrollmentToken>, ApiError> {
        let mut items = Vec::new();
        loop {
            let page = self.list_enrollment_tokens(parent, query.clone()).await?;
            items.extend(page.items);
            match page.next_page_token.as_deref() {
                Some(token) if !token.is_empty() => query = query.next(token),
                _ => return Ok(items),
            }
        }
    }

    /// Invalidates a token so it can no longer be used to enroll.
    async fn delete_enrollment_token(
        &self,
        name: &EnrollmentTokenName,
    ) -> Result<(), ApiError>;
}

#[async_trait]
impl EnrollmentTokensApi for ConsoleClient {
    async fn create_enrollment_token(
        &self,
        parent: &EnterpriseName,
        payload: &EnrollmentToken,
    ) -> Result<EnrollmentToken, ApiError> {
        self.request_json(
            Method::POST,
            &format!("/v1/{parent}/enrollmentTokens"),
            &[],
            Some(payload),
        )
        .await
    }

    async fn get_enrollment_token(
        &self,
        name: &EnrollmentTokenName,
    ) -> Result<EnrollmentToken, ApiError> {
        self.request_json(Method::GET, &format!("/v1/{name}"), &[], None::<&()>)
            .await
    }

    async fn list_enrollment_tokens(
        &self,
        parent: &EnterpriseName,
        query: PageQuery,
    ) -> Result<Page<EnrollmentToken>, ApiError> {
        let params = page_params(&query);
        let response: ListEnrollmentTokensResponse = self
            .request_json(
                Method::GET,
                &format!("/v1/{parent}/enrollmentTokens"),
                &params,
                None::<&()>,
            )
            .await?;
        Ok(Page {
            items: response.enrollment_tokens,
            next_page_token: response.next_page_token,
        })
    }

    async fn delete_enrollment_token(
        &self,
        name: &EnrollmentTokenName,
    ) -> Result<(), ApiError> {
        self.request_unit(Method::DELETE, &format!("/v1/{name}"), &[], None::<&()>)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_payload_keeps_policy_name() {
        let payload = EnrollmentToken {
            policy_name: Some("default".to_string()),
            one_time_only: Some(true),
            ..EnrollmentToken::default()
        };
        let body = serde_json::to_value(&payload).unwrap();
        assert_eq!(body["policyName"], "default");
        assert_eq!(body["oneTimeOnly"], true);
        assert!(body.get("value").is_none());
    }

    #[test]
    fn test_partial_view_listing() {
        let json = r#"{"enrollmentTokens":[
            {"name":"enterprises/e1/enrollmentTokens/t1",
             "expirationTimestamp":"2026-09-01T00:00:00Z",
             "policyName":"enterprises/e1/policies/default"}]}"#;
        let response: ListEnrollmentTokensResponse = serde_json::from_str(json).unwrap();
        let token = &response.enrollment_tokens[0];
        assert!(token.value.is_none());
        assert!(token.qr_code.is_none());
        assert_eq!(
            token.policy_name.as_deref(),
            Some("enterprises/e1/policies/default")
        );
    }
}
