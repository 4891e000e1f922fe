//! Enterprise lifecycle: the signup-token exchange, retrieval, updates, and
//! the console's "which enterprise belongs to this login" lookup.

use crate::error::ApiError;
use crate::http::{enum_param, page_params, update_mask_param, ConsoleClient, ProxyResponse};
use amapi::enterprise::{Enterprise, EnterpriseView};
use async_trait::async_trait;
use reqwest::Method;
use serde::Deserialize;
use shared::pagination::{Page, PageQuery};
use shared::resource::EnterpriseName;

/// Query parameters for the enterprise create call. For a customer-managed
/// enterprise, `signup_url_name` and `enterprise_token` carry the values from
/// the completed signup flow.
#[derive(Debug, Clone, Default)]
pub struct CreateEnterpriseParams {
    pub project_id: Option<String>,
    pub signup_url_name: Option<String>,
    pub enterprise_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListEnterprisesResponse {
    #[serde(default)]
    enterprises: Vec<Enterprise>,
    next_page_token: Option<String>,
}

#[async_trait]
pub trait EnterprisesApi {
    async fn get_enterprise(&self, name: &EnterpriseName) -> Result<Enterprise, ApiError>;

    /// Lists EMM-managed enterprises for a Cloud project. Only BASIC fields
    /// are returned.
    async fn list_enterprises(
        &self,
        project_id: &str,
        query: PageQuery,
        view: Option<EnterpriseView>,
    ) -> Result<Page<Enterprise>, ApiError>;

    /// Creates an enterprise; the final step of the signup flow.
    async fn create_enterprise(
        &self,
        params: CreateEnterpriseParams,
        payload: &Enterprise,
    ) -> Result<Enterprise, ApiError>;

    async fn patch_enterprise(
        &self,
        name: &EnterpriseName,
        update_mask: Option<&str>,
        payload: &Enterprise,
    ) -> Result<Enterprise, ApiError>;

    /// Permanently deletes an enterprise and everything under it.
    async fn delete_enterprise(&self, name: &EnterpriseName) -> Result<(), ApiError>;

    /// The enterprise associated with the authenticated account, if any.
    /// Served by the backend proxy rather than the remote API.
    async fn current_enterprise(&self) -> Result<Option<Enterprise>, ApiError>;
}

#[async_trait]
impl EnterprisesApi for ConsoleClient {
    async fn get_enterprise(&self, name: &EnterpriseName) -> Result<Enterprise, ApiError> {
        self.request_json(Method::GET, &format!("/v1/{name}"), &[], None::<&()>)
            .await
    }

    async fn list_enterprises(
        &self,
        project_id: &str,
        query: PageQuery,
        view: Option<EnterpriseView>,
    ) -> Result<Page<Enterprise>, ApiError> {
        let mut params = vec![("projectId", project_id.to_string())];
        params.extend(page_params(&query));
        if let Some(view) = view {
            params.push(("view", enum_param(&view)));
        }
        let response: ListEnterprisesResponse = self
            .request_json(Method::GET, "/v1/enterprises", &params, None::<&()>)
            .await?;
        Ok(Page {
            items: response.enterprises,
            next_page_token: response.next_page_token,
        })
    }

    async fn create_enterprise(
        &self,
        params: CreateEnterpriseParams,
        payload: &Enterprise,
    ) -> Result<Enterprise, ApiError> {
        let mut query = Vec::new();
        if let Some(project_id) = params.project_id {
            query.push(("projectId", project_id));
        }
        if let Some(signup_url_name) = params.signup_url_name {
            query.push(("signupUrlName", signup_url_name));
        }
        if let Some(enterprise_token) = params.enterprise_token {
            query.push(("enterpriseToken", enterprise_token));
        }
        self.request_json(Method::POST, "/v1/enterprises", &query, Some(payload))
            .await
    }

    async fn patch_enterprise(
        &self,
        name: &EnterpriseName,
        update_mask: Option<&str>,
        payload: &Enterprise,
    ) -> Result<Enterprise, ApiError> {
        let query = update_mask_param(update_mask);
        self.request_json(Method::PATCH, &format!("/v1/{name}"), &query, Some(payload))
            .await
    }

    async fn delete_enterprise(&self, name: &EnterpriseName) -> Result<(), ApiError> {
        self.request_unit(Method::DELETE, &format!("/v1/{name}"), &[], None::<&()>)
            .await
    }

    async fn current_enterprise(&self) -> Result<Option<Enterprise>, ApiError> {
        let envelope: ProxyResponse<Option<Enterprise>> = self
            .request_json(Method::GET, "/api/v1/emm-android", &[], None::<&()>)
            .await?;
        // The proxy answers success with an empty resource when the account
        // has no enterprise yet.
        Ok(envelope.into_result()?.filter(|e| e.name.is_some()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_response_maps_to_page() {
        let json = r#"{"enterprises":[{"name":"enterprises/e1"}],"nextPageToken":"tok"}"#;
        let response: ListEnterprisesResponse = serde_json::from_str(json).unwrap();
        let page = Page {
            items: response.enterprises,
            next_page_token: response.next_page_token,
        };
        assert_eq!(page.items.len(), 1);
        assert!(page.has_more());
    }

    #[test]
    fn test_empty_list_response_defaults() {
        let response: ListEnterprisesResponse = serde_json::from_str("{}").unwrap();
        assert!(response.enterprises.is_empty());
        assert!(response.next_page_token.is_none());
    }
}
