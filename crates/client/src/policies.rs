//! Policy CRUD and the server-side application-list modification calls.

use crate::error::ApiError;
use crate::http::{page_params, update_mask_param, ConsoleClient};
use amapi::policy::{ApplicationPolicyChange, Policy};
use async_trait::async_trait;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use shared::pagination::{Page, PageQuery};
use shared::resource::{EnterpriseName, PolicyName};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListPoliciesResponse {
    #[serde(default)]
    policies: Vec<Policy>,
    next_page_token: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ModifyApplicationsRequest<'a> {
    changes: &'a [ApplicationPolicyChange],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RemoveApplicationsRequest<'a> {
    package_names: &'a [String],
}

#[derive(Debug, Deserialize)]
struct PolicyEnvelope {
    policy: Policy,
}

#[async_trait]
pub trait PoliciesApi {
    async fn get_policy(&self, name: &PolicyName) -> Result<Policy, ApiError>;

    async fn list_policies(
        &self,
        parent: &EnterpriseName,
        query: PageQuery,
    ) -> Result<Page<Policy>, ApiError>;

    /// Drains every page of the listing. The page size of `query` is reused
    /// for each request.
    async fn list_all_policies(
        &self,
        parent: &EnterpriseName,
        mut query: PageQuery,
    ) -> Result<Vec<Policy>, ApiError> {
        let mut items = Vec::new();
        loop {
            let page = self.list_policies(parent, query.clone()).await?;
            items.extend(page.items);
            match page.next_page_token.as_deref() {
                Some(token) if !token.is_empty() => query = query.next(token),
                _ => return Ok(items),
            }
        }
    }

    /// Updates or creates a policy. With no `update_mask` the request carries
    /// no mask parameter at all and the server replaces every modifiable
    /// field.
    async fn patch_policy(
        &self,
        name: &PolicyName,
        update_mask: Option<&str>,
        payload: &Policy,
    ) -> Result<Policy, ApiError>;

    async fn delete_policy(&self, name: &PolicyName) -> Result<(), ApiError>;

    /// Applies per-application changes server-side; matching package names
    /// update existing entries, new ones are appended.
    async fn modify_policy_applications(
        &self,
        name: &PolicyName,
        changes: &[ApplicationPolicyChange],
    ) -> Result<Policy, ApiError>;

    async fn remove_policy_applications(
        &self,
        name: &PolicyName,
        package_names: &[String],
    ) -> Result<Policy, ApiError>;
}

#[async_trait]
impl PoliciesApi for ConsoleClient {
    async fn get_policy(&self, name: &PolicyName) -> Result<Policy, ApiError> {
        self.request_json(Method::GET, &format!("/v1/{name}"), &[], None::<&()>)
            .await
    }

    async fn list_policies(
        &self,
        parent: &EnterpriseName,
        query: PageQuery,
    ) -> Result<Page<Policy>, ApiError> {
        let params = page_params(&query);
        let response: ListPoliciesResponse = self
            .request_json(
                Method::GET,
                &format!("/v1/{parent}/policies"),
                &params,
                None::<&()>,
            )
            .await?;
        Ok(Page {
            items: response.policies,
            next_page_token: response.next_page_token,
        })
    }

    async fn patch_policy(
        &self,
        name: &PolicyName,
        update_mask: Option<&str>,
        payload: &Policy,
    ) -> Result<Policy, ApiError> {
        let query = update_mask_param(update_mask);
        self.request_json(Method::PATCH, &format!("/v1/{name}"), &query, Some(payload))
            .await
    }

    async fn delete_policy(&self, name: &PolicyName) -> Result<(), ApiError> {
        self.request_unit(Method::DELETE, &format!("/v1/{name}"), &[], None::<&()>)
            .await
    }

    async fn modify_policy_applications(
        &self,
        name: &PolicyName,
        changes: &[ApplicationPolicyChange],
    ) -> Result<Policy, ApiError> {
        let envelope: PolicyEnvelope = self
            .request_json(
                Method::POST,
                &format!("/v1/{name}:modifyPolicyApplications"),
                &[],
                Some(&ModifyApplicationsRequest { changes }),
            )
            .await?;
        Ok(envelope.policy)
    }

    async fn remove_policy_applications(
        &self,
        name: &PolicyName,
        package_names: &[String],
    ) -> Result<Policy, ApiError> {
        let envelope: PolicyEnvelope = self
            .request_json(
                Method::POST,
                &format!("/v1/{name}:removePolicyApplications"),
                &[],
                Some(&RemoveApplicationsRequest { package_names }),
            )
            .await?;
        Ok(envelope.policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modify_request_body_shape() {
        let changes = vec![ApplicationPolicyChange {
            application: Some(amapi::policy::ApplicationPolicy {
                package_name: Some("com.example".to_string()),
                ..Default::default()
            }),
            update_mask: Some("installType".to_string()),
        }];
        let body = serde_json::to_value(ModifyApplicationsRequest { changes: &changes }).unwrap();
        assert_eq!(body["changes"][0]["application"]["packageName"], "com.example");
        assert_eq!(body["changes"][0]["updateMask"], "installType");
    }

    #[test]
    fn test_remove_request_body_shape() {
        let packages = vec!["com.a".to_string(), "com.b".to_string()];
        let body = serde_json::to_value(RemoveApplicationsRequest {
            package_names: &packages,
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"packageNames": ["com.a", "com.b"]})
        );
    }

    #[test]
    fn test_policy_list_response_maps_to_page() {
        let json = r#"{"policies":[{"name":"enterprises/e1/policies/p1"}]}"#;
        let response: ListPoliciesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.policies.len(), 1);
        assert!(response.next_page_token.is_none());
    }
}
