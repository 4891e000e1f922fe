//! Long-running operations returned by device commands.

use crate::error::ApiError;
use crate::http::{page_params, ConsoleClient};
use amapi::operation::Operation;
use async_trait::async_trait;
use reqwest::Method;
use serde::Deserialize;
use shared::pagination::{Page, PageQuery};

/// Optional filters for the operation listing.
#[derive(Debug, Clone, Default)]
pub struct ListOperationsParams {
    pub filter: Option<String>,
    /// When set, operations from unreachable backends are skipped and their
    /// parents reported in `unreachable` instead of failing the whole call.
    pub return_partial_success: Option<bool>,
}

/// A page of operations plus any parent collections the server could not
/// reach when partial success was requested.
#[derive(Debug, Default)]
pub struct OperationPage {
    pub page: Page<Operation>,
    pub unreachable: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListOperationsResponse {
    #[serde(default)]
    operations: Vec<Operation>,
    next_page_token: Option<String>,
    #[serde(default)]
    unreachable: Vec<String>,
}

#[async_trait]
pub trait OperationsApi {
    /// Fetches the latest state of an operation by its full resource name,
    /// e.g. `enterprises/{id}/devices/{id}/operations/{id}`.
    async fn get_operation(&self, name: &str) -> Result<Operation, ApiError>;

    /// Lists operations under a parent collection name, e.g.
    /// `enterprises/{id}/devices/{id}/operations`.
    async fn list_operations(
        &self,
        name: &str,
        query: PageQuery,
        params: ListOperationsParams,
    ) -> Result<OperationPage, ApiError>;

    /// Best-effort cancellation; the operation may still complete.
    async fn cancel_operation(&self, name: &str) -> Result<(), ApiError>;
}

#[async_trait]
impl OperationsApi for ConsoleClient {
    async fn get_operation(&self, name: &str) -> Result<Operation, ApiError> {
        self.request_json(Method::GET, &format!("/v1/{name}"), &[], None::<&()>)
            .await
    }

    async fn list_operations(
        &self,
        name: &str,
        query: PageQuery,
        params: ListOperationsParams,
    ) -> Result<OperationPage, ApiError> {
        let mut pairs = page_params(&query);
        if let Some(filter) = &params.filter {
            pairs.push(("filter", filter.clone()));
        }
        if let Some(partial) = params.return_partial_success {
            pairs.push(("returnPartialSuccess", partial.to_string()));
        }
        let response: ListOperationsResponse = self
            .request_json(Method::GET, &format!("/v1/{name}"), &pairs, None::<&()>)
            .await?;
        Ok(OperationPage {
            page: Page {
                items: response.operations,
                next_page_token: response.next_page_token,
            },
            unreachable: response.unreachable,
        })
    }

    async fn cancel_operation(&self, name: &str) -> Result<(), ApiError> {
        self.request_unit(Method::POST, &format!("/v1/{name}:cancel"), &[], None::<&()>)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_response_with_unreachable() {
        let json = r#"{
            "operations":[{"name":"enterprises/e1/devices/d1/operations/o1","done":false}],
            "unreachable":["enterprises/e1/devices/d2"]
        }"#;
        let response: ListOperationsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.operations.len(), 1);
        assert_eq!(response.unreachable, vec!["enterprises/e1/devices/d2"]);
    }
}
