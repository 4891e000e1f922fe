//! Device retrieval, policy reassignment, remote commands, and unenrollment.

use crate::error::ApiError;
use crate::http::{enum_param, page_params, ConsoleClient};
use amapi::command::Command;
use amapi::common::WipeDataFlag;
use amapi::device::Device;
use amapi::operation::Operation;
use async_trait::async_trait;
use reqwest::Method;
use serde::Deserialize;
use shared::pagination::{Page, PageQuery};
use shared::resource::{DeviceName, EnterpriseName};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListDevicesResponse {
    #[serde(default)]
    devices: Vec<Device>,
    next_page_token: Option<String>,
}

#[async_trait]
pub trait DevicesApi {
    async fn get_device(&self, name: &DeviceName) -> Result<Device, ApiError>;

    async fn list_devices(
        &self,
        parent: &EnterpriseName,
        query: PageQuery,
    ) -> Result<Page<Device>, ApiError>;

    /// Drains every page of the listing. The page size of `query` is reused
    /// for each request.
    async fn list_all_devices(
        &self,
        parent: &EnterpriseName,
        mut query: PageQuery,
    ) -> Result<Vec<Device>, ApiError> {
        let mut items = Vec::new();
        loop {
            let page = self.list_devices(parent, query.clone()).await?;
            items.extend(page.items);
            match page.next_page_token.as_deref() {
                Some(token) if !token.is_empty() => query = query.next(token),
                _ => return Ok(items),
            }
        }
    }

    /// Updates a device, typically to point it at a different policy via
    /// `policy_name`.
    async fn patch_device(&self, name: &DeviceName, payload: &Device)
        -> Result<Device, ApiError>;

    /// Deletes (wipes) a device. Any 2xx answer counts as accepted; the
    /// device unenrolls asynchronously.
    async fn delete_device(
        &self,
        name: &DeviceName,
        wipe_data_flags: &[WipeDataFlag],
        wipe_reason_message: Option<&str>,
    ) -> Result<(), ApiError>;

    /// Issues a remote command. The returned operation tracks its delivery.
    async fn issue_command(
        &self,
        name: &DeviceName,
        command: &Command,
    ) -> Result<Operation, ApiError>;
}

#[async_trait]
impl DevicesApi for ConsoleClient {
    async fn get_device(&self, name: &DeviceName) -> Result<Device, ApiError> {
        self.request_json(Method::GET, &format!("/v1/{name}"), &[], None::<&()>)
            .await
    }

    async fn list_devices(
        &self,
        parent: &EnterpriseName,
        query: PageQuery,
    ) -> Result<Page<Device>, ApiError> {
        let params = page_params(&query);
        let response: ListDevicesResponse = self
            .request_json(
                Method::GET,
                &format!("/v1/{parent}/devices"),
                &params,
                None::<&()>,
            )
            .await?;
        Ok(Page {
            items: response.devices,
            next_page_token: response.next_page_token,
        })
    }

    async fn patch_device(
        &self,
        name: &DeviceName,
        payload: &Device,
    ) -> Result<Device, ApiError> {
        self.request_json(Method::PATCH, &format!("/v1/{name}"), &[], Some(payload))
            .await
    }

    async fn delete_device(
        &self,
        name: &DeviceName,
        wipe_data_flags: &[WipeDataFlag],
        wipe_reason_message: Option<&str>,
    ) -> Result<(), ApiError> {
        let mut query = Vec::new();
        for flag in wipe_data_flags {
            query.push(("wipeDataFlags", enum_param(flag)));
        }
        if let Some(message) = wipe_reason_message {
            query.push(("wipeReasonMessage", message.to_string()));
        }
        self.request_unit(Method::DELETE, &format!("/v1/{name}"), &query, None::<&()>)
            .await
    }

    async fn issue_command(
        &self,
        name: &DeviceName,
        command: &Command,
    ) -> Result<Operation, ApiError> {
        self.request_json(
            Method::POST,
            &format!("/v1/{name}:issueCommand"),
            &[],
            Some(command),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wipe_flags_render_as_wire_tags() {
        assert_eq!(
            enum_param(&WipeDataFlag::PreserveResetProtectionData),
            "PRESERVE_RESET_PROTECTION_DATA"
        );
        assert_eq!(
            enum_param(&WipeDataFlag::WipeExternalStorage),
            "WIPE_EXTERNAL_STORAGE"
        );
    }

    #[test]
    fn test_device_list_response_maps_to_page() {
        let json = r#"{"devices":[{"name":"enterprises/e1/devices/d1"}],"nextPageToken":"t"}"#;
        let response: ListDevicesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.devices.len(), 1);
        assert_eq!(response.next_page_token.as_deref(), Some("t"));
    }
}
