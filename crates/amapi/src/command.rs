//! Device commands and their parameter/status unions.
//!
//! On the wire a command's parameters arrive as sibling fields
//! (`clearAppsDataParams`, `wipeParams`, ...) of which at most one may be
//! populated. Locally they are a single [`CommandParams`] enum; conversion
//! rejects payloads that populate more than one alternative instead of
//! silently picking a winner.

use crate::common::{ActivationState, UserFacingMessage, WipeDataFlag};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Raised when a payload populates more than one alternative of a oneof
/// union, or none where one is required.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UnionError {
    #[error("Union field '{field}' has {got} alternatives populated, expected at most one")]
    MultiplePopulated { field: &'static str, got: usize },

    #[error("Union field '{field}' requires exactly one populated alternative")]
    NonePopulated { field: &'static str },
}

/// A command issued against a device via `issueCommand`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CommandRepr", into = "CommandRepr")]
pub struct Command {
    pub command_type: Option<CommandType>,
    pub create_time: Option<DateTime<Utc>>,
    /// Duration string, e.g. `"600s"`. Defaults to ten minutes server-side.
    pub duration: Option<String>,
    pub user_name: Option<String>,
    pub error_code: Option<CommandErrorCode>,
    pub new_password: Option<String>,
    pub reset_password_flags: Option<Vec<ResetPasswordFlag>>,
    pub params: Option<CommandParams>,
    pub status: Option<CommandStatus>,
}

impl Command {
    pub fn new(command_type: CommandType) -> Self {
        Self {
            command_type: Some(command_type),
            ..Self::default()
        }
    }

    pub fn with_params(command_type: CommandType, params: CommandParams) -> Self {
        Self {
            command_type: Some(command_type),
            params: Some(params),
            ..Self::default()
        }
    }
}

/// Command-specific parameters, at most one per command.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandParams {
    ClearAppsData(ClearAppsDataParams),
    StartLostMode(StartLostModeParams),
    StopLostMode(StopLostModeParams),
    AddEsim(AddEsimParams),
    RemoveEsim(RemoveEsimParams),
    RequestDeviceInfo(RequestDeviceInfoParams),
    Wipe(WipeParams),
}

/// Command-specific result status, at most one per command.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandStatus {
    ClearAppsData(ClearAppsDataStatus),
    StartLostMode(StartLostModeStatus),
    StopLostMode(StopLostModeStatus),
    RequestDeviceInfo(RequestDeviceInfoStatus),
}

/// Wire representation of [`Command`] with the unions flattened into
/// sibling fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommandRepr {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    command_type: Option<CommandType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    create_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_code: Option<CommandErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    new_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reset_password_flags: Option<Vec<ResetPasswordFlag>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    clear_apps_data_params: Option<ClearAppsDataParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_lost_mode_params: Option<StartLostModeParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stop_lost_mode_params: Option<StopLostModeParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    add_esim_params: Option<AddEsimParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    remove_esim_params: Option<RemoveEsimParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    request_device_info_params: Option<RequestDeviceInfoParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    wipe_params: Option<WipeParams>,

    #[serde(skip_serializing_if = "Option::is_none")]
    clear_apps_data_status: Option<ClearAppsDataStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_lost_mode_status: Option<StartLostModeStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stop_lost_mode_status: Option<StopLostModeStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    request_device_info_status: Option<RequestDeviceInfoStatus>,
}

impl TryFrom<CommandRepr> for Command {
    type Error = UnionError;

    fn try_from(repr: CommandRepr) -> Result<Self, Self::Error> {
        let mut params = Vec::new();
        if let Some(p) = repr.clear_apps_data_params {
            params.push(CommandParams::ClearAppsData(p));
        }
        if let Some(p) = repr.start_lost_mode_params {
            params.push(CommandParams::StartLostMode(p));
        }
        if let Some(p) = repr.stop_lost_mode_params {
            params.push(CommandParams::StopLostMode(p));
        }
        if let Some(p) = repr.add_esim_params {
            params.push(CommandParams::AddEsim(p));
        }
        if let Some(p) = repr.remove_esim_params {
            params.push(CommandParams::RemoveEsim(p));
        }
        if let Some(p) = repr.request_device_info_params {
            params.push(CommandParams::RequestDeviceInfo(p));
        }
        if let Some(p) = repr.wipe_params {
            params.push(CommandParams::Wipe(p));
        }
        if params.len() > 1 {
            return Err(UnionError::MultiplePopulated {
                field: "params",
                got: params.len(),
            });
        }

        let mut statuses = Vec::new();
        if let Some(s) = repr.clear_apps_data_status {
            statuses.push(CommandStatus::ClearAppsData(s));
        }
        if let Some(s) = repr.start_lost_mode_status {
            statuses.push(CommandStatus::StartLostMode(s));
        }
        if let Some(s) = repr.stop_lost_mode_status {
            statuses.push(CommandStatus::StopLostMode(s));
        }
        if let Some(s) = repr.request_device_info_status {
            statuses.push(CommandStatus::RequestDeviceInfo(s));
        }
        if statuses.len() > 1 {
            return Err(UnionError::MultiplePopulated {
                field: "status",
                got: statuses.len(),
            });
        }

        Ok(Command {
            command_type: repr.command_type,
            create_time: repr.create_time,
            duration: repr.duration,
            user_name: repr.user_name,
            error_code: repr.error_code,
            new_password: repr.new_password,
            reset_password_flags: repr.reset_password_flags,
            params: params.pop(),
            status: statuses.pop(),
        })
    }
}

impl From<Command> for CommandRepr {
    fn from(command: Command) -> Self {
        let mut repr = CommandRepr {
            command_type: command.command_type,
            create_time: command.create_time,
            duration: command.duration,
            user_name: command.user_name,
            error_code: command.error_code,
            new_password: command.new_password,
            reset_password_flags: command.reset_password_flags,
            ..CommandRepr::default()
        };
        match command.params {
            Some(CommandParams::ClearAppsData(p)) => repr.clear_apps_data_params = Some(p),
            Some(CommandParams::StartLostMode(p)) => repr.start_lost_mode_params = Some(p),
            Some(CommandParams::StopLostMode(p)) => repr.stop_lost_mode_params = Some(p),
            Some(CommandParams::AddEsim(p)) => repr.add_esim_params = Some(p),
            Some(CommandParams::RemoveEsim(p)) => repr.remove_esim_params = Some(p),
            Some(CommandParams::RequestDeviceInfo(p)) => {
                repr.request_device_info_params = Some(p)
            }
            Some(CommandParams::Wipe(p)) => repr.wipe_params = Some(p),
            None => {}
        }
        match command.status {
            Some(CommandStatus::ClearAppsData(s)) => repr.clear_apps_data_status = Some(s),
            Some(CommandStatus::StartLostMode(s)) => repr.start_lost_mode_status = Some(s),
            Some(CommandStatus::StopLostMode(s)) => repr.stop_lost_mode_status = Some(s),
            Some(CommandStatus::RequestDeviceInfo(s)) => {
                repr.request_device_info_status = Some(s)
            }
            None => {}
        }
        repr
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandType {
    Lock,
    ResetPassword,
    Reboot,
    RelinquishOwnership,
    ClearAppData,
    StartLostMode,
    StopLostMode,
    AddEsim,
    RemoveEsim,
    RequestDeviceInfo,
    Wipe,
    #[serde(rename = "COMMAND_TYPE_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandErrorCode {
    Unknown,
    ApiLevel,
    ManagementMode,
    InvalidValue,
    Unsupported,
    #[serde(rename = "COMMAND_ERROR_CODE_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResetPasswordFlag {
    RequireEntry,
    DoNotAskCredentialsOnBoot,
    LockNow,
    #[serde(rename = "RESET_PASSWORD_FLAG_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearAppsDataParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_names: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartLostModeParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lost_message: Option<UserFacingMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lost_phone_number: Option<UserFacingMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lost_email_address: Option<UserFacingMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lost_street_address: Option<UserFacingMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lost_organization: Option<UserFacingMessage>,
}

/// No fields; presence alone selects the alternative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopLostModeParams {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddEsimParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activation_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activation_state: Option<ActivationState>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveEsimParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icc_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestDeviceInfoParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_info: Option<DeviceInfoKind>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeviceInfoKind {
    Eid,
    #[serde(rename = "DEVICE_INFO_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WipeParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wipe_data_flags: Option<Vec<WipeDataFlag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wipe_reason: Option<UserFacingMessage>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearAppsDataStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<HashMap<String, PerAppResult>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerAppResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clearing_result: Option<ClearingResult>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClearingResult {
    Success,
    AppNotFound,
    AppProtected,
    ApiLevel,
    #[serde(rename = "CLEARING_RESULT_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartLostModeStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StartLostStatus>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StartLostStatus {
    Success,
    ResetPasswordRecently,
    UserExitLostModeRecently,
    AlreadyInLostMode,
    #[serde(rename = "STATUS_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopLostModeStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StopLostStatus>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StopLostStatus {
    Success,
    NotInLostMode,
    #[serde(rename = "STATUS_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestDeviceInfoStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RequestDeviceStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eid_info: Option<EidInfo>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestDeviceStatus {
    Succeeded,
    PendingUserAction,
    UserDeclined,
    Unsupported,
    #[serde(rename = "STATUS_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EidInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eids: Option<Vec<Eid>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Eid {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eid: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_serializes_type_and_params() {
        let command = Command::with_params(
            CommandType::ClearAppData,
            CommandParams::ClearAppsData(ClearAppsDataParams {
                package_names: Some(vec!["com.example.app".to_string()]),
            }),
        );
        let json = serde_json::to_value(&command).unwrap();
        assert_eq!(json["type"], "CLEAR_APP_DATA");
        assert_eq!(
            json["clearAppsDataParams"]["packageNames"][0],
            "com.example.app"
        );
        assert!(json.get("wipeParams").is_none());
    }

    #[test]
    fn test_plain_command_has_no_params() {
        let command = Command::new(CommandType::Lock);
        let json = serde_json::to_string(&command).unwrap();
        assert_eq!(json, r#"{"type":"LOCK"}"#);
    }

    #[test]
    fn test_multiple_params_rejected() {
        let json = r#"{
            "type": "WIPE",
            "wipeParams": {},
            "clearAppsDataParams": {"packageNames": []}
        }"#;
        let result: Result<Command, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_multiple_statuses_rejected() {
        let json = r#"{
            "type": "STOP_LOST_MODE",
            "stopLostModeStatus": {"status": "SUCCESS"},
            "startLostModeStatus": {"status": "SUCCESS"}
        }"#;
        let result: Result<Command, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_status_roundtrip() {
        let json = r#"{"type":"STOP_LOST_MODE","stopLostModeStatus":{"status":"NOT_IN_LOST_MODE"}}"#;
        let command: Command = serde_json::from_str(json).unwrap();
        match &command.status {
            Some(CommandStatus::StopLostMode(status)) => {
                assert_eq!(status.status, Some(StopLostStatus::NotInLostMode));
            }
            other => panic!("unexpected status: {other:?}"),
        }
        assert_eq!(serde_json::to_string(&command).unwrap(), json);
    }
}
