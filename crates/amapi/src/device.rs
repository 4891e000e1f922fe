//! The `Device` resource and its report substructures.
//!
//! Nearly all of this is read-only telemetry; the only fields a client may
//! patch are `state`, `policyName` and `disabledReason`.

use crate::common::{
    ActivationState, DefaultApplicationScope, DefaultApplicationType, ManagementMode, Ownership,
    PasswordPolicyScope, PasswordRequirements, User, UserFacingMessage,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A device owned by an enterprise.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub management_mode: Option<ManagementMode>,
    /// The only allowable patch values are `ACTIVE` and `DISABLED`; deletion
    /// goes through the delete endpoint instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<DeviceState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_state: Option<DeviceState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_compliant: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_compliance_details: Option<Vec<NonComplianceDetail>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollment_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_status_report_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_policy_sync_time: Option<DateTime<Utc>>,
    /// A bare policy id (no slashes) is accepted in patches; the server
    /// infers the full resource name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_policy_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_policy_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollment_token_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollment_token_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled_reason: Option<UserFacingMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub software_info: Option<SoftwareInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware_info: Option<HardwareInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub displays: Option<Vec<Display>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_reports: Option<Vec<ApplicationReport>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_device_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_info: Option<NetworkInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_info: Option<MemoryInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_events: Option<Vec<MemoryEvent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_management_events: Option<Vec<PowerManagementEvent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware_status_samples: Option<Vec<HardwareStatus>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_settings: Option<DeviceSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_properties: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_posture: Option<SecurityPosture>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ownership: Option<Ownership>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_criteria_mode_info: Option<CommonCriteriaModeInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_password_policies: Option<Vec<PasswordRequirements>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dpc_migration_info: Option<DpcMigrationInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_application_info: Option<Vec<DefaultApplicationInfo>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeviceState {
    Active,
    Disabled,
    Deleted,
    Provisioning,
    Lost,
    PreparingForMigration,
    DeactivatedByDeviceFinance,
    #[serde(rename = "DEVICE_STATE_UNSPECIFIED", other)]
    Unspecified,
}

/// Detail about non-compliance with a single policy setting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NonComplianceDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setting_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_compliance_reason: Option<NonComplianceReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_path: Option<String>,
    /// Type depends on the setting; kept opaque.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installation_failure_reason: Option<InstallationFailureReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specific_non_compliance_reason: Option<SpecificNonComplianceReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specific_non_compliance_context: Option<SpecificNonComplianceContext>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NonComplianceReason {
    ApiLevel,
    ManagementMode,
    UserAction,
    InvalidValue,
    AppNotInstalled,
    Unsupported,
    AppInstalled,
    Pending,
    AppIncompatible,
    AppNotUpdated,
    DeviceIncompatible,
    AppSigningCertMismatch,
    ProjectNotPermitted,
    #[serde(rename = "NON_COMPLIANCE_REASON_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstallationFailureReason {
    InstallationFailureReasonUnknown,
    InProgress,
    NotFound,
    NotCompatibleWithDevice,
    NotApproved,
    PermissionsNotAccepted,
    NotAvailableInCountry,
    NoLicensesRemaining,
    NotEnrolled,
    UserInvalid,
    NetworkErrorUnreliableConnection,
    InsufficientStorage,
    #[serde(rename = "INSTALLATION_FAILURE_REASON_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpecificNonComplianceReason {
    PasswordPoliciesUserCredentialsConfirmationRequired,
    PasswordPoliciesPasswordExpired,
    PasswordPoliciesPasswordNotSufficient,
    OncWifiInvalidValue,
    OncWifiApiLevel,
    OncWifiInvalidEnterpriseConfig,
    OncWifiUserShouldRemoveNetwork,
    OncWifiKeyPairAliasNotCorrespondingToExistingKey,
    PermissibleUsageRestriction,
    RequiredAccountNotInEnterprise,
    DefaultApplicationSettingUnsupportedScopes,
    DefaultApplicationSettingFailedForScope,
    PrivateDnsHostNotServing,
    NewAccountNotInEnterprise,
    #[serde(rename = "SPECIFIC_NON_COMPLIANCE_REASON_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecificNonComplianceContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub onc_wifi_context: Option<OncWifiContext>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_policies_context: Option<PasswordPoliciesContext>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_application_context: Option<DefaultApplicationContext>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OncWifiContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wifi_guid: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordPoliciesContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_policy_scope: Option<PasswordPolicyScope>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultApplicationContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_application_scope: Option<DefaultApplicationScope>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub android_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub android_device_policy_version_code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub android_device_policy_version_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub android_build_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_kernel_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bootloader_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub android_build_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_patch_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_language_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_build_signature: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_update_info: Option<SystemUpdateInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemUpdateInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_status: Option<UpdateStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_received_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UpdateStatus {
    UpdateStatusUnknown,
    UpToDate,
    UnknownUpdateAvailable,
    SecurityUpdateAvailable,
    OsUpdateAvailable,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_baseband_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub battery_shutdown_temperatures: Option<Vec<f32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub battery_throttling_temperatures: Option<Vec<f32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_shutdown_temperatures: Option<Vec<f32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_throttling_temperatures: Option<Vec<f32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpu_shutdown_temperatures: Option<Vec<f32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpu_throttling_temperatures: Option<Vec<f32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skin_shutdown_temperatures: Option<Vec<f32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skin_throttling_temperatures: Option<Vec<f32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_specific_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub euicc_chip_info: Option<Vec<EuiccChipInfo>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EuiccChipInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eid: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Display {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_rate: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<DisplayState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub density: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DisplayState {
    Off,
    On,
    Doze,
    Suspended,
    #[serde(rename = "DISPLAY_STATE_UNSPECIFIED", other)]
    Unspecified,
}

/// Report for one installed app.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_code: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<ApplicationEvent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_sha256_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing_key_cert_fingerprints: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installer_package_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_source: Option<ApplicationSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<ApplicationState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyed_app_states: Option<Vec<KeyedAppState>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_facing_type: Option<UserFacingType>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<ApplicationEventType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationEventType {
    Installed,
    Changed,
    DataCleared,
    Removed,
    Replaced,
    Restarted,
    Pinned,
    Unpinned,
    #[serde(rename = "APPLICATION_EVENT_TYPE_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationSource {
    SystemAppFactoryVersion,
    SystemAppUpdatedVersion,
    InstalledFromPlayStore,
    Custom,
    #[serde(rename = "APPLICATION_SOURCE_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationState {
    Removed,
    Installed,
    #[serde(rename = "APPLICATION_STATE_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyedAppState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_update_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Info,
    Error,
    #[serde(rename = "SEVERITY_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserFacingType {
    NotUserFacing,
    UserFacing,
    #[serde(rename = "USER_FACING_TYPE_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imei: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wifi_mac_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephony_infos: Option<Vec<TelephonyInfo>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelephonyInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icc_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activation_state: Option<ActivationState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_mode: Option<ConfigMode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigMode {
    AdminConfigured,
    UserConfigured,
    #[serde(rename = "CONFIG_MODE_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryInfo {
    /// int64 on the wire, serialized as a string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_ram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_internal_storage: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<MemoryEventType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub byte_count: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemoryEventType {
    RamMeasured,
    InternalStorageMeasured,
    ExternalStorageDetected,
    ExternalStorageRemoved,
    ExternalStorageMeasured,
    #[serde(rename = "MEMORY_EVENT_TYPE_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerManagementEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<PowerManagementEventType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub battery_level: Option<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PowerManagementEventType {
    BatteryLevelCollected,
    PowerConnected,
    PowerDisconnected,
    BatteryLow,
    BatteryOkay,
    BootCompleted,
    Shutdown,
    #[serde(rename = "POWER_MANAGEMENT_EVENT_TYPE_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub battery_temperatures: Option<Vec<f32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_temperatures: Option<Vec<f32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpu_temperatures: Option<Vec<f32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skin_temperatures: Option<Vec<f32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fan_speeds: Option<Vec<f32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_usages: Option<Vec<f32>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_device_secure: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unknown_sources_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub development_settings_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adb_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_encrypted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_status: Option<EncryptionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify_apps_enabled: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EncryptionStatus {
    Unsupported,
    Inactive,
    Activating,
    Active,
    ActiveDefaultKey,
    ActivePerUser,
    #[serde(rename = "ENCRYPTION_STATUS_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityPosture {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_posture: Option<DevicePosture>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posture_details: Option<Vec<PostureDetail>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DevicePosture {
    Secure,
    AtRisk,
    PotentiallyCompromised,
    #[serde(rename = "POSTURE_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostureDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_risk: Option<SecurityRisk>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advice: Option<Vec<UserFacingMessage>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SecurityRisk {
    UnknownOs,
    CompromisedOs,
    HardwareBackedEvaluationFailed,
    #[serde(rename = "SECURITY_RISK_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonCriteriaModeInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_criteria_mode_status: Option<CommonCriteriaModeStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_signature_verification_status: Option<PolicySignatureVerificationStatus>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommonCriteriaModeStatus {
    CommonCriteriaModeStatusUnknown,
    CommonCriteriaModeDisabled,
    CommonCriteriaModeEnabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PolicySignatureVerificationStatus {
    PolicySignatureVerificationDisabled,
    PolicySignatureVerificationSucceeded,
    PolicySignatureVerificationNotSupported,
    PolicySignatureVerificationFailed,
    #[serde(rename = "POLICY_SIGNATURE_VERIFICATION_STATUS_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DpcMigrationInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_dpc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_data: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultApplicationInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_application_type: Option<DefaultApplicationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_application_setting_attempts: Option<Vec<DefaultApplicationSettingAttempt>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultApplicationSettingAttempt {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attempt_outcome: Option<AttemptOutcome>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttemptOutcome {
    Success,
    AppNotInstalled,
    AppSigningCertMismatch,
    OtherFailure,
    #[serde(rename = "ATTEMPT_OUTCOME_UNSPECIFIED", other)]
    Unspecified,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_deserializes_report_payload() {
        let json = r#"{
            "name": "enterprises/e1/devices/3f1a",
            "state": "ACTIVE",
            "appliedState": "ACTIVE",
            "managementMode": "DEVICE_OWNER",
            "policyCompliant": true,
            "policyName": "enterprises/e1/policies/default",
            "apiLevel": 34,
            "hardwareInfo": {"brand": "Google", "model": "Pixel 8", "serialNumber": "XJ1"},
            "softwareInfo": {"androidVersion": "14", "securityPatchLevel": "2024-05-01"},
            "memoryInfo": {"totalRam": "8589934592", "totalInternalStorage": "137438953472"}
        }"#;
        let device: Device = serde_json::from_str(json).unwrap();
        assert_eq!(device.state, Some(DeviceState::Active));
        assert_eq!(device.management_mode, Some(ManagementMode::DeviceOwner));
        assert_eq!(
            device.hardware_info.as_ref().unwrap().model.as_deref(),
            Some("Pixel 8")
        );
        assert_eq!(
            device.memory_info.as_ref().unwrap().total_ram.as_deref(),
            Some("8589934592")
        );
    }

    #[test]
    fn test_patch_body_contains_only_set_fields() {
        let patch = Device {
            state: Some(DeviceState::Disabled),
            disabled_reason: Some(UserFacingMessage::plain("Reported lost")),
            ..Device::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj["state"], "DISABLED");
    }

    #[test]
    fn test_unknown_device_state_degrades() {
        let state: DeviceState = serde_json::from_str("\"SOME_NEW_STATE\"").unwrap();
        assert_eq!(state, DeviceState::Unspecified);
    }

    #[test]
    fn test_non_compliance_current_value_is_opaque() {
        let json = r#"{"settingName":"applications","nonComplianceReason":"APP_NOT_INSTALLED","currentValue":{"nested":[1,2]}}"#;
        let detail: NonComplianceDetail = serde_json::from_str(json).unwrap();
        assert_eq!(
            detail.non_compliance_reason,
            Some(NonComplianceReason::AppNotInstalled)
        );
        assert_eq!(serde_json::to_string(&detail).unwrap(), json);
    }
}
