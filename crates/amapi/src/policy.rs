//! The `Policy` resource: per-app policies, kiosk and security settings, and
//! the helpers mirroring the server-side application modification endpoints.

use crate::common::{
    DefaultApplicationScope, DefaultApplicationType, PasswordRequirements, UserFacingMessage,
    WipeDataFlag,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A group of settings governing a managed device and its apps.
///
/// `version` is assigned by the server and incremented on every update; the
/// client never fabricates it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applications: Option<Vec<ApplicationPolicy>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_time_to_lock: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen_capture_disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyguard_disabled_features: Option<Vec<KeyguardDisabledFeature>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_permission_policy: Option<PermissionPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persistent_preferred_activities: Option<Vec<PersistentPreferredActivity>>,
    /// Open Network Configuration blob; schema owned by the ONC spec.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_network_configuration: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_update: Option<SystemUpdate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_types_with_management_disabled: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_user_disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjust_volume_disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factory_reset_disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_apps_disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mount_physical_media_disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_accounts_disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uninstall_apps_disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyguard_disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_api_level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_reporting_settings: Option<StatusReportingSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bluetooth_contact_sharing_disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_support_message: Option<UserFacingMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_support_message: Option<UserFacingMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bluetooth_config_disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell_broadcasts_config_disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials_config_disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_networks_config_disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpn_config_disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_windows_disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_reset_disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outgoing_beam_disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outgoing_calls_disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove_user_disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_location_disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms_disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permitted_input_methods: Option<PackageNameList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stay_on_plugged_modes: Option<Vec<BatteryPluggedMode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_global_proxy: Option<ProxyInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_user_icon_disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_wallpaper_disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choose_private_key_rules: Option<Vec<ChoosePrivateKeyRule>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub always_on_vpn_package: Option<AlwaysOnVpnPackage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frp_admin_emails: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_owner_lock_screen_info: Option<UserFacingMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_roaming_disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_mode: Option<LocationMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_escape_hatch_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bluetooth_disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fun_disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permitted_accessibility_services: Option<PackageNameList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_auto_update_policy: Option<AppAutoUpdatePolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kiosk_custom_launcher_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_first_use_hints_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key_selection_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_policy: Option<EncryptionPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_grants: Option<Vec<PermissionGrant>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub play_store_mode: Option<PlayStoreMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_actions: Option<Vec<SetupAction>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_policies: Option<Vec<PasswordRequirements>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_enforcement_rules: Option<Vec<PolicyEnforcementRule>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kiosk_customization: Option<KioskCustomization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced_security_overrides: Option<AdvancedSecurityOverrides>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_usage_policies: Option<PersonalUsagePolicies>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_date_and_time_zone: Option<AutoDateAndTimeZone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub onc_certificate_providers: Option<Vec<OncCertificateProvider>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_profile_policies: Option<CrossProfilePolicies>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferential_network_service: Option<PreferentialNetworkService>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_log: Option<UsageLog>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera_access: Option<CameraAccess>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub microphone_access: Option<MicrophoneAccess>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_connectivity_management: Option<DeviceConnectivityManagement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_radio_state: Option<DeviceRadioState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_provider_policy_default: Option<CredentialProviderPolicyDefault>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub printing_policy: Option<PrintingPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_settings: Option<DisplaySettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assist_content_policy: Option<AssistContentPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_account_setup_config: Option<WorkAccountSetupConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wipe_data_flags: Option<Vec<WipeDataFlag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_display_name_visibility: Option<EnterpriseDisplayNameVisibility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_functions: Option<AppFunctions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_application_settings: Option<Vec<DefaultApplicationSetting>>,
}

/// Policy for an individual app, keyed by `package_name`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationPolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_type: Option<InstallType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_permission_policy: Option<PermissionPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_grants: Option<Vec<PermissionGrant>>,
    /// Shape dictated by the app's managed properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_configuration: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_version_code: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delegated_scopes: Option<Vec<DelegatedScope>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_configuration_template: Option<ManagedConfigurationTemplate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessible_track_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connected_work_and_personal_app: Option<ConnectedWorkAndPersonalApp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_update_mode: Option<AutoUpdateMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub always_on_vpn_lockdown_exemption: Option<AlwaysOnVpnLockdownExemption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_profile_widgets: Option<WorkProfileWidgets>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_provider_policy: Option<CredentialProviderPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_app_config: Option<CustomAppConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_constraint: Option<Vec<InstallConstraint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_priority: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_control_settings: Option<UserControlSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferential_network_id: Option<PreferentialNetworkId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing_key_certs: Option<Vec<ApplicationSigningKeyCert>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<Role>>,
}

/// One change for `modifyPolicyApplications`: the application entry plus an
/// optional field mask (masks are interpreted server-side).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationPolicyChange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application: Option<ApplicationPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_mask: Option<String>,
}

/// Local mirror of the server's `modifyPolicyApplications` merge, for
/// optimistic updates: a change whose `packageName` matches an existing entry
/// replaces it in place (keeping the order of every other entry); a change
/// with a new package is appended.
pub fn apply_changes(applications: &mut Vec<ApplicationPolicy>, changes: &[ApplicationPolicyChange]) {
    for change in changes {
        let Some(application) = &change.application else {
            continue;
        };
        let slot = applications.iter_mut().find(|existing| {
            existing.package_name.is_some() && existing.package_name == application.package_name
        });
        match slot {
            Some(existing) => *existing = application.clone(),
            None => applications.push(application.clone()),
        }
    }
}

/// Local mirror of `removePolicyApplications`: drops entries whose package
/// name is listed, keeping everything else in order.
pub fn remove_applications(applications: &mut Vec<ApplicationPolicy>, package_names: &[String]) {
    applications.retain(|app| match &app.package_name {
        Some(name) => !package_names.iter().any(|removed| removed == name),
        None => true,
    });
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstallType {
    Preinstalled,
    ForceInstalled,
    Blocked,
    Available,
    RequiredForSetup,
    Custom,
    #[serde(rename = "INSTALL_TYPE_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PermissionPolicy {
    Prompt,
    Grant,
    Deny,
    #[serde(rename = "PERMISSION_POLICY_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionGrant {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<PermissionPolicy>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DelegatedScope {
    CertInstall,
    ManagedConfigurations,
    BlockUninstall,
    PermissionGrant,
    PackageAccess,
    EnableSystemApp,
    NetworkActivityLogs,
    SecurityLogs,
    CertSelection,
    #[serde(rename = "DELEGATED_SCOPE_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedConfigurationTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration_variables: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConnectedWorkAndPersonalApp {
    ConnectedWorkAndPersonalAppDisallowed,
    ConnectedWorkAndPersonalAppAllowed,
    #[serde(rename = "CONNECTED_WORK_AND_PERSONAL_APP_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AutoUpdateMode {
    AutoUpdateDefault,
    AutoUpdatePostponed,
    AutoUpdateHighPriority,
    #[serde(rename = "AUTO_UPDATE_MODE_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlwaysOnVpnLockdownExemption {
    VpnLockdownEnforced,
    VpnLockdownExemption,
    #[serde(rename = "ALWAYS_ON_VPN_LOCKDOWN_EXEMPTION_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkProfileWidgets {
    WorkProfileWidgetsAllowed,
    WorkProfileWidgetsDisallowed,
    #[serde(rename = "WORK_PROFILE_WIDGETS_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CredentialProviderPolicy {
    CredentialProviderAllowed,
    #[serde(rename = "CREDENTIAL_PROVIDER_POLICY_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomAppConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_uninstall_settings: Option<UserUninstallSettings>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserUninstallSettings {
    DisallowUninstallByUser,
    AllowUninstallByUser,
    #[serde(rename = "USER_UNINSTALL_SETTINGS_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallConstraint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_type_constraint: Option<NetworkTypeConstraint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charging_constraint: Option<ChargingConstraint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_idle_constraint: Option<DeviceIdleConstraint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NetworkTypeConstraint {
    InstallOnAnyNetwork,
    InstallOnlyOnUnmeteredNetwork,
    #[serde(rename = "NETWORK_TYPE_CONSTRAINT_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChargingConstraint {
    ChargingNotRequired,
    InstallOnlyWhenCharging,
    #[serde(rename = "CHARGING_CONSTRAINT_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeviceIdleConstraint {
    DeviceIdleNotRequired,
    InstallOnlyWhenDeviceIdle,
    #[serde(rename = "DEVICE_IDLE_CONSTRAINT_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserControlSettings {
    UserControlAllowed,
    UserControlDisallowed,
    #[serde(rename = "USER_CONTROL_SETTINGS_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PreferentialNetworkId {
    NoPreferentialNetwork,
    PreferentialNetworkIdOne,
    PreferentialNetworkIdTwo,
    PreferentialNetworkIdThree,
    PreferentialNetworkIdFour,
    PreferentialNetworkIdFive,
    #[serde(rename = "PREFERENTIAL_NETWORK_ID_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSigningKeyCert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing_key_cert_fingerprint_sha256: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_type: Option<RoleType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleType {
    CompanionApp,
    Kiosk,
    MobileThreatDefenseEndpointDetectionResponse,
    SystemHealthMonitoring,
    #[serde(rename = "ROLE_TYPE_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KeyguardDisabledFeature {
    Camera,
    Notifications,
    UnredactedNotifications,
    TrustAgents,
    DisableFingerprint,
    DisableRemoteInput,
    Face,
    Iris,
    Biometrics,
    Shortcuts,
    AllFeatures,
    #[serde(rename = "KEYGUARD_DISABLED_FEATURE_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistentPreferredActivity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver_activity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemUpdate {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub update_type: Option<SystemUpdateType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_minutes: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_minutes: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_days_without_update: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeze_periods: Option<Vec<FreezePeriod>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SystemUpdateType {
    Automatic,
    Windowed,
    Postpone,
    #[serde(rename = "SYSTEM_UPDATE_TYPE_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreezePeriod {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<PlainDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<PlainDate>,
}

/// Calendar date without a timezone; month/day may be zero when the year is
/// the only significant component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlainDate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReportingSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_reports_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_settings_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub software_info_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_info_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_info_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_info_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_management_events_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware_status_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_properties_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_reporting_settings: Option<ApplicationReportingSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_criteria_mode_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_application_info_reporting_enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationReportingSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_removed_apps: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageNameList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_names: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BatteryPluggedMode {
    Ac,
    Usb,
    Wireless,
    #[serde(rename = "BATTERY_PLUGGED_MODE_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excluded_hosts: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pac_uri: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoosePrivateKeyRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key_alias: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlwaysOnVpnPackage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lockdown_enabled: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LocationMode {
    HighAccuracy,
    SensorsOnly,
    BatterySaving,
    Off,
    LocationUserChoice,
    LocationEnforced,
    LocationDisabled,
    #[serde(rename = "LOCATION_MODE_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppAutoUpdatePolicy {
    ChoiceToTheUser,
    Never,
    WifiOnly,
    Always,
    #[serde(rename = "APP_AUTO_UPDATE_POLICY_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EncryptionPolicy {
    EnabledWithoutPassword,
    EnabledWithPassword,
    #[serde(rename = "ENCRYPTION_POLICY_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayStoreMode {
    Whitelist,
    Blacklist,
    Allowlist,
    #[serde(rename = "PLAY_STORE_MODE_UNSPECIFIED", other)]
    Unspecified,
}

/// An action taken during device setup. The action alternatives form a oneof
/// union on the wire (currently only `launchApp`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<UserFacingMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<UserFacingMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_app: Option<LaunchAppAction>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchAppAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyEnforcementRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_action: Option<BlockAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wipe_action: Option<WipeAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setting_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_after_days: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_scope: Option<BlockScope>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlockScope {
    BlockScopeWorkProfile,
    BlockScopeDevice,
    #[serde(rename = "BLOCK_SCOPE_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WipeAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wipe_after_days: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preserve_frp: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KioskCustomization {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_button_actions: Option<PowerButtonActions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_error_warnings: Option<SystemErrorWarnings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_navigation: Option<SystemNavigation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_bar: Option<StatusBar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_settings: Option<KioskDeviceSettings>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PowerButtonActions {
    PowerButtonAvailable,
    PowerButtonBlocked,
    #[serde(rename = "POWER_BUTTON_ACTIONS_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SystemErrorWarnings {
    ErrorAndWarningsEnabled,
    ErrorAndWarningsMuted,
    #[serde(rename = "SYSTEM_ERROR_WARNINGS_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SystemNavigation {
    NavigationEnabled,
    NavigationDisabled,
    HomeButtonOnly,
    #[serde(rename = "SYSTEM_NAVIGATION_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusBar {
    NotificationsAndSystemInfoEnabled,
    NotificationsAndSystemInfoDisabled,
    SystemInfoOnly,
    #[serde(rename = "STATUS_BAR_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KioskDeviceSettings {
    SettingsAccessAllowed,
    SettingsAccessBlocked,
    #[serde(rename = "SETTINGS_ACCESS_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedSecurityOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub untrusted_apps_policy: Option<UntrustedAppsPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_play_protect_verify_apps: Option<GooglePlayProtectVerifyApps>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer_settings: Option<DeveloperSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_criteria_mode: Option<CommonCriteriaMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_apps_that_can_read_work_notifications: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mte_policy: Option<MtePolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_protection_policy: Option<ContentProtectionPolicy>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UntrustedAppsPolicy {
    DisallowInstall,
    AllowInstallInPersonalProfileOnly,
    AllowInstallDeviceWide,
    #[serde(rename = "UNTRUSTED_APPS_POLICY_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GooglePlayProtectVerifyApps {
    VerifyAppsEnforced,
    VerifyAppsUserChoice,
    #[serde(rename = "GOOGLE_PLAY_PROTECT_VERIFY_APPS_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeveloperSettings {
    DeveloperSettingsDisabled,
    DeveloperSettingsAllowed,
    #[serde(rename = "DEVELOPER_SETTINGS_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommonCriteriaMode {
    CommonCriteriaModeDisabled,
    CommonCriteriaModeEnabled,
    #[serde(rename = "COMMON_CRITERIA_MODE_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MtePolicy {
    MteUserChoice,
    MteEnforced,
    MteDisabled,
    #[serde(rename = "MTE_POLICY_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentProtectionPolicy {
    ContentProtectionDisabled,
    ContentProtectionEnforced,
    ContentProtectionUserChoice,
    #[serde(rename = "CONTENT_PROTECTION_POLICY_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalUsagePolicies {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera_disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen_capture_disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_types_with_management_disabled: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_days_with_work_off: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_play_store_mode: Option<PlayStoreMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_applications: Option<Vec<PersonalApplicationPolicy>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_space_policy: Option<PrivateSpacePolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bluetooth_sharing: Option<BluetoothSharing>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalApplicationPolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_type: Option<InstallType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrivateSpacePolicy {
    PrivateSpaceAllowed,
    PrivateSpaceDisallowed,
    #[serde(rename = "PRIVATE_SPACE_POLICY_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AutoDateAndTimeZone {
    AutoDateAndTimeZoneUserChoice,
    AutoDateAndTimeZoneEnforced,
    #[serde(rename = "AUTO_DATE_AND_TIME_ZONE_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OncCertificateProvider {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_references: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_provider_endpoint: Option<ContentProviderEndpoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentProviderEndpoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing_certs_sha256: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossProfilePolicies {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_work_contacts_in_personal_profile: Option<ShowWorkContactsInPersonalProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_profile_copy_paste: Option<CrossProfileCopyPaste>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_profile_data_sharing: Option<CrossProfileDataSharing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_profile_widgets_default: Option<WorkProfileWidgetsDefault>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exemptions_to_show_work_contacts_in_personal_profile: Option<PackageNameList>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShowWorkContactsInPersonalProfile {
    ShowWorkContactsInPersonalProfileDisallowed,
    ShowWorkContactsInPersonalProfileAllowed,
    ShowWorkContactsInPersonalProfileDisallowedExceptSystem,
    #[serde(rename = "SHOW_WORK_CONTACTS_IN_PERSONAL_PROFILE_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CrossProfileCopyPaste {
    CopyFromWorkToPersonalDisallowed,
    CrossProfileCopyPasteAllowed,
    #[serde(rename = "CROSS_PROFILE_COPY_PASTE_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CrossProfileDataSharing {
    CrossProfileDataSharingDisallowed,
    DataSharingFromWorkToPersonalDisallowed,
    CrossProfileDataSharingAllowed,
    #[serde(rename = "CROSS_PROFILE_DATA_SHARING_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkProfileWidgetsDefault {
    WorkProfileWidgetsDefaultAllowed,
    WorkProfileWidgetsDefaultDisallowed,
    #[serde(rename = "WORK_PROFILE_WIDGETS_DEFAULT_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PreferentialNetworkService {
    PreferentialNetworkServiceDisabled,
    PreferentialNetworkServiceEnabled,
    #[serde(rename = "PREFERENTIAL_NETWORK_SERVICE_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageLog {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_log_types: Option<Vec<LogType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_on_cellular_allowed: Option<Vec<LogType>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogType {
    SecurityLogs,
    NetworkActivityLogs,
    #[serde(rename = "LOG_TYPE_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CameraAccess {
    CameraAccessUserChoice,
    CameraAccessDisabled,
    CameraAccessEnforced,
    #[serde(rename = "CAMERA_ACCESS_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MicrophoneAccess {
    MicrophoneAccessUserChoice,
    MicrophoneAccessDisabled,
    MicrophoneAccessEnforced,
    #[serde(rename = "MICROPHONE_ACCESS_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceConnectivityManagement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usb_data_access: Option<UsbDataAccess>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configure_wifi: Option<ConfigureWifi>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wifi_direct_settings: Option<WifiDirectSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tethering_settings: Option<TetheringSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wifi_ssid_policy: Option<WifiSsidPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wifi_roaming_policy: Option<WifiRoamingPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bluetooth_sharing: Option<BluetoothSharing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferential_network_service_settings: Option<PreferentialNetworkServiceSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apn_policy: Option<ApnPolicy>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UsbDataAccess {
    AllowUsbDataTransfer,
    DisallowUsbFileTransfer,
    DisallowUsbDataTransfer,
    #[serde(rename = "USB_DATA_ACCESS_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigureWifi {
    AllowConfiguringWifi,
    DisallowAddWifiConfig,
    DisallowConfiguringWifi,
    #[serde(rename = "CONFIGURE_WIFI_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WifiDirectSettings {
    AllowWifiDirect,
    DisallowWifiDirect,
    #[serde(rename = "WIFI_DIRECT_SETTINGS_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TetheringSettings {
    AllowAllTethering,
    DisallowWifiTethering,
    DisallowAllTethering,
    #[serde(rename = "TETHERING_SETTINGS_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WifiSsidPolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wifi_ssid_policy_type: Option<WifiSsidPolicyType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wifi_ssids: Option<Vec<WifiSsid>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WifiSsidPolicyType {
    WifiSsidDenylist,
    WifiSsidAllowlist,
    #[serde(rename = "WIFI_SSID_POLICY_TYPE_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WifiSsid {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wifi_ssid: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WifiRoamingPolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wifi_roaming_settings: Option<Vec<WifiRoamingSetting>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WifiRoamingSetting {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wifi_ssid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wifi_roaming_mode: Option<WifiRoamingMode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WifiRoamingMode {
    WifiRoamingDisabled,
    WifiRoamingDefault,
    WifiRoamingAggressive,
    #[serde(rename = "WIFI_ROAMING_MODE_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BluetoothSharing {
    BluetoothSharingAllowed,
    BluetoothSharingDisallowed,
    #[serde(rename = "BLUETOOTH_SHARING_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferentialNetworkServiceSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferential_network_service_configs: Option<Vec<PreferentialNetworkServiceConfig>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_preferential_network_id: Option<PreferentialNetworkId>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferentialNetworkServiceConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferential_network_id: Option<PreferentialNetworkId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_to_default_connection: Option<FallbackToDefaultConnection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_matching_networks: Option<NonMatchingNetworks>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FallbackToDefaultConnection {
    FallbackToDefaultConnectionAllowed,
    FallbackToDefaultConnectionDisallowed,
    #[serde(rename = "FALLBACK_TO_DEFAULT_CONNECTION_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NonMatchingNetworks {
    NonMatchingNetworksAllowed,
    NonMatchingNetworksDisallowed,
    #[serde(rename = "NON_MATCHING_NETWORKS_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApnPolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_apns: Option<OverrideApns>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apn_settings: Option<Vec<ApnSetting>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OverrideApns {
    OverrideApnsDisabled,
    OverrideApnsEnabled,
    #[serde(rename = "OVERRIDE_APNS_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApnSetting {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apn_types: Option<Vec<ApnType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub always_on_setting: Option<AlwaysOnSetting>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_type: Option<ApnAuthType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mms_proxy_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mms_proxy_port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mmsc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mtu_v4: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mtu_v6: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mvno_type: Option<MvnoType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_types: Option<Vec<ApnNetworkType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeric_operator_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<ApnProtocol>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roaming_protocol: Option<ApnProtocol>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_port: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApnType {
    Enterprise,
    Bip,
    Cbs,
    Default,
    Dun,
    Emergency,
    Fota,
    Hipri,
    Ia,
    Ims,
    Mcx,
    Mms,
    Rcs,
    Supl,
    Vsim,
    Xcap,
    #[serde(rename = "APN_TYPE_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlwaysOnSetting {
    NotAlwaysOn,
    AlwaysOn,
    #[serde(rename = "ALWAYS_ON_SETTING_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApnAuthType {
    None,
    Pap,
    Chap,
    PapOrChap,
    #[serde(rename = "AUTH_TYPE_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MvnoType {
    Gid,
    Iccid,
    Imsi,
    Spn,
    #[serde(rename = "MVNO_TYPE_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApnNetworkType {
    Edge,
    Gprs,
    Gsm,
    Hsdpa,
    Hspa,
    Hspap,
    Hsupa,
    Iwlan,
    Lte,
    Nr,
    TdScdma,
    Umts,
    #[serde(rename = "NETWORK_TYPE_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApnProtocol {
    Ip,
    Ipv4v6,
    Ipv6,
    NonIp,
    Ppp,
    Unstructured,
    #[serde(rename = "PROTOCOL_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceRadioState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wifi_state: Option<WifiState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airplane_mode_state: Option<AirplaneModeState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ultra_wideband_state: Option<UltraWidebandState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cellular_two_g_state: Option<CellularTwoGState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_wifi_security_level: Option<MinimumWifiSecurityLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_initiated_add_esim_settings: Option<UserInitiatedAddEsimSettings>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WifiState {
    WifiStateUserChoice,
    WifiEnabled,
    WifiDisabled,
    #[serde(rename = "WIFI_STATE_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AirplaneModeState {
    AirplaneModeUserChoice,
    AirplaneModeDisabled,
    #[serde(rename = "AIRPLANE_MODE_STATE_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UltraWidebandState {
    UltraWidebandUserChoice,
    UltraWidebandDisabled,
    #[serde(rename = "ULTRA_WIDEBAND_STATE_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CellularTwoGState {
    CellularTwoGUserChoice,
    CellularTwoGDisabled,
    #[serde(rename = "CELLULAR_TWO_G_STATE_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MinimumWifiSecurityLevel {
    OpenNetworkSecurity,
    PersonalNetworkSecurity,
    EnterpriseNetworkSecurity,
    #[serde(rename = "ENTERPRISE_BIT192_NETWORK_SECURITY")]
    EnterpriseBit192NetworkSecurity,
    #[serde(rename = "MINIMUM_WIFI_SECURITY_LEVEL_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserInitiatedAddEsimSettings {
    UserInitiatedAddEsimAllowed,
    UserInitiatedAddEsimDisallowed,
    #[serde(rename = "USER_INITIATED_ADD_ESIM_SETTINGS_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CredentialProviderPolicyDefault {
    CredentialProviderDefaultDisallowed,
    CredentialProviderDefaultDisallowedExceptSystem,
    #[serde(rename = "CREDENTIAL_PROVIDER_POLICY_DEFAULT_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrintingPolicy {
    PrintingDisallowed,
    PrintingAllowed,
    #[serde(rename = "PRINTING_POLICY_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen_brightness_settings: Option<ScreenBrightnessSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen_timeout_settings: Option<ScreenTimeoutSettings>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenBrightnessSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen_brightness_mode: Option<ScreenBrightnessMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen_brightness: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScreenBrightnessMode {
    BrightnessUserChoice,
    BrightnessAutomatic,
    BrightnessFixed,
    #[serde(rename = "SCREEN_BRIGHTNESS_MODE_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenTimeoutSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen_timeout_mode: Option<ScreenTimeoutMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen_timeout: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScreenTimeoutMode {
    ScreenTimeoutUserChoice,
    ScreenTimeoutEnforced,
    #[serde(rename = "SCREEN_TIMEOUT_MODE_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssistContentPolicy {
    AssistContentDisallowed,
    AssistContentAllowed,
    #[serde(rename = "ASSIST_CONTENT_POLICY_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkAccountSetupConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_type: Option<AuthenticationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_account_email: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthenticationType {
    AuthenticationTypeNotEnforced,
    GoogleAuthenticated,
    #[serde(rename = "AUTHENTICATION_TYPE_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnterpriseDisplayNameVisibility {
    EnterpriseDisplayNameVisible,
    EnterpriseDisplayNameHidden,
    #[serde(rename = "ENTERPRISE_DISPLAY_NAME_VISIBILITY_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppFunctions {
    AppFunctionsDisallowed,
    AppFunctionsAllowed,
    #[serde(rename = "APP_FUNCTIONS_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultApplicationSetting {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_application_type: Option<DefaultApplicationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_applications: Option<Vec<DefaultApplication>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_application_scopes: Option<Vec<DefaultApplicationScope>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultApplication {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(package: &str, install_type: InstallType) -> ApplicationPolicy {
        ApplicationPolicy {
            package_name: Some(package.to_string()),
            install_type: Some(install_type),
            ..ApplicationPolicy::default()
        }
    }

    fn change(application: ApplicationPolicy) -> ApplicationPolicyChange {
        ApplicationPolicyChange {
            application: Some(application),
            update_mask: None,
        }
    }

    #[test]
    fn test_policy_roundtrip_preserves_fields() {
        let json = r#"{
            "name": "enterprises/e1/policies/kiosk",
            "version": "7",
            "applications": [
                {"packageName": "com.example.kiosk", "installType": "KIOSK_CUSTOM", "managedConfiguration": {"url": "https://example.com"}}
            ],
            "kioskCustomLauncherEnabled": true,
            "openNetworkConfiguration": {"NetworkConfigurations": [{"GUID": "wifi-1"}]},
            "statusReportingSettings": {"applicationReportsEnabled": true}
        }"#;
        let policy: Policy = serde_json::from_str(json).unwrap();
        let reserialized = serde_json::to_value(&policy).unwrap();
        let original: serde_json::Value = serde_json::from_str(json).unwrap();
        // Unknown installType degrades to UNSPECIFIED; everything else must
        // survive untouched, including the opaque ONC blob.
        assert_eq!(reserialized["name"], original["name"]);
        assert_eq!(reserialized["version"], "7");
        assert_eq!(
            reserialized["openNetworkConfiguration"],
            original["openNetworkConfiguration"]
        );
        assert_eq!(
            reserialized["applications"][0]["managedConfiguration"],
            original["applications"][0]["managedConfiguration"]
        );
        assert_eq!(
            policy.applications.as_ref().unwrap()[0].install_type,
            Some(InstallType::Unspecified)
        );
    }

    #[test]
    fn test_policy_serializes_only_set_fields() {
        let policy = Policy {
            name: Some("enterprises/e1/policies/default".to_string()),
            camera_access: Some(CameraAccess::CameraAccessDisabled),
            ..Policy::default()
        };
        let json = serde_json::to_value(&policy).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 2);
        assert_eq!(json["cameraAccess"], "CAMERA_ACCESS_DISABLED");
    }

    #[test]
    fn test_apply_changes_appends_unknown_package() {
        let mut apps = vec![app("com.a", InstallType::ForceInstalled)];
        apply_changes(&mut apps, &[change(app("com.b", InstallType::Available))]);
        assert_eq!(apps.len(), 2);
        assert_eq!(apps[1].package_name.as_deref(), Some("com.b"));
    }

    #[test]
    fn test_apply_changes_replaces_in_place_preserving_order() {
        let mut apps = vec![
            app("com.a", InstallType::ForceInstalled),
            app("com.b", InstallType::Available),
            app("com.c", InstallType::Blocked),
        ];
        apply_changes(&mut apps, &[change(app("com.b", InstallType::Preinstalled))]);
        assert_eq!(apps.len(), 3);
        assert_eq!(apps[0].package_name.as_deref(), Some("com.a"));
        assert_eq!(apps[1].package_name.as_deref(), Some("com.b"));
        assert_eq!(apps[1].install_type, Some(InstallType::Preinstalled));
        assert_eq!(apps[2].package_name.as_deref(), Some("com.c"));
    }

    #[test]
    fn test_remove_applications_filters_by_package() {
        let mut apps = vec![
            app("com.a", InstallType::ForceInstalled),
            app("com.b", InstallType::Available),
            app("com.c", InstallType::Blocked),
        ];
        remove_applications(&mut apps, &["com.a".to_string(), "com.c".to_string()]);
        assert_eq!(apps.len(), 1);
        assert_eq!(apps[0].package_name.as_deref(), Some("com.b"));
    }

    #[test]
    fn test_apn_setting_types_roundtrip() {
        let json = r#"{"apnTypes":["DEFAULT","MMS","ENTERPRISE"],"apn":"internet.example","authType":"CHAP"}"#;
        let setting: ApnSetting = serde_json::from_str(json).unwrap();
        assert_eq!(
            setting.apn_types.as_deref(),
            Some(&[ApnType::Default, ApnType::Mms, ApnType::Enterprise][..])
        );
        assert_eq!(serde_json::to_string(&setting).unwrap(), json);
    }

    #[test]
    fn test_open_enum_fallback_tags() {
        // Unknown tags degrade to the unspecified member; the member itself
        // keeps its exact wire tag.
        let install: InstallType = serde_json::from_str(r#""SOME_FUTURE_TYPE""#).unwrap();
        assert_eq!(install, InstallType::Unspecified);
        assert_eq!(
            serde_json::to_string(&InstallType::Unspecified).unwrap(),
            r#""INSTALL_TYPE_UNSPECIFIED""#
        );
        assert_eq!(
            serde_json::to_string(&ApnType::Unspecified).unwrap(),
            r#""APN_TYPE_UNSPECIFIED""#
        );
    }

    #[test]
    fn test_setup_action_launch_app() {
        let json = r#"{"title":{"defaultMessage":"Install agent"},"launchApp":{"packageName":"com.example.agent"}}"#;
        let action: SetupAction = serde_json::from_str(json).unwrap();
        assert_eq!(
            action.launch_app.as_ref().unwrap().package_name.as_deref(),
            Some("com.example.agent")
        );
        assert_eq!(serde_json::to_string(&action).unwrap(), json);
    }
}
