//! Types shared by several resources: user-facing messages, password
//! requirements, wipe flags and personal-usage settings.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A localizable message shown to the device user.
///
/// `localized_messages` maps BCP 47 language codes to translations;
/// `default_message` is required by the remote API whenever any localized
/// message is provided.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFacingMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localized_messages: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_message: Option<String>,
}

impl UserFacingMessage {
    pub fn plain(message: impl Into<String>) -> Self {
        Self {
            localized_messages: None,
            default_message: Some(message.into()),
        }
    }
}

/// A user belonging to an enterprise, identified by an opaque caller-assigned
/// string (must not contain PII).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_identifier: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AllowPersonalUsage {
    PersonalUsageAllowed,
    PersonalUsageDisallowed,
    PersonalUsageDisallowedUserless,
    #[serde(rename = "ALLOW_PERSONAL_USAGE_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WipeDataFlag {
    PreserveResetProtectionData,
    WipeExternalStorage,
    WipeEsims,
    #[serde(rename = "WIPE_DATA_FLAG_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Ownership {
    CompanyOwned,
    Personal,
    #[serde(rename = "OWNERSHIP_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ManagementMode {
    DeviceOwner,
    ProfileOwner,
    #[serde(rename = "MANAGEMENT_MODE_UNSPECIFIED", other)]
    Unspecified,
}

/// Requirements for the password used to unlock a device or work profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordRequirements {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_minimum_length: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_minimum_letters: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_minimum_lower_case: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_minimum_non_letter: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_minimum_numeric: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_minimum_symbols: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_minimum_upper_case: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_quality: Option<PasswordQuality>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_history_length: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_failed_passwords_for_wipe: Option<i32>,
    /// Duration string, e.g. `"86400s"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_expiration_timeout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_scope: Option<PasswordPolicyScope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_password_unlock: Option<RequirePasswordUnlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unified_lock_settings: Option<UnifiedLockSettings>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PasswordQuality {
    BiometricWeak,
    Something,
    Numeric,
    NumericComplex,
    Alphabetic,
    Alphanumeric,
    Complex,
    ComplexityLow,
    ComplexityMedium,
    ComplexityHigh,
    #[serde(rename = "PASSWORD_QUALITY_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PasswordPolicyScope {
    ScopeDevice,
    ScopeProfile,
    #[serde(rename = "SCOPE_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequirePasswordUnlock {
    UseDefaultDeviceTimeout,
    RequireEveryDay,
    #[serde(rename = "REQUIRE_PASSWORD_UNLOCK_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnifiedLockSettings {
    AllowUnifiedWorkAndPersonalLock,
    RequireSeparateWorkLock,
    #[serde(rename = "UNIFIED_LOCK_SETTINGS_UNSPECIFIED", other)]
    Unspecified,
}

/// Categories for which a default application can be specified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DefaultApplicationType {
    DefaultAssistant,
    DefaultBrowser,
    DefaultCallRedirection,
    DefaultCallScreening,
    DefaultDialer,
    DefaultHome,
    DefaultSms,
    DefaultWallet,
    #[serde(rename = "DEFAULT_APPLICATION_TYPE_UNSPECIFIED", other)]
    Unspecified,
}

/// Profile scope a default-application setting applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DefaultApplicationScope {
    ScopeFullyManaged,
    ScopeWorkProfile,
    ScopePersonalProfile,
    #[serde(rename = "DEFAULT_APPLICATION_SCOPE_UNSPECIFIED", other)]
    Unspecified,
}

/// Activation state of an eSIM on the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivationState {
    Activated,
    NotActivated,
    #[serde(rename = "ACTIVATION_STATE_UNSPECIFIED", other)]
    Unspecified,
}

/// A latitude/longitude pair reported in lost-mode events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_screaming_snake_tags() {
        assert_eq!(
            serde_json::to_string(&ManagementMode::DeviceOwner).unwrap(),
            "\"DEVICE_OWNER\""
        );
        assert_eq!(
            serde_json::to_string(&WipeDataFlag::PreserveResetProtectionData).unwrap(),
            "\"PRESERVE_RESET_PROTECTION_DATA\""
        );
        assert_eq!(
            serde_json::to_string(&AllowPersonalUsage::Unspecified).unwrap(),
            "\"ALLOW_PERSONAL_USAGE_UNSPECIFIED\""
        );
    }

    #[test]
    fn test_unknown_tag_degrades_to_unspecified() {
        let mode: ManagementMode = serde_json::from_str("\"SOME_FUTURE_MODE\"").unwrap();
        assert_eq!(mode, ManagementMode::Unspecified);
    }

    #[test]
    fn test_user_facing_message_skips_none() {
        let msg = UserFacingMessage::plain("Device disabled");
        let json = serde_json::to_string(&msg).unwrap();
        assert_eq!(json, r#"{"defaultMessage":"Device disabled"}"#);
    }

    #[test]
    fn test_password_requirements_camel_case_roundtrip() {
        let json = r#"{"passwordMinimumLength":8,"passwordQuality":"COMPLEX","passwordScope":"SCOPE_PROFILE"}"#;
        let req: PasswordRequirements = serde_json::from_str(json).unwrap();
        assert_eq!(req.password_minimum_length, Some(8));
        assert_eq!(req.password_quality, Some(PasswordQuality::Complex));
        assert_eq!(serde_json::to_string(&req).unwrap(), json);
    }
}
