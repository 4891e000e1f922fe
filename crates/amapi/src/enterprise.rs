//! Enterprise-level resources: the `Enterprise` itself plus the short-lived
//! tokens minted around it (signup URLs, web tokens, enrollment tokens).

use crate::common::{AllowPersonalUsage, UserFacingMessage, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The configuration applied to an enterprise.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enterprise {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_notification_types: Option<Vec<NotificationType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pubsub_topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<ExternalData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms_and_conditions: Option<Vec<TermsAndConditions>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signin_details: Option<Vec<SigninDetail>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<ContactInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_authentication_settings: Option<GoogleAuthenticationSettings>,
}

/// Field subsets returned by enterprise list calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnterpriseView {
    Basic,
    #[serde(rename = "ENTERPRISE_VIEW_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationType {
    Enrollment,
    ComplianceReport,
    StatusReport,
    Command,
    UsageLogs,
    #[serde(rename = "NOTIFICATION_TYPE_UNSPECIFIED", other)]
    Unspecified,
}

/// Externally hosted data, fetched by Google and verified against the hash.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha256_hash: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermsAndConditions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<UserFacingMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<UserFacingMessage>,
}

/// A sign-in method for devices enrolling via the sign-in URL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SigninDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signin_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signin_enrollment_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qr_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_personal_usage: Option<AllowPersonalUsage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_status: Option<SigninDetailDefaultStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_tag: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SigninDetailDefaultStatus {
    SigninDetailDefaultStatusEnabled,
    SigninDetailDefaultStatusDisabled,
    #[serde(rename = "SIGNIN_DETAIL_DEFAULT_STATUS_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_protection_officer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_protection_officer_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_protection_officer_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eu_representative_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eu_representative_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eu_representative_phone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleAuthenticationSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_authentication_required: Option<GoogleAuthenticationRequired>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoogleAuthenticationRequired {
    NotRequired,
    Required,
    #[serde(rename = "GOOGLE_AUTHENTICATION_REQUIRED_UNSPECIFIED", other)]
    Unspecified,
}

/// A one-use URL where an admin registers their enterprise. Its `name` is fed
/// back into the enterprise create call to finish the signup flow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupUrl {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Token granting access to the embeddable managed Google Play web UI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebToken {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_frame_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_features: Option<Vec<WebTokenFeature>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WebTokenFeature {
    PlaySearch,
    PrivateApps,
    WebApps,
    StoreBuilder,
    ManagedConfigurations,
    ZeroTouchCustomerManagement,
    #[serde(rename = "FEATURE_UNSPECIFIED", other)]
    Unspecified,
}

/// A token used to provision a device into the enterprise.
///
/// The `get`/`list` calls return only a partial view (name,
/// expirationTimestamp, allowPersonalUsage, value, qrCode); `policy_name` is
/// echoed back exactly as submitted on create, including a bare policy id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentToken {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Lifetime as a duration string, e.g. `"3600s"`. Defaults to one hour
    /// server-side; maximum 90 days.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qr_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_time_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_personal_usage: Option<AllowPersonalUsage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enrollment_token_policy_name_roundtrip() {
        // A bare policy id survives serialization untouched; the server, not
        // the client, resolves it against the parent enterprise.
        let token = EnrollmentToken {
            policy_name: Some("default".to_string()),
            one_time_only: Some(true),
            ..EnrollmentToken::default()
        };
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(json, r#"{"policyName":"default","oneTimeOnly":true}"#);
        let back: EnrollmentToken = serde_json::from_str(&json).unwrap();
        assert_eq!(back.policy_name.as_deref(), Some("default"));
    }

    #[test]
    fn test_enrollment_token_partial_view() {
        let json = r#"{
            "name": "enterprises/e1/enrollmentTokens/t1",
            "value": "ABCDEF",
            "expirationTimestamp": "2025-06-01T12:00:00Z",
            "allowPersonalUsage": "PERSONAL_USAGE_ALLOWED",
            "qrCode": "{\"android.app.extra.PROVISIONING_DEVICE_ADMIN_COMPONENT_NAME\":\"x\"}"
        }"#;
        let token: EnrollmentToken = serde_json::from_str(json).unwrap();
        assert_eq!(token.value.as_deref(), Some("ABCDEF"));
        assert_eq!(
            token.allow_personal_usage,
            Some(AllowPersonalUsage::PersonalUsageAllowed)
        );
        assert!(token.policy_name.is_none());
    }

    #[test]
    fn test_enterprise_signin_details() {
        let json = r#"{
            "name": "enterprises/e1",
            "enterpriseDisplayName": "Acme",
            "signinDetails": [
                {"signinUrl": "https://enterprise.google.com/android/enroll?et=token", "defaultStatus": "SIGNIN_DETAIL_DEFAULT_STATUS_ENABLED"}
            ]
        }"#;
        let enterprise: Enterprise = serde_json::from_str(json).unwrap();
        let details = enterprise.signin_details.unwrap();
        assert_eq!(
            details[0].default_status,
            Some(SigninDetailDefaultStatus::SigninDetailDefaultStatusEnabled)
        );
    }

    #[test]
    fn test_web_token_features_serialize() {
        let token = WebToken {
            parent_frame_url: Some("https://console.example.com".to_string()),
            enabled_features: Some(vec![
                WebTokenFeature::PlaySearch,
                WebTokenFeature::ManagedConfigurations,
            ]),
            ..WebToken::default()
        };
        let json = serde_json::to_value(&token).unwrap();
        assert_eq!(json["enabledFeatures"][0], "PLAY_SEARCH");
        assert_eq!(json["enabledFeatures"][1], "MANAGED_CONFIGURATIONS");
    }
}
