//! The `Application` resource: Play catalog metadata for a single package,
//! including the managed properties an admin can pre-configure.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Information about an app available to the enterprise.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<ApplicationPermission>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_properties: Option<Vec<ManagedProperty>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub small_icon_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_tracks: Option<Vec<AppTrackInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub play_store_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distribution_channel: Option<DistributionChannel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_pricing: Option<AppPricing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screenshot_urls: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recent_changes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_android_sdk_version: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_rating: Option<ContentRating>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_countries: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<AppFeature>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_versions: Option<Vec<AppVersion>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationPermission {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A pre-configurable property exposed by the app.
///
/// `BUNDLE_ARRAY` properties nest further properties (at most two levels
/// deep) and carry no default value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedProperty {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub property_type: Option<ManagedPropertyType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entries: Option<Vec<ManagedPropertyEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nested_properties: Option<Vec<ManagedProperty>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ManagedPropertyType {
    Bool,
    String,
    Integer,
    Choice,
    Multiselect,
    Hidden,
    BundleArray,
    Bundle,
    #[serde(rename = "MANAGED_PROPERTY_TYPE_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedPropertyEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppTrackInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_alias: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DistributionChannel {
    PublicGoogleHosted,
    PrivateGoogleHosted,
    PrivateSelfHosted,
    #[serde(rename = "DISTRIBUTION_CHANNEL_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppPricing {
    Free,
    Paid,
    FreeWithInAppPurchase,
    #[serde(rename = "APP_PRICING_UNSPECIFIED", other)]
    Unspecified,
}

/// IARC generic content rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentRating {
    ThreeYears,
    SevenYears,
    TwelveYears,
    FifteenYears,
    EighteenYears,
    #[serde(rename = "CONTENT_RATING_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppFeature {
    VpnApp,
    #[serde(rename = "APP_FEATURE_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppVersion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_code: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub production: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_deserializes_catalog_entry() {
        let json = r#"{
            "name": "enterprises/e1/applications/com.example.app",
            "title": "Example",
            "appPricing": "FREE",
            "distributionChannel": "PUBLIC_GOOGLE_HOSTED",
            "managedProperties": [
                {
                    "key": "server_url",
                    "type": "STRING",
                    "title": "Server URL",
                    "defaultValue": "https://example.com"
                },
                {
                    "key": "accounts",
                    "type": "BUNDLE_ARRAY",
                    "nestedProperties": [{"key": "username", "type": "STRING"}]
                }
            ],
            "appVersions": [{"versionString": "1.4", "versionCode": 140, "production": true}]
        }"#;
        let app: Application = serde_json::from_str(json).unwrap();
        assert_eq!(app.app_pricing, Some(AppPricing::Free));
        let props = app.managed_properties.unwrap();
        assert_eq!(props[0].property_type, Some(ManagedPropertyType::String));
        assert_eq!(
            props[1].nested_properties.as_ref().unwrap()[0].key.as_deref(),
            Some("username")
        );
        assert_eq!(app.app_versions.unwrap()[0].version_code, Some(140));
    }

    #[test]
    fn test_managed_property_type_field_renamed() {
        let prop = ManagedProperty {
            key: Some("flag".to_string()),
            property_type: Some(ManagedPropertyType::Bool),
            ..ManagedProperty::default()
        };
        assert_eq!(
            serde_json::to_string(&prop).unwrap(),
            r#"{"key":"flag","type":"BOOL"}"#
        );
    }

    #[test]
    fn test_unknown_content_rating_degrades() {
        let rating: ContentRating = serde_json::from_str("\"SIXTEEN_YEARS\"").unwrap();
        assert_eq!(rating, ContentRating::Unspecified);
    }
}
