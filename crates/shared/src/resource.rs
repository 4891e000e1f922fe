//! Typed Android Management API resource names.
//!
//! Every remote resource is addressed by a slash-delimited name rooted at an
//! enterprise, e.g. `enterprises/{enterpriseId}/policies/{policyId}`. These
//! newtypes validate the shape once at the boundary so the client layer can
//! build request paths without re-checking.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

lazy_static! {
    /// Path segment ids as the remote API accepts them.
    static ref ID_RE: Regex = Regex::new(r"^[A-Za-z0-9_\-~.]+$").unwrap();
    /// Android package names, e.g. `com.google.android.youtube`.
    static ref PACKAGE_RE: Regex =
        Regex::new(r"^[a-zA-Z][a-zA-Z0-9_]*(\.[a-zA-Z][a-zA-Z0-9_]*)+$").unwrap();
}

/// Error type for resource name parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResourceNameError {
    #[error("Invalid resource name '{got}', expected '{expected}'")]
    InvalidFormat { expected: &'static str, got: String },

    #[error("Invalid id segment '{0}'")]
    InvalidId(String),

    #[error("Invalid package name '{0}'")]
    InvalidPackageName(String),
}

fn check_id(id: &str) -> Result<(), ResourceNameError> {
    if ID_RE.is_match(id) {
        Ok(())
    } else {
        Err(ResourceNameError::InvalidId(id.to_string()))
    }
}

/// Splits `name` into exactly the expected literal/value segments.
///
/// `pattern` alternates literal collection names with `None` placeholders for
/// ids, e.g. `[Some("enterprises"), None, Some("policies"), None]`.
fn split_segments<'a>(
    name: &'a str,
    pattern: &[Option<&'static str>],
    expected: &'static str,
) -> Result<Vec<&'a str>, ResourceNameError> {
    let segments: Vec<&str> = name.split('/').collect();
    if segments.len() != pattern.len() {
        return Err(ResourceNameError::InvalidFormat {
            expected,
            got: name.to_string(),
        });
    }
    let mut ids = Vec::new();
    for (segment, slot) in segments.iter().zip(pattern) {
        match slot {
            Some(literal) => {
                if segment != literal {
                    return Err(ResourceNameError::InvalidFormat {
                        expected,
                        got: name.to_string(),
                    });
                }
            }
            None => {
                check_id(segment)?;
                ids.push(*segment);
            }
        }
    }
    Ok(ids)
}

macro_rules! name_common {
    ($ty:ident) => {
        impl $ty {
            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<$ty> for String {
            fn from(name: $ty) -> String {
                name.0
            }
        }

        impl TryFrom<String> for $ty {
            type Error = ResourceNameError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                $ty::parse(&value)
            }
        }

        impl std::str::FromStr for $ty {
            type Err = ResourceNameError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $ty::parse(s)
            }
        }
    };
}

/// `enterprises/{enterpriseId}`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EnterpriseName(String);

name_common!(EnterpriseName);

impl EnterpriseName {
    pub fn new(enterprise_id: &str) -> Result<Self, ResourceNameError> {
        check_id(enterprise_id)?;
        Ok(Self(format!("enterprises/{enterprise_id}")))
    }

    pub fn parse(name: &str) -> Result<Self, ResourceNameError> {
        split_segments(name, &[Some("enterprises"), None], "enterprises/{id}")?;
        Ok(Self(name.to_string()))
    }

    pub fn enterprise_id(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or_default()
    }

    pub fn policy(&self, policy_id: &str) -> Result<PolicyName, ResourceNameError> {
        check_id(policy_id)?;
        Ok(PolicyName(format!("{}/policies/{policy_id}", self.0)))
    }

    pub fn device(&self, device_id: &str) -> Result<DeviceName, ResourceNameError> {
        check_id(device_id)?;
        Ok(DeviceName(format!("{}/devices/{device_id}", self.0)))
    }

    pub fn enrollment_token(&self, token_id: &str) -> Result<EnrollmentTokenName, ResourceNameError> {
        check_id(token_id)?;
        Ok(EnrollmentTokenName(format!(
            "{}/enrollmentTokens/{token_id}",
            self.0
        )))
    }

    pub fn application(&self, package_name: &str) -> Result<ApplicationName, ResourceNameError> {
        if !PACKAGE_RE.is_match(package_name) {
            return Err(ResourceNameError::InvalidPackageName(
                package_name.to_string(),
            ));
        }
        Ok(ApplicationName(format!(
            "{}/applications/{package_name}",
            self.0
        )))
    }
}

/// `enterprises/{enterpriseId}/policies/{policyId}`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PolicyName(String);

name_common!(PolicyName);

impl PolicyName {
    pub fn parse(name: &str) -> Result<Self, ResourceNameError> {
        split_segments(
            name,
            &[Some("enterprises"), None, Some("policies"), None],
            "enterprises/{id}/policies/{id}",
        )?;
        Ok(Self(name.to_string()))
    }

    /// Resolves either a full policy name or a bare policy id against an
    /// enterprise. The remote API accepts a bare id (no slashes) in
    /// `Device.policyName` patches and infers the rest.
    pub fn resolve(enterprise: &EnterpriseName, value: &str) -> Result<Self, ResourceNameError> {
        if value.contains('/') {
            let name = Self::parse(value)?;
            if name.enterprise_id() != enterprise.enterprise_id() {
                return Err(ResourceNameError::InvalidFormat {
                    expected: "policy under the same enterprise",
                    got: value.to_string(),
                });
            }
            Ok(name)
        } else {
            enterprise.policy(value)
        }
    }

    pub fn enterprise_id(&self) -> &str {
        self.0.split('/').nth(1).unwrap_or_default()
    }

    pub fn policy_id(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or_default()
    }

    pub fn enterprise(&self) -> EnterpriseName {
        EnterpriseName(format!("enterprises/{}", self.enterprise_id()))
    }
}

/// `enterprises/{enterpriseId}/devices/{deviceId}`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DeviceName(String);

name_common!(DeviceName);

impl DeviceName {
    pub fn parse(name: &str) -> Result<Self, ResourceNameError> {
        split_segments(
            name,
            &[Some("enterprises"), None, Some("devices"), None],
            "enterprises/{id}/devices/{id}",
        )?;
        Ok(Self(name.to_string()))
    }

    pub fn enterprise_id(&self) -> &str {
        self.0.split('/').nth(1).unwrap_or_default()
    }

    pub fn device_id(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or_default()
    }

    pub fn enterprise(&self) -> EnterpriseName {
        EnterpriseName(format!("enterprises/{}", self.enterprise_id()))
    }
}

/// `enterprises/{enterpriseId}/enrollmentTokens/{tokenId}`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EnrollmentTokenName(String);

name_common!(EnrollmentTokenName);

impl EnrollmentTokenName {
    pub fn parse(name: &str) -> Result<Self, ResourceNameError> {
        split_segments(
            name,
            &[Some("enterprises"), None, Some("enrollmentTokens"), None],
            "enterprises/{id}/enrollmentTokens/{id}",
        )?;
        Ok(Self(name.to_string()))
    }

    pub fn enterprise_id(&self) -> &str {
        self.0.split('/').nth(1).unwrap_or_default()
    }

    pub fn token_id(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or_default()
    }
}

/// `enterprises/{enterpriseId}/applications/{packageName}`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ApplicationName(String);

name_common!(ApplicationName);

impl ApplicationName {
    pub fn parse(name: &str) -> Result<Self, ResourceNameError> {
        let ids = split_segments(
            name,
            &[Some("enterprises"), None, Some("applications"), None],
            "enterprises/{id}/applications/{packageName}",
        )?;
        if !PACKAGE_RE.is_match(ids[1]) {
            return Err(ResourceNameError::InvalidPackageName(ids[1].to_string()));
        }
        Ok(Self(name.to_string()))
    }

    pub fn package_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enterprise_name_roundtrip() {
        let name = EnterpriseName::new("LC04ab12cd").unwrap();
        assert_eq!(name.as_str(), "enterprises/LC04ab12cd");
        assert_eq!(name.enterprise_id(), "LC04ab12cd");

        let parsed = EnterpriseName::parse("enterprises/LC04ab12cd").unwrap();
        assert_eq!(parsed, name);
    }

    #[test]
    fn test_enterprise_name_rejects_wrong_collection() {
        let result = EnterpriseName::parse("customers/LC04ab12cd");
        assert!(matches!(
            result,
            Err(ResourceNameError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_enterprise_name_rejects_trailing_segments() {
        assert!(EnterpriseName::parse("enterprises/e1/policies/p1").is_err());
        assert!(EnterpriseName::parse("enterprises").is_err());
        assert!(EnterpriseName::parse("enterprises/").is_err());
    }

    #[test]
    fn test_policy_name_parts() {
        let policy = PolicyName::parse("enterprises/e1/policies/default").unwrap();
        assert_eq!(policy.enterprise_id(), "e1");
        assert_eq!(policy.policy_id(), "default");
        assert_eq!(policy.enterprise().as_str(), "enterprises/e1");
    }

    #[test]
    fn test_policy_resolve_bare_id() {
        let enterprise = EnterpriseName::new("e1").unwrap();
        let policy = PolicyName::resolve(&enterprise, "kiosk").unwrap();
        assert_eq!(policy.as_str(), "enterprises/e1/policies/kiosk");
    }

    #[test]
    fn test_policy_resolve_full_name() {
        let enterprise = EnterpriseName::new("e1").unwrap();
        let policy = PolicyName::resolve(&enterprise, "enterprises/e1/policies/kiosk").unwrap();
        assert_eq!(policy.policy_id(), "kiosk");
    }

    #[test]
    fn test_policy_resolve_rejects_foreign_enterprise() {
        let enterprise = EnterpriseName::new("e1").unwrap();
        let result = PolicyName::resolve(&enterprise, "enterprises/e2/policies/kiosk");
        assert!(result.is_err());
    }

    #[test]
    fn test_device_name_parts() {
        let device = DeviceName::parse("enterprises/e1/devices/3f1a").unwrap();
        assert_eq!(device.device_id(), "3f1a");
        assert_eq!(device.enterprise_id(), "e1");
    }

    #[test]
    fn test_enrollment_token_name() {
        let token = EnrollmentTokenName::parse("enterprises/e1/enrollmentTokens/t9").unwrap();
        assert_eq!(token.token_id(), "t9");
        // Collection segment is camelCase on the wire.
        assert!(EnrollmentTokenName::parse("enterprises/e1/enrollmenttokens/t9").is_err());
    }

    #[test]
    fn test_application_name_validates_package() {
        let app =
            ApplicationName::parse("enterprises/e1/applications/com.google.android.youtube")
                .unwrap();
        assert_eq!(app.package_name(), "com.google.android.youtube");

        let result = ApplicationName::parse("enterprises/e1/applications/not a package");
        assert!(result.is_err());
    }

    #[test]
    fn test_serde_as_plain_string() {
        let device = DeviceName::parse("enterprises/e1/devices/3f1a").unwrap();
        let json = serde_json::to_string(&device).unwrap();
        assert_eq!(json, "\"enterprises/e1/devices/3f1a\"");

        let back: DeviceName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, device);

        let bad: Result<DeviceName, _> = serde_json::from_str("\"enterprises/e1\"");
        assert!(bad.is_err());
    }
}
