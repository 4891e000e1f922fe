//! Typed resource schema for the Android Management API.
//!
//! These types mirror the remote JSON representation byte-for-byte: camelCase
//! field names, SCREAMING_SNAKE enum tags, and optional fields that are
//! omitted from serialized output when unset (the remote PATCH semantics treat
//! an omitted field as "leave unchanged"). Fields the remote API documents as
//! free-form structs are kept as [`serde_json::Value`] so round-trips never
//! drop data.
//!
//! Union ("oneof") fields are modeled as real Rust enums with serde
//! implementations that reject payloads populating more than one alternative.

pub mod application;
pub mod command;
pub mod common;
pub mod device;
pub mod enterprise;
pub mod operation;
pub mod policy;
pub mod usage_log;

pub use application::Application;
pub use command::Command;
pub use device::Device;
pub use enterprise::{EnrollmentToken, Enterprise, SignupUrl, WebToken};
pub use operation::Operation;
pub use policy::{ApplicationPolicy, ApplicationPolicyChange, Policy};
pub use usage_log::{BatchUsageLogEvents, UsageLogEvent};
