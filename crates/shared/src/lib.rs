//! Shared utilities for the EMM console workspace.
//!
//! This crate provides functionality used across the other crates:
//! - Typed Android Management API resource names with validation
//! - Page-token pagination types

pub mod pagination;
pub mod resource;
