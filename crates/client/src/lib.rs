//! HTTP client for the EMM console backend.
//!
//! [`ConsoleClient`] speaks two surfaces of the same backend: the proxied
//! Android Management API under `/v1/...` (resource-oriented, one trait per
//! resource) and the console's own endpoints under `/api/v1/...` (session
//! auth and the account-to-enterprise lookup). Each resource surface is an
//! extension trait implemented on the client, so callers import only what
//! they use.

pub mod applications;
pub mod auth;
pub mod config;
pub mod devices;
pub mod enrollment_tokens;
pub mod enterprises;
pub mod error;
pub mod http;
pub mod operations;
pub mod policies;
pub mod signup_urls;
pub mod telemetry;
pub mod web_tokens;

pub use applications::ApplicationsApi;
pub use auth::{AuthApi, AuthCredentials};
pub use config::Config;
pub use devices::DevicesApi;
pub use enrollment_tokens::EnrollmentTokensApi;
pub use enterprises::{CreateEnterpriseParams, EnterprisesApi};
pub use error::ApiError;
pub use http::ConsoleClient;
pub use operations::{ListOperationsParams, OperationPage, OperationsApi};
pub use policies::PoliciesApi;
pub use signup_urls::{CreateSignupUrlRequest, SignupUrlsApi};
pub use web_tokens::WebTokensApi;
