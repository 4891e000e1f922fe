//! Client-side session state: the versioned store for fetched resources and
//! the enrollment wizard state machine.
//!
//! Nothing here is global. The host application owns a [`SessionStore`] and
//! an [`EnrollmentFlow`] and decides how to share them (typically behind a
//! lock next to the HTTP client).

pub mod enrollment;
pub mod store;

pub use enrollment::{EnrollmentFlow, TransitionError};
pub use store::{SessionStore, StaleWrite, Versioned};
