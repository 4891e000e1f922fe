//! State machine for the enterprise signup and registration wizard.

use shared::resource::EnterpriseName;
use std::mem;
use thiserror::Error;
use tracing::info;

/// An event fired in a state it is not valid in. The flow is left exactly as
/// it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot {event} while in state {state}")]
pub struct TransitionError {
    pub state: &'static str,
    pub event: &'static str,
}

/// Where the user is in the enrollment wizard.
///
/// ```text
/// NoEnterprise -> SignupPending -> TokenEntered -> Registering -> EnterpriseActive
///                                       ^                |
///                                       +--- failure ----+
/// ```
///
/// Registration failure returns to [`TokenEntered`](Self::TokenEntered) with
/// the token intact so the user can retry without redoing signup. Any state
/// may [`reset`](Self::reset) back to the start (logout, abandoned wizard).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EnrollmentFlow {
    #[default]
    NoEnterprise,
    SignupPending {
        signup_url_name: String,
    },
    TokenEntered {
        enterprise_token: String,
    },
    Registering {
        enterprise_token: String,
    },
    EnterpriseActive {
        enterprise_name: EnterpriseName,
    },
}

impl EnrollmentFlow {
    pub fn new() -> Self {
        Self::NoEnterprise
    }

    pub fn state_name(&self) -> &'static str {
        match self {
            Self::NoEnterprise => "NoEnterprise",
            Self::SignupPending { .. } => "SignupPending",
            Self::TokenEntered { .. } => "TokenEntered",
            Self::Registering { .. } => "Registering",
            Self::EnterpriseActive { .. } => "EnterpriseActive",
        }
    }

    /// A signup URL was created; the admin is off completing the Google
    /// signup form.
    pub fn begin_signup(&mut self, signup_url_name: String) -> Result<(), TransitionError> {
        match self {
            Self::NoEnterprise => {
                *self = Self::SignupPending { signup_url_name };
                Ok(())
            }
            _ => Err(self.invalid("begin signup")),
        }
    }

    /// The callback delivered an enterprise token.
    pub fn enter_token(&mut self, enterprise_token: String) -> Result<(), TransitionError> {
        match self {
            Self::SignupPending { .. } => {
                *self = Self::TokenEntered { enterprise_token };
                Ok(())
            }
            _ => Err(self.invalid("enter token")),
        }
    }

    /// The create-enterprise call has been dispatched.
    pub fn begin_registration(&mut self) -> Result<(), TransitionError> {
        match mem::take(self) {
            Self::TokenEntered { enterprise_token } => {
                *self = Self::Registering { enterprise_token };
                Ok(())
            }
            other => {
                *self = other;
                Err(self.invalid("begin registration"))
            }
        }
    }

    /// The enterprise was created; the wizard is done.
    pub fn registration_succeeded(
        &mut self,
        enterprise_name: EnterpriseName,
    ) -> Result<(), TransitionError> {
        match self {
            Self::Registering { .. } => {
                info!(enterprise = %enterprise_name, "enrollment complete");
                *self = Self::EnterpriseActive { enterprise_name };
                Ok(())
            }
            _ => Err(self.invalid("complete registration")),
        }
    }

    /// The create-enterprise call failed. The token is kept so the user can
    /// retry.
    pub fn registration_failed(&mut self) -> Result<(), TransitionError> {
        match mem::take(self) {
            Self::Registering { enterprise_token } => {
                *self = Self::TokenEntered { enterprise_token };
                Ok(())
            }
            other => {
                *self = other;
                Err(self.invalid("fail registration"))
            }
        }
    }

    /// Abandons the wizard from any state.
    pub fn reset(&mut self) {
        *self = Self::NoEnterprise;
    }

    fn invalid(&self, event: &'static str) -> TransitionError {
        TransitionError {
            state: self.state_name(),
            event,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path() {
        let mut flow = EnrollmentFlow::new();
        flow.begin_signup("signupUrls/s1".to_string()).unwrap();
        flow.enter_token("tok-123".to_string()).unwrap();
        flow.begin_registration().unwrap();
        let name = EnterpriseName::parse("enterprises/e1").unwrap();
        flow.registration_succeeded(name.clone()).unwrap();
        assert_eq!(flow, EnrollmentFlow::EnterpriseActive { enterprise_name: name });
    }

    #[test]
    fn test_failure_returns_to_token_entered() {
        let mut flow = EnrollmentFlow::new();
        flow.begin_signup("signupUrls/s1".to_string()).unwrap();
        flow.enter_token("tok-123".to_string()).unwrap();
        flow.begin_registration().unwrap();
        flow.registration_failed().unwrap();
        assert_eq!(
            flow,
            EnrollmentFlow::TokenEntered {
                enterprise_token: "tok-123".to_string()
            }
        );
        // Retry works from here.
        flow.begin_registration().unwrap();
    }

    #[test]
    fn test_invalid_transition_leaves_state_unchanged() {
        let mut flow = EnrollmentFlow::new();
        let err = flow.enter_token("tok".to_string()).unwrap_err();
        assert_eq!(err.state, "NoEnterprise");
        assert_eq!(err.event, "enter token");
        assert_eq!(flow, EnrollmentFlow::NoEnterprise);

        flow.begin_signup("signupUrls/s1".to_string()).unwrap();
        assert!(flow.begin_registration().is_err());
        assert_eq!(flow.state_name(), "SignupPending");
    }

    #[test]
    fn test_reset_from_any_state() {
        let mut flow = EnrollmentFlow::new();
        flow.begin_signup("signupUrls/s1".to_string()).unwrap();
        flow.enter_token("tok".to_string()).unwrap();
        flow.reset();
        assert_eq!(flow, EnrollmentFlow::NoEnterprise);
        // The wizard can start over.
        flow.begin_signup("signupUrls/s2".to_string()).unwrap();
    }
}
