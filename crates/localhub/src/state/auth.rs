//! Auth screens state

use crate::domain_models::{AuthError, AuthField, AuthForm, AuthScreen};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub screen: AuthScreen,
    pub form: AuthForm,
    pub focus: AuthField,
    pub error: Option<AuthError>,
    /// A simulated request is in flight
    pub loading: bool,
}
