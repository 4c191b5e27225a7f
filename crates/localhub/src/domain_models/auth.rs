//! Simulated authentication forms
//!
//! There is no credential check. Validation only enforces that the form is
//! complete before the simulated request starts.

use thiserror::Error;

/// Screens of the auth sub-flow
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthScreen {
    #[default]
    Login,
    SignUp,
    ForgotPassword,
    PasswordChanged,
}

/// Editable fields of the auth forms
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthField {
    Name,
    #[default]
    Email,
    Password,
    ConfirmPassword,
}

impl AuthScreen {
    /// Fields shown on this screen, in focus order
    pub fn fields(&self) -> &'static [AuthField] {
        match self {
            AuthScreen::Login => &[AuthField::Email, AuthField::Password],
            AuthScreen::SignUp => &[
                AuthField::Name,
                AuthField::Email,
                AuthField::Password,
                AuthField::ConfirmPassword,
            ],
            AuthScreen::ForgotPassword => &[AuthField::Email],
            AuthScreen::PasswordChanged => &[],
        }
    }
}

/// Form contents shared by all auth screens
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub agree_to_terms: bool,
}

impl AuthForm {
    pub fn field(&self, field: AuthField) -> &str {
        match field {
            AuthField::Name => &self.name,
            AuthField::Email => &self.email,
            AuthField::Password => &self.password,
            AuthField::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn field_mut(&mut self, field: AuthField) -> &mut String {
        match field {
            AuthField::Name => &mut self.name,
            AuthField::Email => &mut self.email,
            AuthField::Password => &mut self.password,
            AuthField::ConfirmPassword => &mut self.confirm_password,
        }
    }
}

/// Form validation errors shown inline on the auth screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Please fill in all fields")]
    FillAllFields,
    #[error("Passwords do not match")]
    PasswordsDoNotMatch,
    #[error("Please agree to the terms and conditions")]
    AgreeToTerms,
    #[error("Please enter your email")]
    EnterEmail,
}

/// Check that the form on `screen` can be submitted
pub fn validate_form(screen: AuthScreen, form: &AuthForm) -> Result<(), AuthError> {
    match screen {
        AuthScreen::Login => {
            if form.email.is_empty() || form.password.is_empty() {
                return Err(AuthError::FillAllFields);
            }
        }
        AuthScreen::SignUp => {
            if form.name.is_empty()
                || form.email.is_empty()
                || form.password.is_empty()
                || form.confirm_password.is_empty()
            {
                return Err(AuthError::FillAllFields);
            }
            if form.password != form.confirm_password {
                return Err(AuthError::PasswordsDoNotMatch);
            }
            if !form.agree_to_terms {
                return Err(AuthError::AgreeToTerms);
            }
        }
        AuthScreen::ForgotPassword => {
            if form.email.is_empty() {
                return Err(AuthError::EnterEmail);
            }
        }
        AuthScreen::PasswordChanged => {}
    }
    Ok(())
}

/// Strength indicator shown under the sign-up password field
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Good,
    Strong,
}

/// Score a password: one point each for length >= 8, an uppercase letter,
/// a digit and a symbol. `None` for an empty password.
pub fn password_strength(password: &str) -> Option<PasswordStrength> {
    if password.is_empty() {
        return None;
    }

    let score = [
        password.chars().count() >= 8,
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ]
    .iter()
    .filter(|met| **met)
    .count();

    Some(match score {
        0 | 1 => PasswordStrength::Weak,
        2 => PasswordStrength::Medium,
        3 => PasswordStrength::Good,
        _ => PasswordStrength::Strong,
    })
}
