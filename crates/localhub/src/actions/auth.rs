//! Auth sub-flow actions

use crate::domain_models::AuthScreen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthAction {
    /// Switch between login, sign-up and forgot-password
    ShowScreen(AuthScreen),
    /// Move focus to the next field of the current screen
    FocusNext,
    /// Type a character into the focused field
    InputChar(char),
    /// Delete the last character of the focused field
    Backspace,
    /// Toggle the sign-up terms checkbox
    ToggleAgreeTerms,
    /// Submit the current screen
    Submit,
    /// Sign in through a social platform
    SocialLogin(String),
    /// Simulated password reset finished
    PasswordResetSent,
    /// Simulated login or sign-up finished
    Authenticated,
}
