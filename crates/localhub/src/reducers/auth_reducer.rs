//! Auth sub-flow reducer
//!
//! Screens can be switched freely. While a simulated request is in flight
//! the form is frozen.

use crate::actions::{Action, AuthAction};
use crate::domain_models::{validate_form, AuthField, AuthScreen};
use crate::state::AuthState;

pub fn reduce(mut state: AuthState, action: &Action) -> AuthState {
    let Action::Auth(action) = action else {
        return state;
    };

    match action {
        AuthAction::ShowScreen(screen) => {
            if state.loading {
                return state;
            }
            state.screen = *screen;
            state.error = None;
            state.focus = first_field(*screen);
        }
        AuthAction::FocusNext => {
            let fields = state.screen.fields();
            if !fields.is_empty() {
                let current = fields.iter().position(|f| *f == state.focus).unwrap_or(0);
                state.focus = fields[(current + 1) % fields.len()];
            }
        }
        AuthAction::InputChar(c) => {
            if !state.loading && state.screen.fields().contains(&state.focus) {
                state.form.field_mut(state.focus).push(*c);
                state.error = None;
            }
        }
        AuthAction::Backspace => {
            if !state.loading && state.screen.fields().contains(&state.focus) {
                state.form.field_mut(state.focus).pop();
            }
        }
        AuthAction::ToggleAgreeTerms => {
            if !state.loading {
                state.form.agree_to_terms = !state.form.agree_to_terms;
            }
        }
        AuthAction::Submit => {
            if state.loading {
                return state;
            }
            match validate_form(state.screen, &state.form) {
                Ok(()) if state.screen == AuthScreen::PasswordChanged => {}
                Ok(()) => {
                    state.error = None;
                    state.loading = true;
                }
                Err(err) => {
                    log::debug!("Auth: {} form rejected: {}", screen_name(state.screen), err);
                    state.error = Some(err);
                }
            }
        }
        AuthAction::SocialLogin(_) => {
            if !state.loading {
                state.error = None;
                state.loading = true;
            }
        }
        AuthAction::PasswordResetSent => {
            state.loading = false;
            state.screen = AuthScreen::PasswordChanged;
            state.focus = AuthField::default();
        }
        AuthAction::Authenticated => {
            state.loading = false;
        }
    }

    state
}

fn first_field(screen: AuthScreen) -> AuthField {
    screen.fields().first().copied().unwrap_or_default()
}

fn screen_name(screen: AuthScreen) -> &'static str {
    match screen {
        AuthScreen::Login => "login",
        AuthScreen::SignUp => "sign-up",
        AuthScreen::ForgotPassword => "forgot-password",
        AuthScreen::PasswordChanged => "password-changed",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::AuthError;
    use pretty_assertions::assert_eq;

    fn apply(state: AuthState, actions: &[AuthAction]) -> AuthState {
        actions
            .iter()
            .fold(state, |s, a| reduce(s, &Action::Auth(a.clone())))
    }

    fn type_str(text: &str) -> Vec<AuthAction> {
        text.chars().map(AuthAction::InputChar).collect()
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut actions = type_str("a@b.c");
        actions.push(AuthAction::FocusNext);
        actions.extend(type_str("pw!"));
        actions.push(AuthAction::Backspace);

        let state = apply(AuthState::default(), &actions);
        assert_eq!(state.form.email, "a@b.c");
        assert_eq!(state.form.password, "pw");
    }

    #[test]
    fn test_focus_cycles_within_screen() {
        let state = apply(
            AuthState::default(),
            &[AuthAction::FocusNext, AuthAction::FocusNext],
        );
        assert_eq!(state.focus, AuthField::Email);
    }

    #[test]
    fn test_show_screen_focuses_first_field() {
        let state = apply(
            AuthState::default(),
            &[AuthAction::ShowScreen(AuthScreen::SignUp)],
        );
        assert_eq!(state.screen, AuthScreen::SignUp);
        assert_eq!(state.focus, AuthField::Name);
    }

    #[test]
    fn test_invalid_submit_sets_error() {
        let state = apply(AuthState::default(), &[AuthAction::Submit]);
        assert_eq!(state.error, Some(AuthError::FillAllFields));
        assert!(!state.loading);

        // Typing clears the error
        let state = apply(state, &[AuthAction::InputChar('x')]);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_valid_submit_starts_loading_and_freezes_form() {
        let mut actions = type_str("a@b.c");
        actions.push(AuthAction::FocusNext);
        actions.extend(type_str("pw"));
        actions.push(AuthAction::Submit);
        actions.push(AuthAction::InputChar('z'));
        actions.push(AuthAction::ShowScreen(AuthScreen::SignUp));

        let state = apply(AuthState::default(), &actions);
        assert!(state.loading);
        assert_eq!(state.form.password, "pw");
        assert_eq!(state.screen, AuthScreen::Login);
    }

    #[test]
    fn test_password_reset_shows_confirmation() {
        let mut actions = vec![AuthAction::ShowScreen(AuthScreen::ForgotPassword)];
        actions.extend(type_str("a@b.c"));
        actions.push(AuthAction::Submit);
        actions.push(AuthAction::PasswordResetSent);

        let state = apply(AuthState::default(), &actions);
        assert_eq!(state.screen, AuthScreen::PasswordChanged);
        assert!(!state.loading);
    }

    #[test]
    fn test_social_login_starts_loading() {
        let state = apply(
            AuthState::default(),
            &[AuthAction::SocialLogin("google".to_string())],
        );
        assert!(state.loading);
    }
}
