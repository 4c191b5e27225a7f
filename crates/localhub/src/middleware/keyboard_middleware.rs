//! KeyboardMiddleware - translates key presses into phase-aware actions
//!
//! Two layers:
//!
//! ## Layer 1: Priority keys
//! Ctrl+C quits from anywhere, including the splash.
//!
//! ## Layer 2: Phase keymap
//! The bootstrap phase decides which screen is on top, and each screen has
//! its own small keymap. Keys with no meaning on the current screen are
//! dropped.

use super::{BoxFuture, Middleware};
use crate::actions::{
    Action, AuthAction, GlobalAction, LocaleAction, NavigationAction, OnboardingAction,
    PreferenceAction,
};
use crate::dispatcher::Dispatcher;
use crate::domain_models::{
    AuthScreen, BootstrapPhase, DetailScreen, ModalKind, PreferenceTopic, Tab,
    SUPPORTED_LANGUAGES,
};
use crate::state::{AppState, NavigationState};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }

    /// Translate a key into zero or more actions for the current screen
    pub fn translate(key: KeyEvent, state: &AppState) -> Vec<Action> {
        // Layer 1: priority keys
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            log::debug!("KeyboardMiddleware: Ctrl+C - dispatching Quit");
            return vec![Action::Global(GlobalAction::Quit)];
        }

        // Layer 2: phase keymap
        match state.bootstrap.phase {
            BootstrapPhase::Splashing | BootstrapPhase::LoadingFlags => Vec::new(),
            BootstrapPhase::FirstLaunchOnboarding => Self::language_keys(key, state),
            BootstrapPhase::Unauthenticated => Self::auth_keys(key, state),
            BootstrapPhase::AwaitingPreference => Self::preference_keys(key),
            BootstrapPhase::Ready => match &state.navigation {
                Some(navigation) => Self::navigation_keys(key, state, navigation),
                None => Vec::new(),
            },
        }
    }

    fn highlighted_language(state: &AppState) -> Option<String> {
        SUPPORTED_LANGUAGES
            .get(state.locale.cursor)
            .map(|lang| lang.code.to_string())
    }

    fn language_keys(key: KeyEvent, state: &AppState) -> Vec<Action> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                vec![Action::Locale(LocaleAction::MoveCursor(-1))]
            }
            KeyCode::Down | KeyCode::Char('j') => {
                vec![Action::Locale(LocaleAction::MoveCursor(1))]
            }
            KeyCode::Enter => {
                let mut actions: Vec<Action> = Self::highlighted_language(state)
                    .map(|code| Action::Locale(LocaleAction::Select(code)))
                    .into_iter()
                    .collect();
                actions.push(Action::Onboarding(OnboardingAction::Continue));
                actions
            }
            KeyCode::Char('q') | KeyCode::Esc => vec![Action::Global(GlobalAction::Quit)],
            _ => Vec::new(),
        }
    }

    fn auth_keys(key: KeyEvent, state: &AppState) -> Vec<Action> {
        let auth = &state.auth;

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            let action = match key.code {
                KeyCode::Char('l') => AuthAction::ShowScreen(AuthScreen::Login),
                KeyCode::Char('n') => AuthAction::ShowScreen(AuthScreen::SignUp),
                KeyCode::Char('f') => AuthAction::ShowScreen(AuthScreen::ForgotPassword),
                KeyCode::Char('t') => AuthAction::ToggleAgreeTerms,
                KeyCode::Char('g') => AuthAction::SocialLogin("google".to_string()),
                _ => return Vec::new(),
            };
            return vec![Action::Auth(action)];
        }

        if auth.screen == AuthScreen::PasswordChanged {
            return match key.code {
                KeyCode::Enter | KeyCode::Esc => {
                    vec![Action::Auth(AuthAction::ShowScreen(AuthScreen::Login))]
                }
                _ => Vec::new(),
            };
        }

        let action = match key.code {
            KeyCode::Tab | KeyCode::Down => AuthAction::FocusNext,
            KeyCode::Enter => AuthAction::Submit,
            KeyCode::Backspace => AuthAction::Backspace,
            KeyCode::Esc if auth.screen != AuthScreen::Login => {
                AuthAction::ShowScreen(AuthScreen::Login)
            }
            KeyCode::Char(c) => AuthAction::InputChar(c),
            _ => return Vec::new(),
        };
        vec![Action::Auth(action)]
    }

    fn preference_keys(key: KeyEvent) -> Vec<Action> {
        let action = match key.code {
            KeyCode::Char('1') | KeyCode::Char('u') => {
                PreferenceAction::Toggle(PreferenceTopic::Updates)
            }
            KeyCode::Char('2') | KeyCode::Char('j') => {
                PreferenceAction::Toggle(PreferenceTopic::Jobs)
            }
            KeyCode::Enter => PreferenceAction::Submit,
            KeyCode::Char('q') => return vec![Action::Global(GlobalAction::Quit)],
            _ => return Vec::new(),
        };
        vec![Action::Preference(action)]
    }

    fn navigation_keys(
        key: KeyEvent,
        state: &AppState,
        navigation: &NavigationState,
    ) -> Vec<Action> {
        // The profile modal hosts the language list and logout
        if navigation.modals.topmost() == Some(ModalKind::Profile) {
            match key.code {
                KeyCode::Up => return vec![Action::Locale(LocaleAction::MoveCursor(-1))],
                KeyCode::Down => return vec![Action::Locale(LocaleAction::MoveCursor(1))],
                KeyCode::Enter => {
                    return Self::highlighted_language(state)
                        .map(|code| Action::Locale(LocaleAction::Select(code)))
                        .into_iter()
                        .collect();
                }
                KeyCode::Char('l') => {
                    return vec![Action::Navigation(NavigationAction::LogoutRequested)]
                }
                _ => {}
            }
        }

        let action = match key.code {
            KeyCode::Char('q') => return vec![Action::Global(GlobalAction::Quit)],
            KeyCode::Esc | KeyCode::Backspace => NavigationAction::Close,
            KeyCode::Tab | KeyCode::Right => NavigationAction::NextTab,
            KeyCode::BackTab | KeyCode::Left => NavigationAction::PreviousTab,
            KeyCode::Char('/') => NavigationAction::SelectTab(Tab::Search),
            KeyCode::Char('p') => NavigationAction::OpenModal(ModalKind::Profile),
            KeyCode::Char('n') => NavigationAction::OpenModal(ModalKind::Notifications),
            KeyCode::Char('b') => NavigationAction::PushDetail(DetailScreen::Bookmarks),
            KeyCode::Char('$') => NavigationAction::PushDetail(DetailScreen::PaymentHistory),
            KeyCode::Char('c') => {
                return vec![Action::Preference(PreferenceAction::Revisit)];
            }
            KeyCode::Enter => match DetailScreen::for_tab(navigation.active_tab) {
                Some(screen) => NavigationAction::PushDetail(screen),
                None => return Vec::new(),
            },
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let index = (c as usize).wrapping_sub('1' as usize);
                match navigation.layout.tabs().get(index) {
                    Some(tab) => NavigationAction::SelectTab(*tab),
                    None => return Vec::new(),
                }
            }
            _ => return Vec::new(),
        };
        vec![Action::Navigation(action)]
    }
}

impl Default for KeyboardMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle<'a>(
        &'a mut self,
        action: &'a Action,
        state: &'a AppState,
        dispatcher: &'a Dispatcher,
    ) -> BoxFuture<'a, bool> {
        Box::pin(async move {
            let Action::Global(GlobalAction::KeyPressed(key)) = action else {
                return true;
            };

            for translated in Self::translate(*key, state) {
                dispatcher.dispatch(translated);
            }

            // Raw key events never reach the reducer
            false
        })
    }
}
