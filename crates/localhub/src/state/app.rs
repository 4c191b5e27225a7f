//! Application State

use super::{
    AuthState, BootstrapState, LocaleState, NavigationState, PreferenceState, SplashState,
};
use crate::domain_models::DEFAULT_LANGUAGE;

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    pub bootstrap: BootstrapState,
    pub splash: SplashState,
    pub locale: LocaleState,
    pub auth: AuthState,
    pub preference: PreferenceState,
    /// Present only while the bootstrap phase is `Ready`
    pub navigation: Option<NavigationState>,
}

impl AppState {
    pub fn new(default_language: &str) -> Self {
        Self {
            running: true,
            bootstrap: BootstrapState::default(),
            splash: SplashState::default(),
            locale: LocaleState::new(default_language),
            auth: AuthState::default(),
            preference: PreferenceState::default(),
            navigation: None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE)
    }
}
