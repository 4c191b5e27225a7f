//! Store assembly
//!
//! Wires the middleware chain in execution order around a fresh store.

use crate::middleware::{
    AuthMiddleware, BootstrapMiddleware, KeyboardMiddleware, LocalizationMiddleware,
    LoggingMiddleware, PreferenceMiddleware, SplashMiddleware,
};
use crate::state::AppState;
use crate::store::Store;
use localhub_config::AppConfig;
use localhub_store::PreferenceStore;
use std::sync::Arc;

/// Build a store with the full middleware chain
///
/// Nothing happens until `BootstrapAction::Start` is dispatched.
pub fn build_store(config: &AppConfig, preferences: Arc<dyn PreferenceStore>) -> Store {
    let mut store = Store::new(AppState::new(&config.default_language));

    store.add_middleware(LoggingMiddleware::new());
    store.add_middleware(KeyboardMiddleware::new());
    store.add_middleware(SplashMiddleware::new(config));
    store.add_middleware(LocalizationMiddleware::new(preferences.clone()));
    store.add_middleware(AuthMiddleware::new(preferences.clone(), config));
    store.add_middleware(PreferenceMiddleware::new(preferences.clone()));
    store.add_middleware(BootstrapMiddleware::new(preferences));

    store
}
