//! localhub - onboarding bootstrap and main navigation
//!
//! A Redux-style core: actions flow through a middleware chain into pure
//! reducers. The bootstrap phase machine decides whether the user sees the
//! splash, language onboarding, the auth screens, the preference picker or
//! the main tab navigation.

pub mod actions;
pub mod app;
pub mod dispatcher;
pub mod domain_models;
pub mod logger;
pub mod middleware;
pub mod reducers;
pub mod state;
pub mod store;
pub mod views;

pub use app::build_store;
pub use store::Store;
