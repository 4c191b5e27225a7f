//! Domain models
//!
//! Plain data types and pure functions shared by reducers, middleware and
//! views. Nothing in here touches storage or timers.

pub mod auth;
pub mod bootstrap_phase;
pub mod error;
pub mod language;
pub mod tab_layout;
pub mod user_preference;

pub use auth::{
    password_strength, validate_form, AuthError, AuthField, AuthForm, AuthScreen,
    PasswordStrength,
};
pub use bootstrap_phase::{resolve_flags, BootstrapPhase, Flags};
pub use error::BootstrapError;
pub use language::{find_language, Language, DEFAULT_LANGUAGE, SUPPORTED_LANGUAGES};
pub use tab_layout::{derive_tab_layout, DetailScreen, ModalKind, Tab, TabLayout};
pub use user_preference::{PreferenceTopic, UserPreference};
