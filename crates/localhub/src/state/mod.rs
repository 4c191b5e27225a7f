//! Application State Module
//!
//! Contains all state types used by the application, organized by flow.

mod app;
mod auth;
mod bootstrap;
mod locale;
mod navigation;
mod preference;
mod splash;

pub use app::AppState;
pub use auth::AuthState;
pub use bootstrap::{BootstrapState, SessionFlags};
pub use locale::LocaleState;
pub use navigation::{ModalVisibility, NavigationState};
pub use preference::PreferenceState;
pub use splash::SplashState;
