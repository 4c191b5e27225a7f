//! Actions module
//!
//! All actions in the application using a tagged action architecture.
//! Actions are organized by:
//! - Events, facts that re-enter the middleware chain but never reach reducers
//! - Global actions that affect the entire application
//! - Flow-specific actions targeted at one part of the onboarding or main navigation

pub mod auth;
pub mod bootstrap;
pub mod event;
pub mod global;
pub mod locale;
pub mod navigation;
pub mod onboarding;
pub mod preference;
pub mod splash;

pub use auth::AuthAction;
pub use bootstrap::BootstrapAction;
pub use event::Event;
pub use global::GlobalAction;
pub use locale::LocaleAction;
pub use navigation::NavigationAction;
pub use onboarding::OnboardingAction;
pub use preference::PreferenceAction;
pub use splash::SplashAction;

/// Root action enum - tagged by flow
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Events are facts that re-enter the middleware chain.
    /// Use `Action::event(Event::X)` to create - ensures visibility at call site.
    Event(Event),

    /// Global application actions
    Global(GlobalAction),

    /// Cold-start sequencing
    Bootstrap(BootstrapAction),
    /// Splash timer
    Splash(SplashAction),
    /// First-launch onboarding
    Onboarding(OnboardingAction),
    /// Language selection
    Locale(LocaleAction),
    /// Login / sign-up / forgot-password screens
    Auth(AuthAction),
    /// Preference capture
    Preference(PreferenceAction),
    /// Main tab navigation, modals and detail screens
    Navigation(NavigationAction),

    /// No-op action
    None,
}

impl Action {
    /// Factory method for creating events.
    ///
    /// Using this factory makes event creation visually distinct at the call site,
    /// signaling that the action will re-enter the middleware chain.
    pub fn event(event: Event) -> Action {
        Action::Event(event)
    }
}
