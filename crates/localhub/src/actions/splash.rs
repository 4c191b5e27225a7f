//! Splash screen actions

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashAction {
    /// The visible part of the splash is over; the fade-out window starts
    FadeOutStarted,
    /// Splash timer elapsed
    Completed,
}
