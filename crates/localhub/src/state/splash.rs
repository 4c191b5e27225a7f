//! Splash Screen State

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplashState {
    /// Fade-out window at the tail of the splash has started
    pub fading: bool,
    /// Current frame of the loading spinner
    pub animation_frame: usize,
}
