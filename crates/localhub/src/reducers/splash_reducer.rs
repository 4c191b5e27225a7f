use crate::actions::{Action, GlobalAction, SplashAction};
use crate::domain_models::BootstrapPhase;
use crate::state::SplashState;

/// Reducer for splash screen state.
///
/// The spinner only advances while the splash is on screen.
pub fn reduce(mut state: SplashState, action: &Action, phase: BootstrapPhase) -> SplashState {
    match action {
        Action::Splash(SplashAction::FadeOutStarted) => {
            state.fading = true;
        }
        Action::Global(GlobalAction::Tick) if phase == BootstrapPhase::Splashing => {
            state.animation_frame = state.animation_frame.wrapping_add(1);
        }
        _ => {}
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_advances_spinner_while_splashing() {
        let state = reduce(
            SplashState::default(),
            &Action::Global(GlobalAction::Tick),
            BootstrapPhase::Splashing,
        );
        assert_eq!(state.animation_frame, 1);

        let state = reduce(state, &Action::Global(GlobalAction::Tick), BootstrapPhase::Ready);
        assert_eq!(state.animation_frame, 1);
    }

    #[test]
    fn test_fade_out() {
        let state = reduce(
            SplashState::default(),
            &Action::Splash(SplashAction::FadeOutStarted),
            BootstrapPhase::Splashing,
        );
        assert!(state.fading);
    }
}
