use crate::actions::{Action, GlobalAction};
use crate::domain_models::BootstrapPhase;
use crate::reducers::{
    auth_reducer, bootstrap_reducer, locale_reducer, navigation_reducer, preference_reducer,
    splash_reducer,
};
use crate::state::{AppState, AuthState, NavigationState, PreferenceState};

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    if let Action::Global(GlobalAction::Quit) = action {
        state.running = false;
        return state;
    }

    let previous_phase = state.bootstrap.phase;
    state.bootstrap = bootstrap_reducer::reduce(state.bootstrap, action);
    let phase = state.bootstrap.phase;

    if phase != previous_phase {
        apply_phase_change(&mut state);
    }

    // Flow reducers only see actions while their screens are mounted
    state.splash = splash_reducer::reduce(state.splash, action, phase);
    state.locale = locale_reducer::reduce(state.locale, action);
    if phase.is_auth_flow() {
        state.auth = auth_reducer::reduce(state.auth, action);
    }
    if phase == BootstrapPhase::AwaitingPreference {
        state.preference = preference_reducer::reduce(state.preference, action);
    }
    if let Some(navigation) = state.navigation.take() {
        state.navigation = Some(navigation_reducer::reduce(navigation, action));
    }

    state
}

/// Mount or tear down per-phase state after a phase change
fn apply_phase_change(state: &mut AppState) {
    let phase = state.bootstrap.phase;

    state.navigation = if phase == BootstrapPhase::Ready {
        Some(NavigationState::mount(state.bootstrap.flags.preference))
    } else {
        None
    };

    if !phase.is_auth_flow() {
        state.auth = AuthState::default();
    }

    if phase == BootstrapPhase::AwaitingPreference {
        state.preference = PreferenceState::from_preference(state.bootstrap.flags.preference);
    }
}
