use crate::actions::{Action, PreferenceAction};
use crate::state::PreferenceState;

/// Reducer for the preference picker
pub fn reduce(mut state: PreferenceState, action: &Action) -> PreferenceState {
    match action {
        Action::Preference(PreferenceAction::Toggle(topic)) => {
            if let Some(index) = state.selected.iter().position(|t| t == topic) {
                state.selected.remove(index);
            } else {
                state.selected.push(*topic);
            }
            state.nothing_selected = false;
        }
        Action::Preference(PreferenceAction::Submit) => {
            state.nothing_selected = state.selected.is_empty();
        }
        _ => {}
    }

    state
}
