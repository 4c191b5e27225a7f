use crate::actions::{Action, NavigationAction};
use crate::state::NavigationState;

/// Reducer for the mounted main navigation.
///
/// `LogoutRequested` is handled by the bootstrap middleware; the navigation
/// is torn down once the phase leaves `Ready`.
pub fn reduce(mut state: NavigationState, action: &Action) -> NavigationState {
    let Action::Navigation(action) = action else {
        return state;
    };

    match action {
        NavigationAction::SelectTab(tab) => state.select_tab(*tab),
        NavigationAction::NextTab => state.step_tab(1),
        NavigationAction::PreviousTab => state.step_tab(-1),
        NavigationAction::OpenModal(kind) => state.open_modal(*kind),
        NavigationAction::CloseModal(kind) => state.close_modal(*kind),
        NavigationAction::PushDetail(screen) => state.push_detail(*screen),
        NavigationAction::PopDetail => {
            state.pop_detail();
        }
        NavigationAction::Close => state.close_top(),
        NavigationAction::LogoutRequested => {}
    }

    state
}
