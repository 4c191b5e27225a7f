use crate::actions::{Action, LocaleAction};
use crate::domain_models::{find_language, SUPPORTED_LANGUAGES};
use crate::state::LocaleState;

/// Reducer for the active language and the language list cursor
pub fn reduce(mut state: LocaleState, action: &Action) -> LocaleState {
    let Action::Locale(action) = action else {
        return state;
    };

    match action {
        LocaleAction::Loaded(code) | LocaleAction::Select(code) => {
            if find_language(code).is_some() {
                state.current = code.clone();
                state.cursor = LocaleState::index_of(code);
            } else {
                log::warn!("Locale: ignoring unsupported language {:?}", code);
            }
        }
        LocaleAction::MoveCursor(delta) => {
            let len = SUPPORTED_LANGUAGES.len() as isize;
            state.cursor = (state.cursor as isize + delta).rem_euclid(len) as usize;
        }
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_select_supported_language() {
        let state = reduce(
            LocaleState::default(),
            &Action::Locale(LocaleAction::Select("kn".to_string())),
        );
        assert_eq!(state.current, "kn");
        assert_eq!(state.cursor, 2);
    }

    #[test]
    fn test_unsupported_language_is_ignored() {
        let state = reduce(
            LocaleState::default(),
            &Action::Locale(LocaleAction::Loaded("fr".to_string())),
        );
        assert_eq!(state, LocaleState::default());
    }

    #[test]
    fn test_cursor_wraps() {
        let state = reduce(
            LocaleState::default(),
            &Action::Locale(LocaleAction::MoveCursor(-1)),
        );
        assert_eq!(state.cursor, SUPPORTED_LANGUAGES.len() - 1);

        let state = reduce(state, &Action::Locale(LocaleAction::MoveCursor(1)));
        assert_eq!(state.cursor, 0);
        // Moving the cursor does not change the language
        assert_eq!(state.current, "en");
    }
}
