//! Preference capture state

use crate::domain_models::{PreferenceTopic, UserPreference};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferenceState {
    /// Topics in the order they were selected
    pub selected: Vec<PreferenceTopic>,
    /// Submit was pressed with nothing selected
    pub nothing_selected: bool,
}

impl PreferenceState {
    /// Pre-select the topics matching an existing preference
    pub fn from_preference(preference: Option<UserPreference>) -> Self {
        let selected = match preference {
            Some(UserPreference::Updates) => vec![PreferenceTopic::Updates],
            Some(UserPreference::Jobs) => vec![PreferenceTopic::Jobs],
            Some(UserPreference::Both) => vec![PreferenceTopic::Updates, PreferenceTopic::Jobs],
            None => Vec::new(),
        };
        Self {
            selected,
            nothing_selected: false,
        }
    }

    pub fn is_selected(&self, topic: PreferenceTopic) -> bool {
        self.selected.contains(&topic)
    }
}
