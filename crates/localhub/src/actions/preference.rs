//! Preference capture actions

use crate::domain_models::{PreferenceTopic, UserPreference};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceAction {
    /// Toggle a topic card
    Toggle(PreferenceTopic),
    /// Confirm the selected topics
    Submit,
    /// A preference was chosen
    Selected(UserPreference),
    /// Go back from the main app to change the preference
    Revisit,
}
