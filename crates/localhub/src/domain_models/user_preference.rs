//! User content preference

use crate::domain_models::error::BootstrapError;
use std::fmt;
use std::str::FromStr;

/// What the user wants to see; shapes the main tab layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserPreference {
    Updates,
    Jobs,
    Both,
}

impl UserPreference {
    pub const ALL: [UserPreference; 3] = [
        UserPreference::Updates,
        UserPreference::Jobs,
        UserPreference::Both,
    ];

    /// Value persisted under `userPreference`
    pub fn as_str(&self) -> &'static str {
        match self {
            UserPreference::Updates => "updates",
            UserPreference::Jobs => "jobs",
            UserPreference::Both => "both",
        }
    }

    /// Map the topics picked on the preference screen to a preference
    ///
    /// Returns `None` when nothing is selected.
    pub fn from_topics(topics: &[PreferenceTopic]) -> Option<Self> {
        let updates = topics.contains(&PreferenceTopic::Updates);
        let jobs = topics.contains(&PreferenceTopic::Jobs);
        match (updates, jobs) {
            (true, true) => Some(UserPreference::Both),
            (false, true) => Some(UserPreference::Jobs),
            (true, false) => Some(UserPreference::Updates),
            (false, false) => None,
        }
    }
}

impl FromStr for UserPreference {
    type Err = BootstrapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "updates" => Ok(UserPreference::Updates),
            "jobs" => Ok(UserPreference::Jobs),
            "both" => Ok(UserPreference::Both),
            other => Err(BootstrapError::InvalidPreferenceValue(other.to_string())),
        }
    }
}

impl fmt::Display for UserPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Selectable cards on the preference screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceTopic {
    Updates,
    Jobs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_values() {
        for preference in UserPreference::ALL {
            assert_eq!(preference.as_str().parse::<UserPreference>().unwrap(), preference);
        }
    }

    #[test]
    fn test_parse_unknown_value() {
        let err = "events".parse::<UserPreference>().unwrap_err();
        assert!(matches!(err, BootstrapError::InvalidPreferenceValue(ref v) if v == "events"));
        // Values are case sensitive, like the stored strings
        assert!("Jobs".parse::<UserPreference>().is_err());
    }

    #[test]
    fn test_from_topics() {
        use PreferenceTopic::*;
        assert_eq!(UserPreference::from_topics(&[]), None);
        assert_eq!(UserPreference::from_topics(&[Updates]), Some(UserPreference::Updates));
        assert_eq!(UserPreference::from_topics(&[Jobs]), Some(UserPreference::Jobs));
        assert_eq!(UserPreference::from_topics(&[Jobs, Updates]), Some(UserPreference::Both));
    }
}
