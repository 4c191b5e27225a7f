//! Well-known preference keys

use std::fmt;

/// Value written for boolean flags. Anything else reads as "not set".
pub const TRUE_VALUE: &str = "true";

/// Keys persisted by the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    /// Set once after the first launch
    HasLaunched,
    /// Set on (simulated) login, removed on logout
    IsAuthenticated,
    /// Selected UI language code
    UserLanguage,
    /// One of `updates`, `jobs`, `both`
    UserPreference,
}

impl StoreKey {
    pub const ALL: [StoreKey; 4] = [
        StoreKey::HasLaunched,
        StoreKey::IsAuthenticated,
        StoreKey::UserLanguage,
        StoreKey::UserPreference,
    ];

    /// The string key used by the backing storage
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKey::HasLaunched => "hasLaunched",
            StoreKey::IsAuthenticated => "isAuthenticated",
            StoreKey::UserLanguage => "userLanguage",
            StoreKey::UserPreference => "userPreference",
        }
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
