//! Cold-start phases and the flag resolution rule

use crate::domain_models::user_preference::UserPreference;
use std::fmt;

/// Discrete cold-start phase; exactly one is active at a time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BootstrapPhase {
    /// Always entered first, leaves only when the splash timer completes
    #[default]
    Splashing,
    /// Persisted flags are being read, nothing decided yet
    LoadingFlags,
    /// `hasLaunched` was absent: language selection and onboarding run
    FirstLaunchOnboarding,
    /// Launched before but not authenticated
    Unauthenticated,
    /// Authenticated, no preference stored yet
    AwaitingPreference,
    /// Authenticated with a preference: main navigation is mounted
    Ready,
}

impl BootstrapPhase {
    /// Phases in which the login/sign-up/forgot-password screens are live
    pub fn is_auth_flow(&self) -> bool {
        matches!(
            self,
            BootstrapPhase::FirstLaunchOnboarding | BootstrapPhase::Unauthenticated
        )
    }
}

impl fmt::Display for BootstrapPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BootstrapPhase::Splashing => "Splashing",
            BootstrapPhase::LoadingFlags => "LoadingFlags",
            BootstrapPhase::FirstLaunchOnboarding => "FirstLaunchOnboarding",
            BootstrapPhase::Unauthenticated => "Unauthenticated",
            BootstrapPhase::AwaitingPreference => "AwaitingPreference",
            BootstrapPhase::Ready => "Ready",
        };
        f.write_str(name)
    }
}

/// Snapshot of the persisted flags the bootstrap decision depends on
///
/// Failed or unparseable reads are already folded into "absent" here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    pub has_launched: bool,
    pub is_authenticated: bool,
    pub preference: Option<UserPreference>,
}

/// Decide the next phase from the persisted flags
///
/// Precedence: first launch, then authentication, then preference.
pub fn resolve_flags(flags: &Flags) -> BootstrapPhase {
    if !flags.has_launched {
        BootstrapPhase::FirstLaunchOnboarding
    } else if !flags.is_authenticated {
        BootstrapPhase::Unauthenticated
    } else if flags.preference.is_none() {
        BootstrapPhase::AwaitingPreference
    } else {
        BootstrapPhase::Ready
    }
}
