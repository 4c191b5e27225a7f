//! Bootstrap actions
//!
//! Actions for sequencing the cold start.

use crate::domain_models::Flags;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapAction {
    /// Process entry: show the splash and start its timer
    Start,
    /// Flag reads issued at transition `seq` have all completed
    FlagsLoaded { seq: u64, flags: Flags },
    /// `isAuthenticated` has been cleared after a logout request
    LoggedOut,
}
