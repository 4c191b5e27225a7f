//! Event types
//!
//! Events represent facts that have occurred and are broadcast to the
//! middleware chain. The store emits them after a reducer run; reducers never
//! see them.
//!
//! Events use past tense or descriptive names indicating something has happened.

use crate::domain_models::BootstrapPhase;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The bootstrap phase changed; `seq` tags the new transition
    PhaseEntered { phase: BootstrapPhase, seq: u64 },
}
