//! Bootstrap State

use crate::domain_models::{BootstrapPhase, Flags};

/// Facts learned during this process that override stale storage reads
///
/// If `hasLaunched` or `isAuthenticated` were written this session but a
/// later read fails, the in-memory knowledge wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionFlags {
    pub launched: bool,
    pub authenticated: bool,
}

/// Authoritative in-memory copy of the bootstrap phase
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootstrapState {
    pub phase: BootstrapPhase,
    /// Monotonic transition counter, bumped on every phase change
    pub seq: u64,
    /// Last resolved flag snapshot
    pub flags: Flags,
    pub session: SessionFlags,
}

impl BootstrapState {
    /// Move to `phase` and bump the transition counter
    pub fn enter(&mut self, phase: BootstrapPhase) {
        log::info!(
            "Bootstrap: {} -> {} (seq {})",
            self.phase,
            phase,
            self.seq + 1
        );
        self.phase = phase;
        self.seq += 1;
    }

    /// Combine freshly read flags with what this session already knows
    pub fn merge_session(&self, mut flags: Flags) -> Flags {
        flags.has_launched |= self.session.launched;
        flags.is_authenticated |= self.session.authenticated;
        flags
    }
}
