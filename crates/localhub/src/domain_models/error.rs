//! Bootstrap error taxonomy
//!
//! None of these are fatal. The worst outcome of any of them is being routed
//! back to an earlier onboarding step.

use localhub_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BootstrapError {
    /// A preference store read or write failed. Reads degrade to absent,
    /// writes are dropped.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[from] StoreError),

    /// An asynchronous result arrived after a newer transition was applied
    #[error("stale transition result (issued at seq {issued}, current seq {current})")]
    StaleTransition { issued: u64, current: u64 },

    /// The stored preference is not one of `updates`, `jobs`, `both`
    #[error("invalid stored preference value: {0:?}")]
    InvalidPreferenceValue(String),
}
