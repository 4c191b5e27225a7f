use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by preference store implementations
///
/// Callers in the bootstrap flow never surface these to the user: reads
/// degrade to "absent" and writes are logged and dropped.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing storage could not be reached
    #[error("storage unavailable while accessing `{key}`: {reason}")]
    Unavailable { key: String, reason: String },

    /// Reading or writing the preference file failed
    #[error("failed to access preference file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The preference file exists but does not hold a JSON object of strings
    #[error("preference file {path:?} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;
