//! File-backed preference store
//!
//! Persists all keys as a single JSON object, mirroring the flat key-value
//! layout of mobile local storage. The file is created on first write.

use crate::error::{StoreError, StoreResult};
use crate::store::PreferenceStore;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

/// File name used when the store lives in the config directory
pub const DEFAULT_PREFERENCE_FILE: &str = "preferences.json";

/// Preference store persisted to a JSON file
///
/// Every operation holds `io_lock` so a read never observes a half-written
/// file and writes to the same key apply in call order.
pub struct FilePreferenceStore {
    path: PathBuf,
    io_lock: Mutex<()>,
}

impl FilePreferenceStore {
    /// Create a store with a custom file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            io_lock: Mutex::new(()),
        }
    }

    /// Create a store using the default file name inside `base_dir`
    pub fn with_base_dir(base_dir: impl AsRef<Path>) -> Self {
        Self::new(base_dir.as_ref().join(DEFAULT_PREFERENCE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> StoreResult<BTreeMap<String, String>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    /// Load the entries a write starts from
    ///
    /// A corrupt file is replaced rather than blocking every later write.
    async fn load_for_write(&self) -> StoreResult<BTreeMap<String, String>> {
        match self.load().await {
            Err(StoreError::Corrupt { path, source }) => {
                log::warn!(
                    "Preference file {:?} is corrupt ({}), starting from empty",
                    path,
                    source
                );
                Ok(BTreeMap::new())
            }
            other => other,
        }
    }

    async fn persist(&self, entries: &BTreeMap<String, String>) -> StoreResult<()> {
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await.map_err(io_err)?;
        }

        let json = serde_json::to_string_pretty(entries).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })?;

        fs::write(&self.path, json).await.map_err(io_err)?;
        log::debug!("Saved preferences to {:?}", self.path);
        Ok(())
    }
}

#[async_trait]
impl PreferenceStore for FilePreferenceStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let _guard = self.io_lock.lock().await;
        Ok(self.load().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let _guard = self.io_lock.lock().await;
        let mut entries = self.load_for_write().await?;
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries).await
    }

    async fn remove(&self, key: &str) -> StoreResult<()> {
        let _guard = self.io_lock.lock().await;
        let mut entries = self.load_for_write().await?;
        if entries.remove(key).is_some() {
            self.persist(&entries).await?;
        }
        Ok(())
    }
}
