//! In-memory preference store

use crate::error::{StoreError, StoreResult};
use crate::store::PreferenceStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

/// Preference store backed by a `HashMap`
///
/// Nothing survives the process. Used by tests and as the fallback when
/// no config directory is available.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with entries
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: RwLock::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    fn poisoned(key: &str) -> StoreError {
        StoreError::Unavailable {
            key: key.to_string(),
            reason: "lock poisoned".to_string(),
        }
    }
}

#[async_trait]
impl PreferenceStore for MemoryPreferenceStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let entries = self.entries.read().map_err(|_| Self::poisoned(key))?;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut entries = self.entries.write().map_err(|_| Self::poisoned(key))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> StoreResult<()> {
        let mut entries = self.entries.write().map_err(|_| Self::poisoned(key))?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::StoreKey;

    #[tokio::test]
    async fn test_get_absent_key() {
        let store = MemoryPreferenceStore::new();
        assert_eq!(store.get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let store = MemoryPreferenceStore::new();
        store.set_key(StoreKey::UserPreference, "jobs").await.unwrap();
        store.set_key(StoreKey::UserPreference, "both").await.unwrap();

        assert_eq!(
            store.get_key(StoreKey::UserPreference).await.unwrap(),
            Some("both".to_string())
        );
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let store = MemoryPreferenceStore::with_entries([("isAuthenticated", "true")]);
        store.remove_key(StoreKey::IsAuthenticated).await.unwrap();
        store.remove_key(StoreKey::IsAuthenticated).await.unwrap();

        assert_eq!(store.get_key(StoreKey::IsAuthenticated).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_flag_requires_exact_true() {
        let store = MemoryPreferenceStore::with_entries([
            ("hasLaunched", "true"),
            ("isAuthenticated", "yes"),
        ]);

        assert!(store.get_flag(StoreKey::HasLaunched).await.unwrap());
        assert!(!store.get_flag(StoreKey::IsAuthenticated).await.unwrap());
        assert!(!store.get_flag(StoreKey::UserPreference).await.unwrap());
    }
}
