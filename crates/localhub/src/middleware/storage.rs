//! Storage access for middleware
//!
//! Storage is best-effort. Failed reads degrade to "absent", failed writes
//! are logged and dropped. Nothing here returns an error.

use crate::domain_models::{BootstrapError, Flags, UserPreference};
use localhub_store::{PreferenceStore, StoreKey, TRUE_VALUE};

pub async fn read_or_absent(store: &dyn PreferenceStore, key: StoreKey) -> Option<String> {
    match store.get_key(key).await {
        Ok(value) => value,
        Err(e) => {
            log::warn!(
                "Storage: reading {} failed, treating as absent: {}",
                key,
                BootstrapError::from(e)
            );
            None
        }
    }
}

pub async fn write_or_log(store: &dyn PreferenceStore, key: StoreKey, value: &str) {
    if let Err(e) = store.set_key(key, value).await {
        log::error!(
            "Storage: writing {} failed, continuing: {}",
            key,
            BootstrapError::from(e)
        );
    }
}

pub async fn remove_or_log(store: &dyn PreferenceStore, key: StoreKey) {
    if let Err(e) = store.remove_key(key).await {
        log::error!(
            "Storage: removing {} failed, continuing: {}",
            key,
            BootstrapError::from(e)
        );
    }
}

/// Parse a stored preference, treating unknown values as absent
pub fn parse_preference(raw: Option<String>) -> Option<UserPreference> {
    let raw = raw?;
    match raw.parse::<UserPreference>() {
        Ok(preference) => Some(preference),
        Err(e) => {
            log::warn!("Storage: {}, treating as absent", e);
            None
        }
    }
}

/// Read the three bootstrap flags concurrently
///
/// Nothing is decided until all three reads have completed.
pub async fn read_flags(store: &dyn PreferenceStore) -> Flags {
    let (has_launched, is_authenticated, preference) = tokio::join!(
        read_or_absent(store, StoreKey::HasLaunched),
        read_or_absent(store, StoreKey::IsAuthenticated),
        read_or_absent(store, StoreKey::UserPreference),
    );

    Flags {
        has_launched: has_launched.as_deref() == Some(TRUE_VALUE),
        is_authenticated: is_authenticated.as_deref() == Some(TRUE_VALUE),
        preference: parse_preference(preference),
    }
}

#[cfg(test)]
pub(crate) mod failing {
    use async_trait::async_trait;
    use localhub_store::{MemoryPreferenceStore, PreferenceStore, StoreError, StoreResult};

    /// Memory store whose operations fail for selected keys
    pub struct FailingStore {
        pub inner: MemoryPreferenceStore,
        pub failing_keys: Vec<&'static str>,
    }

    impl FailingStore {
        pub fn new(failing_keys: Vec<&'static str>) -> Self {
            Self {
                inner: MemoryPreferenceStore::new(),
                failing_keys,
            }
        }

        fn check(&self, key: &str) -> StoreResult<()> {
            if self.failing_keys.contains(&key) {
                return Err(StoreError::Unavailable {
                    key: key.to_string(),
                    reason: "simulated failure".to_string(),
                });
            }
            Ok(())
        }
    }

    #[async_trait]
    impl PreferenceStore for FailingStore {
        async fn get(&self, key: &str) -> StoreResult<Option<String>> {
            self.check(key)?;
            self.inner.get(key).await
        }

        async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
            self.check(key)?;
            self.inner.set(key, value).await
        }

        async fn remove(&self, key: &str) -> StoreResult<()> {
            self.check(key)?;
            self.inner.remove(key).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::failing::FailingStore;
    use super::*;
    use localhub_store::MemoryPreferenceStore;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_read_flags_from_store() {
        let store = MemoryPreferenceStore::with_entries([
            ("hasLaunched", "true"),
            ("isAuthenticated", "true"),
            ("userPreference", "jobs"),
        ]);

        let flags = read_flags(&store).await;
        assert_eq!(
            flags,
            Flags {
                has_launched: true,
                is_authenticated: true,
                preference: Some(UserPreference::Jobs),
            }
        );
    }

    #[tokio::test]
    async fn test_only_exact_true_is_truthy() {
        let store = MemoryPreferenceStore::with_entries([
            ("hasLaunched", "TRUE"),
            ("isAuthenticated", "1"),
        ]);
        let flags = read_flags(&store).await;
        assert!(!flags.has_launched);
        assert!(!flags.is_authenticated);
    }

    #[tokio::test]
    async fn test_invalid_preference_is_absent() {
        let store = MemoryPreferenceStore::with_entries([("userPreference", "sports")]);
        assert_eq!(read_flags(&store).await.preference, None);
    }

    #[tokio::test]
    async fn test_failed_reads_degrade_to_absent() {
        let store = FailingStore::new(vec!["isAuthenticated"]);
        store.inner.set("hasLaunched", "true").await.unwrap();

        let flags = read_flags(&store).await;
        assert!(flags.has_launched);
        assert!(!flags.is_authenticated);
    }

    #[tokio::test]
    async fn test_failed_writes_are_swallowed() {
        let store = FailingStore::new(vec!["userLanguage"]);
        write_or_log(&store, StoreKey::UserLanguage, "hi").await;
        remove_or_log(&store, StoreKey::UserLanguage).await;
        assert_eq!(store.inner.get("userLanguage").await.unwrap(), None);
    }
}
