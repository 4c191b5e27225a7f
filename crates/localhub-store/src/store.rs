//! Preference store trait
//!
//! Defines the async key-value contract the bootstrap flow persists its
//! flags through. Implementations are injected as `Arc<dyn PreferenceStore>`.

use crate::error::StoreResult;
use crate::key::{StoreKey, TRUE_VALUE};
use async_trait::async_trait;

/// Async key-value persistence service
///
/// Keys are independent: there is no transaction across keys, and
/// concurrent writes to the same key are last-write-wins.
///
/// # Example
///
/// ```rust,ignore
/// use localhub_store::{PreferenceStore, StoreKey};
///
/// async fn launched(store: &dyn PreferenceStore) -> bool {
///     store.get_flag(StoreKey::HasLaunched).await.unwrap_or(false)
/// }
/// ```
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Read a value, `None` when the key is absent
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Write a value, replacing any previous one
    async fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Remove a key. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> StoreResult<()>;

    async fn get_key(&self, key: StoreKey) -> StoreResult<Option<String>> {
        self.get(key.as_str()).await
    }

    async fn set_key(&self, key: StoreKey, value: &str) -> StoreResult<()> {
        self.set(key.as_str(), value).await
    }

    async fn remove_key(&self, key: StoreKey) -> StoreResult<()> {
        self.remove(key.as_str()).await
    }

    /// `true` only when the stored value is exactly `"true"`
    async fn get_flag(&self, key: StoreKey) -> StoreResult<bool> {
        Ok(self.get_key(key).await?.as_deref() == Some(TRUE_VALUE))
    }

    async fn set_flag(&self, key: StoreKey) -> StoreResult<()> {
        self.set_key(key, TRUE_VALUE).await
    }
}
