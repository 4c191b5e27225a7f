//! Preference storage for localhub
//!
//! This crate provides:
//! - The `PreferenceStore` trait (async get/set/remove over string keys)
//! - The well-known keys the application persists (`StoreKey`)
//! - An in-memory store used by tests and as a fallback
//! - A JSON file-backed store used by the binary

mod error;
mod file;
mod key;
mod memory;
mod store;

pub use error::{StoreError, StoreResult};
pub use file::FilePreferenceStore;
pub use key::{StoreKey, TRUE_VALUE};
pub use memory::MemoryPreferenceStore;
pub use store::PreferenceStore;
