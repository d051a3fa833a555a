//! Asynchronous key-value storage areas backing the options
//!
//! A storage area maps option names to plain JSON records. The options layer
//! never talks to an area directly; it goes through [`LocalStorage`], which
//! fails with [`StorageUnavailable`] when no area has been granted.

use anyhow::Result;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

/// Mapping from key to stored record, in the area's enumeration order
pub type Records = Map<String, Value>;

/// Contract every storage area fulfils
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Get the record stored under `key`. The returned mapping is empty when
    /// nothing is stored.
    async fn get(&self, key: &str) -> Result<Records>;

    /// Get every stored record
    async fn all(&self) -> Result<Records>;

    /// Store every record of `items`, replacing existing ones
    async fn set(&self, items: Records) -> Result<()>;

    /// Remove the record stored under `key`. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<()>;
}

/// The storage area cannot be reached, e.g. because the permission to use
/// it has not been granted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageUnavailable {
    reason: String,
}

impl StorageUnavailable {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for StorageUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Storage unavailable: {}", self.reason)
    }
}

impl std::error::Error for StorageUnavailable {}

/// Check whether an error was caused by an unavailable storage area
pub fn is_unavailable(err: &anyhow::Error) -> bool {
    err.chain()
        .any(|cause| cause.downcast_ref::<StorageUnavailable>().is_some())
}

/// Access wrapper around the storage area granted to this process
///
/// Every operation resolves the area first. Without an area the operation
/// fails with [`StorageUnavailable`] before anything is awaited.
#[derive(Clone)]
pub struct LocalStorage {
    area: Option<Arc<dyn KeyValueStore>>,
}

impl LocalStorage {
    /// Wrap a granted storage area
    pub fn new(area: Arc<dyn KeyValueStore>) -> Self {
        Self { area: Some(area) }
    }

    /// Storage without any granted area; every access fails
    pub fn unavailable() -> Self {
        Self { area: None }
    }

    /// Fresh in-memory storage
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    pub fn is_available(&self) -> bool {
        self.area.is_some()
    }

    pub async fn get(&self, key: &str) -> Result<Records> {
        self.storage_area()?.get(key).await
    }

    pub async fn all(&self) -> Result<Records> {
        self.storage_area()?.all().await
    }

    pub async fn set(&self, items: Records) -> Result<()> {
        self.storage_area()?.set(items).await
    }

    pub async fn remove(&self, key: &str) -> Result<()> {
        self.storage_area()?.remove(key).await
    }

    fn storage_area(&self) -> Result<&Arc<dyn KeyValueStore>> {
        self.area.as_ref().ok_or_else(|| {
            StorageUnavailable::new(
                "no storage area available. Has the 'storage' permission been granted?",
            )
            .into()
        })
    }
}

impl fmt::Debug for LocalStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalStorage")
            .field("available", &self.is_available())
            .finish()
    }
}
