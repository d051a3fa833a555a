//! In-process storage area

use super::{KeyValueStore, Records};
use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Storage area held in memory, enumerated in insertion order
#[derive(Debug, Default)]
pub struct MemoryStorage {
    records: RwLock<Records>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an area pre-populated with `records`
    pub fn with_records(records: Records) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

#[async_trait]
impl KeyValueStore for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Records> {
        let records = self.records.read().await;
        let mut found = Records::new();
        if let Some(record) = records.get(key) {
            found.insert(key.to_string(), record.clone());
        }
        Ok(found)
    }

    async fn all(&self) -> Result<Records> {
        Ok(self.records.read().await.clone())
    }

    async fn set(&self, items: Records) -> Result<()> {
        let mut records = self.records.write().await;
        for (key, record) in items {
            log::debug!("Stored record for key: {}", key);
            records.insert(key, record);
        }
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        if self.records.write().await.shift_remove(key).is_some() {
            log::debug!("Removed record for key: {}", key);
        }
        Ok(())
    }
}
