//! Shared storage doubles for integration tests

#![allow(dead_code)]

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Barrier;
use webext_options::storage::{KeyValueStore, LocalStorage, MemoryStorage, Records};

/// Memory area counting the writes it receives
#[derive(Default)]
pub struct RecordingStore {
    inner: MemoryStorage,
    writes: AtomicUsize,
}

impl RecordingStore {
    pub fn with_records(records: Records) -> Self {
        Self {
            inner: MemoryStorage::with_records(records),
            writes: AtomicUsize::new(0),
        }
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl KeyValueStore for RecordingStore {
    async fn get(&self, key: &str) -> Result<Records> {
        self.inner.get(key).await
    }

    async fn all(&self) -> Result<Records> {
        self.inner.all().await
    }

    async fn set(&self, items: Records) -> Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.set(items).await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.remove(key).await
    }
}

/// Memory area whose first `parties` single-key reads wait for each other,
/// forcing concurrent read-modify-write cycles to interleave
pub struct GatedStore {
    inner: MemoryStorage,
    gate: Barrier,
    gated_reads: AtomicUsize,
}

impl GatedStore {
    pub fn new(parties: usize) -> Self {
        Self {
            inner: MemoryStorage::new(),
            gate: Barrier::new(parties),
            gated_reads: AtomicUsize::new(parties),
        }
    }
}

#[async_trait]
impl KeyValueStore for GatedStore {
    async fn get(&self, key: &str) -> Result<Records> {
        let found = self.inner.get(key).await?;
        let gated = self
            .gated_reads
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if gated {
            self.gate.wait().await;
        }
        Ok(found)
    }

    async fn all(&self) -> Result<Records> {
        self.inner.all().await
    }

    async fn set(&self, items: Records) -> Result<()> {
        self.inner.set(items).await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.inner.remove(key).await
    }
}

pub fn local(area: Arc<dyn KeyValueStore>) -> LocalStorage {
    LocalStorage::new(area)
}
