//! Collection of all options persisted in a storage area

use super::option::OptionHandle;
use super::resolve::{materialize, persisted_default};
use super::stored::STANDARD_DEFAULT;
use crate::storage::LocalStorage;
use anyhow::{Context, Result};
use futures::future::try_join_all;

/// Enumerates persisted options and hands out [`OptionHandle`]s
#[derive(Debug, Clone)]
pub struct Options {
    storage: LocalStorage,
}

impl Options {
    pub fn new(storage: LocalStorage) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &LocalStorage {
        &self.storage
    }

    /// Handles on every persisted option, in the storage area's order
    ///
    /// Each handle carries the option's persisted default.
    pub async fn options(&self) -> Result<Vec<OptionHandle>> {
        let all = self
            .storage
            .all()
            .await
            .context("Failed to list options")?;

        Ok(all
            .iter()
            .map(|(name, record)| {
                OptionHandle::with_default(self.storage.clone(), name, persisted_default(record))
            })
            .collect())
    }

    /// Handle on the option `name`, storing it first if it does not exist
    ///
    /// `default_value` (or the standard default) only seeds a new option. For
    /// an existing option the persisted default is used and nothing is written.
    pub async fn option(&self, name: &str, default_value: Option<&str>) -> Result<OptionHandle> {
        let supplied_default = default_value.unwrap_or(STANDARD_DEFAULT);
        let stored = materialize(&self.storage, name, supplied_default).await?;
        Ok(OptionHandle::with_default(
            self.storage.clone(),
            name,
            stored.default_value(),
        ))
    }

    /// Remove the option `name`. Removing an option that does not exist is
    /// not an error.
    pub async fn remove(&self, name: &str) -> Result<()> {
        self.storage
            .remove(name)
            .await
            .with_context(|| format!("Failed to remove option '{}'", name))?;
        log::debug!("Removed option '{}'", name);
        Ok(())
    }

    /// Reset every persisted option to its default, returning how many were reset
    pub async fn reset_all(&self) -> Result<usize> {
        let options = self.options().await?;
        try_join_all(options.iter().map(|option| option.reset())).await?;
        log::info!("Reset {} options to their defaults", options.len());
        Ok(options.len())
    }
}
