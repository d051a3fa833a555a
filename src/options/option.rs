//! Handle on a single named option

use super::resolve::{resolve, write};
use super::stored::{StoredOption, STANDARD_DEFAULT};
use crate::storage::LocalStorage;
use anyhow::Result;
use std::fmt;

/// Named option persisted in a storage area
///
/// The handle only captures the name and the default supplied at
/// construction. Every accessor except [`name`](Self::name) reads the storage
/// again, so it always reflects the latest persisted state.
///
/// Reads never write. [`update`](Self::update) and [`reset`](Self::reset) are
/// the only writing operations; each is an independent read followed by a
/// write, so concurrent writers on the same name race and the last write wins.
#[derive(Clone)]
pub struct OptionHandle {
    storage: LocalStorage,
    name: String,
    supplied_default: String,
}

impl OptionHandle {
    /// Handle using the standard default (the empty string)
    pub fn new(storage: LocalStorage, name: impl Into<String>) -> Self {
        Self::with_default(storage, name, STANDARD_DEFAULT)
    }

    /// Handle seeding a not-yet-stored option with `default_value`
    pub fn with_default(
        storage: LocalStorage,
        name: impl Into<String>,
        default_value: impl Into<String>,
    ) -> Self {
        Self {
            storage,
            name: name.into(),
            supplied_default: default_value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Default given at construction; only used while the option is not stored
    pub fn supplied_default(&self) -> &str {
        &self.supplied_default
    }

    /// Current value of the option
    pub async fn value(&self) -> Result<String> {
        Ok(self.resolve().await?.value().to_string())
    }

    /// Default value of the option. A stored default takes precedence over
    /// the supplied one.
    pub async fn default_value(&self) -> Result<String> {
        Ok(self.resolve().await?.default_value().to_string())
    }

    /// Replace the current value by what `update_fn` returns for it
    ///
    /// The default is kept as resolved. An option that was not stored yet is
    /// stored now.
    pub async fn update<F>(&self, update_fn: F) -> Result<()>
    where
        F: FnOnce(&str) -> String + Send,
    {
        let resolved = self.resolve().await?;
        let updated = StoredOption::new(update_fn(resolved.value()), resolved.default_value());
        log::debug!("Updating option '{}' to '{}'", self.name, updated.value());
        write(&self.storage, &self.name, &updated).await
    }

    /// Set the current value back to the resolved default
    pub async fn reset(&self) -> Result<()> {
        let resolved = self.resolve().await?;
        let reset = StoredOption::seeded(resolved.default_value());
        log::debug!("Resetting option '{}' to '{}'", self.name, reset.value());
        write(&self.storage, &self.name, &reset).await
    }

    async fn resolve(&self) -> Result<StoredOption> {
        Ok(resolve(&self.storage, &self.name, &self.supplied_default)
            .await?
            .into_stored_option())
    }
}

impl PartialEq for OptionHandle {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.supplied_default == other.supplied_default
    }
}

impl Eq for OptionHandle {}

impl fmt::Debug for OptionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionHandle")
            .field("name", &self.name)
            .field("supplied_default", &self.supplied_default)
            .finish()
    }
}
