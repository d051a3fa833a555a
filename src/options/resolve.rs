//! Value-resolution protocol shared by option handles and the collection
//!
//! An option that is not stored resolves to its supplied default for both
//! value and default. An option that is stored resolves to what is stored:
//! the persisted default always wins over a newly supplied one, which only
//! seeds options that do not exist yet.

use super::stored::StoredOption;
use crate::storage::LocalStorage;
use anyhow::{Context, Result};
use serde_json::Value;

/// Outcome of resolving one option
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// A record is stored under the name
    Stored(StoredOption),
    /// Nothing is stored; seeded from the supplied default
    Seeded(StoredOption),
}

impl Resolved {
    pub fn stored_option(&self) -> &StoredOption {
        match self {
            Resolved::Stored(stored) | Resolved::Seeded(stored) => stored,
        }
    }

    pub fn into_stored_option(self) -> StoredOption {
        match self {
            Resolved::Stored(stored) | Resolved::Seeded(stored) => stored,
        }
    }

    pub fn is_stored(&self) -> bool {
        matches!(self, Resolved::Stored(_))
    }
}

/// Resolve `name` without writing anything
pub async fn resolve(storage: &LocalStorage, name: &str, supplied_default: &str) -> Result<Resolved> {
    let found = storage
        .get(name)
        .await
        .with_context(|| format!("Failed to read option '{}'", name))?;

    Ok(match found.get(name) {
        Some(record) if !record.is_null() => Resolved::Stored(StoredOption::from_record(record)),
        _ => Resolved::Seeded(StoredOption::seeded(supplied_default)),
    })
}

/// Resolve `name` and persist the seeded option if nothing was stored yet
pub async fn materialize(
    storage: &LocalStorage,
    name: &str,
    supplied_default: &str,
) -> Result<StoredOption> {
    let resolved = resolve(storage, name, supplied_default).await?;
    if let Resolved::Seeded(stored) = &resolved {
        write(storage, name, stored).await?;
        log::debug!("Materialized option '{}' with default '{}'", name, stored.default_value());
    }
    Ok(resolved.into_stored_option())
}

/// Persist `stored` under `name`, replacing whatever is there
pub async fn write(storage: &LocalStorage, name: &str, stored: &StoredOption) -> Result<()> {
    let mut items = serde_json::Map::new();
    items.insert(name.to_string(), stored.to_record());
    storage
        .set(items)
        .await
        .with_context(|| format!("Failed to save option '{}'", name))
}

/// Default persisted in `record`, as read back by [`StoredOption::from_record`]
pub fn persisted_default(record: &Value) -> String {
    StoredOption::from_record(record).default_value().to_string()
}
