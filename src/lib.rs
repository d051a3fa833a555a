//! Persistent named options with defaults, kept in an asynchronous
//! key-value storage area.
//!
//! ```no_run
//! # async fn demo() -> anyhow::Result<()> {
//! use webext_options::options::Options;
//! use webext_options::storage::LocalStorage;
//!
//! let options = Options::new(LocalStorage::in_memory());
//! let theme = options.option("theme", Some("dark")).await?;
//! theme.update(|_| "light".to_string()).await?;
//! assert_eq!(theme.value().await?, "light");
//! assert_eq!(theme.default_value().await?, "dark");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod options;
pub mod storage;
