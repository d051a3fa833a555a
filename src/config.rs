use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::storage::{LocalStorage, MemoryStorage, SqliteStorage};

/// Storage area the options are kept in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// SQLite database file
    #[default]
    Sqlite,
    /// Process memory; nothing survives the process
    Memory,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: Backend,
    /// Database file; defaults to `options.db` in the config directory
    #[serde(default)]
    pub database_path: Option<PathBuf>,
    /// Write log output to this file instead of stderr
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn get_config_dir() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "linux") {
            // Use XDG config directory on Linux
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join("webext-options")
        } else {
            // Use home directory with dot prefix on Windows/Mac
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(".webext-options")
        };

        Ok(config_dir)
    }

    pub fn get_config_path() -> Result<PathBuf> {
        Ok(Self::get_config_dir()?.join("config.toml"))
    }

    /// Load the config from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    /// Load the config from `config_path`. A missing file yields the defaults.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        debug!("Loading config from: {:?}", config_path);

        if !config_path.exists() {
            info!("Config file doesn't exist, using default config");
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        Self::parse(&config_content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        debug!("Loaded config with backend {:?}", config.backend);
        Ok(config)
    }

    /// Database file used by the SQLite backend
    pub fn database_path(&self) -> Result<PathBuf> {
        match &self.database_path {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::get_config_dir()?.join("options.db")),
        }
    }

    /// Open the storage area selected by this config
    pub async fn open_storage(&self) -> Result<LocalStorage> {
        match self.backend {
            Backend::Memory => Ok(LocalStorage::new(Arc::new(MemoryStorage::new()))),
            Backend::Sqlite => {
                let db_path = self.database_path()?;
                if let Some(dir) = db_path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
                    if !dir.exists() {
                        fs::create_dir_all(dir).with_context(|| {
                            format!("Failed to create database directory: {:?}", dir)
                        })?;
                        info!("Created database directory: {:?}", dir);
                    }
                }
                let area = SqliteStorage::connect(&db_path).await?;
                Ok(LocalStorage::new(Arc::new(area)))
            }
        }
    }
}
