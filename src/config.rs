use std::path::PathBuf;

use directories::ProjectDirs;
use serde::Deserialize;

use crate::error::{AtelierError, Result};

#[derive(Deserialize, Default)]
pub struct Config {
    pub data_dir: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents =
            std::fs::read_to_string(&config_path).map_err(|e| AtelierError::ConfigRead {
                path: config_path.clone(),
                source: e,
            })?;

        toml::from_str(&contents).map_err(|e| AtelierError::ConfigParse {
            path: config_path,
            source: e,
        })
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "atelier")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(AtelierError::NoConfigDir)
    }

    /// Resolve the data directory: explicit flag beats the env var beats
    /// the config file. `None` means run against the embedded sample
    /// dataset.
    pub fn resolve_data_dir(&self, explicit: Option<PathBuf>) -> Option<PathBuf> {
        explicit
            .or_else(|| std::env::var("ATELIER_DATA_DIR").ok().map(PathBuf::from))
            .or_else(|| self.data_dir.clone())
    }
}
