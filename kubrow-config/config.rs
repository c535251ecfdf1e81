use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::persistable::load_or_create_default;
use crate::{ConfigError, Persistable};

#[cfg(test)]
#[path = "./config.tests.rs"]
mod config_tests;

pub const APP_NAME: &str = "kubrow";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Vulnerability scanner configuration.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct ScannerConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<PathBuf>,
}

/// Application configuration.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub wide: bool,

    #[serde(default)]
    pub scanner: ScannerConfig,
}

impl Config {
    /// Loads the configuration from a file or creates a default one if the file does not exist.
    pub async fn load_or_create() -> Result<Self, ConfigError> {
        Self::load_or_create_from(&Self::default_path()).await
    }

    /// Loads the configuration from the given `path` or creates a default one there.
    pub async fn load_or_create_from(path: &Path) -> Result<Self, ConfigError> {
        load_or_create_default(path).await
    }

    /// Returns path to the scan report if the scanner is enabled and has one configured.
    pub fn scan_report(&self) -> Option<&Path> {
        if self.scanner.enabled {
            self.scanner.report.as_deref()
        } else {
            None
        }
    }
}

impl Persistable<Config> for Config {
    /// Returns the default configuration path: `HOME/.kubrow/config.yaml`.
    fn default_path() -> PathBuf {
        match std::env::home_dir() {
            Some(path) => path.join(format!(".{APP_NAME}")).join("config.yaml"),
            None => PathBuf::from("config.yaml"),
        }
    }
}
