//! Service configuration
//!
//! Loaded from a TOML file (see [`paths::config_file`]). Every section is
//! optional; a missing file yields the defaults.
//!
//! ```toml
//! [store]
//! path = "policies.toml"
//!
//! [contracts]
//! path = "contracts.json"
//!
//! [server]
//! addr = "127.0.0.1:8080"
//! ```
//!
//! Relative paths resolve against the directory of the config file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::paths;

/// Default HTTP bind address
pub const DEFAULT_ADDR: &str = "127.0.0.1:8080";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Policy store settings
    #[serde(default)]
    pub store: StoreConfig,
    /// Contract publication settings
    #[serde(default)]
    pub contracts: ContractsConfig,
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
}

/// Policy store settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Policy file location
    #[serde(default = "paths::default_policies_file")]
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: paths::default_policies_file(),
        }
    }
}

/// Contract publication settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractsConfig {
    /// Where contract definitions are published
    #[serde(default = "paths::default_contracts_file")]
    pub path: PathBuf,
}

impl Default for ContractsConfig {
    fn default() -> Self {
        Self {
            path: paths::default_contracts_file(),
        }
    }
}

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_addr")]
    pub addr: String,
}

fn default_addr() -> String {
    DEFAULT_ADDR.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
        }
    }
}

impl Config {
    /// Load from the default location (`$POLICYHUB_CONFIG` or the user config dir)
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&paths::config_file())
    }

    /// Load from an explicit path; a missing file yields the defaults
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let mut config: Self = toml::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;

        if let Some(base) = path.parent() {
            config.resolve_relative_to(base);
        }
        Ok(config)
    }

    /// Save to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn resolve_relative_to(&mut self, base: &Path) {
        for path in [&mut self.store.path, &mut self.contracts.path] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}
