//! Centralized path definitions for policyhub
//!
//! ## Layout
//!
//! ```text
//! ~/.config/policyhub/
//! └── config.toml               # Service configuration
//!
//! ~/.local/share/policyhub/
//! ├── policies.toml             # Policy store
//! └── contracts.json            # Published notification contracts
//! ```
//!
//! `$POLICYHUB_CONFIG` overrides the configuration file location.

use std::path::PathBuf;

/// Application directory name
pub const APP_DIR: &str = "policyhub";

/// Environment variable naming an explicit configuration file
pub const CONFIG_ENV: &str = "POLICYHUB_CONFIG";

/// Configuration filename
const CONFIG_FILE: &str = "config.toml";

/// Policy store filename
const POLICIES_FILE: &str = "policies.toml";

/// Published contracts filename
const CONTRACTS_FILE: &str = "contracts.json";

/// Directory holding the configuration file
#[must_use]
pub fn config_dir() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join(APP_DIR)
}

/// Configuration file path, honoring `$POLICYHUB_CONFIG`
#[must_use]
pub fn config_file() -> PathBuf {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => config_dir().join(CONFIG_FILE),
    }
}

/// Directory holding the policy store and published contracts
#[must_use]
pub fn data_dir() -> PathBuf {
    dirs::data_dir().unwrap_or_else(|| PathBuf::from(".")).join(APP_DIR)
}

/// Default policy store path
#[must_use]
pub fn default_policies_file() -> PathBuf {
    data_dir().join(POLICIES_FILE)
}

/// Default published contracts path
#[must_use]
pub fn default_contracts_file() -> PathBuf {
    data_dir().join(CONTRACTS_FILE)
}
