//! Policy file format
//!
//! Policies are kept in one TOML document, grouped by source key:
//!
//! ```toml
//! [[policies.BPNL00000003CML1]]
//! policy_id = "p-7"
//! created_on = "2025-01-01T00:00:00Z"
//! valid_until = "2030-01-01T00:00:00Z"
//! ```

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::models::GroupedPolicies;

/// Errors raised by the file-backed store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No policy with this ID exists
    #[error("policy not found: {0}")]
    NotFound(String),

    /// A policy with this ID already exists
    #[error("policy already exists: {0}")]
    Duplicate(String),

    /// Reading or writing the policy file failed
    #[error("policy file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The policy file is not valid TOML
    #[error("invalid policy file: {0}")]
    Parse(#[from] toml::de::Error),

    /// The policies could not be encoded
    #[error("failed to encode policy file: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// On-disk representation of the store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyFile {
    /// Policies by source key
    #[serde(default)]
    pub policies: GroupedPolicies,
}

/// Load the policy file, treating a missing file as an empty store
pub fn load_file(path: &Path) -> Result<PolicyFile, StoreError> {
    if !path.exists() {
        return Ok(PolicyFile::default());
    }
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Write the policy file, creating parent directories as needed
///
/// The document is written to a sibling temp file and renamed over the
/// store, so readers never see a partially written file.
pub fn save_file(path: &Path, file: &PolicyFile) -> Result<(), StoreError> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)?;
    }
    let content = toml::to_string_pretty(file)?;

    let tmp = temp_path(path);
    fs::write(&tmp, content)?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
