// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::model::{PolicyFile, RawPolicyFile};
use crate::errors::Result;

/// Load a policy file from a given path and return the raw `RawPolicyFile`.
///
/// This only performs TOML deserialization. Use [`load_and_validate`] for
/// the checked form.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawPolicyFile> {
    let contents = fs::read_to_string(path.as_ref())?;
    let config: RawPolicyFile = toml::from_str(&contents)?;
    Ok(config)
}

/// Load a policy file from path and validate it.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<PolicyFile> {
    let raw = load_from_path(&path)?;
    PolicyFile::try_from(raw)
}

/// Parse and validate a policy held in memory.
pub fn from_toml_str(contents: &str) -> Result<PolicyFile> {
    let raw: RawPolicyFile = toml::from_str(contents)?;
    PolicyFile::try_from(raw)
}

/// `Must.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Must.toml")
}
