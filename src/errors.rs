// src/errors.rs

//! Crate-wide error aliases and helpers.
//!
//! Nothing on the fallback path produces a `MustError`: controllers and
//! adapters only route errors the caller already has. These variants cover
//! policy loading and logging setup.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MustError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, MustError>;
