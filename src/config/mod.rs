// src/config/mod.rs

//! Failure-policy configuration.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a policy file from disk or a string (`loader.rs`).
//! - Validate basic invariants like a usable exit code (`validate.rs`).
//! - Turn a validated policy into a controller (`policy.rs`).

pub mod loader;
pub mod model;
pub mod policy;
pub mod validate;

pub use loader::{default_config_path, from_toml_str, load_and_validate, load_from_path};
pub use model::{FailureAction, FailureSection, PolicyFile, RawPolicyFile};
pub use policy::PolicyController;
