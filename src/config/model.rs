// src/config/model.rs

use serde::Deserialize;

/// Policy file as read from TOML, before validation.
///
/// ```toml
/// [failure]
/// action = "exit"
/// exit_code = 2
/// ```
///
/// Every key is optional; an empty file means "exit with code 1".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPolicyFile {
    /// Behaviour on failure from `[failure]`.
    #[serde(default)]
    pub failure: FailureSection,
}

/// `[failure]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FailureSection {
    /// `"exit"` (default), `"log"` or `"ignore"`.
    #[serde(default)]
    pub action: FailureAction,

    /// Process exit code used by `action = "exit"`.
    #[serde(default = "default_exit_code")]
    pub exit_code: i32,
}

fn default_exit_code() -> i32 {
    1
}

impl Default for FailureSection {
    fn default() -> Self {
        Self {
            action: FailureAction::default(),
            exit_code: default_exit_code(),
        }
    }
}

/// What to do once an operation fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureAction {
    /// Print the error to stderr and terminate with `exit_code`.
    #[default]
    Exit,
    /// Emit a `warn` event and continue with the type's default value.
    Log,
    /// Continue with the type's default value silently.
    Ignore,
}

/// Validated policy. Only obtainable through `TryFrom<RawPolicyFile>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyFile {
    failure: FailureSection,
}

impl PolicyFile {
    pub(crate) fn new_unchecked(failure: FailureSection) -> Self {
        Self { failure }
    }

    pub fn action(&self) -> FailureAction {
        self.failure.action
    }

    pub fn exit_code(&self) -> i32 {
        self.failure.exit_code
    }
}
