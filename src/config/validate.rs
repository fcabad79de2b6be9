// src/config/validate.rs

use crate::config::model::{FailureAction, PolicyFile, RawPolicyFile};
use crate::errors::{MustError, Result};

impl TryFrom<RawPolicyFile> for PolicyFile {
    type Error = MustError;

    fn try_from(raw: RawPolicyFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_policy(&raw)?;
        Ok(PolicyFile::new_unchecked(raw.failure))
    }
}

fn validate_raw_policy(cfg: &RawPolicyFile) -> Result<()> {
    validate_exit_code(cfg)?;
    Ok(())
}

fn validate_exit_code(cfg: &RawPolicyFile) -> Result<()> {
    if cfg.failure.action != FailureAction::Exit {
        return Ok(());
    }

    // 0 would report success for a failed run.
    if cfg.failure.exit_code == 0 {
        return Err(MustError::ConfigError(
            "[failure].exit_code must be non-zero when action = \"exit\"".to_string(),
        ));
    }

    if !(1..=255).contains(&cfg.failure.exit_code) {
        return Err(MustError::ConfigError(format!(
            "[failure].exit_code must be in 1..=255 (got {})",
            cfg.failure.exit_code
        )));
    }

    Ok(())
}
