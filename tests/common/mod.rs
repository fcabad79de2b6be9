#![allow(dead_code)]

use thiserror::Error;

pub use must_test_utils::init_tracing;

/// Error type with identity, so tests can check the exact value a
/// controller received.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TestError {
    #[error("disk full")]
    DiskFull,

    #[error("timeout")]
    Timeout,

    #[error("{0}")]
    Message(String),
}
