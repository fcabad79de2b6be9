// src/controller/exit.rs

use std::fmt::{self, Debug, Display};
use std::sync::Arc;

use tracing::debug;

use crate::controller::Controller;
use crate::process::{Process, RealProcess};

/// Controller that reports the error on stderr and terminates the process.
///
/// With [`RealProcess`] the call never returns. The stored fallback value
/// only exists to satisfy the `Controller` signature and is what an
/// injected, non-terminating [`Process`] gets back.
pub struct ExitController<T> {
    code: i32,
    fallback: T,
    process: Arc<dyn Process>,
}

/// Shorthand for [`ExitController::new`].
pub fn exit_controller<T: Default>(code: i32) -> ExitController<T> {
    ExitController::new(code)
}

impl<T: Default> ExitController<T> {
    /// Terminate the real process with `code` on failure.
    pub fn new(code: i32) -> Self {
        Self::with_process(code, RealProcess)
    }

    /// Route the stderr write and the exit through `process` instead.
    pub fn with_process(code: i32, process: impl Process + 'static) -> Self {
        Self {
            code,
            fallback: T::default(),
            process: Arc::new(process),
        }
    }
}

impl<T> ExitController<T> {
    pub fn code(&self) -> i32 {
        self.code
    }
}

impl<T: Clone> Clone for ExitController<T> {
    fn clone(&self) -> Self {
        Self {
            code: self.code,
            fallback: self.fallback.clone(),
            process: Arc::clone(&self.process),
        }
    }
}

impl<T> Debug for ExitController<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExitController")
            .field("code", &self.code)
            .field("process", &self.process)
            .finish_non_exhaustive()
    }
}

impl<T, E> Controller<T, E> for ExitController<T>
where
    T: Clone,
    E: Display,
{
    fn fallback(&self, err: E) -> T {
        debug!(code = self.code, "unrecoverable error, terminating");
        self.process.write_error_line(&err.to_string());
        self.process.exit(self.code);

        // Only reachable when the process backend does not actually exit.
        self.fallback.clone()
    }
}
