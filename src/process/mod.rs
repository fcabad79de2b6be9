// src/process/mod.rs

//! Process-level side effects used by terminating controllers.
//!
//! `ExitController` never touches `std::process` directly; it goes through a
//! [`Process`]. Production code uses [`RealProcess`], tests swap in
//! [`mock::MockProcess`] so a failure path can be exercised without ending
//! the test binary.

use std::fmt::Debug;
use std::io::Write;

pub mod mock;

/// Abstract process interface: an error stream plus termination.
pub trait Process: Send + Sync + Debug {
    /// Write `line` followed by a newline to the error stream.
    fn write_error_line(&self, line: &str);

    /// Terminate with `code`.
    ///
    /// The real implementation never returns. Test implementations do, and
    /// callers must cope with that.
    fn exit(&self, code: i32);
}

/// Implementation backed by `std::io::stderr` and `std::process::exit`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealProcess;

impl Process for RealProcess {
    fn write_error_line(&self, line: &str) {
        // A closed stderr must not stop us from exiting with the right code.
        let _ = writeln!(std::io::stderr().lock(), "{line}");
    }

    fn exit(&self, code: i32) {
        std::process::exit(code)
    }
}
