// src/process/mock.rs

use std::sync::{Arc, Mutex};

use super::Process;

/// One observable side effect recorded by [`MockProcess`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessEvent {
    Stderr(String),
    Exit(i32),
}

/// Process stand-in that records side effects in call order.
///
/// Clones share the same log, so a test can keep one handle and give the
/// other to the controller under test.
#[derive(Debug, Clone, Default)]
pub struct MockProcess {
    events: Arc<Mutex<Vec<ProcessEvent>>>,
}

impl MockProcess {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn events(&self) -> Vec<ProcessEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Concatenated stderr output, newlines included.
    pub fn stderr(&self) -> String {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|e| match e {
                ProcessEvent::Stderr(line) => Some(format!("{line}\n")),
                ProcessEvent::Exit(_) => None,
            })
            .collect()
    }

    pub fn exit_codes(&self) -> Vec<i32> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|e| match e {
                ProcessEvent::Exit(code) => Some(*code),
                ProcessEvent::Stderr(_) => None,
            })
            .collect()
    }
}

impl Process for MockProcess {
    fn write_error_line(&self, line: &str) {
        let mut events = self.events.lock().unwrap();
        events.push(ProcessEvent::Stderr(line.to_string()));
    }

    fn exit(&self, code: i32) {
        let mut events = self.events.lock().unwrap();
        events.push(ProcessEvent::Exit(code));
    }
}
