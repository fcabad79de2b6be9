use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts how many times wrapped operations were invoked.
#[derive(Debug, Clone, Default)]
pub struct CallCounter {
    calls: Arc<AtomicUsize>,
}

impl CallCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Wrap `op` so each invocation bumps the counter.
    pub fn wrap<R>(&self, op: impl FnOnce() -> R) -> impl FnOnce() -> R {
        let calls = Arc::clone(&self.calls);
        move || {
            calls.fetch_add(1, Ordering::SeqCst);
            op()
        }
    }

    /// Operation that succeeds with `value`.
    pub fn ok<T, E>(&self, value: T) -> impl FnOnce() -> Result<T, E> {
        self.wrap(move || Ok(value))
    }

    /// Operation that fails with `message`.
    pub fn fail<T>(&self, message: &str) -> impl FnOnce() -> anyhow::Result<T> {
        let message = message.to_string();
        self.wrap(move || Err(anyhow::anyhow!(message)))
    }
}
