use std::sync::{Arc, Mutex};

use must::Controller;

/// Controller that records every error it receives and answers with a fixed
/// sentinel.
///
/// Clones share the recorded list, so a test can hand one clone to the code
/// under test and inspect the other.
#[derive(Debug, Clone)]
pub struct RecordingController<T, E> {
    sentinel: T,
    seen: Arc<Mutex<Vec<E>>>,
}

impl<T, E> RecordingController<T, E> {
    pub fn new(sentinel: T) -> Self {
        Self {
            sentinel,
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }
}

impl<T, E: Clone> RecordingController<T, E> {
    pub fn seen(&self) -> Vec<E> {
        self.seen.lock().unwrap().clone()
    }
}

impl<T: Clone, E> Controller<T, E> for RecordingController<T, E> {
    fn fallback(&self, err: E) -> T {
        self.seen.lock().unwrap().push(err);
        self.sentinel.clone()
    }
}
