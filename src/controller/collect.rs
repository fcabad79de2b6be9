// src/controller/collect.rs

use std::sync::Mutex;

use crate::controller::Controller;

/// Records every error it sees and substitutes a fixed value.
///
/// Useful for batch work: let each item fail independently, then inspect
/// what went wrong once the loop is done.
#[derive(Debug, Default)]
pub struct CollectController<T, E> {
    value: T,
    errors: Mutex<Vec<E>>,
}

impl<T, E> CollectController<T, E> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            errors: Mutex::new(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drain the collected errors, oldest first.
    pub fn take_errors(&self) -> Vec<E> {
        std::mem::take(&mut *self.lock())
    }

    /// Consume the controller and return the collected errors.
    pub fn into_errors(self) -> Vec<E> {
        self.errors
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<E>> {
        // A panic elsewhere while holding the lock leaves the list intact.
        self.errors
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<T: Clone, E: Clone> CollectController<T, E> {
    /// Snapshot of the collected errors, oldest first.
    pub fn errors(&self) -> Vec<E> {
        self.lock().clone()
    }
}

impl<T: Clone, E> Controller<T, E> for CollectController<T, E> {
    fn fallback(&self, err: E) -> T {
        self.lock().push(err);
        self.value.clone()
    }
}
