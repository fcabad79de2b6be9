// src/controller/value.rs

//! Controllers that let the caller carry on with a substitute value.

use std::fmt::Display;

use tracing::warn;

use crate::controller::Controller;

/// Returns a clone of `value` for every error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultController<T> {
    value: T,
}

impl<T> DefaultController<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &T {
        &self.value
    }
}

impl<T: Clone, E> Controller<T, E> for DefaultController<T> {
    fn fallback(&self, _err: E) -> T {
        self.value.clone()
    }
}

/// Same as [`DefaultController`], but emits a `warn` event carrying the
/// error first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogController<T> {
    value: T,
}

impl<T> LogController<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }
}

impl<T: Clone, E: Display> Controller<T, E> for LogController<T> {
    fn fallback(&self, err: E) -> T {
        warn!(error = %err, "operation failed, continuing with fallback value");
        self.value.clone()
    }
}

/// Adapts a closure into a [`Controller`].
#[derive(Debug, Clone, Copy)]
pub struct FnController<F> {
    f: F,
}

/// Build a controller from `f`, which receives the error by value.
pub fn from_fn<F>(f: F) -> FnController<F> {
    FnController { f }
}

impl<T, E, F> Controller<T, E> for FnController<F>
where
    F: Fn(E) -> T,
{
    fn fallback(&self, err: E) -> T {
        (self.f)(err)
    }
}
