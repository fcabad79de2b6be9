// src/adapters.rs

//! Adapters applying controller/handler logic around a single fallible call.
//!
//! Every adapter runs its operation exactly once, inline, and only consults
//! the controller or handler when the operation failed. There is no retry.

use tracing::debug;

use crate::controller::Controller;
use crate::handler::ErrorHandler;

/// Run `op`; return its value, or `controller.fallback(err)` if it failed.
pub fn value_or_fallback<T, E, C, F>(controller: &C, op: F) -> T
where
    C: Controller<T, E> + ?Sized,
    F: FnOnce() -> Result<T, E>,
{
    result_or_fallback(controller, op())
}

/// Same as [`value_or_fallback`] for a result the caller already holds.
pub fn result_or_fallback<T, E, C>(controller: &C, result: Result<T, E>) -> T
where
    C: Controller<T, E> + ?Sized,
{
    match result {
        Ok(value) => value,
        Err(err) => {
            debug!("operation failed, asking controller for a fallback value");
            controller.fallback(err)
        }
    }
}

/// Run `op`; forward its error to `handler` if it failed.
pub fn run_or_handle<E, H, F>(handler: &H, op: F)
where
    H: ErrorHandler<E> + ?Sized,
    F: FnOnce() -> Result<(), E>,
{
    if let Err(err) = op() {
        debug!("operation failed, forwarding error to handler");
        handler.handle(err);
    }
}

/// Forward `err` to `handler` if there is one; no-op on `None`.
pub fn handle_error<E, H>(handler: &H, err: Option<E>)
where
    H: ErrorHandler<E> + ?Sized,
{
    if let Some(err) = err {
        debug!("forwarding error to handler");
        handler.handle(err);
    }
}

/// Method-call forms of the adapters on `Result`.
pub trait ResultExt<T, E> {
    /// [`result_or_fallback`] as a method.
    fn or_fallback<C>(self, controller: &C) -> T
    where
        C: Controller<T, E> + ?Sized;
}

/// Method-call form of [`run_or_handle`] for unit results.
pub trait UnitResultExt<E> {
    fn or_handle<H>(self, handler: &H)
    where
        H: ErrorHandler<E> + ?Sized;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn or_fallback<C>(self, controller: &C) -> T
    where
        C: Controller<T, E> + ?Sized,
    {
        result_or_fallback(controller, self)
    }
}

impl<E> UnitResultExt<E> for Result<(), E> {
    fn or_handle<H>(self, handler: &H)
    where
        H: ErrorHandler<E> + ?Sized,
    {
        if let Err(err) = self {
            debug!("operation failed, forwarding error to handler");
            handler.handle(err);
        }
    }
}
