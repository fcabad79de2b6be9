// src/handler.rs

//! Error handlers: controllers used only for their side effect.

use std::fmt;
use std::marker::PhantomData;

use crate::controller::{Controller, ExitController};

/// Reacts to an error without producing a value.
pub trait ErrorHandler<E> {
    fn handle(&self, err: E);
}

impl<E, H> ErrorHandler<E> for &H
where
    H: ErrorHandler<E> + ?Sized,
{
    fn handle(&self, err: E) {
        (**self).handle(err)
    }
}

impl<E, H> ErrorHandler<E> for Box<H>
where
    H: ErrorHandler<E> + ?Sized,
{
    fn handle(&self, err: E) {
        (**self).handle(err)
    }
}

impl<E, H> ErrorHandler<E> for std::sync::Arc<H>
where
    H: ErrorHandler<E> + ?Sized,
{
    fn handle(&self, err: E) {
        (**self).handle(err)
    }
}

/// [`ErrorHandler`] backed by a [`Controller`] whose fallback value is
/// discarded. Built with [`handler_of`].
pub struct HandlerOf<C, T = ()> {
    controller: C,
    _value: PhantomData<fn() -> T>,
}

/// Wrap `controller` so it can be used wherever an [`ErrorHandler`] is
/// expected.
pub fn handler_of<C, T>(controller: C) -> HandlerOf<C, T> {
    HandlerOf {
        controller,
        _value: PhantomData,
    }
}

/// Handler that prints the error to stderr and exits with `code`.
pub fn exit_handler(code: i32) -> HandlerOf<ExitController<()>> {
    handler_of(ExitController::new(code))
}

impl<C, T> HandlerOf<C, T> {
    pub fn controller(&self) -> &C {
        &self.controller
    }

    pub fn into_inner(self) -> C {
        self.controller
    }
}

impl<C: Clone, T> Clone for HandlerOf<C, T> {
    fn clone(&self) -> Self {
        handler_of(self.controller.clone())
    }
}

impl<C: fmt::Debug, T> fmt::Debug for HandlerOf<C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerOf")
            .field("controller", &self.controller)
            .finish()
    }
}

impl<C, T, E> ErrorHandler<E> for HandlerOf<C, T>
where
    C: Controller<T, E>,
{
    fn handle(&self, err: E) {
        let _ = self.controller.fallback(err);
    }
}
