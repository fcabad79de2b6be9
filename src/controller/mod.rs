// src/controller/mod.rs

//! Controllers decide what a failed operation turns into.
//!
//! A [`Controller`] gets the error of a failed operation and produces the
//! value the caller continues with. Variants live in their own modules:
//! - [`exit`]: print the error and terminate the process.
//! - [`value`]: substitute a fixed value, optionally logging, or delegate to
//!   a closure.
//! - [`collect`]: remember every error and substitute a fixed value.

use std::rc::Rc;
use std::sync::Arc;

pub mod collect;
pub mod exit;
pub mod value;

pub use collect::CollectController;
pub use exit::{ExitController, exit_controller};
pub use value::{DefaultController, FnController, LogController, from_fn};

/// Strategy computing a substitute value from an error.
///
/// `fallback` is only ever called on the failure path, once per failed
/// operation, with the exact error the operation returned.
pub trait Controller<T, E> {
    fn fallback(&self, err: E) -> T;
}

impl<T, E, C> Controller<T, E> for &C
where
    C: Controller<T, E> + ?Sized,
{
    fn fallback(&self, err: E) -> T {
        (**self).fallback(err)
    }
}

impl<T, E, C> Controller<T, E> for Box<C>
where
    C: Controller<T, E> + ?Sized,
{
    fn fallback(&self, err: E) -> T {
        (**self).fallback(err)
    }
}

impl<T, E, C> Controller<T, E> for Arc<C>
where
    C: Controller<T, E> + ?Sized,
{
    fn fallback(&self, err: E) -> T {
        (**self).fallback(err)
    }
}

impl<T, E, C> Controller<T, E> for Rc<C>
where
    C: Controller<T, E> + ?Sized,
{
    fn fallback(&self, err: E) -> T {
        (**self).fallback(err)
    }
}
