// src/config/policy.rs

use std::fmt::Display;

use crate::config::model::{FailureAction, PolicyFile};
use crate::controller::{Controller, DefaultController, ExitController, LogController};
use crate::handler::{HandlerOf, handler_of};
use crate::process::{Process, RealProcess};

/// Controller selected at runtime from a [`PolicyFile`].
#[derive(Debug, Clone)]
pub enum PolicyController<T> {
    Exit(ExitController<T>),
    Log(LogController<T>),
    Ignore(DefaultController<T>),
}

impl<T, E> Controller<T, E> for PolicyController<T>
where
    T: Clone,
    E: Display,
{
    fn fallback(&self, err: E) -> T {
        match self {
            PolicyController::Exit(c) => c.fallback(err),
            PolicyController::Log(c) => c.fallback(err),
            PolicyController::Ignore(c) => Controller::<T, E>::fallback(c, err),
        }
    }
}

impl PolicyFile {
    /// Build the controller this policy describes.
    pub fn controller<T: Default + Clone>(&self) -> PolicyController<T> {
        self.controller_with_process(RealProcess)
    }

    /// Like [`PolicyFile::controller`], with `process` receiving the stderr
    /// write and exit of the `exit` action.
    pub fn controller_with_process<T: Default + Clone>(
        &self,
        process: impl Process + 'static,
    ) -> PolicyController<T> {
        match self.action() {
            FailureAction::Exit => {
                PolicyController::Exit(ExitController::with_process(self.exit_code(), process))
            }
            FailureAction::Log => PolicyController::Log(LogController::new(T::default())),
            FailureAction::Ignore => {
                PolicyController::Ignore(DefaultController::new(T::default()))
            }
        }
    }

    /// Build the unit-valued handler this policy describes.
    pub fn handler(&self) -> HandlerOf<PolicyController<()>> {
        handler_of(self.controller())
    }
}
