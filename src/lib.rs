// src/lib.rs

//! Fail-fast or fall back: route the error of a fallible call to a
//! configurable [`Controller`].
//!
//! ```no_run
//! use must::{ExitController, exit_handler, run_or_handle, value_or_fallback};
//!
//! let port: u16 = value_or_fallback(&ExitController::new(2), || "8080".parse::<u16>());
//! run_or_handle(&exit_handler(1), || std::fs::create_dir_all("out"));
//! # let _ = port;
//! ```
//!
//! The pieces:
//! - controllers decide what a failure turns into (`controller`)
//! - handlers are controllers used only for their side effect (`handler`)
//! - adapters run an operation once and consult either on failure
//!   (`adapters`)
//! - termination goes through an injectable `process::Process`
//! - a TOML failure policy can pick the controller at startup (`config`)

pub mod adapters;
pub mod config;
pub mod controller;
pub mod errors;
pub mod handler;
pub mod logging;
pub mod process;

pub use adapters::{
    ResultExt, UnitResultExt, handle_error, result_or_fallback, run_or_handle,
    value_or_fallback,
};
pub use controller::{
    CollectController, Controller, DefaultController, ExitController, FnController,
    LogController, exit_controller, from_fn,
};
pub use handler::{ErrorHandler, HandlerOf, exit_handler, handler_of};
