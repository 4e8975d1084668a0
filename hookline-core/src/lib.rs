//! # hookline-core
//!
//! Core types for the Hookline hook dispatch engine.
//!
//! This crate has minimal dependencies and is meant to be imported by
//! plugins that only write listeners and never own a registry.
//!
//! # Data Model
//!
//! - [`HookResult`] - The object threaded through every listener of one
//!   dispatch: live parameters, the original parameter snapshot, an
//!   optional bound [`Context`] and a single result [`Slot`].
//! - [`Slot`] - Distinguishes "nothing assigned" from any legal value,
//!   `null` included.
//! - [`Listener`] - The logic attached to an event.
//!
//! # Error Types
//!
//! - [`HookError`] - Not-found lookups, decode failures and listener
//!   failures
//! - [`BoxError`] - What listeners return

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod context;
mod error;
mod listener;
mod result;
mod slot;

// Re-exports
pub use context::Context;
pub use error::{BoxError, HookError};
pub use listener::Listener;
pub use result::{HookResult, Params};
pub use slot::Slot;

pub use serde_json::{Value, json};
