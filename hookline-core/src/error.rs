//! Error types for Hookline.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`HookError`] - Errors raised while reading a [`HookResult`] or
//!   dispatching a hook
//! - [`BoxError`] - The error type listeners return
//!
//! [`HookResult`]: crate::HookResult

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while reading a result or dispatching a hook.
#[derive(Error, Debug)]
pub enum HookError {
    /// The hook was executed without a bound object.
    #[error("no object has been set")]
    NoObject,

    /// The bound object is not of the requested type.
    #[error("bound object is a `{found}`, not a `{expected}`")]
    ObjectType {
        /// Type the caller asked for.
        expected: &'static str,
        /// Type that was bound.
        found: &'static str,
    },

    /// The live parameters have no entry for the key.
    #[error("undefined parameter `{0}`")]
    UndefinedParam(String),

    /// The original parameters have no entry for the key.
    #[error("undefined original parameter `{0}`")]
    UndefinedOriginalParam(String),

    /// A value could not be converted into the requested type.
    #[error("value for `{key}` could not be decoded")]
    Decode {
        /// Parameter key, or `"result"` for the result slot.
        key: String,
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// A listener failed; the rest of the chain was not run.
    #[error("listener (priority {priority}) on hook `{key}` failed")]
    Listener {
        /// Hook key being dispatched.
        key: String,
        /// Priority of the failing event.
        priority: i32,
        /// Error returned by the listener.
        #[source]
        source: BoxError,
    },
}

impl HookError {
    /// Returns `true` for the not-found family (missing object or parameter).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            HookError::NoObject | HookError::UndefinedParam(_) | HookError::UndefinedOriginalParam(_)
        )
    }
}
