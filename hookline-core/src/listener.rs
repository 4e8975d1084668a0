//! # Listener
//!
//! The callable half of an event registration. A listener receives the
//! shared [`HookResult`] of the dispatch it is part of, plus the bound
//! [`Context`] if the hook was given one. It communicates only by
//! mutating the result.
//!
//! Returning an error aborts the remaining listeners of that dispatch.

use crate::{context::Context, error::BoxError, result::HookResult};

/// Logic attached to an event.
///
/// Any `Fn(&mut HookResult, Option<&Context>) -> Result<(), BoxError>`
/// closure is a listener.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Listener`",
    label = "missing `Listener` implementation",
    note = "Listeners take `(&mut HookResult, Option<&Context>)` and return `Result<(), BoxError>`."
)]
pub trait Listener: Send + Sync + 'static {
    /// Called once per dispatch of a hook this listener is registered on.
    fn handle(&self, result: &mut HookResult, context: Option<&Context>) -> Result<(), BoxError>;
}

impl<F> Listener for F
where
    F: Fn(&mut HookResult, Option<&Context>) -> Result<(), BoxError> + Send + Sync + 'static,
{
    fn handle(&self, result: &mut HookResult, context: Option<&Context>) -> Result<(), BoxError> {
        self(result, context)
    }
}
