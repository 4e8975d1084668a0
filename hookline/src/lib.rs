//! # hookline - Priority-Ordered Hook Dispatch
//!
//! `hookline` lets a host application declare named extension points
//! ("hooks") that independently loaded plugins attach listeners to.
//! Executing a hook runs every matching listener in priority order,
//! threading one shared [`HookResult`] through the chain.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hookline::prelude::*;
//!
//! let registry = Registry::new();
//!
//! // plugin side
//! registry.event("blog.title").set_priority(-1).set_listener(|result, _cx| {
//!     let title: String = result.param_as("title")?;
//!     result.set(title.to_uppercase());
//!     Ok(())
//! });
//!
//! // host side
//! let result = registry.hook("blog.title").with_param("title", "hello").execute()?;
//! assert_eq!(result.get_or("hello"), "HELLO");
//! ```
//!
//! ## Crates
//!
//! - `hookline-core`: [`HookResult`], [`Slot`], [`Context`], [`Listener`] and
//!   errors. Enough for plugins that only write listeners.
//! - `hookline`: [`Registry`], [`Event`], [`Hook`] and [`intercept`].
//!
//! ## Features
//!
//! - `tracing` (default): emit `tracing` events on registration and dispatch.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use hookline_core::{
    // Error types
    BoxError,
    // Bound object
    Context,
    HookError,
    // Result model
    HookResult,
    // Listener
    Listener,
    Params,
    Slot,
    Value,
    json,
};

mod event;
mod hook;
pub mod intercept;
mod registry;
pub mod testing;

pub use event::{Event, HookKeys};
pub use hook::Hook;
pub use intercept::{InterceptError, Interceptor};
pub use registry::{DEFAULT_PRIORITY, Registry, RegistryBuilder, RegistryConfig};

/// Prelude module - common imports for Hookline.
///
/// # Usage
///
/// ```rust,ignore
/// use hookline::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        BoxError, Context, Event, Hook, HookError, HookResult, Listener, Params, Registry,
        Slot, Value, json,
    };
}
