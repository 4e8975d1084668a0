//! # Hook Dispatch
//!
//! A [`Hook`] is one invocation of a named extension point. It is seeded
//! with parameters and, optionally, the object it runs inside of; executing
//! it cascades a single [`HookResult`] through every event registered on
//! its key, lowest priority first.
//!
//! # Dispatch
//!
//! 1. A fresh [`HookResult`] is built from the hook's parameters and object.
//! 2. If the key is disabled, that result is returned untouched; events are
//!    not even looked up.
//! 3. Otherwise each event's listener runs in priority order against the
//!    same result. Events without a listener are skipped.
//! 4. The first listener error aborts the chain and is returned.
//!
//! Listeners run on the calling thread, outside of any registry lock.

use crate::registry::Registry;
use hookline_core::{Context, HookError, HookResult, Params, Value};
use std::any::Any;

/// A single invocation of a hook key.
///
/// # Example
/// ```ignore
/// let result = Hook::new(&registry, "blog.post.title")
///     .with_object(post)
///     .with_param("title", "Hello")
///     .execute()?;
///
/// let title = result.get_or("untitled");
/// ```
#[derive(Debug, Clone)]
pub struct Hook {
    registry: Registry,
    key: String,
    object: Option<Context>,
    params: Params,
}

impl Hook {
    /// Creates a hook for `key` on `registry`.
    pub fn new(registry: &Registry, key: impl Into<String>) -> Self {
        Self {
            registry: registry.clone(),
            key: key.into(),
            object: None,
            params: Params::new(),
        }
    }

    /// Binds the object the hook runs inside of.
    pub fn with_object<T: Any + Send + Sync>(self, object: T) -> Self {
        self.with_context(Context::new(object))
    }

    /// Binds an existing [`Context`].
    pub fn with_context(mut self, context: Context) -> Self {
        self.object = Some(context);
        self
    }

    /// Sets a parameter passed to the listeners.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Sets several parameters at once.
    pub fn with_params<K, V, I>(mut self, params: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in params {
            self.params.insert(key.into(), value.into());
        }
        self
    }

    /// The key this hook dispatches to.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The parameters the next dispatch will be seeded with.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Builds the result a dispatch starts from.
    pub fn prepare(&self) -> HookResult {
        HookResult::new(self.params.clone(), self.object.clone())
    }

    /// Runs every matching listener against a caller-owned result.
    ///
    /// On error, whatever earlier listeners wrote to `result` is kept.
    pub fn dispatch(&self, result: &mut HookResult) -> Result<(), HookError> {
        if self.registry.is_disabled(&self.key) {
            #[cfg(feature = "tracing")]
            tracing::debug!(hook = %self.key, "Hook disabled, skipping dispatch");
            return Ok(());
        }

        let events = self.registry.list_by_key(&self.key);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            hook = %self.key,
            event_count = events.len(),
            "Dispatching hook"
        );

        for event in &events {
            let Some(listener) = event.listener() else {
                continue;
            };

            listener
                .handle(result, self.object.as_ref())
                .map_err(|source| HookError::Listener {
                    key: self.key.clone(),
                    priority: event.priority(),
                    source,
                })?;
        }

        Ok(())
    }

    /// Executes the hook and returns the cascaded result.
    ///
    /// May be called repeatedly; every call dispatches afresh.
    pub fn execute(&self) -> Result<HookResult, HookError> {
        let mut result = self.prepare();
        self.dispatch(&mut result)?;
        Ok(result)
    }
}
