//! Registry module for event management.
//!
//! A [`Registry`] is one dispatch domain: it maps hook keys to the events
//! registered on them, in registration order, and tracks which keys are
//! currently disabled. Registries are explicitly owned and cheap to clone;
//! clones share state, separate registries never do.

use crate::{event::Event, hook::Hook};
use serde::Deserialize;
use std::{
    collections::{HashMap, HashSet},
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

/// Priority given to events that never call [`Event::set_priority`].
pub const DEFAULT_PRIORITY: i32 = 5;

/// Settings a host can load from its own configuration files.
///
/// # Example
/// ```ignore
/// let config: RegistryConfig = serde_json::from_str(r#"{ "disabled": ["blog.render"] }"#)?;
/// let registry = Registry::with_config(config);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Priority assigned to newly registered events.
    pub default_priority: i32,
    /// Keys that start out disabled.
    pub disabled: Vec<String>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            default_priority: DEFAULT_PRIORITY,
            disabled: Vec::new(),
        }
    }
}

#[derive(Default)]
struct State {
    events: HashMap<String, Vec<Event>>,
    disabled: HashSet<String>,
}

struct Inner {
    state: RwLock<State>,
    default_priority: i32,
}

/// A registry of events organized by hook key.
///
/// # Example
/// ```ignore
/// let registry = Registry::new();
/// registry.event("blog.title").set_listener(|result, _cx| {
///     result.set("Hello");
///     Ok(())
/// });
///
/// let result = registry.hook("blog.title").execute()?;
/// ```
#[derive(Clone)]
pub struct Registry {
    inner: Arc<Inner>,
}

impl Registry {
    /// Creates an empty registry with default settings.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Creates an empty registry from loaded settings.
    pub fn with_config(config: RegistryConfig) -> Self {
        let state = State {
            events: HashMap::new(),
            disabled: config.disabled.into_iter().collect(),
        };
        Self {
            inner: Arc::new(Inner {
                state: RwLock::new(state),
                default_priority: config.default_priority,
            }),
        }
    }

    /// Starts a fluent builder.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Priority given to newly registered events.
    pub fn default_priority(&self) -> i32 {
        self.inner.default_priority
    }

    /// Registers a new event on one or more keys.
    ///
    /// Shorthand for [`Event::register`].
    pub fn event(&self, keys: impl crate::event::HookKeys) -> Event {
        Event::register(self, keys)
    }

    /// Creates a hook invocation for `key`.
    ///
    /// Shorthand for [`Hook::new`].
    pub fn hook(&self, key: impl Into<String>) -> Hook {
        Hook::new(self, key)
    }

    pub(crate) fn insert(&self, event: &Event) {
        let mut state = self.write();
        for key in event.keys() {
            state
                .events
                .entry(key.clone())
                .or_default()
                .push(event.clone());
        }
    }

    /// Returns the events for `key` ordered by ascending priority.
    ///
    /// Events with equal priority keep their registration order. Unknown
    /// keys yield an empty list.
    pub fn list_by_key(&self, key: &str) -> Vec<Event> {
        let mut events = self
            .read()
            .events
            .get(key)
            .cloned()
            .unwrap_or_default();

        // stable: ties stay in registration order
        events.sort_by_key(Event::priority);
        events
    }

    /// Removes every event registered under `key`.
    ///
    /// Events that were also registered under other keys stay there.
    pub fn clear(&self, key: &str) {
        #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
        let removed = self.write().events.remove(key).map_or(0, |events| events.len());

        #[cfg(feature = "tracing")]
        tracing::trace!(hook = %key, removed, "Cleared hook events");
    }

    /// Re-enables a disabled key. No-op if it was not disabled.
    pub fn enable(&self, key: &str) {
        self.write().disabled.remove(key);

        #[cfg(feature = "tracing")]
        tracing::trace!(hook = %key, "Hook enabled");
    }

    /// Disables a key: executing it runs no listeners until re-enabled.
    ///
    /// Registrations are kept. Disabling a key with no events is allowed.
    pub fn disable(&self, key: impl Into<String>) {
        let key = key.into();

        #[cfg(feature = "tracing")]
        tracing::trace!(hook = %key, "Hook disabled");

        self.write().disabled.insert(key);
    }

    /// Returns whether `key` is currently disabled.
    pub fn is_disabled(&self, key: &str) -> bool {
        self.read().disabled.contains(key)
    }

    /// Returns the number of events registered under `key`.
    pub fn event_count(&self, key: &str) -> usize {
        self.read().events.get(key).map_or(0, Vec::len)
    }

    /// Returns all keys that currently have events.
    pub fn keys(&self) -> Vec<String> {
        self.read().events.keys().cloned().collect()
    }

    /// Check if no events are registered at all.
    pub fn is_empty(&self) -> bool {
        self.read().events.values().all(Vec::is_empty)
    }

    /// Returns `true` if both handles refer to the same registry.
    pub fn ptr_eq(&self, other: &Registry) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    // Registry state has no invariants a panicking listener could break
    // half-way, since listeners never run under the lock.
    fn read(&self) -> RwLockReadGuard<'_, State> {
        self.inner.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.inner.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.read();
        f.debug_struct("Registry")
            .field("keys", &state.events.len())
            .field("disabled", &state.disabled)
            .field("default_priority", &self.inner.default_priority)
            .finish()
    }
}

// ============================================================================
// RegistryBuilder - for constructing registries
// ============================================================================

/// Builder for constructing a [`Registry`].
///
/// # Example
/// ```ignore
/// let registry = RegistryBuilder::new()
///     .default_priority(0)
///     .disable("blog.sidebar")
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    config: RegistryConfig,
}

impl RegistryBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from loaded settings.
    pub fn from_config(config: RegistryConfig) -> Self {
        Self { config }
    }

    /// Set the priority given to newly registered events.
    pub fn default_priority(mut self, priority: i32) -> Self {
        self.config.default_priority = priority;
        self
    }

    /// Start with `key` disabled.
    pub fn disable(mut self, key: impl Into<String>) -> Self {
        self.config.disabled.push(key.into());
        self
    }

    /// Build the registry.
    pub fn build(self) -> Registry {
        Registry::with_config(self.config)
    }
}
