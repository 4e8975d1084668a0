//! # Events
//!
//! An [`Event`] is one registration: a listener and a priority, answering
//! to one or more hook keys. Events are added to a [`Registry`] the moment
//! they are created and stay there until the key is cleared.
//!
//! Priority and listener may be adjusted right after registration; the
//! registry sorts at lookup time, so changes made before a dispatch are
//! honored by that dispatch.

use crate::registry::Registry;
use hookline_core::{BoxError, Context, HookResult, Listener};
use std::{
    fmt,
    sync::{
        Arc, PoisonError, RwLock,
        atomic::{AtomicI32, Ordering},
    },
};

/// Types usable as the key set of an [`Event`].
///
/// A single key or any collection of keys; registering under several keys
/// fans the same event out to each of them.
pub trait HookKeys {
    /// Converts into the list of keys.
    fn into_keys(self) -> Vec<String>;
}

impl HookKeys for &str {
    fn into_keys(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl HookKeys for String {
    fn into_keys(self) -> Vec<String> {
        vec![self]
    }
}

impl HookKeys for &String {
    fn into_keys(self) -> Vec<String> {
        vec![self.clone()]
    }
}

impl<K: Into<String>> HookKeys for Vec<K> {
    fn into_keys(self) -> Vec<String> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<K: Into<String>, const N: usize> HookKeys for [K; N] {
    fn into_keys(self) -> Vec<String> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<K: Into<String> + Clone> HookKeys for &[K] {
    fn into_keys(self) -> Vec<String> {
        self.iter().cloned().map(Into::into).collect()
    }
}

struct EventInner {
    keys: Vec<String>,
    priority: AtomicI32,
    listener: RwLock<Option<Arc<dyn Listener>>>,
}

/// A registered listener with a priority.
///
/// This is a cheap handle: clones refer to the same registration, which is
/// how one event can live under several keys at once.
#[derive(Clone)]
pub struct Event {
    inner: Arc<EventInner>,
}

impl Event {
    /// Creates an event and registers it under every key in `keys`.
    ///
    /// The event starts with the registry's default priority and no
    /// listener; dispatch skips it until [`Event::set_listener`] is called.
    pub fn register(registry: &Registry, keys: impl HookKeys) -> Self {
        let event = Self {
            inner: Arc::new(EventInner {
                keys: keys.into_keys(),
                priority: AtomicI32::new(registry.default_priority()),
                listener: RwLock::new(None),
            }),
        };
        registry.insert(&event);

        #[cfg(feature = "tracing")]
        tracing::trace!(keys = ?event.inner.keys, "Event registered");

        event
    }

    /// Keys this event answers to.
    pub fn keys(&self) -> &[String] {
        &self.inner.keys
    }

    /// Current priority (lower runs earlier).
    pub fn priority(&self) -> i32 {
        self.inner.priority.load(Ordering::Acquire)
    }

    /// Sets the priority. Negative values are allowed.
    pub fn set_priority(&self, priority: i32) -> &Self {
        self.inner.priority.store(priority, Ordering::Release);
        self
    }

    /// Sets a closure to run when a matching hook executes.
    pub fn set_listener<F>(&self, listener: F) -> &Self
    where
        F: Fn(&mut HookResult, Option<&Context>) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        self.set_shared_listener(Arc::new(listener))
    }

    /// Sets any [`Listener`] implementation.
    pub fn attach<L: Listener>(&self, listener: L) -> &Self {
        self.set_shared_listener(Arc::new(listener))
    }

    /// Sets a listener that is already shared with other events.
    pub fn set_shared_listener(&self, listener: Arc<dyn Listener>) -> &Self {
        *self
            .inner
            .listener
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(listener);
        self
    }

    /// Removes the listener, turning the event into a no-op.
    pub fn clear_listener(&self) -> &Self {
        *self
            .inner
            .listener
            .write()
            .unwrap_or_else(PoisonError::into_inner) = None;
        self
    }

    /// Returns the current listener, if any.
    pub fn listener(&self) -> Option<Arc<dyn Listener>> {
        self.inner
            .listener
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Check if a listener is set.
    pub fn has_listener(&self) -> bool {
        self.inner
            .listener
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Returns `true` if both handles refer to the same registration.
    pub fn ptr_eq(&self, other: &Event) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("keys", &self.inner.keys)
            .field("priority", &self.priority())
            .field("has_listener", &self.has_listener())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_result: &mut HookResult, _cx: Option<&Context>) -> Result<(), BoxError> {
        Ok(())
    }

    #[test]
    fn test_default_priority() {
        let registry = Registry::new();
        let event = Event::register(&registry, "testing");
        assert_eq!(event.priority(), 5);
        event.set_priority(8);
        assert_eq!(event.priority(), 8);
    }

    #[test]
    fn test_listener_starts_unset() {
        let registry = Registry::new();
        let event = Event::register(&registry, "testing");
        assert!(event.listener().is_none());
        assert!(!event.has_listener());

        event.set_listener(noop);
        assert!(event.has_listener());

        event.clear_listener();
        assert!(event.listener().is_none());
    }

    #[test]
    fn test_listener_is_callable() {
        let registry = Registry::new();
        let event = Event::register(&registry, "testing");
        event.set_listener(|result, _cx| {
            result.set(123);
            Ok(())
        });

        let mut result = HookResult::default();
        event
            .listener()
            .unwrap()
            .handle(&mut result, None)
            .unwrap();
        assert_eq!(result.get_or(0), 123);
    }

    #[test]
    fn test_key_forms() {
        assert_eq!("a".into_keys(), vec!["a"]);
        assert_eq!(String::from("a").into_keys(), vec!["a"]);
        assert_eq!(["a", "b"].into_keys(), vec!["a", "b"]);
        assert_eq!(vec!["a".to_string()].into_keys(), vec!["a"]);
        let slice: &[&str] = &["x", "y"];
        assert_eq!(slice.into_keys(), vec!["x", "y"]);
    }

    #[test]
    fn test_fan_out_shares_the_registration() {
        let registry = Registry::new();
        let event = Event::register(&registry, ["a", "b"]);
        assert_eq!(event.keys(), ["a".to_string(), "b".to_string()]);

        let from_a = registry.list_by_key("a");
        let from_b = registry.list_by_key("b");
        assert!(from_a[0].ptr_eq(&from_b[0]));

        event.set_priority(-1);
        assert_eq!(from_b[0].priority(), -1);
    }

    #[test]
    fn test_empty_key_set_registers_nothing() {
        let registry = Registry::new();
        Event::register(&registry, Vec::<String>::new());
        assert!(registry.is_empty());
    }
}
