//! # Bound Object
//!
//! The object a hook "runs inside of". Hosts bind one with
//! `Hook::with_object` and every listener of that dispatch receives it
//! explicitly, alongside the [`HookResult`].
//!
//! [`HookResult`]: crate::HookResult

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A shared, type-erased context object.
///
/// Cloning is O(1). Listeners recover the concrete type with
/// [`Context::downcast_ref`].
#[derive(Clone)]
pub struct Context {
    inner: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl Context {
    /// Wraps a value.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self::from_arc(Arc::new(value))
    }

    /// Wraps an already shared value without copying it.
    pub fn from_arc<T: Any + Send + Sync>(value: Arc<T>) -> Self {
        Self {
            inner: value,
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Returns the bound value if it is a `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Returns `true` if the bound value is a `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.inner.is::<T>()
    }

    /// Name of the bound type, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns `true` if both contexts point at the same object.
    pub fn ptr_eq(&self, other: &Context) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("type", &self.type_name)
            .finish_non_exhaustive()
    }
}
