//! The "was anything assigned" discriminator.
//!
//! A [`Slot`] is either [`Slot::Unset`] or holds a value. Because the value
//! type is usually [`serde_json::Value`], `Slot::Set(Value::Null)` is a
//! perfectly legal assignment and must never be confused with `Unset`.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::HookError;

/// A value slot that remembers whether it was ever assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Slot<T = Value> {
    /// Nothing has been assigned.
    #[default]
    Unset,
    /// A value was assigned (which may itself be `null`).
    Set(T),
}

impl<T> Slot<T> {
    /// Returns `true` if nothing has been assigned.
    pub fn is_unset(&self) -> bool {
        matches!(self, Slot::Unset)
    }

    /// Returns `true` if a value has been assigned.
    pub fn is_set(&self) -> bool {
        matches!(self, Slot::Set(_))
    }

    /// Borrows the assigned value.
    pub fn as_ref(&self) -> Slot<&T> {
        match self {
            Slot::Unset => Slot::Unset,
            Slot::Set(value) => Slot::Set(value),
        }
    }

    /// Converts into an `Option`, mapping `Unset` to `None`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Slot::Unset => None,
            Slot::Set(value) => Some(value),
        }
    }

    /// Returns the assigned value or `fallback` when unset.
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Slot::Unset => fallback,
            Slot::Set(value) => value,
        }
    }

    /// Replaces the slot with `Unset`, returning the previous state.
    pub fn take(&mut self) -> Slot<T> {
        std::mem::take(self)
    }
}

impl Slot<Value> {
    /// Deserializes the assigned value. An unset slot decodes to `None`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<Option<T>, HookError> {
        match self {
            Slot::Unset => Ok(None),
            Slot::Set(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|source| HookError::Decode {
                    key: "result".to_string(),
                    source,
                }),
        }
    }
}

impl<T> From<Option<T>> for Slot<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            None => Slot::Unset,
            Some(value) => Slot::Set(value),
        }
    }
}
