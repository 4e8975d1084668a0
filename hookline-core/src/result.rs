//! The result cascaded through every listener of one dispatch.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{context::Context, error::HookError, slot::Slot};

/// Named parameters exchanged between a hook and its listeners.
///
/// Insertion order is preserved.
pub type Params = IndexMap<String, Value>;

/// The mutable object threaded through all listeners of a hook.
///
/// It carries the live parameters, an immutable snapshot of the parameters
/// as they were passed in, an optional bound [`Context`], and a single
/// result [`Slot`] that starts out [`Slot::Unset`].
#[derive(Debug, Clone, Default)]
pub struct HookResult {
    params: Params,
    params_original: Params,
    object: Option<Context>,
    result: Slot,
}

impl HookResult {
    /// Creates a result seeded with `params` and an optional bound object.
    pub fn new(params: Params, object: Option<Context>) -> Self {
        Self {
            params_original: params.clone(),
            params,
            object,
            result: Slot::Unset,
        }
    }

    /// Returns the result slot.
    ///
    /// Callers that need to know whether any listener produced a value
    /// check for [`Slot::Unset`] here.
    pub fn get(&self) -> &Slot {
        &self.result
    }

    /// Returns the result, or `fallback` if nothing was ever set.
    ///
    /// A listener that set `null` wins over the fallback.
    pub fn get_or(&self, fallback: impl Into<Value>) -> Value {
        match &self.result {
            Slot::Unset => fallback.into(),
            Slot::Set(value) => value.clone(),
        }
    }

    /// Deserializes the result into `T`. `Ok(None)` if nothing was set.
    pub fn get_as<T: DeserializeOwned>(&self) -> Result<Option<T>, HookError> {
        self.result.decode()
    }

    /// Replaces the result unconditionally.
    pub fn set(&mut self, value: impl Into<Value>) -> &mut Self {
        self.result = Slot::Set(value.into());
        self
    }

    /// Moves the result out, leaving the slot unset.
    pub fn take(&mut self) -> Slot {
        self.result.take()
    }

    /// Returns the bound object.
    pub fn object(&self) -> Result<&Context, HookError> {
        self.object.as_ref().ok_or(HookError::NoObject)
    }

    /// Returns the bound object as a `T`.
    pub fn object_as<T: std::any::Any>(&self) -> Result<&T, HookError> {
        let object = self.object()?;
        object
            .downcast_ref::<T>()
            .ok_or_else(|| HookError::ObjectType {
                expected: std::any::type_name::<T>(),
                found: object.type_name(),
            })
    }

    /// The live parameters, including edits made by earlier listeners.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// The parameters exactly as they were passed to the hook.
    pub fn original_params(&self) -> &Params {
        &self.params_original
    }

    /// Returns a live parameter.
    pub fn param(&self, key: &str) -> Result<&Value, HookError> {
        self.params
            .get(key)
            .ok_or_else(|| HookError::UndefinedParam(key.to_string()))
    }

    /// Returns a parameter from the original snapshot.
    pub fn original_param(&self, key: &str) -> Result<&Value, HookError> {
        self.params_original
            .get(key)
            .ok_or_else(|| HookError::UndefinedOriginalParam(key.to_string()))
    }

    /// Deserializes a live parameter into `T`.
    pub fn param_as<T: DeserializeOwned>(&self, key: &str) -> Result<T, HookError> {
        let value = self.param(key)?;
        serde_json::from_value(value.clone()).map_err(|source| HookError::Decode {
            key: key.to_string(),
            source,
        })
    }

    /// Updates a live parameter. The original snapshot is untouched.
    pub fn set_param(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Updates several live parameters.
    pub fn set_params<K, V, I>(&mut self, params: I) -> &mut Self
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

    /// Consumes the result, returning the live parameters.
    pub fn into_params(self) -> Params {
        self.params
    }

    /// Resets to the empty state: no parameters, no object, slot unset.
    pub fn reset(&mut self) -> &mut Self {
        *self = Self::default();
        self
    }
}
