//! # Method Interception
//!
//! Wraps a method call in a "before" and an "after" hook so plugins can
//! rewrite its arguments, replace its return value, or skip it entirely.
//!
//! | form                       | before key                            | after key                            |
//! |----------------------------|---------------------------------------|--------------------------------------|
//! | [`Interceptor::for_object`] | `{scope}::{method}#call.beforeMethod` | `{scope}::{method}#call.afterMethod` |
//! | [`Interceptor::for_type`]   | `{scope}.{method}#call.before`        | `{scope}.{method}#call.after`        |
//!
//! A call proceeds as follows:
//!
//! 1. The before hook runs, seeded with the call's arguments.
//! 2. Its (possibly rewritten) parameters become the arguments.
//! 3. If a before listener set a result, that is the return value and the
//!    method body is not run. Otherwise the body runs with the arguments.
//! 4. The after hook runs with the arguments plus a `"return"` parameter.
//! 5. If an after listener set a result, it overrides the return value.

use crate::{hook::Hook, registry::Registry};
use hookline_core::{BoxError, Context, HookError, Params, Slot, Value};
use thiserror::Error;

/// Name of the after-hook parameter carrying the return value.
pub const RETURN_PARAM: &str = "return";

/// Errors from an intercepted call.
#[derive(Error, Debug)]
pub enum InterceptError {
    /// The before or after hook failed.
    #[error(transparent)]
    Hook(#[from] HookError),

    /// The method body itself failed.
    #[error("method `{method}` failed")]
    Method {
        /// Intercepted method name.
        method: String,
        /// Error returned by the body.
        #[source]
        source: BoxError,
    },
}

/// Runs methods of one scope through before/after hooks.
///
/// # Example
/// ```ignore
/// let blog = Interceptor::for_object(&registry, "Blog", Context::new(blog));
/// let title = blog.call("title", Params::new(), |_args| Ok(json!("Untitled")))?;
/// ```
#[derive(Debug, Clone)]
pub struct Interceptor {
    registry: Registry,
    scope: String,
    object: Option<Context>,
}

impl Interceptor {
    /// Intercepts methods called on a specific object.
    ///
    /// Both hooks are bound to `object`.
    pub fn for_object(registry: &Registry, scope: impl Into<String>, object: Context) -> Self {
        Self {
            registry: registry.clone(),
            scope: scope.into(),
            object: Some(object),
        }
    }

    /// Intercepts associated (type-level) functions of `scope`.
    pub fn for_type(registry: &Registry, scope: impl Into<String>) -> Self {
        Self {
            registry: registry.clone(),
            scope: scope.into(),
            object: None,
        }
    }

    /// Key of the hook run before `method`.
    pub fn before_key(&self, method: &str) -> String {
        match self.object {
            Some(_) => format!("{}::{method}#call.beforeMethod", self.scope),
            None => format!("{}.{method}#call.before", self.scope),
        }
    }

    /// Key of the hook run after `method`.
    pub fn after_key(&self, method: &str) -> String {
        match self.object {
            Some(_) => format!("{}::{method}#call.afterMethod", self.scope),
            None => format!("{}.{method}#call.after", self.scope),
        }
    }

    /// Calls `body` through the before and after hooks of `method`.
    pub fn call<F>(&self, method: &str, args: Params, body: F) -> Result<Value, InterceptError>
    where
        F: FnOnce(&Params) -> Result<Value, BoxError>,
    {
        let before = self.hook(self.before_key(method), args).execute()?;
        let replaced = before.get().clone();
        let args = before.into_params();

        let value = match replaced {
            Slot::Set(value) => value,
            Slot::Unset => body(&args).map_err(|source| InterceptError::Method {
                method: method.to_string(),
                source,
            })?,
        };

        let after = self
            .hook(self.after_key(method), args)
            .with_param(RETURN_PARAM, value.clone())
            .execute()?;

        Ok(after.get().clone().unwrap_or(value))
    }

    fn hook(&self, key: String, args: Params) -> Hook {
        let hook = Hook::new(&self.registry, key).with_params(args);
        match &self.object {
            Some(object) => hook.with_context(object.clone()),
            None => hook,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hookline_core::json;

    #[test]
    fn test_keys() {
        let registry = Registry::new();
        let on_object = Interceptor::for_object(&registry, "Blog", Context::new(()));
        assert_eq!(on_object.before_key("title"), "Blog::title#call.beforeMethod");
        assert_eq!(on_object.after_key("title"), "Blog::title#call.afterMethod");

        let on_type = Interceptor::for_type(&registry, "Blog");
        assert_eq!(on_type.before_key("forge"), "Blog.forge#call.before");
        assert_eq!(on_type.after_key("forge"), "Blog.forge#call.after");
    }

    #[test]
    fn test_plain_call_runs_body() {
        let registry = Registry::new();
        let blog = Interceptor::for_type(&registry, "Blog");
        let value = blog
            .call("title", Params::new(), |_args| Ok(json!("Untitled")))
            .unwrap();
        assert_eq!(value, json!("Untitled"));
    }

    #[test]
    fn test_body_error() {
        let registry = Registry::new();
        let blog = Interceptor::for_type(&registry, "Blog");
        let err = blog
            .call("title", Params::new(), |_args| Err("boom".into()))
            .unwrap_err();
        assert!(matches!(err, InterceptError::Method { ref method, .. } if method == "title"));
    }
}
