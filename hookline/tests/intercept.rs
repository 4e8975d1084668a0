//! Before/after interception of method calls.

use hookline::{
    Context, Params, Registry, Value,
    intercept::{InterceptError, Interceptor, RETURN_PARAM},
    json,
    testing::{CountingListener, FailingListener},
};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

mod common;
use common::Blog;

fn args(pairs: &[(&str, Value)]) -> Params {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

fn blog_interceptor(registry: &Registry) -> Interceptor {
    Interceptor::for_object(
        registry,
        "Blog",
        Context::new(Blog {
            name: "foolz".into(),
        }),
    )
}

#[test]
fn test_before_hook_rewrites_arguments() {
    let registry = Registry::new();
    let blog = blog_interceptor(&registry);
    registry
        .event(blog.before_key("greet"))
        .set_listener(|result, _cx| {
            result.set_param("who", "plugin");
            Ok(())
        });

    let value = blog
        .call("greet", args(&[("who", json!("host"))]), |args| {
            Ok(json!(format!("hello {}", args["who"].as_str().unwrap_or("?"))))
        })
        .unwrap();

    assert_eq!(value, json!("hello plugin"));
}

#[test]
fn test_before_hook_replaces_return_and_skips_body() {
    let registry = Registry::new();
    let blog = blog_interceptor(&registry);
    registry
        .event(blog.before_key("title"))
        .set_listener(|result, _cx| {
            result.set("Replaced");
            Ok(())
        });

    let ran = Arc::new(AtomicUsize::new(0));
    let body_ran = ran.clone();
    let value = blog
        .call("title", Params::new(), move |_args| {
            body_ran.fetch_add(1, Ordering::SeqCst);
            Ok(json!("Original"))
        })
        .unwrap();

    assert_eq!(value, json!("Replaced"));
    assert_eq!(ran.load(Ordering::SeqCst), 0);
}

#[test]
fn test_before_hook_null_still_replaces() {
    let registry = Registry::new();
    let blog = blog_interceptor(&registry);
    registry
        .event(blog.before_key("title"))
        .set_listener(|result, _cx| {
            result.set(Value::Null);
            Ok(())
        });

    let value = blog
        .call("title", Params::new(), |_args| Ok(json!("Original")))
        .unwrap();
    assert_eq!(value, Value::Null);
}

#[test]
fn test_after_hook_sees_return_and_may_override() {
    let registry = Registry::new();
    let blog = blog_interceptor(&registry);
    registry
        .event(blog.after_key("title"))
        .set_listener(|result, cx| {
            let blog = cx.and_then(|cx| cx.downcast_ref::<Blog>()).ok_or("no blog")?;
            let returned: String = result.param_as(RETURN_PARAM)?;
            let decorated = format!("{returned} by {}", blog.name);
            result.set(decorated);
            Ok(())
        });

    let value = blog
        .call("title", Params::new(), |_args| Ok(json!("Post")))
        .unwrap();
    assert_eq!(value, json!("Post by foolz"));
}

#[test]
fn test_after_hook_without_result_keeps_return() {
    let registry = Registry::new();
    let blog = blog_interceptor(&registry);
    let observer = CountingListener::new();
    registry.event(blog.after_key("title")).attach(observer.clone());

    let value = blog
        .call("title", Params::new(), |_args| Ok(json!("Post")))
        .unwrap();
    assert_eq!(value, json!("Post"));
    assert_eq!(observer.count(), 1);
}

#[test]
fn test_type_level_keys_do_not_see_object_hooks() {
    let registry = Registry::new();
    let on_type = Interceptor::for_type(&registry, "Blog");
    let on_object = blog_interceptor(&registry);
    registry
        .event(on_object.before_key("forge"))
        .set_listener(|result, _cx| {
            result.set("from object hook");
            Ok(())
        });

    let value = on_type
        .call("forge", Params::new(), |_args| Ok(json!("forged")))
        .unwrap();
    assert_eq!(value, json!("forged"));
}

#[test]
fn test_failing_before_hook_propagates() {
    let registry = Registry::new();
    let blog = blog_interceptor(&registry);
    registry
        .event(blog.before_key("title"))
        .attach(FailingListener::new("denied"));

    let err = blog
        .call("title", Params::new(), |_args| Ok(json!("Post")))
        .unwrap_err();
    assert!(matches!(err, InterceptError::Hook(_)));
}

#[test]
fn test_disabled_before_hook_runs_body() {
    let registry = Registry::new();
    let blog = blog_interceptor(&registry);
    registry
        .event(blog.before_key("title"))
        .set_listener(|result, _cx| {
            result.set("Replaced");
            Ok(())
        });
    registry.disable(blog.before_key("title"));

    let value = blog
        .call("title", Params::new(), |_args| Ok(json!("Original")))
        .unwrap();
    assert_eq!(value, json!("Original"));
}
