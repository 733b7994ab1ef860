use std::sync::Arc;

use serde_json::json;

use super::*;
use crate::foundation::error::ScenelinkError;

fn sum_callback() -> impl Fn(Vec<WireValue>) -> crate::foundation::error::ScenelinkResult<WireValue>
+ Send
+ Sync
+ 'static {
    |args: Vec<WireValue>| {
        let a = args[0].as_f64().unwrap_or(0.0);
        let b = args[1].as_f64().unwrap_or(0.0);
        Ok(json!(a + b))
    }
}

#[test]
fn registered_function_dispatches_with_its_arguments() {
    let registry = CallbackRegistry::new();
    let handle = registry.register(sum_callback());

    let result = registry.dispatch(handle, vec![json!(2), json!(3)]).unwrap();
    assert_eq!(result, json!(5.0));
}

#[test]
fn unknown_handle_fails_dispatch() {
    let registry = CallbackRegistry::new();
    let err = registry
        .dispatch(CallbackHandle(4096), vec![])
        .unwrap_err();
    assert!(matches!(err, ScenelinkError::UnknownCallback(4096)));
}

#[test]
fn identical_closures_get_independent_entries() {
    let registry = CallbackRegistry::new();
    let a = registry.register(sum_callback());
    let b = registry.register(sum_callback());

    assert_ne!(a, b);
    assert_eq!(registry.len(), 2);

    // Retiring one leaves the other dispatchable.
    assert!(registry.retire(a));
    assert!(registry.dispatch(a, vec![]).is_err());
    assert!(registry.dispatch(b, vec![json!(1), json!(1)]).is_ok());
}

#[test]
fn handles_are_never_reused_after_retirement() {
    let registry = CallbackRegistry::new();
    let first = registry.register(sum_callback());
    registry.retire(first);

    let second = registry.register(sum_callback());
    assert!(second.0 > first.0);
}

#[test]
fn dispatch_is_reentrant() {
    let registry = Arc::new(CallbackRegistry::new());

    let inner = registry.register(|_args| Ok(json!("inner")));
    let reg = registry.clone();
    let outer = registry.register(move |_args| {
        // Runs while the outer dispatch is still on the stack.
        reg.dispatch(inner, vec![])
    });

    assert_eq!(registry.dispatch(outer, vec![]).unwrap(), json!("inner"));
}

#[test]
fn concurrent_registration_stays_consistent() {
    let registry = Arc::new(CallbackRegistry::new());
    let threads: Vec<_> = (0..8)
        .map(|_| {
            let registry = registry.clone();
            std::thread::spawn(move || {
                (0..100)
                    .map(|_| registry.register(|_| Ok(WireValue::Null)))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut all = Vec::new();
    for t in threads {
        all.extend(t.join().expect("registration thread panicked"));
    }

    all.sort();
    all.dedup();
    assert_eq!(all.len(), 800, "every registration got a unique handle");
    assert_eq!(registry.len(), 800);
}

#[test]
fn scoped_callback_retires_on_drop() {
    let registry = CallbackRegistry::new();
    let handle = {
        let scoped = ScopedCallback::new(&registry, |_| Ok(WireValue::Null));
        assert!(registry.dispatch(scoped.handle, vec![]).is_ok());
        scoped.handle
    };
    let err = registry.dispatch(handle, vec![]).unwrap_err();
    assert!(matches!(err, ScenelinkError::UnknownCallback(_)));
}
