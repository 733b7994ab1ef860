use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use crate::foundation::error::{ScenelinkError, ScenelinkResult};
use crate::wire::codec::WireValue;

/// A host function invokable from the engine. Arguments and result travel in
/// wire form; typed adapters live next to the scene operations that register
/// them.
pub type CallbackFn = dyn Fn(Vec<WireValue>) -> ScenelinkResult<WireValue> + Send + Sync;

/// Opaque identifier correlating a registered host function with inbound
/// dispatch requests. Handles come from a monotonically increasing counter
/// and are never reused within one connection, so a retired handle can never
/// alias a live one.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct CallbackHandle(pub u64);

/// Table of host functions the engine may call back into.
///
/// Registration and dispatch may happen concurrently from any thread, and
/// dispatch is re-entrant: the entry is cloned out of the lock before it is
/// invoked, so a callback may register, retire, or dispatch while running.
pub struct CallbackRegistry {
    entries: Mutex<HashMap<u64, Arc<CallbackFn>>>,
    next_handle: AtomicU64,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            next_handle: AtomicU64::new(1),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<u64, Arc<CallbackFn>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a host function under a fresh handle. Registering the same
    /// closure twice yields two independent entries.
    pub fn register(
        &self,
        f: impl Fn(Vec<WireValue>) -> ScenelinkResult<WireValue> + Send + Sync + 'static,
    ) -> CallbackHandle {
        let handle = CallbackHandle(self.next_handle.fetch_add(1, Ordering::Relaxed));
        self.lock().insert(handle.0, Arc::new(f));
        handle
    }

    /// Drop a registration. Returns whether the handle was live.
    pub fn retire(&self, handle: CallbackHandle) -> bool {
        self.lock().remove(&handle.0).is_some()
    }

    /// Invoke the function behind `handle` with `args`.
    pub fn dispatch(&self, handle: CallbackHandle, args: Vec<WireValue>) -> ScenelinkResult<WireValue> {
        let f = self
            .lock()
            .get(&handle.0)
            .cloned()
            .ok_or(ScenelinkError::UnknownCallback(handle.0))?;
        f(args)
    }

    /// Number of currently registered functions.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for CallbackRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Retires a one-shot callback when the operation that registered it
/// completes, successfully or not.
pub(crate) struct ScopedCallback<'a> {
    registry: &'a CallbackRegistry,
    pub(crate) handle: CallbackHandle,
}

impl<'a> ScopedCallback<'a> {
    pub(crate) fn new(
        registry: &'a CallbackRegistry,
        f: impl Fn(Vec<WireValue>) -> ScenelinkResult<WireValue> + Send + Sync + 'static,
    ) -> Self {
        Self {
            registry,
            handle: registry.register(f),
        }
    }
}

impl Drop for ScopedCallback<'_> {
    fn drop(&mut self) {
        self.registry.retire(self.handle);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bridge/callbacks.rs"]
mod tests;
