use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use crate::bridge::link::LinkSender;
use crate::bridge::readiness::ReadinessGate;
use crate::foundation::error::{ScenelinkError, ScenelinkResult};
use crate::wire::codec::WireValue;
use crate::wire::envelope::CallEnvelope;

/// Per-call invocation options.
///
/// `timeout = None` leaves the wait unbounded (long-running animation calls);
/// a bound abandons only the host-side wait — the engine-side operation is
/// not stopped, there is no cancellation protocol.
#[derive(Clone, Copy, Debug)]
pub struct CallOpts {
    pub timeout: Option<Duration>,
    /// Park the call on the readiness gate first. Off only for the
    /// handshake itself and for callback response deliveries.
    pub await_ready: bool,
}

impl CallOpts {
    /// A gated call with the given response bound.
    pub fn gated(timeout: Option<Duration>) -> Self {
        Self {
            timeout,
            await_ready: true,
        }
    }

    /// An ungated, unbounded call.
    pub fn ungated() -> Self {
        Self {
            timeout: None,
            await_ready: false,
        }
    }
}

type Reply = ScenelinkResult<WireValue>;

/// Outstanding calls keyed by correlation id.
struct PendingCalls {
    map: Mutex<HashMap<u64, mpsc::SyncSender<Reply>>>,
}

impl PendingCalls {
    fn new() -> Self {
        Self {
            map: Mutex::new(HashMap::new()),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<u64, mpsc::SyncSender<Reply>>> {
        self.map.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn register(&self, id: u64) -> mpsc::Receiver<Reply> {
        let (tx, rx) = mpsc::sync_channel(1);
        self.lock().insert(id, tx);
        rx
    }

    fn complete(&self, id: u64, reply: Reply) -> bool {
        match self.lock().remove(&id) {
            Some(tx) => {
                // The waiter may have timed out between our lookup and this
                // send; that is equivalent to a late response and dropped.
                let _ = tx.send(reply);
                true
            }
            None => false,
        }
    }

    fn abandon(&self, id: u64) {
        self.lock().remove(&id);
    }

    fn fail_all(&self, make_err: impl Fn() -> ScenelinkError) {
        for (_, tx) in self.lock().drain() {
            let _ = tx.send(Err(make_err()));
        }
    }
}

/// Sends named remote calls and pairs them with correlated responses.
///
/// The invoker owns the host-to-engine half of the link; the connection's
/// pump thread feeds responses back through [`MethodInvoker::complete`].
pub struct MethodInvoker {
    sender: Mutex<Box<dyn LinkSender>>,
    pending: PendingCalls,
    gate: Arc<ReadinessGate>,
    next_id: AtomicU64,
}

impl MethodInvoker {
    pub(crate) fn new(sender: Box<dyn LinkSender>, gate: Arc<ReadinessGate>) -> Self {
        Self {
            sender: Mutex::new(sender),
            pending: PendingCalls::new(),
            gate,
            next_id: AtomicU64::new(1),
        }
    }

    /// Issue `method(args)` and block until the correlated response, a
    /// timeout, or link failure. Engine-side errors surface as
    /// [`ScenelinkError::Engine`] and are never retried.
    pub fn invoke(
        &self,
        method: &str,
        args: Vec<WireValue>,
        opts: CallOpts,
    ) -> ScenelinkResult<WireValue> {
        if opts.await_ready {
            self.gate.wait_ready();
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let envelope = CallEnvelope {
            id,
            method: method.to_owned(),
            args,
        };
        let line = serde_json::to_string(&envelope)
            .map_err(|e| ScenelinkError::decode(format!("encode envelope: {e}")))?;

        let rx = self.pending.register(id);
        {
            let mut sender = self.sender.lock().unwrap_or_else(PoisonError::into_inner);
            if let Err(e) = sender.send(&line) {
                self.pending.abandon(id);
                return Err(e);
            }
        }
        tracing::trace!(id, method, "call sent");

        match opts.timeout {
            Some(bound) => match rx.recv_timeout(bound) {
                Ok(reply) => reply,
                Err(RecvTimeoutError::Timeout) => {
                    self.pending.abandon(id);
                    tracing::debug!(id, method, ?bound, "abandoning call after timeout");
                    Err(ScenelinkError::timeout(method))
                }
                Err(RecvTimeoutError::Disconnected) => {
                    Err(ScenelinkError::link("engine link closed"))
                }
            },
            None => rx
                .recv()
                .unwrap_or_else(|_| Err(ScenelinkError::link("engine link closed"))),
        }
    }

    /// Route a correlated response to its waiter. Returns `false` for late
    /// responses whose call already timed out (they are dropped).
    pub(crate) fn complete(&self, id: u64, reply: Reply) -> bool {
        self.pending.complete(id, reply)
    }

    /// Fail every outstanding call; used when the link closes underneath us.
    pub(crate) fn fail_all_pending(&self, make_err: impl Fn() -> ScenelinkError) {
        self.pending.fail_all(make_err);
    }

    /// Drop the host half of the link so the engine observes EOF. Later
    /// sends fail with a link error.
    pub(crate) fn shutdown(&self) {
        struct ClosedSender;

        impl LinkSender for ClosedSender {
            fn send(&mut self, _line: &str) -> ScenelinkResult<()> {
                Err(ScenelinkError::link("connection closed"))
            }
        }

        let mut sender = self.sender.lock().unwrap_or_else(PoisonError::into_inner);
        *sender = Box::new(ClosedSender);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bridge/invoker.rs"]
mod tests;
