use std::sync::Arc;
use std::sync::mpsc;
use std::time::Duration;

use serde_json::json;

use super::*;
use crate::wire::envelope::CallEnvelope;

struct TestSender(mpsc::Sender<String>);

impl LinkSender for TestSender {
    fn send(&mut self, line: &str) -> ScenelinkResult<()> {
        self.0
            .send(line.to_owned())
            .map_err(|_| ScenelinkError::link("test sink closed"))
    }
}

struct Harness {
    invoker: Arc<MethodInvoker>,
    outbound: mpsc::Receiver<String>,
    gate: Arc<ReadinessGate>,
}

fn harness_ready() -> Harness {
    let h = harness();
    h.gate.mark_ready();
    h
}

fn harness() -> Harness {
    let (tx, rx) = mpsc::channel();
    let gate = Arc::new(ReadinessGate::new());
    Harness {
        invoker: Arc::new(MethodInvoker::new(Box::new(TestSender(tx)), gate.clone())),
        outbound: rx,
        gate,
    }
}

fn next_envelope(outbound: &mpsc::Receiver<String>) -> CallEnvelope {
    let line = outbound
        .recv_timeout(Duration::from_secs(1))
        .expect("no call was sent");
    serde_json::from_str(&line).expect("outbound line is a call envelope")
}

#[test]
fn correlates_response_to_the_matching_call() {
    let h = harness_ready();
    let invoker = h.invoker.clone();

    let worker = std::thread::spawn(move || {
        invoker.invoke("echo", vec![json!(7)], CallOpts::gated(None))
    });

    let env = next_envelope(&h.outbound);
    assert_eq!(env.method, "echo");
    assert_eq!(env.args, vec![json!(7)]);
    assert!(h.invoker.complete(env.id, Ok(json!("pong"))));

    assert_eq!(worker.join().unwrap().unwrap(), json!("pong"));
}

#[test]
fn engine_error_reply_surfaces_verbatim() {
    let h = harness_ready();
    let invoker = h.invoker.clone();

    let worker = std::thread::spawn(move || {
        invoker.invoke("explode", vec![], CallOpts::gated(None))
    });

    let env = next_envelope(&h.outbound);
    h.invoker
        .complete(env.id, Err(ScenelinkError::engine("division by zero")));

    let err = worker.join().unwrap().unwrap_err();
    assert_eq!(err.to_string(), "engine error: division by zero");
}

#[test]
fn timeout_abandons_the_wait_and_drops_the_late_response() {
    let h = harness_ready();

    let err = h
        .invoker
        .invoke(
            "neverReplies",
            vec![],
            CallOpts::gated(Some(Duration::from_millis(20))),
        )
        .unwrap_err();
    assert!(matches!(err, ScenelinkError::Timeout(_)));
    assert_eq!(err.to_string(), "timed out waiting for 'neverReplies'");

    // The late response finds no waiter.
    let env = next_envelope(&h.outbound);
    assert!(!h.invoker.complete(env.id, Ok(WireValue::Null)));
}

#[test]
fn timeout_does_not_block_subsequent_calls() {
    let h = harness_ready();

    let _ = h.invoker.invoke(
        "neverReplies",
        vec![],
        CallOpts::gated(Some(Duration::from_millis(10))),
    );
    let _ = next_envelope(&h.outbound);

    let invoker = h.invoker.clone();
    let worker =
        std::thread::spawn(move || invoker.invoke("after", vec![], CallOpts::gated(None)));
    let env = next_envelope(&h.outbound);
    assert_eq!(env.method, "after");
    h.invoker.complete(env.id, Ok(json!(1)));
    assert_eq!(worker.join().unwrap().unwrap(), json!(1));
}

#[test]
fn gated_calls_queue_until_ready() {
    let h = harness();
    let invoker = h.invoker.clone();

    let worker = std::thread::spawn(move || {
        invoker.invoke("gated", vec![], CallOpts::gated(None))
    });

    // Parked on the gate: nothing may hit the wire yet.
    assert!(
        h.outbound
            .recv_timeout(Duration::from_millis(50))
            .is_err(),
        "call was sent before the engine was ready"
    );

    h.gate.mark_ready();
    let env = next_envelope(&h.outbound);
    h.invoker.complete(env.id, Ok(WireValue::Null));
    worker.join().unwrap().unwrap();
}

#[test]
fn ungated_calls_bypass_the_gate() {
    let h = harness();
    let invoker = h.invoker.clone();

    let worker =
        std::thread::spawn(move || invoker.invoke("emitReady", vec![], CallOpts::ungated()));
    let env = next_envelope(&h.outbound);
    assert_eq!(env.method, "emitReady");
    h.invoker.complete(env.id, Ok(WireValue::Null));
    worker.join().unwrap().unwrap();
}

#[test]
fn shutdown_fails_later_sends_and_outstanding_waits() {
    let h = harness_ready();

    let invoker = h.invoker.clone();
    let worker = std::thread::spawn(move || {
        invoker.invoke("inflight", vec![], CallOpts::gated(None))
    });
    let _ = next_envelope(&h.outbound);

    h.invoker
        .fail_all_pending(|| ScenelinkError::link("engine link closed"));
    let err = worker.join().unwrap().unwrap_err();
    assert!(matches!(err, ScenelinkError::Link(_)));

    h.invoker.shutdown();
    let err = h
        .invoker
        .invoke("afterShutdown", vec![], CallOpts::gated(None))
        .unwrap_err();
    assert!(matches!(err, ScenelinkError::Link(_)));
}
