use std::sync::Arc;
use std::time::Duration;

use super::*;

#[test]
fn walks_the_handshake_states_in_order() {
    let gate = ReadinessGate::new();
    assert_eq!(gate.state(), ReadyState::NotReady);

    gate.request();
    assert_eq!(gate.state(), ReadyState::ReadyRequested);

    gate.mark_ready();
    assert_eq!(gate.state(), ReadyState::Ready);

    // Ready is terminal; a second request cannot regress it.
    gate.request();
    assert_eq!(gate.state(), ReadyState::Ready);
}

#[test]
fn ready_event_without_request_still_readies() {
    let gate = ReadinessGate::new();
    gate.mark_ready();
    assert_eq!(gate.state(), ReadyState::Ready);
}

#[test]
fn wait_ready_timeout_reports_elapsed_waits() {
    let gate = ReadinessGate::new();
    assert!(!gate.wait_ready_timeout(Duration::from_millis(20)));

    gate.mark_ready();
    assert!(gate.wait_ready_timeout(Duration::from_millis(20)));
}

#[test]
fn parked_waiters_resume_on_ready() {
    let gate = Arc::new(ReadinessGate::new());
    gate.request();

    let waiters: Vec<_> = (0..3)
        .map(|_| {
            let gate = gate.clone();
            std::thread::spawn(move || gate.wait_ready())
        })
        .collect();

    // Give the waiters time to park.
    std::thread::sleep(Duration::from_millis(30));
    gate.mark_ready();

    for w in waiters {
        w.join().expect("waiter panicked");
    }
}
