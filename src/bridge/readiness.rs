use std::sync::{Condvar, Mutex, PoisonError};
use std::time::Duration;

/// Engine handshake progress. `Ready` is terminal for the lifetime of one
/// connection; there is no transition back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadyState {
    NotReady,
    ReadyRequested,
    Ready,
}

/// Tracks the engine handshake and parks callers until the engine has
/// signalled readiness. Calls issued before the `ready` event queue (block)
/// here rather than erroring; failed calls never touch this state.
pub struct ReadinessGate {
    state: Mutex<ReadyState>,
    ready: Condvar,
}

impl ReadinessGate {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(ReadyState::NotReady),
            ready: Condvar::new(),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ReadyState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The host signalled intent to initialize the engine.
    pub fn request(&self) {
        let mut state = self.lock();
        if *state == ReadyState::NotReady {
            *state = ReadyState::ReadyRequested;
        }
    }

    /// The engine's `ready` event arrived.
    pub fn mark_ready(&self) {
        let mut state = self.lock();
        if *state == ReadyState::NotReady {
            tracing::debug!("engine signalled ready before the host requested it");
        }
        *state = ReadyState::Ready;
        self.ready.notify_all();
    }

    pub fn state(&self) -> ReadyState {
        *self.lock()
    }

    /// Park the caller until the engine is ready.
    pub fn wait_ready(&self) {
        let mut state = self.lock();
        while *state != ReadyState::Ready {
            state = self
                .ready
                .wait(state)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    /// Park the caller until ready or `timeout` elapses; returns whether the
    /// engine became ready.
    pub fn wait_ready_timeout(&self, timeout: Duration) -> bool {
        let mut state = self.lock();
        let deadline = std::time::Instant::now() + timeout;
        while *state != ReadyState::Ready {
            let now = std::time::Instant::now();
            let Some(remaining) = deadline.checked_duration_since(now).filter(|d| !d.is_zero())
            else {
                return false;
            };
            let (guard, _) = self
                .ready
                .wait_timeout(state, remaining)
                .unwrap_or_else(PoisonError::into_inner);
            state = guard;
        }
        true
    }
}

impl Default for ReadinessGate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bridge/readiness.rs"]
mod tests;
