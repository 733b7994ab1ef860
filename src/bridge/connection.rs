use std::sync::Arc;

use crate::bridge::callbacks::{CallbackHandle, CallbackRegistry};
use crate::bridge::invoker::{CallOpts, MethodInvoker};
use crate::bridge::link::{EngineLink, LinkReceiver};
use crate::bridge::readiness::ReadinessGate;
use crate::foundation::error::{ScenelinkError, ScenelinkResult};
use crate::record::FrameRecorder;
use crate::wire::codec::WireValue;
use crate::wire::envelope::{EngineEvent, EngineMessage, parse_engine_message};

/// One live bridge to an engine instance: the invoker, the callback table,
/// the readiness gate, the frame recorder, and the pump thread that routes
/// everything the engine pushes back.
pub struct EngineConnection {
    invoker: Arc<MethodInvoker>,
    callbacks: Arc<CallbackRegistry>,
    gate: Arc<ReadinessGate>,
    recorder: Arc<FrameRecorder>,
}

impl EngineConnection {
    /// Split the link, start the pump thread, and hand back the connection.
    pub fn open(link: impl EngineLink + 'static) -> ScenelinkResult<Self> {
        let (sender, receiver) = link.split();
        let gate = Arc::new(ReadinessGate::new());
        let callbacks = Arc::new(CallbackRegistry::new());
        let recorder = Arc::new(FrameRecorder::new());
        let invoker = Arc::new(MethodInvoker::new(sender, gate.clone()));

        let pump = Pump {
            receiver,
            invoker: invoker.clone(),
            callbacks: callbacks.clone(),
            gate: gate.clone(),
            recorder: recorder.clone(),
        };
        std::thread::Builder::new()
            .name("scenelink-pump".to_owned())
            .spawn(move || pump.run())
            .map_err(|e| ScenelinkError::link(format!("failed to spawn pump thread: {e}")))?;

        Ok(Self {
            invoker,
            callbacks,
            gate,
            recorder,
        })
    }

    pub fn invoker(&self) -> &Arc<MethodInvoker> {
        &self.invoker
    }

    pub fn callbacks(&self) -> &Arc<CallbackRegistry> {
        &self.callbacks
    }

    pub fn gate(&self) -> &Arc<ReadinessGate> {
        &self.gate
    }

    pub fn recorder(&self) -> &Arc<FrameRecorder> {
        &self.recorder
    }
}

impl Drop for EngineConnection {
    fn drop(&mut self) {
        // Releases the host half of the link so the engine (and with it the
        // pump thread) observes EOF.
        self.invoker.shutdown();
    }
}

struct Pump {
    receiver: Box<dyn LinkReceiver>,
    invoker: Arc<MethodInvoker>,
    callbacks: Arc<CallbackRegistry>,
    gate: Arc<ReadinessGate>,
    recorder: Arc<FrameRecorder>,
}

impl Pump {
    fn run(mut self) {
        while let Some(line) = self.receiver.recv() {
            match parse_engine_message(&line) {
                Ok(EngineMessage::Response(response)) => {
                    let reply = match (response.error, response.result) {
                        (Some(message), _) => Err(ScenelinkError::engine(message)),
                        (None, Some(value)) => Ok(value),
                        (None, None) => Ok(WireValue::Null),
                    };
                    if !self.invoker.complete(response.id, reply) {
                        tracing::debug!(id = response.id, "dropping late response");
                    }
                }
                Ok(EngineMessage::Event(EngineEvent::Ready)) => self.gate.mark_ready(),
                Ok(EngineMessage::Event(EngineEvent::Frame { is_vector, payload })) => {
                    self.recorder.handle_frame(is_vector, &payload);
                }
                Ok(EngineMessage::Event(EngineEvent::CallbackRequest { callback_id, args })) => {
                    self.dispatch(callback_id, args);
                }
                Err(e) => tracing::warn!("ignoring undecodable engine message: {e}"),
            }
        }
        tracing::debug!("engine link closed; failing outstanding calls");
        self.invoker
            .fail_all_pending(|| ScenelinkError::link("engine link closed"));
    }

    /// Run the callback on its own thread so dispatch is re-entrant: the
    /// outer call stays pending on its own waiter while we keep pumping, and
    /// the callback itself may invoke further engine methods.
    fn dispatch(&self, callback_id: u64, args: Vec<WireValue>) {
        let callbacks = self.callbacks.clone();
        let invoker = self.invoker.clone();
        let spawned = std::thread::Builder::new()
            .name("scenelink-dispatch".to_owned())
            .spawn(move || {
                let outcome = callbacks.dispatch(CallbackHandle(callback_id), args);
                let delivery = match outcome {
                    Ok(result) => invoker.invoke(
                        "emitCallbackResponse",
                        vec![WireValue::from(callback_id), result],
                        CallOpts::ungated(),
                    ),
                    Err(e) => invoker.invoke(
                        "emitCallbackError",
                        vec![WireValue::from(callback_id), WireValue::from(e.to_string())],
                        CallOpts::ungated(),
                    ),
                };
                if let Err(e) = delivery {
                    tracing::warn!(callback_id, "failed to deliver callback result: {e}");
                }
            });
        if let Err(e) = spawned {
            tracing::warn!(callback_id, "failed to spawn dispatch thread: {e}");
        }
    }
}
