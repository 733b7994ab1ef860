//! Line-delimited JSON envelopes exchanged with the engine.
//!
//! Host to engine: [`CallEnvelope`]. Engine to host: either a
//! [`CallResponse`] correlated by `id`, or an uncorrelated [`EngineEvent`].

use crate::foundation::error::{ScenelinkError, ScenelinkResult};
use crate::wire::codec::WireValue;

/// An outbound remote call. `id` correlates the eventual response.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CallEnvelope {
    pub id: u64,
    pub method: String,
    pub args: Vec<WireValue>,
}

/// The engine's answer to one [`CallEnvelope`]. Exactly one of `result` and
/// `error` is populated; a response with neither counts as a null result.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CallResponse {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<WireValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// An engine-initiated message with no correlation id.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum EngineEvent {
    /// The engine finished its handshake and accepts scene calls.
    Ready,
    /// One rendered frame. Raster payloads are base64 data URIs, vector
    /// payloads are raw markup.
    #[serde(rename_all = "camelCase")]
    Frame { is_vector: bool, payload: String },
    /// The engine wants a registered host function invoked.
    #[serde(rename_all = "camelCase")]
    CallbackRequest {
        callback_id: u64,
        args: Vec<WireValue>,
    },
}

/// Any message the engine may push to the host.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum EngineMessage {
    Response(CallResponse),
    Event(EngineEvent),
}

/// Parse one line from the engine link.
pub fn parse_engine_message(line: &str) -> ScenelinkResult<EngineMessage> {
    serde_json::from_str(line)
        .map_err(|e| ScenelinkError::decode(format!("unreadable engine message: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn call_envelope_shape() {
        let env = CallEnvelope {
            id: 7,
            method: "newCircle".to_owned(),
            args: vec![json!([960.0, 540.0]), json!(120.0), json!(16)],
        };
        let v = serde_json::to_value(&env).unwrap();
        assert_eq!(
            v,
            json!({"id": 7, "method": "newCircle", "args": [[960.0, 540.0], 120.0, 16]})
        );
    }

    #[test]
    fn response_and_events_parse() {
        let msg = parse_engine_message(r#"{"id": 3, "result": 42}"#).unwrap();
        assert_eq!(
            msg,
            EngineMessage::Response(CallResponse {
                id: 3,
                result: Some(json!(42)),
                error: None,
            })
        );

        let msg = parse_engine_message(r#"{"id": 4, "error": "boom"}"#).unwrap();
        assert_eq!(
            msg,
            EngineMessage::Response(CallResponse {
                id: 4,
                result: None,
                error: Some("boom".to_owned()),
            })
        );

        let msg = parse_engine_message(r#"{"event": "ready"}"#).unwrap();
        assert_eq!(msg, EngineMessage::Event(EngineEvent::Ready));

        let msg =
            parse_engine_message(r#"{"event": "frame", "isVector": true, "payload": "<svg/>"}"#)
                .unwrap();
        assert_eq!(
            msg,
            EngineMessage::Event(EngineEvent::Frame {
                is_vector: true,
                payload: "<svg/>".to_owned(),
            })
        );

        let msg =
            parse_engine_message(r#"{"event": "callbackRequest", "callbackId": 9, "args": [2, 3]}"#)
                .unwrap();
        assert_eq!(
            msg,
            EngineMessage::Event(EngineEvent::CallbackRequest {
                callback_id: 9,
                args: vec![json!(2), json!(3)],
            })
        );
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let err = parse_engine_message("not json").unwrap_err();
        assert!(err.to_string().starts_with("decode error"));
    }
}
