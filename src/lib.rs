//! scenelink is a host-side bridge to an embedded vector-animation engine.
//!
//! The engine (a sandboxed runtime reached only through a JSON protocol)
//! owns all geometry, curve, and rasterization math. The host builds
//! persistent scene-graph values, ships them across the remote-invocation
//! boundary, and receives mutated values or rendered frames back.
//!
//! # Layers
//!
//! 1. **Model**: persistent [`VectorNode`]/[`SolidNode`] trees and [`Paint`]
//!    values; mutators return new nodes and share unmodified subtrees.
//! 2. **Wire**: the scene-graph codec (tagged JSON, array coordinates) and
//!    the call/response/event envelopes.
//! 3. **Bridge**: the method invoker (correlation + timeouts), the callback
//!    registry (host functions invokable from the engine), the readiness
//!    gate, and the pump thread routing everything the engine pushes.
//! 4. **Scene**: the facade exposing the full construction and animation
//!    vocabulary; every operation is encode, gated invoke, decode.
//!
//! The key constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No host-side geometry**: anything touching coordinates beyond plain
//!   data plumbing is delegated to the engine.
//! - **No silent failure**: engine errors, timeouts, and unknown callbacks
//!   surface to the operation that caused them; nothing is retried.
#![forbid(unsafe_code)]

mod bridge;
mod foundation;
mod model;
mod record;
mod scene;
mod wire;

pub use bridge::callbacks::{CallbackFn, CallbackHandle, CallbackRegistry};
pub use bridge::connection::EngineConnection;
pub use bridge::invoker::{CallOpts, MethodInvoker};
pub use bridge::link::{ChannelLink, EngineLink, LinkReceiver, LinkSender, ProcessLink};
pub use bridge::readiness::{ReadinessGate, ReadyState};
pub use foundation::error::{ScenelinkError, ScenelinkResult};
pub use model::node::{FillRule, LineCap, LineJoin, Node, SolidNode, VectorNode};
pub use model::paint::{Color, GradientStop, ImagePaint, LinearGradient, Paint, RadialGradient};
pub use model::spatial::{Camera, LightSource};
pub use model::{Point2, Point3};
pub use record::{FrameFormat, FrameRecorder};
pub use scene::objects::AnchorsAndHandles;
pub use scene::shapes::{AxesSpec, NumberLineSpec, TextSpec};
pub use scene::three_d::{AnchorsAndHandles3, SphereSpec, ThreeDAxesSpec};
pub use scene::{EngineAsset, Scene, SceneConfig};
pub use wire::codec::{
    self as codec, WireValue, decode_camera, decode_light_source, decode_node, decode_paint,
    decode_solid, decode_vector, from_wire, to_wire,
};
pub use wire::envelope::{
    CallEnvelope, CallResponse, EngineEvent, EngineMessage, parse_engine_message,
};
