//! Conversions between scene-graph values and their wire JSON form.
//!
//! Every top-level payload is a tagged object (`"type"` discriminator); all
//! coordinates travel as plain 2- or 3-element arrays. Decoding is strict:
//! an unrecognized or missing tag is a [`ScenelinkError::Decode`], and
//! `decode(encode(v))` reproduces `v` structurally.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::foundation::error::{ScenelinkError, ScenelinkResult};
use crate::model::node::{Node, SolidNode, VectorNode};
use crate::model::paint::Paint;
use crate::model::spatial::{Camera, LightSource};

/// A JSON value as shipped across the engine boundary.
pub type WireValue = serde_json::Value;

/// Encode any scene-graph value into its wire form.
pub fn to_wire<T: Serialize>(value: &T) -> ScenelinkResult<WireValue> {
    serde_json::to_value(value).map_err(|e| ScenelinkError::decode(format!("encode: {e}")))
}

/// Decode a wire value into a typed scene-graph value.
pub fn from_wire<T: DeserializeOwned>(value: WireValue) -> ScenelinkResult<T> {
    serde_json::from_value(value).map_err(|e| ScenelinkError::decode(e.to_string()))
}

/// The `"type"` discriminator of a wire payload.
pub fn type_tag(value: &WireValue) -> ScenelinkResult<&str> {
    value
        .get("type")
        .and_then(|t| t.as_str())
        .ok_or_else(|| ScenelinkError::decode("payload missing 'type' discriminator"))
}

fn expect_tag(value: &WireValue, want: &str) -> ScenelinkResult<()> {
    let got = type_tag(value)?;
    if got == want {
        Ok(())
    } else {
        Err(ScenelinkError::decode(format!(
            "expected '{want}' payload, got '{got}'"
        )))
    }
}

/// Decode a paint; fails on unknown variants.
pub fn decode_paint(value: WireValue) -> ScenelinkResult<Paint> {
    from_wire(value)
}

/// Decode either node kind by its tag.
pub fn decode_node(value: WireValue) -> ScenelinkResult<Node> {
    match type_tag(&value)? {
        "vectorObject" => from_wire(value).map(Node::Vector),
        "threeDObject" => from_wire(value).map(Node::Solid),
        other => Err(ScenelinkError::decode(format!(
            "unknown node type '{other}'"
        ))),
    }
}

/// Decode a planar node, rejecting any other payload kind.
pub fn decode_vector(value: WireValue) -> ScenelinkResult<VectorNode> {
    expect_tag(&value, "vectorObject")?;
    from_wire(value)
}

/// Decode a spatial node, rejecting any other payload kind.
pub fn decode_solid(value: WireValue) -> ScenelinkResult<SolidNode> {
    expect_tag(&value, "threeDObject")?;
    from_wire(value)
}

/// Decode a camera, rejecting any other payload kind.
pub fn decode_camera(value: WireValue) -> ScenelinkResult<Camera> {
    expect_tag(&value, "camera")?;
    from_wire(value)
}

/// Decode a light source, rejecting any other payload kind.
pub fn decode_light_source(value: WireValue) -> ScenelinkResult<LightSource> {
    expect_tag(&value, "lightSource")?;
    from_wire(value)
}

/// Encode a list of call arguments, propagating the first encode failure.
///
/// `wire_args![a, b, c]` expands to `vec![to_wire(&a)?, to_wire(&b)?, ...]`.
macro_rules! wire_args {
    ($($arg:expr),* $(,)?) => {
        vec![$($crate::wire::codec::to_wire(&$arg)?),*]
    };
}
pub(crate) use wire_args;

#[cfg(test)]
#[path = "../../tests/unit/wire/codec.rs"]
mod tests;
