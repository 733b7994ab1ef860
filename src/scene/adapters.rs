//! Typed adapters turning user closures into wire-level callback functions.
//!
//! The engine ships callback arguments as plain wire values; these adapters
//! decode them, run the user function, and re-encode the result (nodes go
//! back through the scene-graph codec).

use std::collections::HashMap;

use crate::foundation::error::{ScenelinkError, ScenelinkResult};
use crate::model::node::VectorNode;
use crate::model::{Point2, Point3};
use crate::wire::codec::{self, WireValue};

type WireFn = Box<dyn Fn(Vec<WireValue>) -> ScenelinkResult<WireValue> + Send + Sync>;

fn num(args: &[WireValue], i: usize) -> ScenelinkResult<f64> {
    args.get(i)
        .and_then(|v| v.as_f64())
        .ok_or_else(|| ScenelinkError::decode(format!("callback argument {i} must be a number")))
}

/// `f(x) -> y`
pub(crate) fn real_function(f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> WireFn {
    Box::new(move |args| Ok(WireValue::from(f(num(&args, 0)?))))
}

/// `f(t) -> (x, y)`
pub(crate) fn parametric2(f: impl Fn(f64) -> (f64, f64) + Send + Sync + 'static) -> WireFn {
    Box::new(move |args| {
        let (x, y) = f(num(&args, 0)?);
        codec::to_wire(&Point2(x, y))
    })
}

/// `f(x, y) -> z` (implicit/contour plotting)
pub(crate) fn scalar_field(f: impl Fn(f64, f64) -> f64 + Send + Sync + 'static) -> WireFn {
    Box::new(move |args| Ok(WireValue::from(f(num(&args, 0)?, num(&args, 1)?))))
}

/// `f(t) -> (x, y, z)`
pub(crate) fn parametric3(
    f: impl Fn(f64) -> (f64, f64, f64) + Send + Sync + 'static,
) -> WireFn {
    Box::new(move |args| {
        let (x, y, z) = f(num(&args, 0)?);
        codec::to_wire(&Point3(x, y, z))
    })
}

/// `f(u, v) -> (x, y, z)` (surface plotting)
pub(crate) fn surface(
    f: impl Fn(f64, f64) -> (f64, f64, f64) + Send + Sync + 'static,
) -> WireFn {
    Box::new(move |args| {
        let (x, y, z) = f(num(&args, 0)?, num(&args, 1)?);
        codec::to_wire(&Point3(x, y, z))
    })
}

/// `f(p) -> p` per-point planar transform (`applyFunction`)
pub(crate) fn point2_map(f: impl Fn(Point2) -> Point2 + Send + Sync + 'static) -> WireFn {
    Box::new(move |args| codec::to_wire(&f(Point2(num(&args, 0)?, num(&args, 1)?))))
}

/// `f(p) -> p` per-point spatial transform
pub(crate) fn point3_map(f: impl Fn(Point3) -> Point3 + Send + Sync + 'static) -> WireFn {
    Box::new(move |args| {
        codec::to_wire(&f(Point3(num(&args, 0)?, num(&args, 1)?, num(&args, 2)?)))
    })
}

/// `f(x) -> node` (tick labels along a number line)
pub(crate) fn node_producer(
    f: impl Fn(f64) -> ScenelinkResult<VectorNode> + Send + Sync + 'static,
) -> WireFn {
    Box::new(move |args| codec::to_wire(&f(num(&args, 0)?)?))
}

/// `f() -> bool` (`waitUntil` predicate)
pub(crate) fn predicate(f: impl Fn() -> bool + Send + Sync + 'static) -> WireFn {
    Box::new(move |_args| Ok(WireValue::from(f())))
}

/// `f(node) -> node` per-frame updater for one display slot
pub(crate) fn updater(
    f: impl Fn(VectorNode) -> VectorNode + Send + Sync + 'static,
) -> WireFn {
    Box::new(move |mut args| {
        if args.is_empty() {
            return Err(ScenelinkError::decode("updater callback expects a node"));
        }
        let node = codec::decode_vector(args.remove(0))?;
        codec::to_wire(&f(node))
    })
}

/// `f(objects, t) -> objects` animation step over the selected display
/// slots. The wire shape is an object keyed by stringified slot indices.
pub(crate) fn animation(
    f: impl Fn(HashMap<i64, VectorNode>, f64) -> ScenelinkResult<HashMap<i64, VectorNode>>
    + Send
    + Sync
    + 'static,
) -> WireFn {
    Box::new(move |mut args| {
        if args.is_empty() {
            return Err(ScenelinkError::decode(
                "animation callback expects an object map",
            ));
        }
        let t = num(&args, 1)?;
        let WireValue::Object(entries) = args.remove(0) else {
            return Err(ScenelinkError::decode(
                "animation callback expects an object map",
            ));
        };

        let mut objects = HashMap::with_capacity(entries.len());
        for (key, value) in entries {
            let index: i64 = key.parse().map_err(|_| {
                ScenelinkError::decode(format!("non-numeric object index '{key}'"))
            })?;
            objects.insert(index, codec::decode_vector(value)?);
        }

        let result = f(objects, t)?;
        let mut out = serde_json::Map::with_capacity(result.len());
        for (index, node) in result {
            out.insert(index.to_string(), codec::to_wire(&node)?);
        }
        Ok(WireValue::Object(out))
    })
}
