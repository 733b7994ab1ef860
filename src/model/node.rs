use std::sync::Arc;

use crate::model::paint::Paint;
use crate::model::{Point2, Point3, points_coincide};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Winding rule used when filling a planar path.
pub enum FillRule {
    #[default]
    Nonzero,
    Evenodd,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Stroke end-cap style.
pub enum LineCap {
    #[default]
    Butt,
    Square,
    Round,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Stroke corner style.
pub enum LineJoin {
    #[default]
    Miter,
    Bevel,
    Round,
}

/// A planar scene-graph node: cubic-bezier points, paints, and children.
///
/// Nodes are persistent values. Every mutator returns a new node; with
/// `recursive = false` the children are shared with the original
/// (`Arc` clones), with `recursive = true` new children are produced along
/// every path while untouched data keeps sharing storage. Nothing is ever
/// mutated in place.
///
/// Z-order among siblings is sequence order, refined by the explicit
/// `index` field which the engine uses to slot nodes into its display list.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename = "vectorObject", rename_all = "camelCase")]
pub struct VectorNode {
    pub points: Arc<[Point2]>,
    pub fill: Paint,
    pub fill_rule: FillRule,
    pub stroke: Paint,
    pub stroke_width: f64,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
    pub subobjects: Vec<Arc<VectorNode>>,
    pub index: i64,
}

impl Default for VectorNode {
    fn default() -> Self {
        Self {
            points: Arc::from([]),
            fill: Paint::transparent(),
            fill_rule: FillRule::Nonzero,
            stroke: Paint::transparent(),
            stroke_width: 0.0,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Miter,
            subobjects: Vec::new(),
            index: 0,
        }
    }
}

impl VectorNode {
    /// An empty node with default attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy-on-write rebuild: clone this node, apply `apply` to the clone,
    /// and when `recursive` repeat for every descendant. Untouched subtrees
    /// are shared with `self`.
    fn updated(&self, recursive: bool, apply: &dyn Fn(&mut Self)) -> Self {
        let mut next = self.clone();
        apply(&mut next);
        if recursive {
            next.subobjects = self
                .subobjects
                .iter()
                .map(|child| Arc::new(child.updated(true, apply)))
                .collect();
        }
        next
    }

    pub fn with_points(&self, points: impl Into<Arc<[Point2]>>) -> Self {
        let mut next = self.clone();
        next.points = points.into();
        next
    }

    pub fn with_fill(&self, fill: Paint, recursive: bool) -> Self {
        self.updated(recursive, &|n| n.fill = fill.clone())
    }

    pub fn with_fill_rule(&self, fill_rule: FillRule, recursive: bool) -> Self {
        self.updated(recursive, &|n| n.fill_rule = fill_rule)
    }

    pub fn with_stroke(&self, stroke: Paint, recursive: bool) -> Self {
        self.updated(recursive, &|n| n.stroke = stroke.clone())
    }

    pub fn with_stroke_width(&self, stroke_width: f64, recursive: bool) -> Self {
        self.updated(recursive, &|n| n.stroke_width = stroke_width)
    }

    pub fn with_line_cap(&self, line_cap: LineCap, recursive: bool) -> Self {
        self.updated(recursive, &|n| n.line_cap = line_cap)
    }

    pub fn with_line_join(&self, line_join: LineJoin, recursive: bool) -> Self {
        self.updated(recursive, &|n| n.line_join = line_join)
    }

    pub fn with_index(&self, index: i64) -> Self {
        let mut next = self.clone();
        next.index = index;
        next
    }

    /// The overall fill opacity (see [`Paint::alpha`]).
    pub fn fill_opacity(&self) -> f64 {
        self.fill.alpha()
    }

    pub fn with_fill_opacity(&self, opacity: f64, recursive: bool) -> Self {
        self.updated(recursive, &|n| n.fill = n.fill.with_alpha(opacity))
    }

    /// The overall stroke opacity (see [`Paint::alpha`]).
    pub fn stroke_opacity(&self) -> f64 {
        self.stroke.alpha()
    }

    pub fn with_stroke_opacity(&self, opacity: f64, recursive: bool) -> Self {
        self.updated(recursive, &|n| n.stroke = n.stroke.with_alpha(opacity))
    }

    pub fn subobject(&self, i: usize) -> Option<&Arc<VectorNode>> {
        self.subobjects.get(i)
    }

    pub fn with_subobjects(&self, subobjects: Vec<Arc<VectorNode>>) -> Self {
        let mut next = self.clone();
        next.subobjects = subobjects;
        next
    }

    /// Append a child; all existing children stay shared.
    pub fn add_subobject(&self, child: VectorNode) -> Self {
        let mut next = self.clone();
        next.subobjects.push(Arc::new(child));
        next
    }

    pub fn remove_subobject(&self, i: usize) -> Self {
        let mut next = self.clone();
        if i < next.subobjects.len() {
            next.subobjects.remove(i);
        }
        next
    }

    pub fn with_subobject(&self, i: usize, child: VectorNode) -> Self {
        let mut next = self.clone();
        if i < next.subobjects.len() {
            next.subobjects[i] = Arc::new(child);
        }
        next
    }

    /// Replace `subobjects[start..end]` with `replacement`.
    pub fn with_subobject_slice(
        &self,
        start: usize,
        end: usize,
        replacement: Vec<Arc<VectorNode>>,
    ) -> Self {
        let mut next = self.clone();
        let end = end.min(next.subobjects.len());
        let start = start.min(end);
        next.subobjects.splice(start..end, replacement);
        next
    }

    /// Number of cubic bezier curves encoded in `points`
    /// (anchor, handle, handle, anchor per curve, shared anchors).
    pub fn num_curves(&self) -> usize {
        self.points.len() / 4
    }

    /// Whether the outline returns to its starting point.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(&first), Some(&last)) => points_coincide(first, last),
            _ => false,
        }
    }
}

/// A spatial scene-graph node projected by the engine through a camera.
///
/// Same persistence rules as [`VectorNode`]; spatial nodes carry no planar
/// stroke styling beyond width.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename = "threeDObject", rename_all = "camelCase")]
pub struct SolidNode {
    pub points: Arc<[Point3]>,
    pub subobjects: Vec<Arc<SolidNode>>,
    pub fill: Paint,
    pub stroke: Paint,
    pub stroke_width: f64,
    pub index: i64,
}

impl Default for SolidNode {
    fn default() -> Self {
        Self {
            points: Arc::from([]),
            subobjects: Vec::new(),
            fill: Paint::transparent(),
            stroke: Paint::transparent(),
            stroke_width: 0.0,
            index: 0,
        }
    }
}

impl SolidNode {
    /// An empty node with default attributes.
    pub fn new() -> Self {
        Self::default()
    }

    fn updated(&self, recursive: bool, apply: &dyn Fn(&mut Self)) -> Self {
        let mut next = self.clone();
        apply(&mut next);
        if recursive {
            next.subobjects = self
                .subobjects
                .iter()
                .map(|child| Arc::new(child.updated(true, apply)))
                .collect();
        }
        next
    }

    pub fn with_points(&self, points: impl Into<Arc<[Point3]>>) -> Self {
        let mut next = self.clone();
        next.points = points.into();
        next
    }

    pub fn with_fill(&self, fill: Paint, recursive: bool) -> Self {
        self.updated(recursive, &|n| n.fill = fill.clone())
    }

    pub fn with_stroke(&self, stroke: Paint, recursive: bool) -> Self {
        self.updated(recursive, &|n| n.stroke = stroke.clone())
    }

    pub fn with_stroke_width(&self, stroke_width: f64, recursive: bool) -> Self {
        self.updated(recursive, &|n| n.stroke_width = stroke_width)
    }

    pub fn with_index(&self, index: i64) -> Self {
        let mut next = self.clone();
        next.index = index;
        next
    }

    pub fn fill_opacity(&self) -> f64 {
        self.fill.alpha()
    }

    pub fn with_fill_opacity(&self, opacity: f64, recursive: bool) -> Self {
        self.updated(recursive, &|n| n.fill = n.fill.with_alpha(opacity))
    }

    pub fn stroke_opacity(&self) -> f64 {
        self.stroke.alpha()
    }

    pub fn with_stroke_opacity(&self, opacity: f64, recursive: bool) -> Self {
        self.updated(recursive, &|n| n.stroke = n.stroke.with_alpha(opacity))
    }

    pub fn subobject(&self, i: usize) -> Option<&Arc<SolidNode>> {
        self.subobjects.get(i)
    }

    pub fn with_subobjects(&self, subobjects: Vec<Arc<SolidNode>>) -> Self {
        let mut next = self.clone();
        next.subobjects = subobjects;
        next
    }

    pub fn add_subobject(&self, child: SolidNode) -> Self {
        let mut next = self.clone();
        next.subobjects.push(Arc::new(child));
        next
    }

    pub fn remove_subobject(&self, i: usize) -> Self {
        let mut next = self.clone();
        if i < next.subobjects.len() {
            next.subobjects.remove(i);
        }
        next
    }
}

/// Either kind of scene-graph node.
///
/// Serialization delegates to the inner struct, which carries its own
/// `"type"` discriminator (`vectorObject` / `threeDObject`).
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Vector(VectorNode),
    Solid(SolidNode),
}

impl Node {
    pub fn index(&self) -> i64 {
        match self {
            Node::Vector(n) => n.index,
            Node::Solid(n) => n.index,
        }
    }
}

impl serde::Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Node::Vector(n) => serde::Serialize::serialize(n, serializer),
            Node::Solid(n) => serde::Serialize::serialize(n, serializer),
        }
    }
}

impl<'de> serde::Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error as _;

        let value = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
        match value.get("type").and_then(|t| t.as_str()) {
            Some("vectorObject") => serde_json::from_value(value)
                .map(Node::Vector)
                .map_err(D::Error::custom),
            Some("threeDObject") => serde_json::from_value(value)
                .map(Node::Solid)
                .map_err(D::Error::custom),
            Some(other) => Err(D::Error::custom(format!("unknown node type '{other}'"))),
            None => Err(D::Error::custom("node payload missing 'type' discriminator")),
        }
    }
}

impl From<VectorNode> for Node {
    fn from(n: VectorNode) -> Self {
        Node::Vector(n)
    }
}

impl From<SolidNode> for Node {
    fn from(n: SolidNode) -> Self {
        Node::Solid(n)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/node.rs"]
mod tests;
