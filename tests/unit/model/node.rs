use std::sync::Arc;

use super::*;
use crate::model::Point2;
use crate::model::paint::{Color, Paint};

fn leaf(index: i64) -> VectorNode {
    VectorNode {
        points: vec![Point2(0.0, 0.0), Point2(10.0, 0.0)].into(),
        fill: Paint::Color(Color::new(0.2, 0.4, 0.6, 1.0)),
        stroke_width: 2.0,
        index,
        ..VectorNode::default()
    }
}

fn parent_with_child() -> VectorNode {
    leaf(0).with_subobjects(vec![Arc::new(leaf(1))])
}

#[test]
fn recursive_fill_opacity_reaches_descendants_and_leaves_original_alone() {
    let n = parent_with_child();
    let n2 = n.with_fill_opacity(0.3, true);

    assert_eq!(n2.fill.alpha(), 0.3);
    assert_eq!(n2.subobjects[0].fill.alpha(), 0.3);

    // The original tree is untouched.
    assert_eq!(n.fill.alpha(), 1.0);
    assert_eq!(n.subobjects[0].fill.alpha(), 1.0);
}

#[test]
fn non_recursive_stroke_width_touches_only_the_root() {
    let n = parent_with_child();
    let n2 = n.with_stroke_width(9.0, false);

    assert_eq!(n2.stroke_width, 9.0);
    assert_eq!(n2.subobjects[0].stroke_width, 2.0);
    assert_eq!(n.stroke_width, 2.0);
}

#[test]
fn non_recursive_mutation_shares_children_by_reference() {
    let n = parent_with_child();
    let n2 = n.with_stroke_width(9.0, false);

    assert!(Arc::ptr_eq(&n.subobjects[0], &n2.subobjects[0]));
}

#[test]
fn recursive_mutation_rebuilds_children_but_shares_their_points() {
    let n = parent_with_child();
    let n2 = n.with_stroke_width(9.0, true);

    assert!(!Arc::ptr_eq(&n.subobjects[0], &n2.subobjects[0]));
    assert_eq!(n2.subobjects[0].stroke_width, 9.0);
    // Only the mutated path reallocates; point storage keeps sharing.
    assert!(Arc::ptr_eq(&n.subobjects[0].points, &n2.subobjects[0].points));
}

#[test]
fn recursive_mutation_descends_through_every_level() {
    let grandchild = leaf(2);
    let child = leaf(1).with_subobjects(vec![Arc::new(grandchild)]);
    let root = leaf(0).with_subobjects(vec![Arc::new(child)]);

    let out = root.with_fill_opacity(0.5, true);
    assert_eq!(out.subobjects[0].subobjects[0].fill.alpha(), 0.5);
}

#[test]
fn subobject_edits_are_persistent() {
    let n = parent_with_child();

    let appended = n.add_subobject(leaf(7));
    assert_eq!(appended.subobjects.len(), 2);
    assert_eq!(n.subobjects.len(), 1);

    let replaced = appended.with_subobject(0, leaf(9));
    assert_eq!(replaced.subobjects[0].index, 9);
    assert_eq!(appended.subobjects[0].index, 1);

    let removed = replaced.remove_subobject(1);
    assert_eq!(removed.subobjects.len(), 1);

    let spliced = appended.with_subobject_slice(0, 1, vec![Arc::new(leaf(3)), Arc::new(leaf(4))]);
    assert_eq!(
        spliced.subobjects.iter().map(|s| s.index).collect::<Vec<_>>(),
        vec![3, 4, 7]
    );
}

#[test]
fn closed_outline_detection_uses_epsilon() {
    let open = leaf(0);
    assert!(!open.is_closed());

    let closed = open.with_points(vec![
        Point2(1.0, 1.0),
        Point2(5.0, 5.0),
        Point2(1.0 + 1e-9, 1.0),
    ]);
    assert!(closed.is_closed());

    assert!(!VectorNode::default().is_closed());
}

#[test]
fn num_curves_counts_point_quads() {
    let n = leaf(0).with_points(vec![Point2(0.0, 0.0); 9]);
    assert_eq!(n.num_curves(), 2);
}

#[test]
fn node_enum_round_trips_both_kinds() {
    let vector = Node::Vector(parent_with_child());
    let value = serde_json::to_value(&vector).unwrap();
    assert_eq!(value["type"], serde_json::json!("vectorObject"));
    let back: Node = serde_json::from_value(value).unwrap();
    assert_eq!(back, vector);

    let solid = Node::Solid(SolidNode {
        points: vec![crate::model::Point3(1.0, 2.0, 3.0)].into(),
        stroke_width: 1.5,
        ..SolidNode::default()
    });
    let value = serde_json::to_value(&solid).unwrap();
    assert_eq!(value["type"], serde_json::json!("threeDObject"));
    let back: Node = serde_json::from_value(value).unwrap();
    assert_eq!(back, solid);
}

#[test]
fn node_enum_rejects_unknown_tag() {
    let err = serde_json::from_value::<Node>(serde_json::json!({"type": "blob"})).unwrap_err();
    assert!(err.to_string().contains("unknown node type 'blob'"));
}
