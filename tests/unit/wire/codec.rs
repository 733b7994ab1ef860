use std::sync::Arc;

use serde_json::json;

use super::*;
use crate::model::node::{FillRule, LineCap, LineJoin};
use crate::model::paint::{Color, GradientStop, ImagePaint, LinearGradient, RadialGradient};
use crate::model::{Point2, Point3};

fn sample_paints() -> Vec<Paint> {
    let stops = vec![
        GradientStop::new(0.0, Color::new(1.0, 0.0, 0.0, 1.0)),
        GradientStop::new(1.0, Color::new(0.0, 0.0, 1.0, 0.25)),
    ];
    vec![
        Paint::Color(Color::new(0.125, 0.5, 0.875, 0.333)),
        Paint::LinearGradient(LinearGradient {
            start: Point2(-3.5, 0.0),
            end: Point2(120.0, 64.25),
            stops: stops.clone(),
            alpha: 0.75,
        }),
        Paint::RadialGradient(RadialGradient {
            center: Point2(10.0, 20.0),
            radius: 55.5,
            focus: Point2(12.0, 18.0),
            stops,
            alpha: 1.0,
        }),
        Paint::Image(ImagePaint {
            data: "iVBORw0KGgo=".to_owned(),
            mime_type: "image/png".to_owned(),
            top_left: Point2(0.0, 0.0),
            bottom_right: Point2(256.0, 128.0),
            alpha: 0.5,
        }),
    ]
}

fn sample_vector() -> VectorNode {
    let paints = sample_paints();
    let child = VectorNode {
        points: vec![Point2(0.25, 0.5)].into(),
        fill: paints[1].clone(),
        stroke: paints[0].clone(),
        stroke_width: 1.0,
        index: 3,
        ..VectorNode::default()
    };
    VectorNode {
        points: vec![Point2(0.0, 0.0), Point2(1.5, -2.25)].into(),
        fill: paints[2].clone(),
        fill_rule: FillRule::Evenodd,
        stroke: paints[3].clone(),
        stroke_width: 4.0,
        line_cap: LineCap::Round,
        line_join: LineJoin::Bevel,
        subobjects: vec![Arc::new(child)],
        index: 1,
    }
}

#[test]
fn every_paint_round_trips_exactly() {
    for paint in sample_paints() {
        let wire = to_wire(&paint).unwrap();
        assert_eq!(decode_paint(wire).unwrap(), paint);
    }
}

#[test]
fn vector_node_round_trips_with_nested_structure() {
    let node = sample_vector();
    let wire = to_wire(&node).unwrap();
    assert_eq!(decode_vector(wire).unwrap(), node);
}

#[test]
fn solid_node_round_trips() {
    let node = SolidNode {
        points: vec![Point3(0.0, 1.0, 2.0), Point3(-1.0, -2.0, -3.0)].into(),
        subobjects: vec![Arc::new(SolidNode::default())],
        fill: Paint::Color(Color::rgb(0.5, 0.5, 0.5)),
        stroke: Paint::transparent(),
        stroke_width: 0.5,
        index: 2,
    };
    let wire = to_wire(&node).unwrap();
    assert_eq!(decode_solid(wire).unwrap(), node);
}

#[test]
fn camera_and_light_round_trip() {
    let camera = Camera::new(Point3(0.0, 0.0, -10.0), Point3(0.1, 0.2, 0.3), 25.0, 2.0);
    assert_eq!(decode_camera(to_wire(&camera).unwrap()).unwrap(), camera);

    let light = LightSource::new(Point3(5.0, 5.0, 5.0));
    assert_eq!(
        decode_light_source(to_wire(&light).unwrap()).unwrap(),
        light
    );
}

#[test]
fn wire_shape_uses_tags_camel_case_and_array_coordinates() {
    let wire = to_wire(&sample_vector()).unwrap();

    assert_eq!(wire["type"], json!("vectorObject"));
    assert_eq!(wire["points"][1], json!([1.5, -2.25]));
    assert_eq!(wire["fillRule"], json!("evenodd"));
    assert_eq!(wire["lineCap"], json!("round"));
    assert_eq!(wire["lineJoin"], json!("bevel"));
    assert_eq!(wire["strokeWidth"], json!(4.0));

    // Nested payloads carry their own discriminators.
    assert_eq!(wire["fill"]["type"], json!("radialGradient"));
    assert_eq!(wire["fill"]["center"], json!([10.0, 20.0]));
    assert_eq!(wire["fill"]["stops"][0]["color"]["type"], json!("color"));
    assert_eq!(wire["stroke"]["type"], json!("image"));
    assert_eq!(wire["stroke"]["mimeType"], json!("image/png"));
    assert_eq!(wire["subobjects"][0]["type"], json!("vectorObject"));
}

#[test]
fn unknown_paint_tag_is_a_decode_error() {
    let err = decode_paint(json!({"type": "plaid", "r": 1.0})).unwrap_err();
    assert!(matches!(err, ScenelinkError::Decode(_)));
    assert!(err.to_string().contains("unknown paint type 'plaid'"));
}

#[test]
fn missing_tag_is_a_decode_error() {
    let err = decode_node(json!({"points": []})).unwrap_err();
    assert!(err.to_string().contains("'type'"));
}

#[test]
fn kind_mismatch_is_a_decode_error() {
    let camera = Camera::new(Point3(0.0, 0.0, 0.0), Point3(0.0, 0.0, 0.0), 10.0, 1.0);
    let err = decode_vector(to_wire(&camera).unwrap()).unwrap_err();
    assert!(
        err.to_string()
            .contains("expected 'vectorObject' payload, got 'camera'")
    );
}

#[test]
fn decode_node_dispatches_on_tag() {
    let vector = sample_vector();
    match decode_node(to_wire(&vector).unwrap()).unwrap() {
        Node::Vector(v) => assert_eq!(v, vector),
        Node::Solid(_) => panic!("decoded the wrong node kind"),
    }
}
