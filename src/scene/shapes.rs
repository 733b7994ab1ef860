//! Planar shape and guide constructors. Geometry is produced by the engine;
//! each wrapper only encodes arguments and decodes the returned node.

use std::collections::HashMap;

use crate::bridge::callbacks::ScopedCallback;
use crate::foundation::error::ScenelinkResult;
use crate::model::Point2;
use crate::model::node::{LineCap, LineJoin, VectorNode};
use crate::model::paint::Color;
use crate::scene::{CallClass, Scene, adapters};
use crate::wire::codec::wire_args;

/// Parameters for [`Scene::new_axes`]. Defaults mirror the engine's.
#[derive(Clone, Debug)]
pub struct AxesSpec {
    pub x_range: (f64, f64, f64),
    pub y_range: (f64, f64, f64),
    pub center: Point2,
    pub x_length: f64,
    pub y_length: f64,
    pub color: Color,
    pub stroke_width: f64,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
    pub index: i64,
    pub add_x_ticks: bool,
    pub add_y_ticks: bool,
    pub x_tick_size: f64,
    pub y_tick_size: f64,
    pub add_x_tip: bool,
    pub add_y_tip: bool,
}

impl Default for AxesSpec {
    fn default() -> Self {
        Self {
            x_range: (0.0, 1.0, 0.1),
            y_range: (0.0, 1.0, 0.1),
            center: Point2(0.0, 0.0),
            x_length: 1000.0,
            y_length: 1000.0,
            color: Color::white(),
            stroke_width: 4.0,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Miter,
            index: 0,
            add_x_ticks: true,
            add_y_ticks: true,
            x_tick_size: 20.0,
            y_tick_size: 20.0,
            add_x_tip: true,
            add_y_tip: true,
        }
    }
}

/// Parameters for [`Scene::new_number_line`]. Defaults mirror the engine's.
#[derive(Clone, Debug)]
pub struct NumberLineSpec {
    pub x_range: (f64, f64, f64),
    pub center: Point2,
    pub color: Color,
    pub stroke_width: f64,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
    pub index: i64,
    pub length: f64,
    pub add_tip: bool,
    pub add_ticks: bool,
    pub tick_size: f64,
    pub angle: f64,
}

impl Default for NumberLineSpec {
    fn default() -> Self {
        Self {
            x_range: (0.0, 1.0, 0.1),
            center: Point2(0.0, 0.0),
            color: Color::white(),
            stroke_width: 4.0,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Miter,
            index: 0,
            length: 1000.0,
            add_tip: true,
            add_ticks: true,
            tick_size: 20.0,
            angle: 0.0,
        }
    }
}

/// Font and placement parameters for [`Scene::text_to_node`].
#[derive(Clone, Debug)]
pub struct TextSpec {
    /// Font name to base64-encoded font bytes, served to the engine.
    pub fonts: HashMap<String, String>,
    pub font_weight: String,
    pub font_style: String,
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
}

impl Default for TextSpec {
    fn default() -> Self {
        Self {
            fonts: HashMap::new(),
            font_weight: "normal".to_owned(),
            font_style: "normal".to_owned(),
            x: 0.0,
            y: 0.0,
            font_size: 20.0,
        }
    }
}

impl Scene {
    pub fn new_arc(
        &self,
        center: Point2,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        n_samples: u32,
    ) -> ScenelinkResult<VectorNode> {
        self.call(
            CallClass::Query,
            "newArc",
            wire_args![center, radius, start_angle, end_angle, n_samples],
        )
    }

    pub fn new_circle(
        &self,
        center: Point2,
        radius: f64,
        num_points: u32,
    ) -> ScenelinkResult<VectorNode> {
        self.call(
            CallClass::Query,
            "newCircle",
            wire_args![center, radius, num_points],
        )
    }

    pub fn new_elliptical_arc(
        &self,
        center: Point2,
        radius_x: f64,
        radius_y: f64,
        start_angle: f64,
        end_angle: f64,
        n_samples: u32,
    ) -> ScenelinkResult<VectorNode> {
        self.call(
            CallClass::Query,
            "newEllipticalArc",
            wire_args![center, radius_x, radius_y, start_angle, end_angle, n_samples],
        )
    }

    pub fn new_ellipse(
        &self,
        center: Point2,
        radius_x: f64,
        radius_y: f64,
        num_points: u32,
    ) -> ScenelinkResult<VectorNode> {
        self.call(
            CallClass::Query,
            "newEllipse",
            wire_args![center, radius_x, radius_y, num_points],
        )
    }

    pub fn new_annular_sector(
        &self,
        center: Point2,
        inner_radius: f64,
        outer_radius: f64,
        start_angle: f64,
        end_angle: f64,
        n_samples: u32,
    ) -> ScenelinkResult<VectorNode> {
        self.call(
            CallClass::Query,
            "newAnnularSector",
            wire_args![
                center,
                inner_radius,
                outer_radius,
                start_angle,
                end_angle,
                n_samples
            ],
        )
    }

    /// Rebuild `node` as a dashed outline.
    pub fn new_dashed_node(
        &self,
        node: &VectorNode,
        num_dashes: u32,
        dashed_ratio: f64,
        dash_offset: f64,
        equal_length: bool,
    ) -> ScenelinkResult<VectorNode> {
        self.call(
            CallClass::Query,
            "newDashedObject",
            wire_args![node, num_dashes, dashed_ratio, dash_offset, equal_length],
        )
    }

    pub fn new_line(
        &self,
        start: Point2,
        end: Point2,
        color: Color,
        stroke_width: f64,
    ) -> ScenelinkResult<VectorNode> {
        self.call(
            CallClass::Query,
            "newLine",
            wire_args![start, end, color, stroke_width],
        )
    }

    pub fn new_polygon(&self, points: &[Point2]) -> ScenelinkResult<VectorNode> {
        self.call(CallClass::Query, "newPolygon", wire_args![points])
    }

    pub fn new_regular_polygon(
        &self,
        center: Point2,
        side_length: f64,
        num_sides: u32,
    ) -> ScenelinkResult<VectorNode> {
        self.call(
            CallClass::Query,
            "newRegularPolygon",
            wire_args![center, side_length, num_sides],
        )
    }

    pub fn new_square(&self, center: Point2, side_length: f64) -> ScenelinkResult<VectorNode> {
        self.call(CallClass::Query, "newSquare", wire_args![center, side_length])
    }

    pub fn new_rectangle(
        &self,
        center: Point2,
        width: f64,
        height: f64,
    ) -> ScenelinkResult<VectorNode> {
        self.call(
            CallClass::Query,
            "newRectangle",
            wire_args![center, width, height],
        )
    }

    pub fn new_equilateral_triangle(
        &self,
        center: Point2,
        side_length: f64,
    ) -> ScenelinkResult<VectorNode> {
        self.call(
            CallClass::Query,
            "newEquilateralTriangle",
            wire_args![center, side_length],
        )
    }

    pub fn new_triangle(&self, a: Point2, b: Point2, c: Point2) -> ScenelinkResult<VectorNode> {
        self.call(CallClass::Query, "newTriangle", wire_args![a, b, c])
    }

    pub fn new_right_triangle(&self, a: Point2, b: Point2) -> ScenelinkResult<VectorNode> {
        self.call(CallClass::Query, "newRightTriangle", wire_args![a, b])
    }

    // ---- arrow tips -------------------------------------------------------

    /// A copy of `node` with an arrow tip at its end.
    pub fn add_final_tip(
        &self,
        node: &VectorNode,
        tip_side_length: f64,
        tip_color: Color,
    ) -> ScenelinkResult<VectorNode> {
        self.call(
            CallClass::Query,
            "addFinalTipToObject",
            wire_args![node, tip_side_length, tip_color],
        )
    }

    /// A copy of `node` with an arrow tip at its start.
    pub fn add_initial_tip(
        &self,
        node: &VectorNode,
        tip_side_length: f64,
        tip_color: Color,
    ) -> ScenelinkResult<VectorNode> {
        self.call(
            CallClass::Query,
            "addInitialTipToObject",
            wire_args![node, tip_side_length, tip_color],
        )
    }

    /// A copy of `node` with arrow tips at both ends.
    pub fn add_both_sides_tips(
        &self,
        node: &VectorNode,
        tip_side_length: f64,
        tip_color: Color,
    ) -> ScenelinkResult<VectorNode> {
        self.call(
            CallClass::Query,
            "addBothSidesTipsToObject",
            wire_args![node, tip_side_length, tip_color],
        )
    }

    // ---- axes and number lines -------------------------------------------

    pub fn new_axes(&self, spec: &AxesSpec) -> ScenelinkResult<VectorNode> {
        let (x_min, x_max, x_step) = spec.x_range;
        let (y_min, y_max, y_step) = spec.y_range;
        self.call(
            CallClass::Query,
            "newAxes",
            wire_args![
                x_min,
                x_max,
                x_step,
                y_min,
                y_max,
                y_step,
                spec.center,
                spec.x_length,
                spec.y_length,
                spec.color,
                spec.stroke_width,
                spec.line_cap,
                spec.line_join,
                spec.index,
                spec.add_x_ticks,
                spec.add_y_ticks,
                spec.x_tick_size,
                spec.y_tick_size,
                spec.add_x_tip,
                spec.add_y_tip
            ],
        )
    }

    /// Map axes-space coordinates to a canvas point.
    pub fn axes_coords_to_point(
        &self,
        axes: &VectorNode,
        x: f64,
        y: f64,
        x_range: (f64, f64),
        y_range: (f64, f64),
    ) -> ScenelinkResult<Point2> {
        self.call(
            CallClass::Query,
            "axesCoordsToPoint",
            wire_args![axes, x, y, x_range.0, x_range.1, y_range.0, y_range.1],
        )
    }

    /// Map a canvas point back into axes-space coordinates.
    pub fn point_to_axes_coords(
        &self,
        axes: &VectorNode,
        point: Point2,
        x_range: (f64, f64),
        y_range: (f64, f64),
    ) -> ScenelinkResult<Point2> {
        self.call(
            CallClass::Query,
            "pointToAxesCoords",
            wire_args![axes, point, x_range.0, x_range.1, y_range.0, y_range.1],
        )
    }

    pub fn new_number_line(&self, spec: &NumberLineSpec) -> ScenelinkResult<VectorNode> {
        let (x_min, x_max, x_step) = spec.x_range;
        self.call(
            CallClass::Query,
            "newNumberLine",
            wire_args![
                x_min,
                x_max,
                x_step,
                spec.center,
                spec.color,
                spec.stroke_width,
                spec.line_cap,
                spec.line_join,
                spec.index,
                spec.length,
                spec.add_tip,
                spec.add_ticks,
                spec.tick_size,
                spec.angle
            ],
        )
    }

    pub fn number_to_point_on_number_line(
        &self,
        number_line: &VectorNode,
        number: f64,
        x_min: f64,
        x_max: f64,
    ) -> ScenelinkResult<Point2> {
        self.call(
            CallClass::Query,
            "numberToPointOnNumberLine",
            wire_args![number_line, number, x_min, x_max],
        )
    }

    pub fn point_on_number_line_to_number(
        &self,
        number_line: &VectorNode,
        point: Point2,
        x_min: f64,
        x_max: f64,
    ) -> ScenelinkResult<f64> {
        self.call(
            CallClass::Query,
            "pointOnNumberLineToNumber",
            wire_args![number_line, point, x_min, x_max],
        )
    }

    /// Place labels produced by `to_node` next to the ticks of
    /// `number_line`. The producer runs as an engine callback, once per
    /// entry in `numbers`.
    #[allow(clippy::too_many_arguments)]
    pub fn number_line_labels(
        &self,
        number_line: &VectorNode,
        numbers: &[f64],
        to_node: impl Fn(f64) -> ScenelinkResult<VectorNode> + Send + Sync + 'static,
        x_min: f64,
        x_max: f64,
        height: f64,
        direction: Point2,
        buff: f64,
        index: i64,
    ) -> ScenelinkResult<VectorNode> {
        let cb = ScopedCallback::new(self.connection().callbacks(), adapters::node_producer(to_node));
        self.call(
            CallClass::Animation,
            "getNumbersTex",
            wire_args![
                number_line,
                numbers,
                cb.handle,
                x_min,
                x_max,
                height,
                direction,
                buff,
                index
            ],
        )
    }

    // ---- text and markup --------------------------------------------------

    /// Typeset a MathJax expression into a node.
    pub fn new_mathjax(
        &self,
        expression: &str,
        fonts: &HashMap<String, String>,
    ) -> ScenelinkResult<VectorNode> {
        self.call(
            CallClass::Animation,
            "newMathjax",
            wire_args![expression, fonts],
        )
    }

    /// Parse SVG markup into a node.
    pub fn svg_to_node(
        &self,
        svg: &str,
        fonts: &HashMap<String, String>,
    ) -> ScenelinkResult<VectorNode> {
        self.call(
            CallClass::Animation,
            "svgToVectorObject",
            wire_args![svg, fonts],
        )
    }

    /// Shape a text run into a node.
    pub fn text_to_node(&self, text: &str, spec: &TextSpec) -> ScenelinkResult<VectorNode> {
        self.call(
            CallClass::Animation,
            "textToVectorObject",
            wire_args![
                text,
                spec.fonts,
                spec.font_weight,
                spec.font_style,
                spec.x,
                spec.y,
                spec.font_size
            ],
        )
    }
}
