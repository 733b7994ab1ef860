//! Remote operations on planar nodes: staged animations, geometric
//! transforms, and measurements. All geometry runs engine-side; the host
//! ships the node and decodes the replacement.

use crate::bridge::callbacks::ScopedCallback;
use crate::foundation::error::ScenelinkResult;
use crate::model::Point2;
use crate::model::node::VectorNode;
use crate::model::paint::Paint;
use crate::scene::{CallClass, Scene, adapters};
use crate::wire::codec::wire_args;

/// The four point lists describing a path's cubic segments: first anchors,
/// first handles, second handles, second anchors.
pub type AnchorsAndHandles = (Vec<Point2>, Vec<Point2>, Vec<Point2>, Vec<Point2>);

impl Scene {
    // ---- staged animations (interpolation parameter `t` in [0, 1]) -------

    /// Partially drawn copy of `node` at progress `t`.
    pub fn create_node(&self, node: &VectorNode, t: f64) -> ScenelinkResult<VectorNode> {
        self.call(CallClass::Query, "createVectorObject", wire_args![node, t])
    }

    /// Stroke-first reveal: outline is drawn, then the fill fades in.
    pub fn draw_stroke_then_fill(
        &self,
        node: &VectorNode,
        t: f64,
        default_stroke_width: f64,
    ) -> ScenelinkResult<VectorNode> {
        self.call(
            CallClass::Query,
            "drawStrokeThenFill",
            wire_args![node, t, default_stroke_width],
        )
    }

    pub fn fade_in(
        &self,
        node: &VectorNode,
        scale_factor: f64,
        shift: Point2,
        t: f64,
    ) -> ScenelinkResult<VectorNode> {
        self.call(
            CallClass::Query,
            "fadeIn",
            wire_args![node, scale_factor, shift, t],
        )
    }

    pub fn fade_out(
        &self,
        node: &VectorNode,
        scale_factor: f64,
        shift: Point2,
        t: f64,
    ) -> ScenelinkResult<VectorNode> {
        self.call(
            CallClass::Query,
            "fadeOut",
            wire_args![node, scale_factor, shift, t],
        )
    }

    pub fn grow_arrow_with_final_tip(
        &self,
        node: &VectorNode,
        t: f64,
    ) -> ScenelinkResult<VectorNode> {
        self.call(CallClass::Query, "growArrowWithFinalTip", wire_args![node, t])
    }

    pub fn grow_arrow_with_initial_tip(
        &self,
        node: &VectorNode,
        t: f64,
    ) -> ScenelinkResult<VectorNode> {
        self.call(
            CallClass::Query,
            "growArrowWithInitialTip",
            wire_args![node, t],
        )
    }

    pub fn grow_arrow_with_tips_at_both_ends(
        &self,
        node: &VectorNode,
        t: f64,
    ) -> ScenelinkResult<VectorNode> {
        self.call(
            CallClass::Query,
            "growArrowWithTipsAtBothEnds",
            wire_args![node, t],
        )
    }

    pub fn grow_from_center(&self, node: &VectorNode, t: f64) -> ScenelinkResult<VectorNode> {
        self.call(CallClass::Query, "growFromCenter", wire_args![node, t])
    }

    /// Interpolate `node` towards `target` at progress `t`.
    pub fn morph_shape(
        &self,
        node: &VectorNode,
        target: &VectorNode,
        t: f64,
    ) -> ScenelinkResult<VectorNode> {
        self.call(CallClass::Query, "morphShape", wire_args![node, target, t])
    }

    pub fn rotate_animation(
        &self,
        node: &VectorNode,
        angle: f64,
        t: f64,
    ) -> ScenelinkResult<VectorNode> {
        self.call(CallClass::Query, "rotateAnimation", wire_args![node, angle, t])
    }

    pub fn scale_in_place(
        &self,
        node: &VectorNode,
        scale_factor: f64,
        t: f64,
    ) -> ScenelinkResult<VectorNode> {
        self.call(
            CallClass::Query,
            "scaleInPlace",
            wire_args![node, scale_factor, t],
        )
    }

    pub fn set_fill_animation(
        &self,
        node: &VectorNode,
        fill: &Paint,
        t: f64,
    ) -> ScenelinkResult<VectorNode> {
        self.call(
            CallClass::Query,
            "setFillAnimation",
            wire_args![node, fill, t],
        )
    }

    pub fn set_stroke_animation(
        &self,
        node: &VectorNode,
        stroke: &Paint,
        t: f64,
    ) -> ScenelinkResult<VectorNode> {
        self.call(
            CallClass::Query,
            "setStrokeAnimation",
            wire_args![node, stroke, t],
        )
    }

    pub fn shift_animation(
        &self,
        node: &VectorNode,
        shift: Point2,
        t: f64,
    ) -> ScenelinkResult<VectorNode> {
        self.call(CallClass::Query, "shiftAnimation", wire_args![node, shift, t])
    }

    pub fn show_temporarily(&self, node: &VectorNode, t: f64) -> ScenelinkResult<VectorNode> {
        self.call(CallClass::Query, "showTemporarily", wire_args![node, t])
    }

    pub fn spinning_grow(
        &self,
        node: &VectorNode,
        angle: f64,
        t: f64,
    ) -> ScenelinkResult<VectorNode> {
        self.call(CallClass::Query, "spinningGrow", wire_args![node, angle, t])
    }

    // ---- transforms -------------------------------------------------------

    /// Translate by `delta`; with `recursive` the translation also rebuilds
    /// every descendant.
    pub fn shift(
        &self,
        node: &VectorNode,
        delta: Point2,
        recursive: bool,
    ) -> ScenelinkResult<VectorNode> {
        self.call(CallClass::Query, "shift", wire_args![node, delta, recursive])
    }

    pub fn scale(
        &self,
        node: &VectorNode,
        scale_factor: f64,
        recursive: bool,
    ) -> ScenelinkResult<VectorNode> {
        self.call(
            CallClass::Query,
            "scale",
            wire_args![node, scale_factor, recursive],
        )
    }

    /// Scale non-uniformly by `(sx, sy)`.
    pub fn stretch(
        &self,
        node: &VectorNode,
        factor: Point2,
        recursive: bool,
    ) -> ScenelinkResult<VectorNode> {
        self.call(CallClass::Query, "stretch", wire_args![node, factor, recursive])
    }

    pub fn rotate(
        &self,
        node: &VectorNode,
        angle: f64,
        recursive: bool,
    ) -> ScenelinkResult<VectorNode> {
        self.call(CallClass::Query, "rotate", wire_args![node, angle, recursive])
    }

    /// Move the node's center to `point`.
    pub fn move_to(
        &self,
        node: &VectorNode,
        point: Point2,
        recursive: bool,
    ) -> ScenelinkResult<VectorNode> {
        self.call(CallClass::Query, "moveTo", wire_args![node, point, recursive])
    }

    /// Place `node` next to `other` along `direction` with gap `buff`.
    pub fn next_to_other(
        &self,
        node: &VectorNode,
        other: &VectorNode,
        direction: Point2,
        buff: f64,
        aligned_edge: Point2,
        recursive: bool,
    ) -> ScenelinkResult<VectorNode> {
        self.call(
            CallClass::Query,
            "nextToOther",
            wire_args![node, other, direction, buff, aligned_edge, recursive],
        )
    }

    /// Place `node` next to `point` along `direction` with gap `buff`.
    pub fn next_to_point(
        &self,
        node: &VectorNode,
        point: Point2,
        direction: Point2,
        buff: f64,
        aligned_edge: Point2,
        recursive: bool,
    ) -> ScenelinkResult<VectorNode> {
        self.call(
            CallClass::Query,
            "nextToPoint",
            wire_args![node, point, direction, buff, aligned_edge, recursive],
        )
    }

    /// Lay the node's children out along `direction`.
    pub fn arrange_subobjects(
        &self,
        node: &VectorNode,
        direction: Point2,
        buff: f64,
        aligned_edge: Point2,
        recursive: bool,
    ) -> ScenelinkResult<VectorNode> {
        self.call(
            CallClass::Query,
            "arrangeSubobjects",
            wire_args![node, direction, buff, aligned_edge, recursive],
        )
    }

    /// Run every point of `node` through the host function `f`.
    pub fn apply_function(
        &self,
        node: &VectorNode,
        f: impl Fn(Point2) -> Point2 + Send + Sync + 'static,
        recursive: bool,
        about_point: Option<Point2>,
        about_edge: Option<Point2>,
    ) -> ScenelinkResult<VectorNode> {
        let cb = ScopedCallback::new(self.connection().callbacks(), adapters::point2_map(f));
        self.call(
            CallClass::Animation,
            "applyFunction",
            wire_args![node, cb.handle, recursive, about_point, about_edge],
        )
    }

    pub fn increment_index(
        &self,
        node: &VectorNode,
        increment: i64,
        recursive: bool,
    ) -> ScenelinkResult<VectorNode> {
        self.call(
            CallClass::Query,
            "incrementIndex",
            wire_args![node, increment, recursive],
        )
    }

    // ---- measurements and decomposition -----------------------------------

    /// Corners of the node's bounding box: (top-left, bottom-right).
    pub fn bounding_box(&self, node: &VectorNode) -> ScenelinkResult<(Point2, Point2)> {
        self.call(CallClass::Query, "getBoundingBox", wire_args![node])
    }

    pub fn center(&self, node: &VectorNode) -> ScenelinkResult<Point2> {
        self.call(CallClass::Query, "getCenter", wire_args![node])
    }

    pub fn center_of_mass(&self, node: &VectorNode) -> ScenelinkResult<Point2> {
        self.call(CallClass::Query, "getCenterOfMass", wire_args![node])
    }

    pub fn width(&self, node: &VectorNode) -> ScenelinkResult<f64> {
        self.call(CallClass::Query, "getWidth", wire_args![node])
    }

    pub fn height(&self, node: &VectorNode) -> ScenelinkResult<f64> {
        self.call(CallClass::Query, "getHeight", wire_args![node])
    }

    /// The node's points merged with all descendant points.
    pub fn merged_points(&self, node: &VectorNode) -> ScenelinkResult<Vec<Point2>> {
        self.call(CallClass::Query, "mergedPoints", wire_args![node])
    }

    /// The sub-path covering curve-length fractions `start..end`.
    pub fn subcurve(
        &self,
        node: &VectorNode,
        start: f64,
        end: f64,
    ) -> ScenelinkResult<VectorNode> {
        self.call(CallClass::Query, "getSubcurve", wire_args![node, start, end])
    }

    /// Like [`Scene::subcurve`], optionally rebuilding descendants too.
    pub fn partial_copy(
        &self,
        node: &VectorNode,
        start: f64,
        end: f64,
        recursive: bool,
    ) -> ScenelinkResult<VectorNode> {
        self.call(
            CallClass::Query,
            "getPartialCopy",
            wire_args![node, start, end, recursive],
        )
    }

    /// Split the node's outline into `n_pieces` child nodes.
    pub fn pieces(&self, node: &VectorNode, n_pieces: u32) -> ScenelinkResult<VectorNode> {
        self.call(CallClass::Query, "getPieces", wire_args![node, n_pieces])
    }

    pub fn subpaths(&self, node: &VectorNode) -> ScenelinkResult<Vec<Vec<Point2>>> {
        self.call(CallClass::Query, "getSubpaths", wire_args![node])
    }

    /// The path's cubic segments as `[anchor, handle, handle, anchor]`.
    pub fn cubic_bezier_tuples(&self, node: &VectorNode) -> ScenelinkResult<Vec<[Point2; 4]>> {
        let flat: Vec<[f64; 8]> =
            self.call(CallClass::Query, "getCubicBezierTuples", wire_args![node])?;
        Ok(flat
            .into_iter()
            .map(|[x0, y0, x1, y1, x2, y2, x3, y3]| {
                [
                    Point2(x0, y0),
                    Point2(x1, y1),
                    Point2(x2, y2),
                    Point2(x3, y3),
                ]
            })
            .collect())
    }

    pub fn nth_curve_points(&self, node: &VectorNode, n: u32) -> ScenelinkResult<Vec<Point2>> {
        self.call(CallClass::Query, "getNthCurvePoints", wire_args![node, n])
    }

    /// Arc-length samples of the nth curve.
    pub fn nth_curve_length_pieces(
        &self,
        node: &VectorNode,
        n: u32,
        sample_points: u32,
    ) -> ScenelinkResult<Vec<f64>> {
        self.call(
            CallClass::Query,
            "getNthCurveLengthPieces",
            wire_args![node, n, sample_points],
        )
    }

    pub fn anchors_and_handles(&self, node: &VectorNode) -> ScenelinkResult<AnchorsAndHandles> {
        self.call(CallClass::Query, "getAnchorsAndHandles", wire_args![node])
    }

    pub fn set_anchors_and_handles(
        &self,
        node: &VectorNode,
        anchors_and_handles: &AnchorsAndHandles,
    ) -> ScenelinkResult<VectorNode> {
        self.call(
            CallClass::Query,
            "setAnchorsAndHandles",
            wire_args![node, anchors_and_handles],
        )
    }

    /// Scale handle-to-anchor distances, tightening or loosening curvature.
    pub fn scale_handle_to_anchor_distances(
        &self,
        node: &VectorNode,
        scale: f64,
        recursive: bool,
    ) -> ScenelinkResult<VectorNode> {
        self.call(
            CallClass::Query,
            "scaleHandleToAnchorDistances",
            wire_args![node, scale, recursive],
        )
    }

    /// Flattened list of all descendants, optionally with their points.
    pub fn subobjects_recursively(
        &self,
        node: &VectorNode,
        with_points: bool,
    ) -> ScenelinkResult<Vec<VectorNode>> {
        self.call(
            CallClass::Query,
            "getSubobjectsRecursively",
            wire_args![node, with_points],
        )
    }
}
