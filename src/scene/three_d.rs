//! Spatial scene operations: the engine-side 3-D display list, camera and
//! lighting state, solid builders, and per-object transforms. Projection and
//! shading stay inside the engine; the host only round-trips node data.

use crate::bridge::callbacks::ScopedCallback;
use crate::foundation::error::ScenelinkResult;
use crate::model::node::{SolidNode, VectorNode};
use crate::model::paint::{Color, Paint};
use crate::model::spatial::{Camera, LightSource};
use crate::model::{Point2, Point3};
use crate::scene::{CallClass, Scene, adapters};
use crate::wire::codec::wire_args;

/// The four point lists describing a spatial path's cubic segments.
pub type AnchorsAndHandles3 = (Vec<Point3>, Vec<Point3>, Vec<Point3>, Vec<Point3>);

/// Parameters for [`Scene::new_sphere`].
#[derive(Clone, Debug)]
pub struct SphereSpec {
    pub center: Point3,
    pub radius: f64,
    pub u_segments: u32,
    pub v_segments: u32,
    /// Face colors, cycled over the grid.
    pub fill_colors: Vec<Color>,
    pub stroke_colors: Vec<Color>,
    pub stroke_width: f64,
    pub index: i64,
}

/// Parameters for [`Scene::new_three_d_axes`]. Defaults mirror the engine's.
#[derive(Clone, Debug)]
pub struct ThreeDAxesSpec {
    pub x_range: (f64, f64, f64),
    pub y_range: (f64, f64, f64),
    pub z_range: (f64, f64, f64),
    pub center: Point3,
    pub x_length: f64,
    pub y_length: f64,
    pub z_length: f64,
    pub color: Color,
    pub stroke_width: f64,
    pub add_x_ticks: bool,
    pub add_y_ticks: bool,
    pub add_z_ticks: bool,
    pub x_tick_size: f64,
    pub y_tick_size: f64,
    pub z_tick_size: f64,
    pub add_x_tip: bool,
    pub add_y_tip: bool,
    pub add_z_tip: bool,
    pub n_pieces: u32,
    pub index: i64,
}

impl Default for ThreeDAxesSpec {
    fn default() -> Self {
        Self {
            x_range: (0.0, 1.0, 0.1),
            y_range: (0.0, 1.0, 0.1),
            z_range: (0.0, 1.0, 0.1),
            center: Point3(0.0, 0.0, 0.0),
            x_length: 1000.0,
            y_length: 1000.0,
            z_length: 1000.0,
            color: Color::white(),
            stroke_width: 4.0,
            add_x_ticks: true,
            add_y_ticks: true,
            add_z_ticks: true,
            x_tick_size: 20.0,
            y_tick_size: 20.0,
            z_tick_size: 20.0,
            add_x_tip: true,
            add_y_tip: true,
            add_z_tip: true,
            n_pieces: 20,
            index: 0,
        }
    }
}

impl Scene {
    // ---- 3-D display list and projection state ----------------------------

    /// Display-list slot the projected 3-D scene renders into.
    pub fn set_3d_index(&self, index: i64) -> ScenelinkResult<()> {
        self.call_unit(CallClass::Query, "setScene3DIndex", wire_args![index])
    }

    pub fn get_3d_index(&self) -> ScenelinkResult<i64> {
        self.call(CallClass::Query, "getScene3DIndex", Vec::new())
    }

    /// Project and shade the whole 3-D scene into one planar node.
    pub fn project_and_shade_scene(&self) -> ScenelinkResult<VectorNode> {
        self.call(CallClass::Query, "projectAndShadeScene", Vec::new())
    }

    pub fn set_camera_position(&self, position: Point3) -> ScenelinkResult<()> {
        self.call_unit(CallClass::Query, "setSceneCameraPosition", wire_args![position])
    }

    pub fn get_camera_position(&self) -> ScenelinkResult<Point3> {
        self.call(CallClass::Query, "getSceneCameraPosition", Vec::new())
    }

    pub fn set_camera_rotation(&self, rotation: Point3) -> ScenelinkResult<()> {
        self.call_unit(CallClass::Query, "setSceneCameraRotation", wire_args![rotation])
    }

    pub fn get_camera_rotation(&self) -> ScenelinkResult<Point3> {
        self.call(CallClass::Query, "getSceneCameraRotation", Vec::new())
    }

    pub fn set_camera_focal_distance(&self, focal_distance: f64) -> ScenelinkResult<()> {
        self.call_unit(
            CallClass::Query,
            "setSceneCameraFocalDistance",
            wire_args![focal_distance],
        )
    }

    pub fn get_camera_focal_distance(&self) -> ScenelinkResult<f64> {
        self.call(CallClass::Query, "getSceneCameraFocalDistance", Vec::new())
    }

    pub fn set_camera_zoom(&self, zoom: f64) -> ScenelinkResult<()> {
        self.call_unit(CallClass::Query, "setSceneCameraZoom", wire_args![zoom])
    }

    pub fn get_camera_zoom(&self) -> ScenelinkResult<f64> {
        self.call(CallClass::Query, "getSceneCameraZoom", Vec::new())
    }

    pub fn set_light_source_position(&self, position: Point3) -> ScenelinkResult<()> {
        self.call_unit(
            CallClass::Query,
            "setSceneLightSourcePosition",
            wire_args![position],
        )
    }

    pub fn get_light_source_position(&self) -> ScenelinkResult<Point3> {
        self.call(CallClass::Query, "getSceneLightSourcePosition", Vec::new())
    }

    pub fn add_3d(&self, node: &SolidNode) -> ScenelinkResult<()> {
        self.call_unit(CallClass::Query, "addScene3D", wire_args![node])
    }

    pub fn insert_3d(&self, index: i64, node: &SolidNode) -> ScenelinkResult<()> {
        self.call_unit(CallClass::Query, "insertScene3D", wire_args![index, node])
    }

    pub fn remove_3d(&self, index: i64) -> ScenelinkResult<()> {
        self.call_unit(CallClass::Query, "removeScene3D", wire_args![index])
    }

    pub fn get_3d_objects(&self) -> ScenelinkResult<Vec<SolidNode>> {
        self.call(CallClass::Query, "getScene3DObjects", Vec::new())
    }

    pub fn set_3d_objects(&self, nodes: &[SolidNode]) -> ScenelinkResult<()> {
        self.call_unit(CallClass::Query, "setScene3DObjects", wire_args![nodes])
    }

    /// Replace the solid currently under edit.
    pub fn set_3d_object(&self, node: &SolidNode) -> ScenelinkResult<()> {
        self.call_unit(CallClass::Query, "setScene3DObject", wire_args![node])
    }

    /// The solid currently under edit.
    pub fn get_3d_object(&self) -> ScenelinkResult<SolidNode> {
        self.call(CallClass::Query, "getScene3DObject", Vec::new())
    }

    // ---- solid builders ---------------------------------------------------

    pub fn new_sphere(&self, spec: &SphereSpec) -> ScenelinkResult<SolidNode> {
        self.call(
            CallClass::Animation,
            "newSphere",
            wire_args![
                spec.center,
                spec.radius,
                spec.u_segments,
                spec.v_segments,
                spec.fill_colors,
                spec.stroke_colors,
                spec.stroke_width,
                spec.index
            ],
        )
    }

    pub fn new_three_d_axes(&self, spec: &ThreeDAxesSpec) -> ScenelinkResult<SolidNode> {
        let (x_min, x_max, x_step) = spec.x_range;
        let (y_min, y_max, y_step) = spec.y_range;
        let (z_min, z_max, z_step) = spec.z_range;
        self.call(
            CallClass::Query,
            "newThreeDAxes",
            wire_args![
                x_min,
                x_max,
                x_step,
                y_min,
                y_max,
                y_step,
                z_min,
                z_max,
                z_step,
                spec.center,
                spec.x_length,
                spec.y_length,
                spec.z_length,
                spec.color,
                spec.stroke_width,
                spec.add_x_ticks,
                spec.add_y_ticks,
                spec.add_z_ticks,
                spec.x_tick_size,
                spec.y_tick_size,
                spec.z_tick_size,
                spec.add_x_tip,
                spec.add_y_tip,
                spec.add_z_tip,
                spec.n_pieces,
                spec.index
            ],
        )
    }

    /// Map axes-space coordinates to a spatial point.
    pub fn coords_to_point_on_three_d_axes(
        &self,
        axes: &SolidNode,
        coords: Point3,
        x_range: (f64, f64),
        y_range: (f64, f64),
        z_range: (f64, f64),
    ) -> ScenelinkResult<Point3> {
        self.call(
            CallClass::Query,
            "coordsToPointOnThreeDAxes",
            wire_args![
                axes, coords, x_range.0, x_range.1, y_range.0, y_range.1, z_range.0, z_range.1
            ],
        )
    }

    /// Map a spatial point back into axes-space coordinates.
    pub fn point_on_three_d_axes_to_coords(
        &self,
        axes: &SolidNode,
        point: Point3,
        x_range: (f64, f64),
        y_range: (f64, f64),
        z_range: (f64, f64),
    ) -> ScenelinkResult<Point3> {
        self.call(
            CallClass::Query,
            "pointOnThreeDAxesToCoords",
            wire_args![
                axes, point, x_range.0, x_range.1, y_range.0, y_range.1, z_range.0, z_range.1
            ],
        )
    }

    /// Surface plot of `f(u, v) -> (x, y, z)` inside `axes`.
    #[allow(clippy::too_many_arguments)]
    pub fn new_parametric_plot_in_three_d_axes(
        &self,
        axes: &SolidNode,
        f: impl Fn(f64, f64) -> (f64, f64, f64) + Send + Sync + 'static,
        u_range: (f64, f64, u32),
        v_range: (f64, f64, u32),
        x_range: (f64, f64),
        y_range: (f64, f64),
        z_range: (f64, f64),
        fills: &[Color],
        strokes: &[Color],
        stroke_width: f64,
        index: i64,
    ) -> ScenelinkResult<SolidNode> {
        let cb = ScopedCallback::new(self.connection().callbacks(), adapters::surface(f));
        self.call(
            CallClass::Animation,
            "newParametricPlotInThreeDAxes",
            wire_args![
                axes,
                cb.handle,
                u_range.0,
                u_range.1,
                v_range.0,
                v_range.1,
                u_range.2,
                v_range.2,
                x_range.0,
                x_range.1,
                y_range.0,
                y_range.1,
                z_range.0,
                z_range.1,
                fills,
                strokes,
                stroke_width,
                index
            ],
        )
    }

    /// Surface plot of `z = f(x, y)` inside `axes`.
    #[allow(clippy::too_many_arguments)]
    pub fn new_plot_in_three_d_axes(
        &self,
        axes: &SolidNode,
        f: impl Fn(f64, f64) -> f64 + Send + Sync + 'static,
        u_range: (f64, f64, u32),
        v_range: (f64, f64, u32),
        x_range: (f64, f64),
        y_range: (f64, f64),
        z_range: (f64, f64),
        fills: &[Color],
        strokes: &[Color],
        stroke_width: f64,
        index: i64,
    ) -> ScenelinkResult<SolidNode> {
        let cb = ScopedCallback::new(self.connection().callbacks(), adapters::scalar_field(f));
        self.call(
            CallClass::Animation,
            "newPlotInThreeDAxes",
            wire_args![
                axes,
                cb.handle,
                u_range.0,
                u_range.1,
                v_range.0,
                v_range.1,
                u_range.2,
                v_range.2,
                x_range.0,
                x_range.1,
                y_range.0,
                y_range.1,
                z_range.0,
                z_range.1,
                fills,
                strokes,
                stroke_width,
                index
            ],
        )
    }

    /// Space-curve plot of `f(t) -> (x, y, z)` inside `axes`.
    #[allow(clippy::too_many_arguments)]
    pub fn new_parametric_line_plot_in_three_d_axes(
        &self,
        axes: &SolidNode,
        f: impl Fn(f64) -> (f64, f64, f64) + Send + Sync + 'static,
        t_range: (f64, f64, u32),
        x_range: (f64, f64),
        y_range: (f64, f64),
        z_range: (f64, f64),
        color: Color,
        stroke_width: f64,
        index: i64,
    ) -> ScenelinkResult<SolidNode> {
        let cb = ScopedCallback::new(self.connection().callbacks(), adapters::parametric3(f));
        self.call(
            CallClass::Animation,
            "newParametricLinePlotInThreeDAxes",
            wire_args![
                axes,
                cb.handle,
                t_range.0,
                t_range.1,
                t_range.2,
                x_range.0,
                x_range.1,
                y_range.0,
                y_range.1,
                z_range.0,
                z_range.1,
                color,
                stroke_width,
                index
            ],
        )
    }

    /// Build a solid by sampling `f(u, v)` over the given grid.
    #[allow(clippy::too_many_arguments)]
    pub fn from_uv_function(
        &self,
        f: impl Fn(f64, f64) -> (f64, f64, f64) + Send + Sync + 'static,
        u_range: (f64, f64),
        v_range: (f64, f64),
        u_num_steps: u32,
        v_num_steps: u32,
        fills: &[Color],
        strokes: &[Color],
        stroke_width: f64,
        index: i64,
    ) -> ScenelinkResult<SolidNode> {
        let cb = ScopedCallback::new(self.connection().callbacks(), adapters::surface(f));
        self.call(
            CallClass::Animation,
            "fromUVFunction3D",
            wire_args![
                cb.handle,
                u_range,
                v_range,
                u_num_steps,
                v_num_steps,
                fills,
                strokes,
                stroke_width,
                index
            ],
        )
    }

    /// Lift a planar node into the 3-D scene (z = 0).
    pub fn solid_from_vector(&self, node: &VectorNode) -> ScenelinkResult<SolidNode> {
        self.call(
            CallClass::Query,
            "threeDObjectFromVectorObject",
            wire_args![node],
        )
    }

    // ---- staged animations ------------------------------------------------

    /// Partially drawn copy of `node` at progress `t`.
    pub fn create_solid(&self, node: &SolidNode, t: f64) -> ScenelinkResult<SolidNode> {
        self.call(CallClass::Query, "createThreeDObject", wire_args![node, t])
    }

    /// Staged reveal of a 3-D axes node.
    pub fn create_axes_3d(
        &self,
        axes: &SolidNode,
        t: f64,
        default_stroke_width: f64,
    ) -> ScenelinkResult<SolidNode> {
        self.call(
            CallClass::Query,
            "createAxes3D",
            wire_args![axes, t, default_stroke_width],
        )
    }

    pub fn draw_stroke_then_fill_3d(
        &self,
        node: &SolidNode,
        t: f64,
        default_stroke_width: f64,
    ) -> ScenelinkResult<SolidNode> {
        self.call(
            CallClass::Query,
            "drawStrokeThenFill3D",
            wire_args![node, t, default_stroke_width],
        )
    }

    pub fn fade_in_3d(
        &self,
        node: &SolidNode,
        scale_factor: f64,
        shift: Point3,
        t: f64,
    ) -> ScenelinkResult<SolidNode> {
        self.call(
            CallClass::Query,
            "fadeIn3D",
            wire_args![node, scale_factor, shift, t],
        )
    }

    pub fn fade_out_3d(
        &self,
        node: &SolidNode,
        scale_factor: f64,
        shift: Point3,
        t: f64,
    ) -> ScenelinkResult<SolidNode> {
        self.call(
            CallClass::Query,
            "fadeOut3D",
            wire_args![node, scale_factor, shift, t],
        )
    }

    pub fn grow_from_center_3d(&self, node: &SolidNode, t: f64) -> ScenelinkResult<SolidNode> {
        self.call(CallClass::Query, "growFromCenter3D", wire_args![node, t])
    }

    pub fn morph_shape_3d(
        &self,
        node: &SolidNode,
        target: &SolidNode,
        t: f64,
    ) -> ScenelinkResult<SolidNode> {
        self.call(CallClass::Query, "morphShape3D", wire_args![node, target, t])
    }

    pub fn rotate_x_animation_3d(
        &self,
        node: &SolidNode,
        angle: f64,
        t: f64,
    ) -> ScenelinkResult<SolidNode> {
        self.call(
            CallClass::Query,
            "rotateXAnimation3D",
            wire_args![node, angle, t],
        )
    }

    pub fn rotate_y_animation_3d(
        &self,
        node: &SolidNode,
        angle: f64,
        t: f64,
    ) -> ScenelinkResult<SolidNode> {
        self.call(
            CallClass::Query,
            "rotateYAnimation3D",
            wire_args![node, angle, t],
        )
    }

    pub fn rotate_z_animation_3d(
        &self,
        node: &SolidNode,
        angle: f64,
        t: f64,
    ) -> ScenelinkResult<SolidNode> {
        self.call(
            CallClass::Query,
            "rotateZAnimation3D",
            wire_args![node, angle, t],
        )
    }

    pub fn scale_in_place_3d(
        &self,
        node: &SolidNode,
        scale_factor: f64,
        t: f64,
    ) -> ScenelinkResult<SolidNode> {
        self.call(
            CallClass::Query,
            "scaleInPlace3D",
            wire_args![node, scale_factor, t],
        )
    }

    pub fn set_fill_animation_3d(
        &self,
        node: &SolidNode,
        fill: &Paint,
        t: f64,
    ) -> ScenelinkResult<SolidNode> {
        self.call(
            CallClass::Query,
            "setFillAnimation3D",
            wire_args![node, fill, t],
        )
    }

    pub fn set_stroke_animation_3d(
        &self,
        node: &SolidNode,
        stroke: &Paint,
        t: f64,
    ) -> ScenelinkResult<SolidNode> {
        self.call(
            CallClass::Query,
            "setStrokeAnimation3D",
            wire_args![node, stroke, t],
        )
    }

    pub fn shift_animation_3d(
        &self,
        node: &SolidNode,
        shift: Point3,
        t: f64,
    ) -> ScenelinkResult<SolidNode> {
        self.call(
            CallClass::Query,
            "shiftAnimation3D",
            wire_args![node, shift, t],
        )
    }

    // ---- transforms -------------------------------------------------------

    pub fn shift_3d(
        &self,
        node: &SolidNode,
        delta: Point3,
        recursive: bool,
    ) -> ScenelinkResult<SolidNode> {
        self.call(CallClass::Query, "shift3D", wire_args![node, delta, recursive])
    }

    pub fn scale_3d(
        &self,
        node: &SolidNode,
        scale_factor: f64,
        recursive: bool,
    ) -> ScenelinkResult<SolidNode> {
        self.call(
            CallClass::Query,
            "scale3D",
            wire_args![node, scale_factor, recursive],
        )
    }

    /// Scale non-uniformly by `(sx, sy, sz)`.
    pub fn stretch_3d(
        &self,
        node: &SolidNode,
        factor: Point3,
        recursive: bool,
    ) -> ScenelinkResult<SolidNode> {
        self.call(
            CallClass::Query,
            "stretch3D",
            wire_args![node, factor, recursive],
        )
    }

    pub fn rotate_x_3d(
        &self,
        node: &SolidNode,
        angle: f64,
        recursive: bool,
    ) -> ScenelinkResult<SolidNode> {
        self.call(CallClass::Query, "rotateX3D", wire_args![node, angle, recursive])
    }

    pub fn rotate_y_3d(
        &self,
        node: &SolidNode,
        angle: f64,
        recursive: bool,
    ) -> ScenelinkResult<SolidNode> {
        self.call(CallClass::Query, "rotateY3D", wire_args![node, angle, recursive])
    }

    pub fn rotate_z_3d(
        &self,
        node: &SolidNode,
        angle: f64,
        recursive: bool,
    ) -> ScenelinkResult<SolidNode> {
        self.call(CallClass::Query, "rotateZ3D", wire_args![node, angle, recursive])
    }

    pub fn move_to_3d(
        &self,
        node: &SolidNode,
        point: Point3,
        recursive: bool,
    ) -> ScenelinkResult<SolidNode> {
        self.call(CallClass::Query, "moveTo3D", wire_args![node, point, recursive])
    }

    pub fn next_to_other_3d(
        &self,
        node: &SolidNode,
        other: &SolidNode,
        direction: Point3,
        buff: f64,
        aligned_edge: Point3,
        recursive: bool,
    ) -> ScenelinkResult<SolidNode> {
        self.call(
            CallClass::Query,
            "nextToOther3D",
            wire_args![node, other, direction, buff, aligned_edge, recursive],
        )
    }

    pub fn next_to_point_3d(
        &self,
        node: &SolidNode,
        point: Point3,
        direction: Point3,
        buff: f64,
        aligned_edge: Point3,
        recursive: bool,
    ) -> ScenelinkResult<SolidNode> {
        self.call(
            CallClass::Query,
            "nextToPoint3D",
            wire_args![node, point, direction, buff, aligned_edge, recursive],
        )
    }

    pub fn arrange_subobjects_3d(
        &self,
        node: &SolidNode,
        direction: Point3,
        buff: f64,
        aligned_edge: Point3,
        recursive: bool,
    ) -> ScenelinkResult<SolidNode> {
        self.call(
            CallClass::Query,
            "arrangeSubobjects3D",
            wire_args![node, direction, buff, aligned_edge, recursive],
        )
    }

    /// Run every point of `node` through the host function `f`.
    pub fn apply_function_3d(
        &self,
        node: &SolidNode,
        f: impl Fn(Point3) -> Point3 + Send + Sync + 'static,
        recursive: bool,
    ) -> ScenelinkResult<SolidNode> {
        let cb = ScopedCallback::new(self.connection().callbacks(), adapters::point3_map(f));
        self.call(
            CallClass::Animation,
            "applyFunction3D",
            wire_args![node, cb.handle, recursive],
        )
    }

    // ---- measurements and projection --------------------------------------

    pub fn bounding_box_3d(&self, node: &SolidNode) -> ScenelinkResult<(Point3, Point3)> {
        self.call(CallClass::Query, "getBoundingBox3D", wire_args![node])
    }

    pub fn center_3d(&self, node: &SolidNode) -> ScenelinkResult<Point3> {
        self.call(CallClass::Query, "getCenter3D", wire_args![node])
    }

    /// Extremal point of the node's bounding box along `key`.
    pub fn critical_point_3d(&self, node: &SolidNode, key: Point3) -> ScenelinkResult<Point3> {
        self.call(CallClass::Query, "getCriticalPoint3D", wire_args![node, key])
    }

    pub fn merged_points_3d(&self, node: &SolidNode) -> ScenelinkResult<Vec<Point3>> {
        self.call(CallClass::Query, "mergedPoints3D", wire_args![node])
    }

    pub fn partial_copy_3d(
        &self,
        node: &SolidNode,
        start: f64,
        end: f64,
        recursive: bool,
    ) -> ScenelinkResult<SolidNode> {
        self.call(
            CallClass::Query,
            "getPartialCopy3D",
            wire_args![node, start, end, recursive],
        )
    }

    pub fn anchors_and_handles_3d(&self, node: &SolidNode) -> ScenelinkResult<AnchorsAndHandles3> {
        self.call(CallClass::Query, "getAnchorsAndHandles3D", wire_args![node])
    }

    pub fn set_anchors_and_handles_3d(
        &self,
        node: &SolidNode,
        anchors_and_handles: &AnchorsAndHandles3,
    ) -> ScenelinkResult<SolidNode> {
        self.call(
            CallClass::Query,
            "setAnchorsAndHandles3D",
            wire_args![node, anchors_and_handles],
        )
    }

    pub fn scale_handle_to_anchor_distances_3d(
        &self,
        node: &SolidNode,
        scale: f64,
        recursive: bool,
    ) -> ScenelinkResult<SolidNode> {
        self.call(
            CallClass::Query,
            "scaleHandleToAnchorDistances3D",
            wire_args![node, scale, recursive],
        )
    }

    /// The path's cubic segments as `[anchor, handle, handle, anchor]`.
    pub fn cubic_bezier_tuples_3d(&self, node: &SolidNode) -> ScenelinkResult<Vec<[Point3; 4]>> {
        let flat: Vec<[f64; 12]> =
            self.call(CallClass::Query, "getCubicBezierTuples3D", wire_args![node])?;
        Ok(flat
            .into_iter()
            .map(|p| {
                [
                    Point3(p[0], p[1], p[2]),
                    Point3(p[3], p[4], p[5]),
                    Point3(p[6], p[7], p[8]),
                    Point3(p[9], p[10], p[11]),
                ]
            })
            .collect())
    }

    /// Flattened list of all descendants.
    pub fn subobjects_recursively_3d(&self, node: &SolidNode) -> ScenelinkResult<Vec<SolidNode>> {
        self.call(
            CallClass::Query,
            "getSubobjectsRecursively3D",
            wire_args![node],
        )
    }

    /// Project and shade one solid through an explicit camera and light.
    pub fn project_and_shade(
        &self,
        node: &SolidNode,
        camera: &Camera,
        light_source: &LightSource,
    ) -> ScenelinkResult<VectorNode> {
        self.call(
            CallClass::Query,
            "projectAndShade3D",
            wire_args![node, camera, light_source],
        )
    }

    /// Project raw spatial points through `camera`.
    pub fn project_points(
        &self,
        points: &[Point3],
        camera: &Camera,
    ) -> ScenelinkResult<Vec<Point2>> {
        self.call(CallClass::Query, "projectPoints", wire_args![points, camera])
    }
}
