//! Function plotting. The engine samples the user function through the
//! callback bridge, so these calls run under the animation timeout
//! (unbounded by default) and retire their callback when the builder
//! returns.

use crate::bridge::callbacks::ScopedCallback;
use crate::foundation::error::ScenelinkResult;
use crate::model::node::VectorNode;
use crate::scene::{CallClass, Scene, adapters};
use crate::wire::codec::wire_args;

impl Scene {
    /// Plot `f(t) -> (x, y)` over `t_range = (min, max, step)`.
    pub fn new_parametric_plot(
        &self,
        f: impl Fn(f64) -> (f64, f64) + Send + Sync + 'static,
        t_range: (f64, f64, f64),
    ) -> ScenelinkResult<VectorNode> {
        let cb = ScopedCallback::new(self.connection().callbacks(), adapters::parametric2(f));
        self.call(
            CallClass::Animation,
            "newParametricPlot",
            wire_args![cb.handle, t_range.0, t_range.1, t_range.2],
        )
    }

    /// Plot `y = f(x)` over `x_range = (min, max, step)`.
    pub fn new_real_function(
        &self,
        f: impl Fn(f64) -> f64 + Send + Sync + 'static,
        x_range: (f64, f64, f64),
    ) -> ScenelinkResult<VectorNode> {
        let cb = ScopedCallback::new(self.connection().callbacks(), adapters::real_function(f));
        self.call(
            CallClass::Animation,
            "newRealFunction",
            wire_args![cb.handle, x_range.0, x_range.1, x_range.2],
        )
    }

    /// Contour plot of `f(x, y)` at the given iso-`intervals`.
    pub fn new_contour_plot(
        &self,
        f: impl Fn(f64, f64) -> f64 + Send + Sync + 'static,
        x_range: (f64, f64, f64),
        y_range: (f64, f64, f64),
        intervals: &[f64],
    ) -> ScenelinkResult<VectorNode> {
        let cb = ScopedCallback::new(self.connection().callbacks(), adapters::scalar_field(f));
        self.call(
            CallClass::Animation,
            "newContourPlot",
            wire_args![
                cb.handle,
                x_range.0,
                x_range.1,
                x_range.2,
                y_range.0,
                y_range.1,
                y_range.2,
                intervals
            ],
        )
    }

    /// Plot `f(t) -> (x, y)` in axes-space coordinates of `axes`.
    #[allow(clippy::too_many_arguments)]
    pub fn new_parametric_plot_in_axes(
        &self,
        f: impl Fn(f64) -> (f64, f64) + Send + Sync + 'static,
        t_range: (f64, f64, f64),
        axes: &VectorNode,
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    ) -> ScenelinkResult<VectorNode> {
        let cb = ScopedCallback::new(self.connection().callbacks(), adapters::parametric2(f));
        self.call(
            CallClass::Animation,
            "newParametricPlotInAxes",
            wire_args![
                cb.handle,
                t_range.0,
                t_range.1,
                t_range.2,
                axes,
                x_min,
                x_max,
                y_min,
                y_max
            ],
        )
    }

    /// Plot `y = f(x)` in axes-space coordinates of `axes`.
    #[allow(clippy::too_many_arguments)]
    pub fn new_plot_in_axes(
        &self,
        f: impl Fn(f64) -> f64 + Send + Sync + 'static,
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
        x_range: (f64, f64, f64),
        axes: &VectorNode,
    ) -> ScenelinkResult<VectorNode> {
        let cb = ScopedCallback::new(self.connection().callbacks(), adapters::real_function(f));
        self.call(
            CallClass::Animation,
            "newPlotInAxes",
            wire_args![
                cb.handle,
                x_min,
                x_max,
                y_min,
                y_max,
                x_range.0,
                x_range.1,
                x_range.2,
                axes
            ],
        )
    }

    /// Contour plot of `f(x, y)` in axes-space coordinates of `axes`.
    #[allow(clippy::too_many_arguments)]
    pub fn new_contour_plot_in_axes(
        &self,
        f: impl Fn(f64, f64) -> f64 + Send + Sync + 'static,
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
        x_range: (f64, f64, f64),
        y_range: (f64, f64, f64),
        axes: &VectorNode,
        intervals: &[f64],
    ) -> ScenelinkResult<VectorNode> {
        let cb = ScopedCallback::new(self.connection().callbacks(), adapters::scalar_field(f));
        self.call(
            CallClass::Animation,
            "newContourPlotInAxes",
            wire_args![
                cb.handle,
                x_min,
                x_max,
                y_min,
                y_max,
                x_range.0,
                x_range.1,
                x_range.2,
                y_range.0,
                y_range.1,
                y_range.2,
                axes,
                intervals
            ],
        )
    }

    /// Shade the region under `plot` between the x-coordinates in `x_range`.
    #[allow(clippy::too_many_arguments)]
    pub fn new_area_under_curve(
        &self,
        axes: &VectorNode,
        plot: &VectorNode,
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
        x_range: (f64, f64),
    ) -> ScenelinkResult<VectorNode> {
        self.call(
            CallClass::Query,
            "newAreaUnderCurve",
            wire_args![axes, plot, x_min, x_max, y_min, y_max, x_range.0, x_range.1],
        )
    }

    /// Riemann rectangles approximating `f` over `x_range`.
    #[allow(clippy::too_many_arguments)]
    pub fn riemann_rectangles_for_plot(
        &self,
        f: impl Fn(f64) -> f64 + Send + Sync + 'static,
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
        direction: f64,
        x_range: (f64, f64),
        n_rects: u32,
        axes: &VectorNode,
    ) -> ScenelinkResult<VectorNode> {
        let cb = ScopedCallback::new(self.connection().callbacks(), adapters::real_function(f));
        self.call(
            CallClass::Animation,
            "riemannRectanglesForPlot",
            wire_args![
                cb.handle,
                x_min,
                x_max,
                y_min,
                y_max,
                direction,
                x_range.0,
                x_range.1,
                n_rects,
                axes
            ],
        )
    }

    /// Secant line of `f` through the x-coordinates in `x_range`.
    #[allow(clippy::too_many_arguments)]
    pub fn secant_line_for_plot(
        &self,
        f: impl Fn(f64) -> f64 + Send + Sync + 'static,
        x_range: (f64, f64),
        length: f64,
        axes: &VectorNode,
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    ) -> ScenelinkResult<VectorNode> {
        let cb = ScopedCallback::new(self.connection().callbacks(), adapters::real_function(f));
        self.call(
            CallClass::Animation,
            "secantLineForPlot",
            wire_args![
                cb.handle,
                x_range.0,
                x_range.1,
                length,
                axes,
                x_min,
                x_max,
                y_min,
                y_max
            ],
        )
    }
}
