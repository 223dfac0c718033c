//! Scene computation.
//!
//! Turns the current state into drawable primitives in surface-local screen
//! coordinates. Nothing here touches a window, so every frame's geometry can be
//! checked directly in tests; `chart_view::renderer` commits it to GPUI.

use gpui::{Bounds, Pixels, Point, Size};

use crate::curve::{render_curve, CurvePath};
use crate::data_types::{AxisOrientation, CurveParameters};
use crate::handles::{HandleManager, HandleMarker, TooltipLabel};
use crate::transform::PlotTransform;

pub const HINT_TEXT: &str = "drag & scroll the plot for panning and zooming";

#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick {
    pub value: f64,
    pub label: String,
    /// Screen coordinate along the axis (x for horizontal, y for vertical).
    pub position: Pixels,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisTicks {
    pub orientation: AxisOrientation,
    /// Screen coordinate of the axis line across its orientation.
    pub baseline: Pixels,
    pub ticks: Vec<AxisTick>,
}

/// Marker and coordinate label at the pointer's x on the curve.
#[derive(Clone, Debug, PartialEq)]
pub struct HoverReadout {
    pub marker: Point<Pixels>,
    pub data: Point<f64>,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlotScene {
    pub surface_size: Size<Pixels>,
    /// Clip rectangle for the curve and handles.
    pub plot_bounds: Bounds<Pixels>,
    pub curve: CurvePath,
    pub handles: [HandleMarker; 2],
    pub x_axis: AxisTicks,
    pub y_axis: AxisTicks,
    pub tooltip: Option<TooltipLabel>,
    pub hover: Option<HoverReadout>,
    pub hint: &'static str,
}

pub struct SceneInputs<'a> {
    pub params: CurveParameters,
    pub transform: &'a PlotTransform,
    pub handles: &'a HandleManager,
    pub surface_size: Size<Pixels>,
    pub sample_count: usize,
    pub x_tick_count: usize,
    pub y_tick_count: usize,
    /// Pointer over the plot background, if the hover readout should show.
    pub hover_pointer: Option<Point<Pixels>>,
}

pub fn compute_scene(inputs: &SceneInputs<'_>) -> PlotScene {
    let transform = inputs.transform;
    let bounds = transform.bounds;

    let x_axis = AxisTicks {
        orientation: AxisOrientation::Horizontal,
        baseline: bounds.bottom(),
        ticks: axis_ticks(transform, AxisOrientation::Horizontal, inputs.x_tick_count),
    };
    let y_axis = AxisTicks {
        orientation: AxisOrientation::Vertical,
        baseline: bounds.left(),
        ticks: axis_ticks(transform, AxisOrientation::Vertical, inputs.y_tick_count),
    };

    PlotScene {
        surface_size: inputs.surface_size,
        plot_bounds: bounds,
        curve: render_curve(inputs.params, transform, inputs.sample_count),
        handles: inputs.handles.markers(inputs.params, transform),
        x_axis,
        y_axis,
        tooltip: inputs.handles.tooltip(),
        hover: inputs
            .hover_pointer
            .map(|pointer| hover_readout(inputs.params, transform, pointer))
            .filter(|readout| transform.contains(readout.marker)),
        hint: HINT_TEXT,
    }
}

fn axis_ticks(transform: &PlotTransform, orientation: AxisOrientation, count: usize) -> Vec<AxisTick> {
    let scale = match orientation {
        AxisOrientation::Horizontal => &transform.x_scale,
        AxisOrientation::Vertical => &transform.y_scale,
    };
    let (d_min, d_max) = scale.domain();
    scale
        .ticks(count)
        .into_iter()
        .filter(|v| (d_min..=d_max).contains(v))
        .map(|value| AxisTick {
            value,
            label: scale.format_tick(value),
            position: match orientation {
                AxisOrientation::Horizontal => transform.x_data_to_screen(value),
                AxisOrientation::Vertical => transform.y_data_to_screen(value),
            },
        })
        .collect()
}

pub fn hover_readout(
    params: CurveParameters,
    transform: &PlotTransform,
    pointer: Point<Pixels>,
) -> HoverReadout {
    let x = transform.x_screen_to_data(pointer.x);
    let y = params.density_at(x);
    HoverReadout {
        marker: transform.data_to_screen(Point::new(x, y)),
        data: Point::new(x, y),
        label: format!("(x: {:.3}; y: {:.3})", x, y),
    }
}
