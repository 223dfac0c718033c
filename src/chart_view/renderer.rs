//! Commits a [`PlotScene`] to a GPUI window.
//!
//! Paths and markers are painted on a canvas; text (tick labels, hint,
//! tooltip, hover readout) is laid out as absolutely positioned children.

use crate::chart::BellCurveChart;
use crate::data_types::AxisOrientation;
use crate::scene::{AxisTicks, PlotScene};
use crate::theme::ChartTheme;
use gpui::prelude::*;
use gpui::*;
use std::cell::RefCell;
use std::rc::Rc;

const TICK_SIZE: f32 = 6.0;

pub struct ChartRenderer {
    pub chart: Entity<BellCurveChart>,
    pub theme: ChartTheme,

    // Surface bounds shared with the input handler
    pub bounds: Rc<RefCell<Bounds<Pixels>>>,
}

impl ChartRenderer {
    pub fn new(chart: Entity<BellCurveChart>, bounds: Rc<RefCell<Bounds<Pixels>>>) -> Self {
        Self {
            chart,
            theme: ChartTheme::default(),
            bounds,
        }
    }

    pub fn render(&self, _window: &mut Window, cx: &mut App) -> Div {
        let chart = self.chart.read(cx);
        let scene = chart.scene();
        let handle_radius = px(chart.config().handle_radius);
        let theme = self.theme.clone();
        let bounds_rc = self.bounds.clone();
        let labels = label_elements(&scene, &theme);
        let size = scene.surface_size;

        div()
            .relative()
            .w(size.width)
            .h(size.height)
            .bg(theme.background)
            .child(
                canvas(
                    |_bounds, _window, _cx| {},
                    move |bounds, (), window, _cx| {
                        *bounds_rc.borrow_mut() = bounds;
                        paint_scene(window, bounds.origin, &scene, &theme, handle_radius);
                    },
                )
                .size_full(),
            )
            .children(labels)
    }
}

fn shift(point: Point<Pixels>, origin: Point<Pixels>) -> Point<Pixels> {
    Point::new(point.x + origin.x, point.y + origin.y)
}

/// Paints curve, handles, grid and axis lines. Scene coordinates are relative to `origin`.
pub fn paint_scene(
    window: &mut Window,
    origin: Point<Pixels>,
    scene: &PlotScene,
    theme: &ChartTheme,
    handle_radius: Pixels,
) {
    let plot = Bounds::new(shift(scene.plot_bounds.origin, origin), scene.plot_bounds.size);

    paint_grid(window, origin, plot, &scene.x_axis, &scene.y_axis, theme);
    paint_axis_lines(window, origin, plot, &scene.x_axis, &scene.y_axis, theme);

    window.with_content_mask(Some(ContentMask { bounds: plot }), |window| {
        if !scene.curve.is_empty() {
            let mut builder = PathBuilder::stroke(theme.curve_width);
            let mut points = scene.curve.points.iter().map(|p| shift(*p, origin));
            if let Some(first) = points.next() {
                builder.move_to(first);
                for p in points {
                    builder.line_to(p);
                }
            }
            if let Ok(path) = builder.build() {
                window.paint_path(path, theme.curve);
            }
        }

        if let Some(hover) = &scene.hover {
            paint_dot(window, shift(hover.marker, origin), px(3.0), theme.hover_marker);
        }

        for handle in &scene.handles {
            let color = if handle.active {
                theme.handle_active
            } else {
                theme.handle
            };
            paint_dot(window, shift(handle.position, origin), handle_radius, color);
        }
    });
}

fn paint_dot(window: &mut Window, center: Point<Pixels>, radius: Pixels, color: Hsla) {
    let bounds = Bounds::centered_at(center, size(radius * 2.0, radius * 2.0));
    window.paint_quad(fill(bounds, color).corner_radii(Corners::all(radius)));
}

// Grid lines span the whole plot area at every tick.
fn paint_grid(
    window: &mut Window,
    origin: Point<Pixels>,
    plot: Bounds<Pixels>,
    x_axis: &AxisTicks,
    y_axis: &AxisTicks,
    theme: &ChartTheme,
) {
    let mut builder = PathBuilder::stroke(px(1.0));
    let mut has_lines = false;

    for tick in &x_axis.ticks {
        let x = origin.x + tick.position;
        builder.move_to(Point::new(x, plot.top()));
        builder.line_to(Point::new(x, plot.bottom()));
        has_lines = true;
    }
    for tick in &y_axis.ticks {
        let y = origin.y + tick.position;
        builder.move_to(Point::new(plot.left(), y));
        builder.line_to(Point::new(plot.right(), y));
        has_lines = true;
    }

    if has_lines {
        if let Ok(path) = builder.build() {
            window.paint_path(path, theme.grid_line);
        }
    }
}

fn paint_axis_lines(
    window: &mut Window,
    origin: Point<Pixels>,
    plot: Bounds<Pixels>,
    x_axis: &AxisTicks,
    y_axis: &AxisTicks,
    theme: &ChartTheme,
) {
    let mut builder = PathBuilder::stroke(px(1.0));
    builder.move_to(Point::new(plot.left(), plot.bottom()));
    builder.line_to(Point::new(plot.right(), plot.bottom()));
    builder.move_to(Point::new(plot.left(), plot.top()));
    builder.line_to(Point::new(plot.left(), plot.bottom()));

    for tick in &x_axis.ticks {
        let x = origin.x + tick.position;
        builder.move_to(Point::new(x, plot.bottom()));
        builder.line_to(Point::new(x, plot.bottom() + px(TICK_SIZE)));
    }
    for tick in &y_axis.ticks {
        let y = origin.y + tick.position;
        builder.move_to(Point::new(plot.left() - px(TICK_SIZE), y));
        builder.line_to(Point::new(plot.left(), y));
    }

    if let Ok(path) = builder.build() {
        window.paint_path(path, theme.axis_line);
    }
}

/// Text elements, positioned relative to the surface.
pub fn label_elements(scene: &PlotScene, theme: &ChartTheme) -> Vec<AnyElement> {
    let mut elements = Vec::new();
    let font_size = theme.axis_label_size;

    for axis in [&scene.x_axis, &scene.y_axis] {
        for tick in &axis.ticks {
            let label = match axis.orientation {
                AxisOrientation::Horizontal => div()
                    .absolute()
                    .left(tick.position - px(40.0))
                    .top(axis.baseline + px(TICK_SIZE + 2.0))
                    .w(px(80.0))
                    .flex()
                    .justify_center(),
                AxisOrientation::Vertical => div()
                    .absolute()
                    .left(px(0.0))
                    .top(tick.position - px(8.0))
                    .w(axis.baseline - px(TICK_SIZE + 4.0))
                    .h(px(16.0))
                    .flex()
                    .items_center()
                    .justify_end(),
            };
            elements.push(
                label
                    .text_color(theme.axis_label)
                    .text_size(font_size)
                    .child(tick.label.clone())
                    .into_any_element(),
            );
        }
    }

    elements.push(
        div()
            .absolute()
            .left(scene.plot_bounds.left() + px(10.0))
            .top(scene.plot_bounds.top() + px(10.0))
            .text_size(font_size)
            .text_color(theme.hint_text)
            .child(scene.hint)
            .into_any_element(),
    );

    if let Some(hover) = &scene.hover {
        elements.push(
            div()
                .absolute()
                .left(hover.marker.x + px(8.0))
                .top(hover.marker.y - px(20.0))
                .text_size(font_size)
                .text_color(theme.axis_label)
                .child(hover.label.clone())
                .into_any_element(),
        );
    }

    if let Some(tooltip) = &scene.tooltip {
        elements.push(
            div()
                .absolute()
                .left(tooltip.anchor.x - px(60.0))
                .top(tooltip.anchor.y - px(10.0))
                .w(px(120.0))
                .px_1()
                .rounded_sm()
                .bg(theme.tooltip_background)
                .text_color(theme.tooltip_text)
                .text_size(font_size)
                .flex()
                .justify_center()
                .child(tooltip.text.clone())
                .into_any_element(),
        );
    }

    elements
}
