//! Transform helper for coordinate projection

use crate::data_types::Viewport;
use crate::scales::ChartScale;
use crate::utils::PixelsExt;
use gpui::*;

/// Data <-> screen mapping for one viewport state.
///
/// Screen x grows with data x, screen y shrinks as data y grows. Always derived
/// from the current [`Viewport`]; never cached across viewport mutations.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotTransform {
    pub x_scale: ChartScale,
    pub y_scale: ChartScale,
    pub bounds: Bounds<Pixels>,
}

impl PlotTransform {
    pub fn new(x_scale: ChartScale, y_scale: ChartScale, bounds: Bounds<Pixels>) -> Self {
        Self {
            x_scale,
            y_scale,
            bounds,
        }
    }

    pub fn from_viewport(viewport: &Viewport, bounds: Bounds<Pixels>) -> Self {
        let x_scale = ChartScale::new_linear(viewport.x.domain(), (0.0, bounds.size.width.as_f32()));
        let y_scale =
            ChartScale::new_linear(viewport.y.domain(), (bounds.size.height.as_f32(), 0.0));
        Self::new(x_scale, y_scale, bounds)
    }

    pub fn data_to_screen(&self, point: Point<f64>) -> Point<Pixels> {
        Point::new(
            self.x_data_to_screen(point.x),
            self.y_data_to_screen(point.y),
        )
    }

    pub fn screen_to_data(&self, point: Point<Pixels>) -> Point<f64> {
        Point::new(
            self.x_screen_to_data(point.x),
            self.y_scale
                .invert((point.y - self.bounds.origin.y).as_f32()),
        )
    }

    pub fn x_data_to_screen(&self, x: f64) -> Pixels {
        self.bounds.origin.x + px(self.x_scale.map(x))
    }

    pub fn y_data_to_screen(&self, y: f64) -> Pixels {
        self.bounds.origin.y + px(self.y_scale.map(y))
    }

    pub fn x_screen_to_data(&self, x: Pixels) -> f64 {
        self.x_scale.invert((x - self.bounds.origin.x).as_f32())
    }

    /// Visible x-range in data units.
    pub fn x_domain(&self) -> (f64, f64) {
        self.x_scale.domain()
    }

    /// Whether `point` lies in the plot area, edges included.
    pub fn contains(&self, point: Point<Pixels>) -> bool {
        let b = &self.bounds;
        point.x >= b.left() && point.x <= b.right() && point.y >= b.top() && point.y <= b.bottom()
    }
}
