//! Scale/Transform Manager
//!
//! Owns the [`Viewport`] and the fixed plot geometry. Every read of the
//! transform derives it from the current viewport, so zoom and pan take
//! effect on the very next mapping.

use gpui::{Bounds, Pixels, Point};
use tracing::{debug, trace};

use crate::data_types::{PlotGeometry, Viewport};
use crate::transform::PlotTransform;
use crate::utils::PixelsExt;
use crate::view_controller::ViewController;

#[derive(Clone, Debug, PartialEq)]
pub struct ScaleManager {
    viewport: Viewport,
    geometry: PlotGeometry,
    scale_extent: (f64, f64),
}

impl ScaleManager {
    pub fn new(
        geometry: PlotGeometry,
        x_domain: (f64, f64),
        y_domain: (f64, f64),
        scale_extent: (f64, f64),
    ) -> Self {
        Self {
            viewport: Viewport::new(x_domain, y_domain),
            geometry,
            scale_extent,
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn geometry(&self) -> PlotGeometry {
        self.geometry
    }

    pub fn scale(&self) -> f64 {
        self.viewport.scale
    }

    pub fn scale_extent(&self) -> (f64, f64) {
        self.scale_extent
    }

    pub fn plot_bounds(&self) -> Bounds<Pixels> {
        self.geometry.plot_bounds()
    }

    pub fn transform(&self) -> PlotTransform {
        PlotTransform::from_viewport(&self.viewport, self.plot_bounds())
    }

    pub fn to_screen(&self, point: Point<f64>) -> Point<Pixels> {
        self.transform().data_to_screen(point)
    }

    pub fn to_data(&self, point: Point<Pixels>) -> Point<f64> {
        self.transform().screen_to_data(point)
    }

    /// Rescales both axes around the data point under `center`.
    ///
    /// The cumulative scale stays inside the configured extent; returns
    /// `false` when the clamp leaves nothing to do.
    pub fn apply_zoom(&mut self, factor: f64, center: Point<Pixels>) -> bool {
        if !factor.is_finite() || factor <= 0.0 {
            return false;
        }
        let (new_scale, span_factor) =
            ViewController::clamp_zoom(self.viewport.scale, factor, self.scale_extent);
        if (new_scale - self.viewport.scale).abs() < f64::EPSILON {
            debug!(scale = new_scale, "zoom clamped, viewport unchanged");
            return false;
        }

        let bounds = self.plot_bounds();
        let pivot_x = ViewController::pixel_fraction(
            (center.x - bounds.origin.x).as_f32(),
            bounds.size.width.as_f32(),
            false,
        );
        let pivot_y = ViewController::pixel_fraction(
            (center.y - bounds.origin.y).as_f32(),
            bounds.size.height.as_f32(),
            true,
        );
        ViewController::zoom_axis_at(&mut self.viewport.x, pivot_x, span_factor);
        ViewController::zoom_axis_at(&mut self.viewport.y, pivot_y, span_factor);
        self.viewport.scale = new_scale;
        debug!(
            scale = new_scale,
            x = ?self.viewport.x.domain(),
            y = ?self.viewport.y.domain(),
            "viewport zoomed"
        );
        true
    }

    /// Translates both axes by the data equivalent of `delta`.
    pub fn apply_pan(&mut self, delta: Point<Pixels>) {
        let bounds = self.plot_bounds();
        ViewController::pan_axis(
            &mut self.viewport.x,
            delta.x.as_f32(),
            bounds.size.width.as_f32(),
            false,
        );
        ViewController::pan_axis(
            &mut self.viewport.y,
            delta.y.as_f32(),
            bounds.size.height.as_f32(),
            true,
        );
        trace!(x = ?self.viewport.x.domain(), y = ?self.viewport.y.domain(), "viewport panned");
    }

    /// Recenters the x-domain on `x`, keeping its span.
    pub fn center_x_on(&mut self, x: f64) {
        ViewController::move_to_center(&mut self.viewport.x, x);
    }

    pub fn reset(&mut self) {
        self.viewport.reset();
        debug!("viewport reset");
    }
}
