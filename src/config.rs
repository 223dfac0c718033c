//! Plot configuration.
//!
//! Every field has a default, so a JSON document only needs the keys it
//! overrides.

use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::data_types::{
    CurveParameters, PlotGeometry, ViewportFollow, DEFAULT_DEVIATIONS, MIN_STD,
};
use crate::error::PlotError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Plot area width in pixels.
    pub width: f32,
    /// Plot area height in pixels.
    pub height: f32,
    /// Space reserved around the plot area for axes.
    pub padding: f32,
    /// Number of samples along the visible x-range.
    pub sample_count: usize,
    /// Standard deviations between the mean and each window bound.
    pub deviations: f64,
    pub min_std: f64,
    /// Allowed range of the cumulative zoom scale.
    pub scale_extent: (f64, f64),
    pub default_x_domain: (f64, f64),
    pub default_y_domain: (f64, f64),
    pub follow: ViewportFollow,
    pub handle_radius: f32,
    /// Distance from a handle center that still counts as a hit.
    pub hit_radius: f32,
    /// Exponent per wheel pixel: `factor = 2^(delta * sensitivity)`.
    pub wheel_sensitivity: f64,
    pub pan_step_px: f32,
    pub zoom_step: f64,
    pub x_tick_count: usize,
    pub y_tick_count: usize,
    pub show_hover_readout: bool,
    pub initial_mean: f64,
    pub initial_std: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 400.0,
            padding: 60.0,
            sample_count: 200,
            deviations: DEFAULT_DEVIATIONS,
            min_std: MIN_STD,
            scale_extent: (0.1, 20.0),
            default_x_domain: (-6.0, 6.0),
            default_y_domain: (0.0, 0.5),
            follow: ViewportFollow::Fixed,
            handle_radius: 5.0,
            hit_radius: 8.0,
            wheel_sensitivity: 0.002,
            pan_step_px: 20.0,
            zoom_step: 1.25,
            x_tick_count: 10,
            y_tick_count: 8,
            show_hover_readout: true,
            initial_mean: 0.0,
            initial_std: 1.0,
        }
    }
}

impl PlotConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).wrap_err("failed to parse plot configuration")?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read {}", path.display()))?;
        Self::from_json_str(&json).wrap_err_with(|| format!("in {}", path.display()))
    }

    pub fn geometry(&self) -> crate::error::Result<PlotGeometry> {
        PlotGeometry::new(self.width, self.height, self.padding)
    }

    pub fn initial_parameters(&self) -> CurveParameters {
        CurveParameters::new(self.initial_mean, self.initial_std)
    }

    pub fn validate(&self) -> crate::error::Result<()> {
        self.geometry()?;

        let invalid = |msg: &str| Err(PlotError::InvalidConfig(msg.to_string()));
        if self.sample_count < 2 {
            return invalid("sample_count must be at least 2");
        }
        if !(self.deviations.is_finite() && self.deviations > 0.0) {
            return invalid("deviations must be positive");
        }
        if !(self.min_std.is_finite() && self.min_std > 0.0) {
            return invalid("min_std must be positive");
        }
        let (lo, hi) = self.scale_extent;
        if !(lo > 0.0 && lo <= 1.0 && hi >= 1.0 && hi.is_finite()) {
            return invalid("scale_extent must satisfy 0 < min <= 1 <= max");
        }
        for (name, (a, b)) in [
            ("default_x_domain", self.default_x_domain),
            ("default_y_domain", self.default_y_domain),
        ] {
            if !(a.is_finite() && b.is_finite() && a < b) {
                return Err(PlotError::InvalidConfig(format!(
                    "{name} must be a finite increasing interval"
                )));
            }
        }
        if !(self.initial_mean.is_finite() && self.initial_std.is_finite()) {
            return invalid("initial parameters must be finite");
        }
        if !(self.wheel_sensitivity.is_finite() && self.zoom_step.is_finite() && self.zoom_step > 0.0)
        {
            return invalid("wheel_sensitivity and zoom_step must be finite");
        }
        Ok(())
    }
}
