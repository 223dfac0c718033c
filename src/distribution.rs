//! Normal probability density.

use std::f64::consts::PI;

use crate::data_types::CurveParameters;

/// Density of `N(mean, std²)` at `x`. Callers guarantee `std > 0`.
pub fn density(x: f64, mean: f64, std: f64) -> f64 {
    let z = (x - mean) / std;
    (-0.5 * z * z).exp() / (std * (2.0 * PI).sqrt())
}

impl CurveParameters {
    pub fn density_at(&self, x: f64) -> f64 {
        density(x, self.mean, self.std)
    }

    /// Height of the curve at the mean.
    pub fn peak(&self) -> f64 {
        self.density_at(self.mean)
    }
}
