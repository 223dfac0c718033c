use d3rs::scale::{LinearScale, Scale};
use gpui::{point, px, size, Bounds, Pixels};
use serde::{Deserialize, Serialize};

use crate::error::{PlotError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisOrientation {
    Horizontal,
    Vertical,
}

/// Visible data range of a single axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn from_domain(domain: (f64, f64)) -> Self {
        Self::new(domain.0, domain.1)
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn center(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// "Nice" tick values covering the range.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        if self.span().abs() < f64::EPSILON {
            return vec![self.min];
        }
        LinearScale::new()
            .domain(self.min, self.max)
            .range(0.0, 1.0)
            .ticks(count)
    }

    /// Pure zoom without constraints to preserve the pivot point.
    pub fn zoom_at(&mut self, pivot_data: f64, pivot_pct: f64, factor: f64) {
        let new_span = self.span() * factor;
        self.min = pivot_data - new_span * pivot_pct;
        self.max = self.min + new_span;
    }

    pub fn pan(&mut self, delta_data: f64) {
        self.min += delta_data;
        self.max += delta_data;
    }
}

/// Fixed size of the plot area and the padding around it, in pixels.
///
/// The drawable surface is `width + 2 * padding` by `height + 2 * padding`,
/// with the plot area starting at `(padding, padding)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotGeometry {
    width: f32,
    height: f32,
    padding: f32,
}

impl PlotGeometry {
    pub fn new(width: f32, height: f32, padding: f32) -> Result<Self> {
        let drawable = width.is_finite()
            && height.is_finite()
            && padding.is_finite()
            && width > 0.0
            && height > 0.0
            && padding >= 0.0;
        if !drawable {
            return Err(PlotError::MissingRenderTarget {
                width,
                height,
                padding,
            });
        }
        Ok(Self {
            width,
            height,
            padding,
        })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn padding(&self) -> f32 {
        self.padding
    }

    /// Plot area in surface-local coordinates.
    pub fn plot_bounds(&self) -> Bounds<Pixels> {
        Bounds::new(
            point(px(self.padding), px(self.padding)),
            size(px(self.width), px(self.height)),
        )
    }

    /// Size of the whole drawable surface including padding.
    pub fn surface_size(&self) -> gpui::Size<Pixels> {
        size(
            px(self.width + self.padding * 2.0),
            px(self.height + self.padding * 2.0),
        )
    }
}
