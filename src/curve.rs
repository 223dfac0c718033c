//! Curve Renderer
//!
//! Samples the density across the visible x-range and projects the samples to
//! screen space. Y is not clamped: points far above the viewport are left for
//! the surface clip to hide.

use gpui::{Pixels, Point};

use crate::data_types::CurveParameters;
use crate::transform::PlotTransform;

/// Screen-space polyline of the curve, ordered left to right.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CurvePath {
    pub points: Vec<Point<Pixels>>,
}

impl CurvePath {
    pub fn is_empty(&self) -> bool {
        self.points.len() < 2
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }
}

/// `samples` evenly spaced data x values spanning `domain`, endpoints included.
pub fn sample_xs(domain: (f64, f64), samples: usize) -> impl Iterator<Item = f64> {
    let (x0, x1) = domain;
    let steps = samples.saturating_sub(1).max(1) as f64;
    let step = (x1 - x0) / steps;
    (0..samples).map(move |i| x0 + step * i as f64)
}

pub fn render_curve(params: CurveParameters, transform: &PlotTransform, samples: usize) -> CurvePath {
    let points = sample_xs(transform.x_domain(), samples)
        .map(|x| transform.data_to_screen(Point::new(x, params.density_at(x))))
        .collect();
    CurvePath { points }
}
