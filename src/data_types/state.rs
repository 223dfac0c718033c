use serde::{Deserialize, Serialize};

use super::axis::AxisRange;
use super::params::CurveParameters;

/// Whether the visible x-range tracks the mean.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewportFollow {
    /// The data window stays where gestures put it.
    #[default]
    Fixed,
    /// The x-domain is recentered on the mean after every parameter edit.
    Mean,
}

/// Visible data window plus the cumulative zoom scale.
///
/// `scale` is relative to the initial domains: `2.0` shows half the initial span.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    pub x: AxisRange,
    pub y: AxisRange,
    pub scale: f64,
    initial_x: AxisRange,
    initial_y: AxisRange,
}

impl Viewport {
    pub fn new(x_domain: (f64, f64), y_domain: (f64, f64)) -> Self {
        let x = AxisRange::from_domain(x_domain);
        let y = AxisRange::from_domain(y_domain);
        Self {
            x,
            y,
            scale: 1.0,
            initial_x: x,
            initial_y: y,
        }
    }

    pub fn reset(&mut self) {
        self.x = self.initial_x;
        self.y = self.initial_y;
        self.scale = 1.0;
    }
}

/// The two draggable handles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HandleKind {
    Mean,
    Std,
}

impl HandleKind {
    pub fn tooltip(&self) -> &'static str {
        match self {
            Self::Mean => "drag to change mean",
            Self::Std => "drag to change std",
        }
    }

    /// Data-space x the handle sits on.
    pub fn data_x(&self, params: CurveParameters) -> f64 {
        match self {
            Self::Mean => params.mean,
            Self::Std => params.mean + params.std,
        }
    }
}

/// What a pointer press landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerTarget {
    Handle(HandleKind),
    Background,
    Outside,
}
