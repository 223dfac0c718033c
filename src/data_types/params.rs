use serde::{Deserialize, Serialize};
use std::fmt;

/// Smallest standard deviation the curve is allowed to take.
pub const MIN_STD: f64 = 1e-3;

/// Number of standard deviations between the mean and each window bound.
pub const DEFAULT_DEVIATIONS: f64 = 3.0;

/// Parameters of the plotted density.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurveParameters {
    pub mean: f64,
    pub std: f64,
}

impl Default for CurveParameters {
    fn default() -> Self {
        Self { mean: 0.0, std: 1.0 }
    }
}

impl CurveParameters {
    pub fn new(mean: f64, std: f64) -> Self {
        Self { mean, std }
    }

    /// The `[mean - k*std, mean + k*std]` window.
    pub fn window(&self, deviations: f64) -> DerivedWindow {
        DerivedWindow {
            min: self.mean - self.std * deviations,
            max: self.mean + self.std * deviations,
        }
    }
}

/// Window bounds derived from [`CurveParameters`]. Never stored as state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DerivedWindow {
    pub min: f64,
    pub max: f64,
}

/// One of the four numeric fields bound to the curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParameterField {
    Mean,
    Std,
    Min,
    Max,
}

impl ParameterField {
    pub const ALL: [ParameterField; 4] = [Self::Mean, Self::Std, Self::Min, Self::Max];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::Std => "std",
            Self::Min => "min",
            Self::Max => "max",
        }
    }

    pub fn edit(&self, value: f64) -> ParameterEdit {
        match self {
            Self::Mean => ParameterEdit::SetMean(value),
            Self::Std => ParameterEdit::SetStd(value),
            Self::Min => ParameterEdit::SetMin(value),
            Self::Max => ParameterEdit::SetMax(value),
        }
    }
}

impl fmt::Display for ParameterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A complete edit of the curve parameters, applied in one step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParameterEdit {
    SetMean(f64),
    SetStd(f64),
    /// New lower bound, upper bound held fixed.
    SetMin(f64),
    /// New upper bound, lower bound held fixed.
    SetMax(f64),
}

impl ParameterEdit {
    pub fn field(&self) -> ParameterField {
        match self {
            Self::SetMean(_) => ParameterField::Mean,
            Self::SetStd(_) => ParameterField::Std,
            Self::SetMin(_) => ParameterField::Min,
            Self::SetMax(_) => ParameterField::Max,
        }
    }

    pub fn value(&self) -> f64 {
        match *self {
            Self::SetMean(v) | Self::SetStd(v) | Self::SetMin(v) | Self::SetMax(v) => v,
        }
    }
}

/// Current values of the four fields.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldValues {
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

impl FieldValues {
    pub fn get(&self, field: ParameterField) -> f64 {
        match field {
            ParameterField::Mean => self.mean,
            ParameterField::Std => self.std,
            ParameterField::Min => self.min,
            ParameterField::Max => self.max,
        }
    }
}
