//! Parameter Synchronizer
//!
//! Single owner of the curve parameters. Every edit, whether it comes from a
//! numeric field or a handle drag, goes through [`reduce`] and replaces both
//! `mean` and `std` at once, so observers never see a half-applied edit.

use tracing::{debug, warn};

use crate::data_types::{CurveParameters, DerivedWindow, FieldValues, ParameterEdit};
use crate::error::{PlotError, Result};

/// Applies one edit to `params`.
///
/// `SetMin` holds the current upper bound fixed and `SetMax` the lower one.
/// The resulting `std` is floored at `min_std`.
pub fn reduce(
    params: CurveParameters,
    edit: ParameterEdit,
    deviations: f64,
    min_std: f64,
) -> CurveParameters {
    let window = params.window(deviations);
    let (mean, std) = match edit {
        ParameterEdit::SetMean(mean) => (mean, params.std),
        ParameterEdit::SetStd(std) => (params.mean, std),
        ParameterEdit::SetMin(new_min) => {
            let mean = (window.max + new_min) / 2.0;
            (mean, (window.max - mean) / deviations)
        }
        ParameterEdit::SetMax(new_max) => {
            let mean = (window.min + new_max) / 2.0;
            (mean, (new_max - mean) / deviations)
        }
    };
    CurveParameters {
        mean,
        std: std.max(min_std),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParameterSynchronizer {
    params: CurveParameters,
    deviations: f64,
    min_std: f64,
    revision: u64,
}

impl ParameterSynchronizer {
    pub fn new(initial: CurveParameters, deviations: f64, min_std: f64) -> Self {
        Self {
            params: CurveParameters {
                mean: initial.mean,
                std: initial.std.max(min_std),
            },
            deviations,
            min_std,
            revision: 0,
        }
    }

    pub fn params(&self) -> CurveParameters {
        self.params
    }

    pub fn window(&self) -> DerivedWindow {
        self.params.window(self.deviations)
    }

    pub fn deviations(&self) -> f64 {
        self.deviations
    }

    pub fn min_std(&self) -> f64 {
        self.min_std
    }

    /// Bumped on every accepted edit.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn field_values(&self) -> FieldValues {
        let window = self.window();
        FieldValues {
            mean: self.params.mean,
            std: self.params.std,
            min: window.min,
            max: window.max,
        }
    }

    /// Applies `edit`, rejecting NaN and infinities without touching the state.
    pub fn apply(&mut self, edit: ParameterEdit) -> Result<CurveParameters> {
        let value = edit.value();
        if !value.is_finite() {
            warn!(field = %edit.field(), value, "rejecting non-finite parameter input");
            return Err(PlotError::NonFiniteInput {
                field: edit.field(),
                value,
            });
        }

        let next = reduce(self.params, edit, self.deviations, self.min_std);
        if !next.mean.is_finite() || !next.std.is_finite() {
            // e.g. SetMin(-1e308) overflowing the midpoint
            warn!(?edit, ?next, "edit produced non-finite parameters");
            return Err(PlotError::NonFiniteInput {
                field: edit.field(),
                value,
            });
        }

        self.params = next;
        self.revision += 1;
        debug!(?edit, mean = next.mean, std = next.std, "parameters updated");
        Ok(next)
    }
}
