//! Error types for the plotting engine.

use thiserror::Error;

use crate::data_types::ParameterField;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlotError {
    /// The plot cannot be laid out on the given surface.
    #[error("missing render target: plot area {width}x{height} with padding {padding} is not drawable")]
    MissingRenderTarget { width: f32, height: f32, padding: f32 },

    /// A field committed NaN or an infinity.
    #[error("non-finite input {value} for {field}")]
    NonFiniteInput { field: ParameterField, value: f64 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, PlotError>;
