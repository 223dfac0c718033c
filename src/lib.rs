//! gpui_bell_curve: an interactive Gaussian density plot for GPUI

pub mod chart;
pub mod chart_view;
pub mod config;
pub mod curve;
pub mod data_types;
pub mod distribution;
pub mod error;
pub mod handles;
pub mod numeric_field;
pub mod parameter_panel;
pub mod scales;
pub mod scene;
pub mod synchronizer;
pub mod theme;
pub mod transform;
pub mod utils;
pub mod view_controller;
pub mod viewport;

pub use chart::BellCurveChart;
pub use chart_view::ChartView;
pub use config::PlotConfig;
pub use data_types::{CurveParameters, DerivedWindow, ParameterEdit, ParameterField, MIN_STD};
pub use distribution::density;
pub use error::PlotError;
pub use parameter_panel::ParameterPanel;
