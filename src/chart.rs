//! Chart Model
//!
//! `BellCurveChart` is the single source of truth for the plot: it owns the
//! parameter synchronizer, the scale manager and the handle state, and routes
//! pointer gestures and field commits to whichever of them they concern.
//!
//! All positions are surface-local. The GPUI view translates window
//! coordinates before calling in and wraps the chart in an `Entity` so the
//! chart view and the parameter panel observe the same state.

use gpui::{Pixels, Point};
use tracing::{debug, trace};

use crate::config::PlotConfig;
use crate::data_types::{
    CurveParameters, DerivedWindow, FieldValues, HandleKind, ParameterEdit, ParameterField,
    PointerTarget, ViewportFollow,
};
use crate::error::Result;
use crate::handles::HandleManager;
use crate::scene::{compute_scene, PlotScene, SceneInputs};
use crate::synchronizer::ParameterSynchronizer;
use crate::transform::PlotTransform;
use crate::view_controller::ViewController;
use crate::viewport::ScaleManager;

pub struct BellCurveChart {
    config: PlotConfig,
    params: ParameterSynchronizer,
    scales: ScaleManager,
    handles: HandleManager,
    /// Last pointer position of a background drag.
    pan_anchor: Option<Point<Pixels>>,
    /// Pointer over the plot background, for the hover readout.
    hover: Option<Point<Pixels>>,
}

impl BellCurveChart {
    /// Fails with `MissingRenderTarget` when the configured plot area cannot be drawn.
    pub fn new(config: PlotConfig) -> Result<Self> {
        config.validate()?;
        let geometry = config.geometry()?;
        let params = ParameterSynchronizer::new(
            config.initial_parameters(),
            config.deviations,
            config.min_std,
        );
        let scales = ScaleManager::new(
            geometry,
            config.default_x_domain,
            config.default_y_domain,
            config.scale_extent,
        );
        let handles = HandleManager::new(config.hit_radius, config.min_std);

        let mut chart = Self {
            config,
            params,
            scales,
            handles,
            pan_anchor: None,
            hover: None,
        };
        chart.follow_parameters();
        debug!(params = ?chart.parameters(), "chart created");
        Ok(chart)
    }

    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    pub fn parameters(&self) -> CurveParameters {
        self.params.params()
    }

    pub fn window(&self) -> DerivedWindow {
        self.params.window()
    }

    pub fn field_values(&self) -> FieldValues {
        self.params.field_values()
    }

    pub fn revision(&self) -> u64 {
        self.params.revision()
    }

    pub fn scales(&self) -> &ScaleManager {
        &self.scales
    }

    pub fn transform(&self) -> PlotTransform {
        self.scales.transform()
    }

    pub fn handles(&self) -> &HandleManager {
        &self.handles
    }

    pub fn is_panning(&self) -> bool {
        self.pan_anchor.is_some()
    }

    /// Applies one parameter edit atomically.
    pub fn apply_edit(&mut self, edit: ParameterEdit) -> Result<CurveParameters> {
        let params = self.params.apply(edit)?;
        self.follow_parameters();
        Ok(params)
    }

    /// Entry point for the numeric fields.
    pub fn commit_field(&mut self, field: ParameterField, value: f64) -> Result<CurveParameters> {
        self.apply_edit(field.edit(value))
    }

    fn follow_parameters(&mut self) {
        if self.config.follow == ViewportFollow::Mean {
            self.scales.center_x_on(self.params.params().mean);
        }
    }

    /// Starts a handle drag or a pan. Returns what the press landed on.
    pub fn pointer_down(&mut self, position: Point<Pixels>) -> PointerTarget {
        let transform = self.scales.transform();
        if let Some(kind) = self.handles.hit_test(self.parameters(), &transform, position) {
            self.handles.begin_drag(kind, self.parameters(), transform);
            self.hover = None;
            return PointerTarget::Handle(kind);
        }
        if transform.contains(position) {
            self.pan_anchor = Some(position);
            self.hover = None;
            self.handles.leave();
            trace!(?position, "pan started");
            return PointerTarget::Background;
        }
        PointerTarget::Outside
    }

    /// Pointer moved. `pressed` tells whether the primary button is still held;
    /// a drag whose button was released elsewhere ends here.
    /// Returns whether anything visible changed.
    pub fn pointer_move(&mut self, position: Point<Pixels>, pressed: bool) -> bool {
        if self.handles.dragging().is_some() {
            if !pressed {
                self.handles.end_drag();
                return true;
            }
            if let Some(edit) = self.handles.drag_to(position) {
                trace!(?edit, "handle drag frame");
                return self.apply_edit(edit).is_ok();
            }
            return false;
        }

        if let Some(anchor) = self.pan_anchor {
            if !pressed {
                self.pan_anchor = None;
                return true;
            }
            self.pan_by(position - anchor);
            self.pan_anchor = Some(position);
            return true;
        }

        let transform = self.scales.transform();
        let hit = self.handles.hit_test(self.parameters(), &transform, position);
        let mut changed = self.handles.hover(hit, position, pressed);

        let hover = (hit.is_none() && !pressed && transform.contains(position)
            && self.config.show_hover_readout)
            .then_some(position);
        if hover != self.hover {
            self.hover = hover;
            changed = true;
        }
        changed
    }

    /// Ends any drag in progress.
    pub fn pointer_up(&mut self, _position: Point<Pixels>) -> bool {
        let ended_handle = self.handles.end_drag().is_some();
        let ended_pan = self.pan_anchor.take().is_some();
        ended_handle || ended_pan
    }

    pub fn pointer_leave(&mut self) -> bool {
        let had_hover = self.hover.take().is_some();
        self.handles.leave() || had_hover
    }

    /// Wheel tick anchored at `anchor`. Positive deltas zoom in.
    pub fn scroll(&mut self, delta: f32, anchor: Point<Pixels>) -> bool {
        let factor = ViewController::wheel_zoom_factor(delta, self.config.wheel_sensitivity);
        self.zoom_at(factor, anchor)
    }

    pub fn zoom_at(&mut self, factor: f64, anchor: Point<Pixels>) -> bool {
        let changed = self.scales.apply_zoom(factor, anchor);
        if changed {
            self.follow_parameters();
        }
        changed
    }

    /// Zooms around the center of the plot area.
    pub fn zoom_centered(&mut self, factor: f64) -> bool {
        let center = self.scales.plot_bounds().center();
        self.zoom_at(factor, center)
    }

    pub fn pan_by(&mut self, delta: Point<Pixels>) {
        self.scales.apply_pan(delta);
        self.follow_parameters();
    }

    pub fn reset_view(&mut self) {
        self.scales.reset();
        self.follow_parameters();
    }

    pub fn handle_kind_at(&self, position: Point<Pixels>) -> Option<HandleKind> {
        self.handles
            .hit_test(self.parameters(), &self.scales.transform(), position)
    }

    /// Geometry of the current frame.
    pub fn scene(&self) -> PlotScene {
        let transform = self.scales.transform();
        compute_scene(&SceneInputs {
            params: self.parameters(),
            transform: &transform,
            handles: &self.handles,
            surface_size: self.scales.geometry().surface_size(),
            sample_count: self.config.sample_count,
            x_tick_count: self.config.x_tick_count,
            y_tick_count: self.config.y_tick_count,
            hover_pointer: self.hover,
        })
    }
}
