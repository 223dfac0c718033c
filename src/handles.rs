//! Control-Handle Manager
//!
//! Two handles sit on the curve: one at the peak (mean) and one a standard
//! deviation to its right. Dragging them turns screen x positions into
//! parameter edits through the inverse transform captured when the drag began.

use gpui::{point, px, Pixels, Point};
use tracing::trace;

use crate::data_types::{CurveParameters, HandleKind, ParameterEdit};
use crate::transform::PlotTransform;
use crate::utils::screen_distance;

/// Vertical offset of the tooltip above the pointer.
const TOOLTIP_OFFSET: f32 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandleMarker {
    pub kind: HandleKind,
    pub position: Point<Pixels>,
    /// Handle is being dragged.
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipLabel {
    pub text: String,
    pub anchor: Point<Pixels>,
}

/// Screen position of a handle for the given parameters.
pub fn handle_position(
    kind: HandleKind,
    params: CurveParameters,
    transform: &PlotTransform,
) -> Point<Pixels> {
    let x = kind.data_x(params);
    transform.data_to_screen(Point::new(x, params.density_at(x)))
}

#[derive(Clone, Debug, PartialEq)]
struct HandleDrag {
    kind: HandleKind,
    /// Mean when the drag started; std drags measure from here.
    mean_at_start: f64,
    transform: PlotTransform,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HandleManager {
    hit_radius: f32,
    min_std: f64,
    drag: Option<HandleDrag>,
    hovered: Option<HandleKind>,
    pointer: Option<Point<Pixels>>,
}

impl HandleManager {
    pub fn new(hit_radius: f32, min_std: f64) -> Self {
        Self {
            hit_radius,
            min_std,
            drag: None,
            hovered: None,
            pointer: None,
        }
    }

    pub fn markers(&self, params: CurveParameters, transform: &PlotTransform) -> [HandleMarker; 2] {
        let dragged = self.dragging();
        [HandleKind::Mean, HandleKind::Std].map(|kind| HandleMarker {
            kind,
            position: handle_position(kind, params, transform),
            active: dragged == Some(kind),
        })
    }

    /// Nearest handle within the hit radius of `pointer`. Handles clipped
    /// away outside the plot area cannot be hit.
    pub fn hit_test(
        &self,
        params: CurveParameters,
        transform: &PlotTransform,
        pointer: Point<Pixels>,
    ) -> Option<HandleKind> {
        self.markers(params, transform)
            .into_iter()
            .filter(|m| transform.contains(m.position))
            .map(|m| (m.kind, screen_distance(m.position, pointer)))
            .filter(|(_, d)| *d <= self.hit_radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(kind, _)| kind)
    }

    pub fn begin_drag(&mut self, kind: HandleKind, params: CurveParameters, transform: PlotTransform) {
        trace!(?kind, mean = params.mean, "handle drag started");
        self.drag = Some(HandleDrag {
            kind,
            mean_at_start: params.mean,
            transform,
        });
        self.hovered = None;
    }

    /// Edit produced by moving the dragged handle to `pointer`. Pointer y is ignored.
    pub fn drag_to(&self, pointer: Point<Pixels>) -> Option<ParameterEdit> {
        let drag = self.drag.as_ref()?;
        let x = drag.transform.x_screen_to_data(pointer.x);
        let edit = match drag.kind {
            HandleKind::Mean => ParameterEdit::SetMean(x),
            HandleKind::Std => ParameterEdit::SetStd((x - drag.mean_at_start).max(self.min_std)),
        };
        Some(edit)
    }

    pub fn end_drag(&mut self) -> Option<HandleKind> {
        self.drag.take().map(|d| d.kind)
    }

    pub fn dragging(&self) -> Option<HandleKind> {
        self.drag.as_ref().map(|d| d.kind)
    }

    /// Tracks hover over handles. The tooltip only shows while no button is pressed.
    /// Returns whether the tooltip changed.
    pub fn hover(&mut self, hit: Option<HandleKind>, pointer: Point<Pixels>, button_pressed: bool) -> bool {
        let hovered = if button_pressed || self.drag.is_some() {
            None
        } else {
            hit
        };
        let changed = hovered != self.hovered || (hovered.is_some() && self.pointer != Some(pointer));
        if hovered != self.hovered {
            trace!(?hovered, "handle hover changed");
        }
        self.hovered = hovered;
        self.pointer = Some(pointer);
        changed
    }

    /// Pointer left the surface.
    pub fn leave(&mut self) -> bool {
        let changed = self.hovered.is_some();
        self.hovered = None;
        self.pointer = None;
        changed
    }

    pub fn hovered(&self) -> Option<HandleKind> {
        self.hovered
    }

    pub fn tooltip(&self) -> Option<TooltipLabel> {
        let kind = self.hovered?;
        let pointer = self.pointer?;
        Some(TooltipLabel {
            text: kind.tooltip().to_string(),
            anchor: point(pointer.x, pointer.y - px(TOOLTIP_OFFSET)),
        })
    }
}
