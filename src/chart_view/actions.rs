use crate::chart::BellCurveChart;
use gpui::*;

actions!(
    gpui_bell_curve,
    [
        PanLeft,
        PanRight,
        PanUp,
        PanDown,
        ZoomIn,
        ZoomOut,
        ResetView
    ]
);

/// Keyboard viewport actions. Pans move the visible window in the named direction.
#[derive(Clone)]
pub struct ChartActionHandler {
    pub chart: Entity<BellCurveChart>,
}

impl ChartActionHandler {
    pub fn new(chart: Entity<BellCurveChart>) -> Self {
        Self { chart }
    }

    fn pan(&self, dx: f32, dy: f32, cx: &mut App) {
        self.chart.update(cx, |c, cx| {
            let step = c.config().pan_step_px;
            c.pan_by(point(px(dx * step), px(dy * step)));
            cx.notify();
        });
    }

    fn zoom(&self, zoom_in: bool, cx: &mut App) {
        self.chart.update(cx, |c, cx| {
            let step = c.config().zoom_step;
            let factor = if zoom_in { step } else { 1.0 / step };
            if c.zoom_centered(factor) {
                cx.notify();
            }
        });
    }

    // Dragging content right reveals the left side, hence the inverted signs.
    pub fn handle_pan_left(&self, _: &PanLeft, _win: &mut Window, cx: &mut App) {
        self.pan(1.0, 0.0, cx);
    }

    pub fn handle_pan_right(&self, _: &PanRight, _win: &mut Window, cx: &mut App) {
        self.pan(-1.0, 0.0, cx);
    }

    pub fn handle_pan_up(&self, _: &PanUp, _win: &mut Window, cx: &mut App) {
        self.pan(0.0, 1.0, cx);
    }

    pub fn handle_pan_down(&self, _: &PanDown, _win: &mut Window, cx: &mut App) {
        self.pan(0.0, -1.0, cx);
    }

    pub fn handle_zoom_in(&self, _: &ZoomIn, _win: &mut Window, cx: &mut App) {
        self.zoom(true, cx);
    }

    pub fn handle_zoom_out(&self, _: &ZoomOut, _win: &mut Window, cx: &mut App) {
        self.zoom(false, cx);
    }

    pub fn handle_reset_view(&self, _: &ResetView, _win: &mut Window, cx: &mut App) {
        self.chart.update(cx, |c, cx| {
            c.reset_view();
            cx.notify();
        });
    }
}
