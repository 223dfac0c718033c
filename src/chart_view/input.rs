use crate::chart::BellCurveChart;
use crate::data_types::PointerTarget;
use crate::utils::PixelsExt;
use gpui::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Pixels per scrolled line.
const LINE_HEIGHT: f32 = 20.0;

/// Translates GPUI pointer events into surface-local chart gestures.
#[derive(Clone)]
pub struct ChartInputHandler {
    pub chart: Entity<BellCurveChart>,
    pub focus_handle: FocusHandle,

    // Shared with the renderer, updated on every paint
    pub bounds: Rc<RefCell<Bounds<Pixels>>>,
}

impl ChartInputHandler {
    pub fn new(
        chart: Entity<BellCurveChart>,
        focus_handle: FocusHandle,
        bounds: Rc<RefCell<Bounds<Pixels>>>,
    ) -> Self {
        Self {
            chart,
            focus_handle,
            bounds,
        }
    }

    fn to_local(&self, position: Point<Pixels>) -> Point<Pixels> {
        let origin = self.bounds.borrow().origin;
        Point::new(position.x - origin.x, position.y - origin.y)
    }

    pub fn handle_mouse_down(&self, event: &MouseDownEvent, window: &mut Window, cx: &mut App) {
        window.focus(&self.focus_handle);
        if event.button != MouseButton::Left {
            return;
        }
        let local = self.to_local(event.position);
        self.chart.update(cx, |c, cx| {
            if c.pointer_down(local) != PointerTarget::Outside {
                cx.notify();
            }
        });
    }

    pub fn handle_mouse_move(&self, event: &MouseMoveEvent, _window: &mut Window, cx: &mut App) {
        let local = self.to_local(event.position);
        let pressed = event.pressed_button == Some(MouseButton::Left);
        self.chart.update(cx, |c, cx| {
            if c.pointer_move(local, pressed) {
                cx.notify();
            }
        });
    }

    pub fn handle_mouse_up(&self, event: &MouseUpEvent, _window: &mut Window, cx: &mut App) {
        if event.button != MouseButton::Left {
            return;
        }
        let local = self.to_local(event.position);
        self.chart.update(cx, |c, cx| {
            if c.pointer_up(local) {
                cx.notify();
            }
        });
    }

    pub fn handle_hover(&self, hovered: bool, _window: &mut Window, cx: &mut App) {
        if hovered {
            return;
        }
        self.chart.update(cx, |c, cx| {
            if c.pointer_leave() {
                cx.notify();
            }
        });
    }

    pub fn handle_scroll_wheel(&self, event: &ScrollWheelEvent, _window: &mut Window, cx: &mut App) {
        let delta_y = match event.delta {
            ScrollDelta::Pixels(p) => p.y.as_f32(),
            ScrollDelta::Lines(p) => p.y * LINE_HEIGHT,
        };
        if delta_y == 0.0 {
            return;
        }
        let local = self.to_local(event.position);
        self.chart.update(cx, |c, cx| {
            if !c.transform().contains(local) {
                return;
            }
            if c.scroll(delta_y, local) {
                cx.notify();
            }
        });
    }
}
