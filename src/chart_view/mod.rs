pub mod actions;
pub mod input;
pub mod renderer;

use crate::chart::BellCurveChart;
use crate::config::PlotConfig;
use crate::theme::ChartTheme;
use gpui::prelude::*;
use gpui::*;
use std::cell::RefCell;
use std::rc::Rc;

pub use actions::{PanDown, PanLeft, PanRight, PanUp, ResetView, ZoomIn, ZoomOut};

/// Key context of the chart surface; bind the view actions to it.
pub const KEY_CONTEXT: &str = "BellCurveChart";

use self::actions::ChartActionHandler;
use self::input::ChartInputHandler;
use self::renderer::ChartRenderer;

pub struct ChartView {
    pub chart: Entity<BellCurveChart>,

    // Components (Delegates)
    renderer: ChartRenderer,
    input: ChartInputHandler,
    actions: ChartActionHandler,

    focus_handle: FocusHandle,
}

impl Focusable for ChartView {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl ChartView {
    pub fn new(chart: Entity<BellCurveChart>, cx: &mut Context<Self>) -> Self {
        cx.observe(&chart, |_, _, cx| cx.notify()).detach();

        let focus_handle = cx.focus_handle();
        let bounds = Rc::new(RefCell::new(Bounds::default()));

        let renderer = ChartRenderer::new(chart.clone(), bounds.clone());
        let input = ChartInputHandler::new(chart.clone(), focus_handle.clone(), bounds);
        let actions = ChartActionHandler::new(chart.clone());

        Self {
            chart,
            renderer,
            input,
            actions,
            focus_handle,
        }
    }

    /// Creates the chart model and the view in one go.
    ///
    /// Fails when the configuration does not describe a drawable plot area.
    pub fn build(config: PlotConfig, cx: &mut App) -> eyre::Result<Entity<Self>> {
        let chart = BellCurveChart::new(config)?;
        let chart = cx.new(|_| chart);
        Ok(cx.new(|cx| Self::new(chart, cx)))
    }

    pub fn set_theme(&mut self, theme: ChartTheme) {
        self.renderer.theme = theme;
    }
}

impl Render for ChartView {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let element = self.renderer.render(window, cx);

        // Listeners own their closures; the handlers only hold Entity/Rc handles.
        let input = self.input.clone();
        let actions = self.actions.clone();
        let entity_id = cx.entity_id();

        element
            .id(("bell-curve-view", entity_id))
            .key_context(KEY_CONTEXT)
            .track_focus(&self.focus_handle)
            .on_mouse_down(MouseButton::Left, {
                let input = input.clone();
                move |e, w, c| input.handle_mouse_down(e, w, c)
            })
            .on_mouse_move({
                let input = input.clone();
                move |e, w, c| input.handle_mouse_move(e, w, c)
            })
            .on_mouse_up(MouseButton::Left, {
                let input = input.clone();
                move |e, w, c| input.handle_mouse_up(e, w, c)
            })
            .on_mouse_up_out(MouseButton::Left, {
                let input = input.clone();
                move |e, w, c| input.handle_mouse_up(e, w, c)
            })
            .on_scroll_wheel({
                let input = input.clone();
                move |e, w, c| input.handle_scroll_wheel(e, w, c)
            })
            .on_hover({
                let input = input.clone();
                move |hovered, w, c| input.handle_hover(*hovered, w, c)
            })
            .on_action({
                let actions = actions.clone();
                move |a, w, c| actions.handle_pan_left(a, w, c)
            })
            .on_action({
                let actions = actions.clone();
                move |a, w, c| actions.handle_pan_right(a, w, c)
            })
            .on_action({
                let actions = actions.clone();
                move |a, w, c| actions.handle_pan_up(a, w, c)
            })
            .on_action({
                let actions = actions.clone();
                move |a, w, c| actions.handle_pan_down(a, w, c)
            })
            .on_action({
                let actions = actions.clone();
                move |a, w, c| actions.handle_zoom_in(a, w, c)
            })
            .on_action({
                let actions = actions.clone();
                move |a, w, c| actions.handle_zoom_out(a, w, c)
            })
            .on_action({
                let actions = actions.clone();
                move |a, w, c| actions.handle_reset_view(a, w, c)
            })
    }
}
