//! The four numeric fields (mean, std, min, max) bound to a chart.
//!
//! Click a field to edit it; Enter or moving focus elsewhere commits, Escape
//! reverts. Values refresh whenever the chart changes.

use crate::chart::BellCurveChart;
use crate::data_types::{FieldValues, ParameterField};
use crate::numeric_field::NumericField;
use crate::theme::ChartTheme;
use gpui::prelude::*;
use gpui::*;
use tracing::warn;

pub struct ParameterPanel {
    pub chart: Entity<BellCurveChart>,
    fields: [NumericField; 4],
    focused: Option<usize>,
    focus_handle: FocusHandle,
    theme: ChartTheme,
}

impl Focusable for ParameterPanel {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl ParameterPanel {
    pub fn new(chart: Entity<BellCurveChart>, window: &mut Window, cx: &mut Context<Self>) -> Self {
        cx.observe(&chart, |this, chart, cx| {
            let values = chart.read(cx).field_values();
            this.sync(values);
            cx.notify();
        })
        .detach();

        let focus_handle = cx.focus_handle();
        cx.on_blur(&focus_handle, window, |this, _window, cx| {
            this.commit_focused(cx);
        })
        .detach();

        let values = chart.read(cx).field_values();
        Self {
            chart,
            fields: ParameterField::ALL.map(|field| NumericField::new(field, values.get(field))),
            focused: None,
            focus_handle,
            theme: ChartTheme::default(),
        }
    }

    pub fn field(&self, field: ParameterField) -> &NumericField {
        &self.fields[Self::index_of(field)]
    }

    pub fn focused_field(&self) -> Option<ParameterField> {
        self.focused.map(|i| self.fields[i].field())
    }

    fn index_of(field: ParameterField) -> usize {
        match field {
            ParameterField::Mean => 0,
            ParameterField::Std => 1,
            ParameterField::Min => 2,
            ParameterField::Max => 3,
        }
    }

    fn sync(&mut self, values: FieldValues) {
        for field in &mut self.fields {
            field.set_value(values.get(field.field()));
        }
    }

    pub fn focus_field(&mut self, field: ParameterField, window: &mut Window, cx: &mut Context<Self>) {
        let index = Self::index_of(field);
        if self.focused == Some(index) {
            return;
        }
        self.commit_focused(cx);
        self.fields[index].focus();
        self.focused = Some(index);
        window.focus(&self.focus_handle);
        cx.notify();
    }

    /// Hands the focused field's value to the chart; invalid text reverts.
    pub fn commit_focused(&mut self, cx: &mut Context<Self>) {
        let Some(index) = self.focused.take() else {
            return;
        };
        let field = self.fields[index].field();
        if let Some(value) = self.fields[index].commit() {
            let result = self.chart.update(cx, |c, cx| {
                let result = c.commit_field(field, value);
                if result.is_ok() {
                    cx.notify();
                }
                result
            });
            if let Err(err) = result {
                warn!(%err, "field commit rejected");
                self.fields[index].revert();
            }
        }
        let values = self.chart.read(cx).field_values();
        self.sync(values);
        cx.notify();
    }

    pub fn type_text(&mut self, text: &str, cx: &mut Context<Self>) {
        if let Some(index) = self.focused {
            self.fields[index].insert(text);
            cx.notify();
        }
    }

    fn handle_key_down(&mut self, event: &KeyDownEvent, window: &mut Window, cx: &mut Context<Self>) {
        let Some(index) = self.focused else {
            return;
        };
        match event.keystroke.key.as_str() {
            "enter" => self.commit_focused(cx),
            "escape" => {
                self.fields[index].revert();
                self.focused = None;
            }
            "backspace" => self.fields[index].backspace(),
            "tab" => {
                let next = ParameterField::ALL[(index + 1) % ParameterField::ALL.len()];
                self.focus_field(next, window, cx);
            }
            _ => {
                if let Some(text) = event.keystroke.key_char.as_deref() {
                    self.fields[index].insert(text);
                }
            }
        }
        cx.notify();
    }
}

impl Render for ParameterPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = self.theme.clone();
        let focused = self.focused;

        let fields = self.fields.iter().enumerate().map(|(index, field)| {
            let kind = field.field();
            let border = if focused == Some(index) {
                theme.field_focus
            } else {
                theme.field_border
            };
            div()
                .flex()
                .flex_col()
                .gap_1()
                .child(
                    div()
                        .text_size(px(12.0))
                        .text_color(theme.axis_label)
                        .child(field.label()),
                )
                .child(
                    div()
                        .w(px(100.0))
                        .h(px(24.0))
                        .px_2()
                        .flex()
                        .items_center()
                        .bg(theme.field_background)
                        .border_1()
                        .border_color(border)
                        .rounded_sm()
                        .text_color(theme.tooltip_text)
                        .text_size(px(13.0))
                        .child(field.text().to_string())
                        .on_mouse_down(
                            MouseButton::Left,
                            cx.listener(move |this, _event, window, cx| {
                                this.focus_field(kind, window, cx)
                            }),
                        ),
                )
        });

        div()
            .track_focus(&self.focus_handle)
            .key_context("ParameterPanel")
            .on_key_down(cx.listener(Self::handle_key_down))
            .flex()
            .gap_4()
            .p_4()
            .bg(theme.background)
            .children(fields)
    }
}
