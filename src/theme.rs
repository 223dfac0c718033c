use gpui::*;

#[derive(Clone, Debug)]
pub struct ChartTheme {
    pub background: Hsla,
    pub grid_line: Hsla,
    pub axis_line: Hsla,
    pub axis_label: Hsla,
    pub axis_label_size: Pixels,
    pub curve: Hsla,
    pub curve_width: Pixels,
    pub handle: Hsla,
    pub handle_active: Hsla,
    pub hover_marker: Hsla,
    pub hint_text: Hsla,
    pub tooltip_background: Hsla,
    pub tooltip_text: Hsla,
    pub field_background: Hsla,
    pub field_border: Hsla,
    pub field_focus: Hsla,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            background: gpui::black(),
            grid_line: gpui::white().alpha(0.1),
            axis_line: gpui::white().alpha(0.2),
            axis_label: gpui::white().alpha(0.8),
            axis_label_size: px(11.0),
            curve: gpui::blue(),
            curve_width: px(2.0),
            handle: gpui::white(),
            handle_active: gpui::yellow(),
            hover_marker: gpui::white().alpha(0.6),
            hint_text: gpui::white().alpha(0.4),
            tooltip_background: gpui::black().alpha(0.8),
            tooltip_text: gpui::white(),
            field_background: gpui::white().alpha(0.05),
            field_border: gpui::white().alpha(0.2),
            field_focus: gpui::blue(),
        }
    }
}
