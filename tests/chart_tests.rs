use gpui::{px, Point};
use gpui_bell_curve::data_types::{
    CurveParameters, HandleKind, ParameterField, PointerTarget, ViewportFollow,
};
use gpui_bell_curve::handles::handle_position;
use gpui_bell_curve::{BellCurveChart, PlotConfig, PlotError};

fn default_chart() -> BellCurveChart {
    BellCurveChart::new(PlotConfig::default()).unwrap()
}

fn following_chart() -> BellCurveChart {
    BellCurveChart::new(PlotConfig {
        follow: ViewportFollow::Mean,
        ..Default::default()
    })
    .unwrap()
}

fn handle_at(chart: &BellCurveChart, kind: HandleKind) -> Point<gpui::Pixels> {
    handle_position(kind, chart.parameters(), &chart.transform())
}

fn x_domain(chart: &BellCurveChart) -> (f64, f64) {
    chart.scales().viewport().x.domain()
}

#[test]
fn test_missing_render_target() {
    for config in [
        PlotConfig {
            width: 0.0,
            ..Default::default()
        },
        PlotConfig {
            height: f32::NAN,
            ..Default::default()
        },
    ] {
        let err = BellCurveChart::new(config).err().unwrap();
        assert!(matches!(err, PlotError::MissingRenderTarget { .. }), "{err:?}");
    }
}

#[test]
fn test_background_drag_pans_without_editing() {
    let mut chart = default_chart();
    let before = chart.parameters();

    assert_eq!(
        chart.pointer_down(Point::new(px(200.0), px(300.0))),
        PointerTarget::Background
    );
    assert!(chart.is_panning());
    assert!(chart.pointer_move(Point::new(px(250.0), px(300.0)), true));

    let (min, max) = x_domain(&chart);
    assert!((min + 7.0).abs() < 1e-9);
    assert!((max - 5.0).abs() < 1e-9);
    assert_eq!(chart.parameters(), before);
    assert_eq!(chart.revision(), 0);

    assert!(chart.pointer_up(Point::new(px(250.0), px(300.0))));
    assert!(!chart.is_panning());
}

#[test]
fn test_zoom_preserves_parameters() {
    let mut chart = default_chart();
    let origin = chart.scales().to_screen(Point::new(0.0, 0.0));

    assert!(chart.zoom_at(2.0, origin));
    assert_eq!(chart.scales().scale(), 2.0);
    assert_eq!(chart.parameters(), CurveParameters::default());

    let window = chart.window();
    assert_eq!((window.min, window.max), (-3.0, 3.0));
}

#[test]
fn test_scroll_zooms_in_plot() {
    let mut chart = default_chart();
    let center = chart.scales().plot_bounds().center();

    assert!(chart.scroll(500.0, center));
    assert!((chart.scales().scale() - 2.0).abs() < 1e-9);

    assert!(chart.scroll(-500.0, center));
    assert!((chart.scales().scale() - 1.0).abs() < 1e-9);
}

#[test]
fn test_reset_view() {
    let mut chart = default_chart();
    chart.zoom_centered(4.0);
    chart.pan_by(Point::new(px(30.0), px(-10.0)));
    chart.reset_view();
    assert_eq!(chart.scales().scale(), 1.0);
    assert_eq!(x_domain(&chart), (-6.0, 6.0));
}

#[test]
fn test_mean_handle_drag() {
    let mut chart = default_chart();
    let mean = handle_at(&chart, HandleKind::Mean);

    assert_eq!(chart.pointer_down(mean), PointerTarget::Handle(HandleKind::Mean));
    assert!(chart.pointer_move(Point::new(px(460.0), px(300.0)), true));

    let params = chart.parameters();
    assert!((params.mean - 2.0).abs() < 1e-4);
    assert_eq!(params.std, 1.0);

    chart.pointer_up(Point::new(px(460.0), px(300.0)));
    assert_eq!(chart.handles().dragging(), None);
}

#[test]
fn test_std_handle_drag() {
    let mut chart = default_chart();
    let std = handle_at(&chart, HandleKind::Std);

    assert_eq!(chart.pointer_down(std), PointerTarget::Handle(HandleKind::Std));
    // Data x = 4
    chart.pointer_move(Point::new(px(560.0), px(100.0)), true);

    let params = chart.parameters();
    assert_eq!(params.mean, 0.0);
    assert!((params.std - 4.0).abs() < 1e-4);

    let values = chart.field_values();
    assert!((values.min + 12.0).abs() < 1e-3);
    assert!((values.max - 12.0).abs() < 1e-3);
}

#[test]
fn test_drag_released_outside_ends_on_next_move() {
    let mut chart = default_chart();
    let mean = handle_at(&chart, HandleKind::Mean);
    chart.pointer_down(mean);

    // Button came up outside the surface; the next move reports it released.
    assert!(chart.pointer_move(Point::new(px(500.0), px(200.0)), false));
    assert_eq!(chart.handles().dragging(), None);
    assert_eq!(chart.parameters(), CurveParameters::default());

    chart.pointer_down(Point::new(px(200.0), px(300.0)));
    chart.pointer_move(Point::new(px(220.0), px(300.0)), false);
    assert!(!chart.is_panning());
}

#[test]
fn test_press_outside_plot_does_nothing() {
    let mut chart = default_chart();
    assert_eq!(
        chart.pointer_down(Point::new(px(10.0), px(10.0))),
        PointerTarget::Outside
    );
    assert!(!chart.is_panning());
    assert!(!chart.pointer_move(Point::new(px(30.0), px(10.0)), true));
    assert_eq!(x_domain(&chart), (-6.0, 6.0));
}

#[test]
fn test_follow_mean_recenters_after_edits() {
    let mut chart = following_chart();
    assert_eq!(x_domain(&chart), (-6.0, 6.0));

    chart.commit_field(ParameterField::Mean, 2.0).unwrap();
    assert_eq!(x_domain(&chart), (-4.0, 8.0));

    chart.commit_field(ParameterField::Max, 11.0).unwrap();
    let (min, max) = x_domain(&chart);
    assert!(((min + max) / 2.0 - chart.parameters().mean).abs() < 1e-9);

    // Zoom and pan keep the mean centered too.
    chart.zoom_at(2.0, Point::new(px(100.0), px(100.0)));
    chart.pan_by(Point::new(px(80.0), px(0.0)));
    let (min, max) = x_domain(&chart);
    assert!(((min + max) / 2.0 - chart.parameters().mean).abs() < 1e-9);
}

#[test]
fn test_follow_mean_drag_uses_start_transform() {
    let mut chart = following_chart();
    let mean = handle_at(&chart, HandleKind::Mean);
    chart.pointer_down(mean);

    chart.pointer_move(Point::new(px(460.0), px(200.0)), true);
    assert!((chart.parameters().mean - 2.0).abs() < 1e-4);

    // The view recentered, but the drag keeps mapping through the
    // transform from when it started: 510px is data x = 3.
    chart.pointer_move(Point::new(px(510.0), px(200.0)), true);
    assert!((chart.parameters().mean - 3.0).abs() < 1e-4);
}

#[test]
fn test_fixed_viewport_ignores_edits() {
    let mut chart = default_chart();
    chart.commit_field(ParameterField::Mean, 3.0).unwrap();
    assert_eq!(x_domain(&chart), (-6.0, 6.0));
}

#[test]
fn test_non_finite_commit_leaves_state() {
    let mut chart = default_chart();
    let err = chart.commit_field(ParameterField::Std, f64::NAN).unwrap_err();
    assert!(matches!(
        err,
        PlotError::NonFiniteInput {
            field: ParameterField::Std,
            ..
        }
    ));
    assert_eq!(chart.parameters(), CurveParameters::default());
    assert_eq!(chart.revision(), 0);
}

#[test]
fn test_hover_over_handle_shows_tooltip() {
    let mut chart = default_chart();
    let std = handle_at(&chart, HandleKind::Std);

    assert!(chart.pointer_move(std, false));
    assert_eq!(chart.handle_kind_at(std), Some(HandleKind::Std));
    let tooltip = chart.scene().tooltip.unwrap();
    assert_eq!(tooltip.text, "drag to change std");
    assert_eq!(tooltip.anchor.y, std.y - px(20.0));
    assert!(chart.scene().hover.is_none());

    assert!(chart.pointer_leave());
    assert!(chart.scene().tooltip.is_none());
}

#[test]
fn test_hover_readout_over_background() {
    let mut chart = default_chart();
    assert!(chart.pointer_move(Point::new(px(360.0), px(400.0)), false));

    let hover = chart.scene().hover.unwrap();
    assert_eq!(hover.label, "(x: 0.000; y: 0.399)");

    // Pressing hides the readout; leaving clears it.
    chart.pointer_move(Point::new(px(360.0), px(400.0)), true);
    assert!(chart.scene().hover.is_none());
    chart.pointer_move(Point::new(px(360.0), px(400.0)), false);
    assert!(chart.pointer_leave());
    assert!(chart.scene().hover.is_none());
}

#[test]
fn test_hover_readout_can_be_disabled() {
    let mut chart = BellCurveChart::new(PlotConfig {
        show_hover_readout: false,
        ..Default::default()
    })
    .unwrap();
    chart.pointer_move(Point::new(px(360.0), px(400.0)), false);
    assert!(chart.scene().hover.is_none());
}

#[test]
fn test_far_mean_handle_is_off_plot() {
    let mut chart = default_chart();
    let bounds = chart.scales().plot_bounds();

    for mean in [1e40, -1e40] {
        chart.commit_field(ParameterField::Mean, mean).unwrap();
        let handle = handle_at(&chart, HandleKind::Mean);
        assert!(!bounds.contains(&handle), "mean {mean} drawn at {handle:?}");

        // Nothing to grab at the plot edges, so a press there pans.
        let left_edge = Point::new(bounds.left(), handle.y);
        assert_eq!(chart.handle_kind_at(left_edge), None);
        assert_eq!(chart.pointer_down(left_edge), PointerTarget::Background);
        chart.pointer_up(left_edge);
        assert_eq!(chart.parameters().mean, mean);
    }
}

#[test]
fn test_hover_readout_hidden_when_curve_leaves_plot() {
    let mut chart = default_chart();
    // Peak density 0.798 is above the 0.5 top of the y-range.
    chart.commit_field(ParameterField::Std, 0.5).unwrap();
    chart.pointer_move(Point::new(px(360.0), px(400.0)), false);
    assert!(chart.scene().hover.is_none());

    // At x = 1 the curve is back inside and the readout shows.
    chart.pointer_move(Point::new(px(410.0), px(400.0)), false);
    let hover = chart.scene().hover.unwrap();
    assert!(chart.transform().contains(hover.marker));
    assert_eq!(hover.label, "(x: 1.000; y: 0.108)");
}
