use gpui::{px, Point};
use gpui_bell_curve::curve::{render_curve, sample_xs};
use gpui_bell_curve::data_types::{AxisOrientation, CurveParameters, PlotGeometry, Viewport};
use gpui_bell_curve::handles::HandleManager;
use gpui_bell_curve::scene::{compute_scene, hover_readout, SceneInputs, HINT_TEXT};
use gpui_bell_curve::transform::PlotTransform;
use gpui_bell_curve::MIN_STD;

fn transform_for(x_domain: (f64, f64), y_domain: (f64, f64)) -> PlotTransform {
    let geometry = PlotGeometry::new(600.0, 400.0, 60.0).unwrap();
    PlotTransform::from_viewport(&Viewport::new(x_domain, y_domain), geometry.plot_bounds())
}

#[test]
fn test_sample_xs_includes_endpoints() {
    let xs: Vec<f64> = sample_xs((-6.0, 6.0), 5).collect();
    assert_eq!(xs, vec![-6.0, -3.0, 0.0, 3.0, 6.0]);
}

#[test]
fn test_curve_spans_plot_width() {
    let transform = transform_for((-6.0, 6.0), (0.0, 0.5));
    let path = render_curve(CurveParameters::default(), &transform, 200);

    assert_eq!(path.len(), 200);
    assert!(!path.is_empty());
    assert_eq!(path.points[0].x, px(60.0));
    assert!((f32::from(path.points[199].x) - 660.0).abs() < 1e-3);
    assert!(path.points.windows(2).all(|w| w[0].x < w[1].x));
}

#[test]
fn test_curve_follows_viewport() {
    let transform = transform_for((10.0, 14.0), (0.0, 0.5));
    let path = render_curve(CurveParameters::new(12.0, 0.5), &transform, 101);

    assert_eq!(path.points[0].x, px(60.0));
    // The middle sample sits on the mean, which is the highest point (smallest y).
    let peak = path.points[50];
    assert!((f32::from(peak.x) - 360.0).abs() < 1e-3);
    assert!(path.points.iter().all(|p| p.y >= peak.y));
}

#[test]
fn test_narrow_curve_is_not_clamped() {
    let transform = transform_for((-6.0, 6.0), (0.0, 0.5));
    let params = CurveParameters::new(0.0, MIN_STD);
    let path = render_curve(params, &transform, 201);

    // The peak is far above the plot area; clipping happens at paint time.
    let top = path.points.iter().map(|p| f32::from(p.y)).fold(f32::INFINITY, f32::min);
    assert!(top < 60.0);
}

#[test]
fn test_scene_contents() {
    let transform = transform_for((-6.0, 6.0), (0.0, 0.5));
    let handles = HandleManager::new(8.0, MIN_STD);
    let geometry = PlotGeometry::new(600.0, 400.0, 60.0).unwrap();

    let scene = compute_scene(&SceneInputs {
        params: CurveParameters::default(),
        transform: &transform,
        handles: &handles,
        surface_size: geometry.surface_size(),
        sample_count: 200,
        x_tick_count: 10,
        y_tick_count: 8,
        hover_pointer: None,
    });

    assert_eq!(scene.hint, HINT_TEXT);
    assert_eq!(scene.curve.len(), 200);
    assert_eq!(scene.plot_bounds, geometry.plot_bounds());
    assert!(scene.tooltip.is_none());
    assert!(scene.hover.is_none());

    assert_eq!(scene.x_axis.orientation, AxisOrientation::Horizontal);
    assert_eq!(scene.x_axis.baseline, px(460.0));
    assert_eq!(scene.y_axis.baseline, px(60.0));
    assert!(!scene.x_axis.ticks.is_empty());
    for tick in &scene.x_axis.ticks {
        assert!(tick.position >= px(60.0) && tick.position <= px(660.0));
    }
    for tick in &scene.y_axis.ticks {
        assert!(tick.position >= px(60.0) && tick.position <= px(460.0));
    }
}

#[test]
fn test_hover_readout_reads_curve() {
    let transform = transform_for((-6.0, 6.0), (0.0, 0.5));
    let readout = hover_readout(
        CurveParameters::default(),
        &transform,
        Point::new(px(360.0), px(300.0)),
    );

    assert!(readout.data.x.abs() < 1e-9);
    assert!((readout.data.y - 0.398_942_280_4).abs() < 1e-9);
    assert_eq!(readout.label, "(x: 0.000; y: 0.399)");
    // The marker sits on the curve, not at the pointer.
    assert!((f32::from(readout.marker.y) - 140.846).abs() < 0.01);
}
