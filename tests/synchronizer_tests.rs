use gpui_bell_curve::data_types::{CurveParameters, ParameterEdit, ParameterField};
use gpui_bell_curve::synchronizer::{reduce, ParameterSynchronizer};
use gpui_bell_curve::{PlotError, MIN_STD};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn standard() -> ParameterSynchronizer {
    ParameterSynchronizer::new(CurveParameters::default(), 3.0, MIN_STD)
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_initial_window() {
    let sync = standard();
    let values = sync.field_values();
    assert_eq!(values.mean, 0.0);
    assert_eq!(values.std, 1.0);
    assert_eq!(values.min, -3.0);
    assert_eq!(values.max, 3.0);
    assert_eq!(sync.revision(), 0);
}

#[test]
fn test_set_max_holds_min() {
    let mut sync = standard();
    let params = sync.apply(ParameterEdit::SetMax(6.0)).unwrap();

    assert_close(params.mean, 1.5);
    assert_close(params.std, 1.5);
    let window = sync.window();
    assert_close(window.min, -3.0);
    assert_close(window.max, 6.0);
}

#[test]
fn test_set_min_holds_max() {
    let mut sync = standard();
    let params = sync.apply(ParameterEdit::SetMin(-9.0)).unwrap();

    assert_close(params.mean, -3.0);
    assert_close(params.std, 2.0);
    let window = sync.window();
    assert_close(window.min, -9.0);
    assert_close(window.max, 3.0);
}

#[test]
fn test_set_mean_keeps_std() {
    let mut sync = standard();
    sync.apply(ParameterEdit::SetMean(2.5)).unwrap();
    assert_eq!(sync.params(), CurveParameters::new(2.5, 1.0));
    assert_close(sync.window().min, -0.5);
    assert_close(sync.window().max, 5.5);
}

#[test]
fn test_std_is_floored() {
    let mut sync = standard();
    sync.apply(ParameterEdit::SetStd(0.0)).unwrap();
    assert_eq!(sync.params().std, MIN_STD);

    sync.apply(ParameterEdit::SetStd(-4.0)).unwrap();
    assert_eq!(sync.params().std, MIN_STD);

    // Moving max below min collapses the window onto the floor.
    let mut sync = standard();
    sync.apply(ParameterEdit::SetMax(-5.0)).unwrap();
    assert_eq!(sync.params().std, MIN_STD);
    assert_close(sync.params().mean, -4.0);
}

#[test]
fn test_initial_std_is_floored() {
    let sync = ParameterSynchronizer::new(CurveParameters::new(1.0, 0.0), 3.0, MIN_STD);
    assert_eq!(sync.params().std, MIN_STD);
}

#[test]
fn test_window_bounds_round_trip() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..100 {
        let start = CurveParameters::new(rng.random_range(-50.0..50.0), rng.random_range(0.01..10.0));
        let window = start.window(3.0);

        let after_min = reduce(start, ParameterEdit::SetMin(window.min), 3.0, MIN_STD);
        let after_max = reduce(start, ParameterEdit::SetMax(window.max), 3.0, MIN_STD);
        for params in [after_min, after_max] {
            assert!((params.mean - start.mean).abs() < 1e-9, "{start:?} -> {params:?}");
            assert!((params.std - start.std).abs() < 1e-9, "{start:?} -> {params:?}");
        }
    }
}

#[test]
fn test_non_finite_input_is_rejected() {
    let mut sync = standard();
    sync.apply(ParameterEdit::SetMean(1.0)).unwrap();
    let before = sync.clone();

    for edit in [
        ParameterEdit::SetMean(f64::NAN),
        ParameterEdit::SetStd(f64::INFINITY),
        ParameterEdit::SetMin(f64::NEG_INFINITY),
        ParameterEdit::SetMax(f64::NAN),
    ] {
        let err = sync.apply(edit).unwrap_err();
        assert!(
            matches!(err, PlotError::NonFiniteInput { field, .. } if field == edit.field()),
            "{edit:?} gave {err:?}"
        );
        assert_eq!(sync, before);
    }
}

#[test]
fn test_overflowing_edit_is_rejected() {
    let mut sync = standard();
    sync.apply(ParameterEdit::SetMean(f64::MAX)).unwrap();
    let before = sync.clone();
    // Both window bounds round to f64::MAX, so the new midpoint overflows.
    let err = sync.apply(ParameterEdit::SetMax(f64::MAX)).unwrap_err();
    assert!(matches!(
        err,
        PlotError::NonFiniteInput {
            field: ParameterField::Max,
            ..
        }
    ));
    assert_eq!(sync, before);
}

#[test]
fn test_revision_counts_accepted_edits() {
    let mut sync = standard();
    sync.apply(ParameterEdit::SetMean(1.0)).unwrap();
    sync.apply(ParameterEdit::SetStd(2.0)).unwrap();
    let _ = sync.apply(ParameterEdit::SetStd(f64::NAN));
    assert_eq!(sync.revision(), 2);
}

#[test]
fn test_field_edit_mapping() {
    for field in ParameterField::ALL {
        let edit = field.edit(1.25);
        assert_eq!(edit.field(), field);
        assert_eq!(edit.value(), 1.25);
    }
}

#[test]
fn test_random_edits_keep_std_floored() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut sync = standard();

    for step in 0..500 {
        let value = rng.random_range(-100.0..100.0);
        let edit = match rng.random_range(0..4) {
            0 => ParameterEdit::SetMean(value),
            1 => ParameterEdit::SetStd(value),
            2 => ParameterEdit::SetMin(value),
            _ => ParameterEdit::SetMax(value),
        };
        let params = sync.apply(edit).unwrap();
        assert!(params.std.is_finite(), "step {step}: {edit:?} -> {params:?}");
        assert!(params.std >= MIN_STD, "step {step}: {edit:?} -> {params:?}");
        assert_eq!(sync.params(), params);
    }
    assert_eq!(sync.revision(), 500);
}
