use line_graph::GraphError;
use line_graph::core::{AxisBounds, RangeOverride, Sample, resolve_range};

fn samples() -> Vec<Sample> {
    vec![
        Sample::new(100.0, 12.0),
        Sample::new(160.0, 4.0),
        Sample::new(200.0, 30.0),
        Sample::new(260.0, 18.0),
    ]
}

#[test]
fn default_range_uses_first_last_dates_and_value_extremes() {
    let range = resolve_range(&samples(), None).expect("range");

    assert_eq!(range.x, AxisBounds { min: 100.0, max: 260.0 });
    assert_eq!(range.y, AxisBounds { min: 4.0, max: 30.0 });
}

#[test]
fn full_override_replaces_both_axes() {
    let requested = RangeOverride::default()
        .with_x(0.0, 1_000.0)
        .with_y(-5.0, 50.0);
    let range = resolve_range(&samples(), Some(requested)).expect("range");

    assert_eq!(range.x, AxisBounds { min: 0.0, max: 1_000.0 });
    assert_eq!(range.y, AxisBounds { min: -5.0, max: 50.0 });
}

#[test]
fn partial_override_falls_back_to_data_on_missing_axis() {
    let x_only = resolve_range(&samples(), Some(RangeOverride::default().with_x(150.0, 210.0)))
        .expect("x-only range");
    assert_eq!(x_only.x, AxisBounds { min: 150.0, max: 210.0 });
    assert_eq!(x_only.y, AxisBounds { min: 4.0, max: 30.0 });

    let y_only = resolve_range(&samples(), Some(RangeOverride::default().with_y(0.0, 100.0)))
        .expect("y-only range");
    assert_eq!(y_only.x, AxisBounds { min: 100.0, max: 260.0 });
    assert_eq!(y_only.y, AxisBounds { min: 0.0, max: 100.0 });
}

#[test]
fn reversed_override_bounds_are_swapped() {
    let range = resolve_range(&samples(), Some(RangeOverride::default().with_y(40.0, 10.0)))
        .expect("range");
    assert_eq!(range.y, AxisBounds { min: 10.0, max: 40.0 });
}

#[test]
fn equal_values_produce_degenerate_value_axis() {
    let flat = vec![Sample::new(1.0, 7.0), Sample::new(2.0, 7.0), Sample::new(3.0, 7.0)];
    let range = resolve_range(&flat, None).expect("range");

    assert!(range.y.is_degenerate());
    assert_eq!(range.y.min, 7.0);
}

#[test]
fn single_sample_produces_degenerate_axes() {
    let range = resolve_range(&[Sample::new(5.0, 9.0)], None).expect("range");
    assert!(range.x.is_degenerate());
    assert!(range.y.is_degenerate());
}

#[test]
fn empty_input_is_rejected() {
    let err = resolve_range(&[], None).expect_err("empty must fail");
    assert!(matches!(err, GraphError::EmptySeries));
}

#[test]
fn non_finite_values_are_rejected() {
    let err = resolve_range(&[Sample::new(0.0, 1.0), Sample::new(1.0, f64::INFINITY)], None)
        .expect_err("non-finite must fail");
    assert!(matches!(err, GraphError::InvalidData(_)));
}

#[test]
fn interior_non_finite_date_is_rejected() {
    let err = resolve_range(
        &[Sample::new(0.0, 1.0), Sample::new(f64::NAN, 2.0), Sample::new(2.0, 3.0)],
        None,
    )
    .expect_err("interior nan date must fail");
    assert!(matches!(err, GraphError::InvalidData(_)));
}

#[test]
fn non_finite_value_is_rejected_under_full_override() {
    let requested = RangeOverride::default().with_x(0.0, 1.0).with_y(0.0, 10.0);
    let err = resolve_range(&[Sample::new(0.0, 1.0), Sample::new(1.0, f64::NAN)], Some(requested))
        .expect_err("nan value must fail even with a y override");
    assert!(matches!(err, GraphError::InvalidData(_)));
}
