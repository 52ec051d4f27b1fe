use approx::assert_abs_diff_eq;
use line_graph::core::{
    CanvasSize, PathCommand, PathOptions, PixelPoint, Sample, build_graph_geometry,
    build_line_curve, nearest_pixel_index, resolve_range, y_for_x,
};

fn p(x: f64, y: f64) -> PixelPoint {
    PixelPoint::new(x, y)
}

#[test]
fn sampler_reproduces_every_anchor_point() {
    let samples: Vec<Sample> = [3.0, 9.0, 1.0, 7.0, 7.0, 12.0, 0.5]
        .iter()
        .enumerate()
        .map(|(i, value)| Sample::new(i as f64 * 60.0, *value))
        .collect();
    let range = resolve_range(&samples, None).expect("range");
    let geometry = build_graph_geometry(
        &samples,
        range,
        CanvasSize::new(420.0, 180.0),
        PathOptions::default(),
    );

    for pixel in &geometry.pixels {
        let y = y_for_x(geometry.paths.line.commands(), pixel.x).expect("y at anchor");
        assert_abs_diff_eq!(y, pixel.y, epsilon = 1e-6);
    }
}

#[test]
fn queries_outside_extent_return_none() {
    let curve = build_line_curve(&[p(10.0, 5.0), p(50.0, 25.0), p(90.0, 5.0)], 1.0);

    assert!(y_for_x(curve.commands(), 9.999).is_none());
    assert!(y_for_x(curve.commands(), 90.001).is_none());
    assert!(y_for_x(curve.commands(), f64::NAN).is_none());
    assert!(y_for_x(curve.commands(), 50.0).is_some());
}

#[test]
fn empty_and_move_only_curves_return_none() {
    assert!(y_for_x(&[], 0.0).is_none());
    assert!(y_for_x(&[PathCommand::MoveTo { to: p(4.0, 4.0) }], 4.0).is_none());
}

#[test]
fn line_segments_are_interpolated_linearly() {
    let commands = [
        PathCommand::MoveTo { to: p(0.0, 0.0) },
        PathCommand::LineTo { to: p(10.0, 20.0) },
    ];
    assert_abs_diff_eq!(y_for_x(&commands, 2.5).expect("y"), 5.0, epsilon = 1e-12);
}

#[test]
fn zero_width_segments_are_skipped() {
    let commands = [
        PathCommand::MoveTo { to: p(10.0, 0.0) },
        PathCommand::CubicTo {
            control1: p(10.0, 10.0),
            control2: p(10.0, 30.0),
            to: p(10.0, 40.0),
        },
        PathCommand::CubicTo {
            control1: p(13.0, 40.0),
            control2: p(17.0, 40.0),
            to: p(20.0, 40.0),
        },
    ];

    assert_abs_diff_eq!(y_for_x(&commands, 10.0).expect("y"), 40.0, epsilon = 1e-12);
    assert_abs_diff_eq!(y_for_x(&commands, 15.0).expect("y"), 40.0, epsilon = 1e-9);
}

#[test]
fn first_bracketing_segment_wins_at_shared_anchor() {
    let curve = build_line_curve(&[p(0.0, 0.0), p(10.0, 10.0), p(20.0, 0.0)], 1.0);
    assert_abs_diff_eq!(y_for_x(curve.commands(), 10.0).expect("y"), 10.0, epsilon = 1e-12);
}

#[test]
fn nearest_index_picks_closest_and_breaks_ties_left() {
    let pixels = [p(0.0, 0.0), p(10.0, 0.0), p(20.0, 0.0)];

    assert_eq!(nearest_pixel_index(&pixels, -50.0), Some(0));
    assert_eq!(nearest_pixel_index(&pixels, 4.0), Some(0));
    assert_eq!(nearest_pixel_index(&pixels, 5.0), Some(0));
    assert_eq!(nearest_pixel_index(&pixels, 5.1), Some(1));
    assert_eq!(nearest_pixel_index(&pixels, 16.0), Some(2));
    assert_eq!(nearest_pixel_index(&pixels, 400.0), Some(2));
    assert_eq!(nearest_pixel_index(&[], 3.0), None);
}
