use line_graph::core::{
    CanvasSize, Padding, PathOptions, Sample, build_graph_geometry, points_in_range,
    resolve_range, y_for_x,
};
use proptest::prelude::*;

fn samples_from(steps: &[(f64, f64)]) -> Vec<Sample> {
    let mut date = 0.0;
    steps
        .iter()
        .map(|(gap, value)| {
            date += gap;
            Sample::new(date, *value)
        })
        .collect()
}

proptest! {
    #[test]
    fn path_points_stay_within_padded_canvas(
        steps in proptest::collection::vec((0.1f64..100.0, -1_000.0f64..1_000.0), 1..64),
        pad_h in 0.0f64..40.0,
        pad_v in 0.0f64..40.0,
        smoothing in 0.0f64..1.0
    ) {
        let samples = samples_from(&steps);
        let range = resolve_range(&samples, None).expect("range");
        let canvas = CanvasSize::new(320.0, 200.0);
        let options = PathOptions::default()
            .with_padding(Padding::new(pad_h, pad_v))
            .with_smoothing(smoothing)
            .with_fill_gradient(true);
        let geometry = build_graph_geometry(&samples, range, canvas, options);

        let eps = 1e-6;
        for command in geometry.paths.line.commands() {
            for point in command.points() {
                prop_assert!(point.x >= pad_h - eps && point.x <= 320.0 - pad_h + eps);
                prop_assert!(point.y >= pad_v - eps && point.y <= 200.0 - pad_v + eps);
            }
        }

        let start = geometry.paths.line.start_point().expect("start");
        let end = geometry.paths.line.end_point().expect("end");
        prop_assert!((start.x - pad_h).abs() <= eps);
        prop_assert!((end.x - (320.0 - pad_h)).abs() <= eps);

        let fill = geometry.paths.fill.expect("fill");
        prop_assert_eq!(fill.len(), geometry.paths.line.len() + 3);
    }

    #[test]
    fn sampler_is_left_inverse_at_sample_points(
        steps in proptest::collection::vec((0.1f64..100.0, -1_000.0f64..1_000.0), 2..64),
        smoothing in 0.0f64..1.0
    ) {
        let samples = samples_from(&steps);
        let range = resolve_range(&samples, None).expect("range");
        let geometry = build_graph_geometry(
            &samples,
            range,
            CanvasSize::new(400.0, 240.0),
            PathOptions::default().with_smoothing(smoothing),
        );

        for pixel in &geometry.pixels {
            let y = y_for_x(geometry.paths.line.commands(), pixel.x).expect("y at sample");
            prop_assert!((y - pixel.y).abs() <= 1e-6);
        }
    }

    #[test]
    fn default_range_keeps_every_sample_visible(
        steps in proptest::collection::vec((0.0f64..50.0, -1e6f64..1e6), 1..128)
    ) {
        let samples = samples_from(&steps);
        let range = resolve_range(&samples, None).expect("range");

        prop_assert_eq!(points_in_range(&samples, range), samples.clone());
        prop_assert!(samples.iter().all(|sample| range.y.contains(sample.value)));
    }
}
