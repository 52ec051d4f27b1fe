use line_graph::api::{GraphEngine, GraphEngineConfig};
use line_graph::core::{CanvasSize, Sample, y_for_x};
use line_graph::interaction::{GestureMode, PointSelection};
use line_graph::render::NullRenderer;

fn engine(animated: bool) -> GraphEngine<NullRenderer> {
    let config = GraphEngineConfig::new(CanvasSize::new(100.0, 50.0)).with_animated(animated);
    let mut engine = GraphEngine::new(NullRenderer::default(), config).expect("engine init");
    engine
        .set_series(
            "a",
            vec![
                Sample::new(0.0, 10.0),
                Sample::new(1.0, 20.0),
                Sample::new(2.0, 10.0),
            ],
        )
        .expect("series");
    engine
}

#[test]
fn gesture_start_selects_nearest_sample_and_places_indicator() {
    let mut engine = engine(false);
    let batch = engine.gesture_start(48.0, 10.0);

    assert_eq!(engine.gesture_mode(), GestureMode::Selecting);
    assert_eq!(
        batch.as_slice(),
        &[PointSelection {
            series_index: 0,
            sample: Sample::new(1.0, 20.0),
        }]
    );

    let state = engine.series("a").expect("state");
    let indicator = state.indicator().expect("indicator");
    let expected_y = y_for_x(state.current_line().commands(), 48.0).expect("curve y");
    assert_eq!(indicator.x, 48.0);
    assert!((indicator.y - expected_y).abs() <= 1e-9);
    assert_eq!(state.selected_sample(), Some(Sample::new(1.0, 20.0)));
}

#[test]
fn pointer_move_reports_only_changed_selections() {
    let mut engine = engine(false);
    engine.gesture_start(48.0, 10.0);

    assert!(engine.pointer_move(49.0, 10.0).is_empty());
    let batch = engine.pointer_move(90.0, 10.0);
    assert_eq!(batch.len(), 1);
    assert_eq!(batch[0].sample, Sample::new(2.0, 10.0));

    let indicator = engine.series("a").expect("state").indicator().expect("indicator");
    assert_eq!(indicator.x, 90.0);
}

#[test]
fn indicator_sticks_to_line_ends_when_dragging_past() {
    let mut engine = engine(false);
    engine.gesture_start(50.0, 0.0);
    let top = engine.series("a").expect("state").indicator().expect("indicator");
    assert!((top.y - 0.0).abs() <= 1e-9);

    engine.pointer_move(150.0, 0.0);
    let right = engine.series("a").expect("state").indicator().expect("indicator");
    assert_eq!(right.x, 100.0);
    assert!((right.y - 50.0).abs() <= 1e-9);

    engine.pointer_move(-20.0, 0.0);
    let left = engine.series("a").expect("state").indicator().expect("indicator");
    assert_eq!(left.x, 0.0);
    assert!((left.y - 50.0).abs() <= 1e-9);
}

#[test]
fn gesture_end_hides_indicator_and_ignores_later_moves() {
    let mut engine = engine(false);
    engine.gesture_start(30.0, 10.0);
    engine.gesture_end();

    assert_eq!(engine.gesture_mode(), GestureMode::Idle);
    let state = engine.series("a").expect("state");
    assert!(state.indicator().is_none());
    assert!(state.selected_sample().is_none());

    assert!(engine.pointer_move(60.0, 10.0).is_empty());
    assert!(engine.series("a").expect("state").indicator().is_none());
}

#[test]
fn indicator_follows_curve_during_transition() {
    let mut engine = engine(true);
    engine.gesture_start(50.0, 0.0);
    let at_start = engine.series("a").expect("state").indicator().expect("indicator");
    assert!((at_start.y - 50.0).abs() <= 1e-9);

    engine.set_progress(1.0);
    let settled = engine.series("a").expect("state").indicator().expect("indicator");
    assert!((settled.y - 0.0).abs() <= 1e-9);
}

#[test]
fn data_update_mid_gesture_reselects() {
    let mut engine = engine(false);
    engine.gesture_start(100.0, 0.0);

    engine
        .set_series("a", vec![Sample::new(0.0, 1.0), Sample::new(4.0, 2.0)])
        .expect("update");
    let state = engine.series("a").expect("state");
    assert_eq!(state.selected_sample(), Some(Sample::new(4.0, 2.0)));
    assert!(state.indicator().is_some());
}

#[test]
fn empty_series_has_no_selection() {
    let mut engine = engine(false);
    engine.set_series("empty", Vec::new()).expect("empty");

    let batch = engine.gesture_start(20.0, 0.0);
    assert_eq!(batch.len(), 1);
    assert_eq!(batch[0].series_index, 0);
    assert!(engine.series("empty").expect("empty").indicator().is_none());
}

#[test]
fn shared_date_series_keeps_indicator_on_level_line() {
    let mut engine = engine(false);
    engine
        .set_series("a", vec![Sample::new(10.0, 1.0), Sample::new(10.0, 3.0)])
        .expect("series");

    let batch = engine.gesture_start(20.0, 0.0);
    assert_eq!(batch.len(), 1);
    let indicator = engine.series("a").expect("state").indicator().expect("indicator");
    assert_eq!(indicator.x, 20.0);
    assert!((indicator.y - 0.0).abs() <= 1e-9);
}
