use line_graph::api::{
    ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshot, EngineSnapshotJsonContractV1, GraphEngine,
    GraphEngineConfig,
};
use line_graph::core::{CanvasSize, Sample};
use line_graph::interaction::GestureMode;
use line_graph::render::NullRenderer;

fn engine() -> GraphEngine<NullRenderer> {
    let config = GraphEngineConfig::new(CanvasSize::new(120.0, 60.0));
    let mut engine = GraphEngine::new(NullRenderer::default(), config).expect("engine init");
    engine
        .set_series(
            "a",
            vec![Sample::new(0.0, 1.0), Sample::new(5.0, 3.0), Sample::new(9.0, 2.0)],
        )
        .expect("series");
    engine.set_progress(0.5);
    engine.gesture_start(60.0, 10.0);
    engine
}

#[test]
fn snapshot_captures_series_and_gesture_state() {
    let snapshot = engine().snapshot();

    assert_eq!(snapshot.gesture_mode, GestureMode::Selecting);
    let series = snapshot.series.get("a").expect("series a");
    assert_eq!(series.samples_len, 3);
    assert_eq!(series.visible.len(), 3);
    assert_eq!(series.progress, 0.5);
    assert!(series.line_pair.from.is_none());
    assert!(series.line_pair.to.is_some());
    assert_eq!(series.selected, Some(Sample::new(5.0, 3.0)));
}

#[test]
fn contract_v1_round_trips_and_bare_snapshot_is_accepted() {
    let engine = engine();
    let snapshot = engine.snapshot();

    let contract = snapshot.to_json_contract_v1_pretty().expect("contract json");
    let payload: EngineSnapshotJsonContractV1 =
        serde_json::from_str(&contract).expect("contract payload");
    assert_eq!(payload.schema_version, ENGINE_SNAPSHOT_JSON_SCHEMA_V1);
    assert_eq!(
        EngineSnapshot::from_json_compat_str(&contract).expect("parse contract"),
        snapshot
    );

    let bare = engine.snapshot_json_pretty().expect("bare json");
    assert_eq!(
        EngineSnapshot::from_json_compat_str(&bare).expect("parse bare"),
        snapshot
    );
}

#[test]
fn unsupported_schema_version_is_rejected() {
    let snapshot = engine().snapshot();
    let payload = EngineSnapshotJsonContractV1 {
        schema_version: 99,
        snapshot,
    };
    let json = serde_json::to_string(&payload).expect("json");

    assert!(EngineSnapshot::from_json_compat_str(&json).is_err());
    assert!(EngineSnapshot::from_json_compat_str("not json").is_err());
}

#[test]
fn path_commands_serialize_with_kind_tag() {
    let snapshot = engine().snapshot();
    let json = serde_json::to_string(&snapshot).expect("json");

    assert!(json.contains(r#""kind":"move_to""#));
    assert!(json.contains(r#""kind":"cubic_to""#));
}

#[test]
fn engine_exports_contract_directly() {
    let engine = engine();
    let json = engine.snapshot_json_contract_v1_pretty().expect("contract json");

    assert!(json.contains(r#""schema_version": 1"#));
    assert_eq!(
        EngineSnapshot::from_json_compat_str(&json).expect("parse"),
        engine.snapshot()
    );
}
