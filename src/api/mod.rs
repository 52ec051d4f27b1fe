mod data_controller;
mod engine;
mod engine_config;
mod engine_snapshot;
mod json_contract;
mod plugin_dispatch;
mod plugin_registry;
mod selection_controller;
mod series_state;
mod transition_controller;

pub use engine::GraphEngine;
pub use engine_config::GraphEngineConfig;
pub use engine_snapshot::{EngineSnapshot, SeriesSnapshot};
pub use json_contract::{ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshotJsonContractV1};
pub use selection_controller::SelectionBatch;
pub use series_state::SeriesState;
