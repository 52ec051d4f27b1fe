use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{GraphError, GraphResult};
use crate::render::Renderer;

use super::{EngineSnapshot, GraphEngine};

pub const ENGINE_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Versioned envelope around [`EngineSnapshot`] for fixtures kept on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: EngineSnapshot,
}

impl EngineSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> GraphResult<String> {
        let payload = EngineSnapshotJsonContractV1 {
            schema_version: ENGINE_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload)
            .map_err(|e| GraphError::InvalidData(format!("snapshot contract v1 encode: {e}")))
    }

    /// Parses either a bare snapshot or a versioned envelope.
    ///
    /// The envelope is recognized by its `schema_version` key; anything else
    /// is decoded as a bare snapshot.
    pub fn from_json_compat_str(input: &str) -> GraphResult<Self> {
        let value: Value = serde_json::from_str(input)
            .map_err(|e| GraphError::InvalidData(format!("snapshot json: {e}")))?;

        let Some(version) = value.get("schema_version").cloned() else {
            return serde_json::from_value(value)
                .map_err(|e| GraphError::InvalidData(format!("bare snapshot decode: {e}")));
        };
        if version.as_u64() != Some(u64::from(ENGINE_SNAPSHOT_JSON_SCHEMA_V1)) {
            return Err(GraphError::InvalidData(format!(
                "unsupported snapshot schema version: {version}"
            )));
        }

        let payload: EngineSnapshotJsonContractV1 = serde_json::from_value(value)
            .map_err(|e| GraphError::InvalidData(format!("snapshot contract v1 decode: {e}")))?;
        Ok(payload.snapshot)
    }
}

impl<R: Renderer> GraphEngine<R> {
    pub fn snapshot_json_contract_v1_pretty(&self) -> GraphResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
