use serde::{Deserialize, Serialize};

use crate::error::{RangeError, RangeResult};
use crate::render::Renderer;

use super::{RangeSelectorEngine, SelectionSnapshot};

pub const SELECTION_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: SelectionSnapshot,
}

impl SelectionSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> RangeResult<String> {
        let payload = SelectionSnapshotJsonContractV1 {
            schema_version: SELECTION_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            RangeError::Serialization(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned v1 contract payload.
    pub fn from_json_compat_str(input: &str) -> RangeResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<SelectionSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: SelectionSnapshotJsonContractV1 =
            serde_json::from_str(input).map_err(|e| {
                RangeError::Serialization(format!("failed to parse snapshot json payload: {e}"))
            })?;
        if payload.schema_version != SELECTION_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(RangeError::Serialization(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: Renderer> RangeSelectorEngine<R> {
    pub fn snapshot_json_contract_v1_pretty(&self) -> RangeResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
