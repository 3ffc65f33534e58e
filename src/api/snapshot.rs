use serde::{Deserialize, Serialize};

use crate::core::{DeferredTask, NavigationMode};
use crate::error::{DeckError, DeckResult};
use crate::render::Renderer;

use super::DeckEngine;

pub const DECK_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable deterministic state snapshot used by regression tests and
/// the replay tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckSnapshot {
    pub current_slide: usize,
    pub total_slides: usize,
    pub mode: NavigationMode,
    pub overview_active: bool,
    pub progress_percent: f64,
    pub clock_ms: u64,
    pub mounted_surfaces: Vec<String>,
    pub pending_tasks: Vec<DeferredTask>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: DeckSnapshot,
}

impl DeckSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> DeckResult<String> {
        let payload = DeckSnapshotJsonContractV1 {
            schema_version: DECK_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            DeckError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> DeckResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<DeckSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: DeckSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            DeckError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != DECK_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(DeckError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: Renderer> DeckEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> DeckSnapshot {
        DeckSnapshot {
            current_slide: self.state.current_slide(),
            total_slides: self.state.total_slides(),
            mode: self.state.mode(),
            overview_active: self.state.overview_active(),
            progress_percent: self.state.progress_percent(),
            clock_ms: u64::try_from(self.timeline.now().as_millis()).unwrap_or(u64::MAX),
            mounted_surfaces: self.charts.mounted_surfaces(),
            pending_tasks: self.timeline.pending_tasks(),
        }
    }
}
