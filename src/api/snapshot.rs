use serde::{Deserialize, Serialize};

use crate::core::{AxisLabel, AxisRange, PlotArea, TimelineBar, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::TimelineChart;

pub const TIMELINE_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable deterministic chart state used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineSnapshot {
    pub viewport: Viewport,
    pub range: AxisRange,
    pub spacing_factor: f64,
    pub plot_area: PlotArea,
    pub column_labels: Vec<String>,
    pub bars: Vec<TimelineBar>,
    pub axis_labels: Vec<AxisLabel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: TimelineSnapshot,
}

impl TimelineSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = TimelineSnapshotJsonContractV1 {
            schema_version: TIMELINE_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Parses either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<TimelineSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: TimelineSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != TIMELINE_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: Renderer> TimelineChart<R> {
    pub fn snapshot(&mut self) -> ChartResult<TimelineSnapshot> {
        let layout = self.layout()?;
        Ok(TimelineSnapshot {
            viewport: layout.viewport,
            range: self.range,
            spacing_factor: self.spacing.value(),
            plot_area: layout.plot_area,
            column_labels: self
                .columns
                .columns()
                .iter()
                .map(|column| column.label.clone())
                .collect(),
            bars: self.bars()?,
            axis_labels: self.axis_labels()?,
        })
    }

    pub fn snapshot_json_pretty(&mut self) -> ChartResult<String> {
        self.snapshot()?.to_json_contract_v1_pretty()
    }
}
