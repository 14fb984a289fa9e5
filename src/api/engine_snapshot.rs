use serde::{Deserialize, Serialize};

use crate::core::{Axis, DomainTicks};
use crate::error::RadarResult;
use crate::render::{LegendEntry, Surface};

use super::RadarEngine;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub row_count: usize,
    pub domain: DomainTicks,
    pub axes: Vec<Axis>,
    pub legend: Vec<LegendEntry>,
    pub excluded: Vec<String>,
    pub polygon_categories: Vec<String>,
    pub vertex_count: usize,
}

impl<S: Surface> RadarEngine<S> {
    /// Captures the retained view-model state after the latest render.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            row_count: self.rows.len(),
            domain: self.last_domain.clone(),
            axes: self.last_axes.iter().cloned().collect(),
            legend: self.retained.legend.values().cloned().collect(),
            excluded: self.excluded.iter().cloned().collect(),
            polygon_categories: self.retained.polygons.keys().cloned().collect(),
            vertex_count: self.retained.vertices.len(),
        }
    }

    pub fn snapshot_json_pretty(&self) -> RadarResult<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }
}
