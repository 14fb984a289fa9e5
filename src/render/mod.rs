use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{Axis, Color, PixelPoint, Polygon, ProjectedPoint};
use crate::error::{RadarError, RadarResult};
use crate::reconcile::{KeyedDiff, VertexKey};

/// Key type for the tick-ring collection: the tick value itself.
pub type TickKey = OrderedFloat<f64>;

/// One concentric tick ring, with its radius already resolved through the
/// bound scale so surfaces never need scale access.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickRing {
    pub value: f64,
    pub radius_px: f64,
}

/// One legend row in full-dataset color order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub category: String,
    pub color: Color,
    pub excluded: bool,
}

/// Fixed per-chart geometry and animation hints handed to the surface with
/// every pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderContext {
    pub center: PixelPoint,
    pub radius: f64,
    pub transition_duration_ms: u64,
    pub axis_label_margin: f64,
    pub legend_position: Option<PixelPoint>,
}

/// Fully materialized output of one render: an enter/update/exit diff per
/// keyed collection plus the shared geometry context.
///
/// Entering elements are expected to animate in from the chart center (or
/// zero opacity); exiting elements animate back toward it before removal.
/// The surface owns all animation timing.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPass {
    pub context: RenderContext,
    pub ticks: KeyedDiff<TickKey, TickRing>,
    pub axes: KeyedDiff<String, Axis>,
    pub polygons: KeyedDiff<String, Polygon>,
    pub vertices: KeyedDiff<VertexKey, ProjectedPoint>,
    pub legend: KeyedDiff<String, LegendEntry>,
}

impl RenderPass {
    /// Rejects non-finite geometry before it reaches a drawing backend.
    pub fn validate(&self) -> RadarResult<()> {
        if !self.context.center.is_finite()
            || !self.context.radius.is_finite()
            || self.context.radius <= 0.0
        {
            return Err(RadarError::Configuration(
                "render context center/radius must be finite and radius > 0".to_owned(),
            ));
        }

        for ring in self.ticks.enter.values().chain(self.ticks.update.values()) {
            if !ring.radius_px.is_finite() {
                return Err(RadarError::InvalidValue {
                    column: "tick".to_owned(),
                    raw: ring.value.to_string(),
                });
            }
        }

        for polygon in self
            .polygons
            .enter
            .values()
            .chain(self.polygons.update.values())
        {
            if polygon.points.iter().any(|point| !point.is_finite()) {
                return Err(RadarError::InvalidValue {
                    column: "polygon".to_owned(),
                    raw: polygon.category.clone(),
                });
            }
        }

        for vertex in self
            .vertices
            .enter
            .values()
            .chain(self.vertices.update.values())
        {
            if !vertex.pixel.is_finite() {
                return Err(RadarError::InvalidValue {
                    column: "vertex".to_owned(),
                    raw: vertex.axis.clone(),
                });
            }
        }

        Ok(())
    }

    /// Keys present after this pass, per collection, in next order.
    #[must_use]
    pub fn polygon_keys(&self) -> Vec<&str> {
        self.polygons
            .enter
            .keys()
            .chain(self.polygons.update.keys())
            .map(String::as_str)
            .collect()
    }
}

/// Contract implemented by any drawing collaborator.
///
/// Surfaces receive a fully materialized, deterministic [`RenderPass`] so
/// drawing and animation code remains isolated from layout and diffing
/// logic. The engine does not wait for animations; a new pass may arrive
/// while a previous one is still animating.
pub trait Surface {
    fn apply(&mut self, pass: &RenderPass) -> RadarResult<()>;
}

/// Per-collection enter/update/exit counts recorded by [`NullSurface`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassCounts {
    pub enter: usize,
    pub update: usize,
    pub exit: usize,
}

impl PassCounts {
    fn of<K: std::hash::Hash + Eq, V>(diff: &KeyedDiff<K, V>) -> Self {
        Self {
            enter: diff.enter.len(),
            update: diff.update.len(),
            exit: diff.exit.len(),
        }
    }
}

/// No-op surface used by tests and headless engine usage.
///
/// It still validates pass geometry so tests can catch invalid layout before
/// a real backend is introduced, and it records the last pass's counts and
/// the updated polygon outlines for assertions.
#[derive(Debug, Clone, Default)]
pub struct NullSurface {
    pub passes_applied: usize,
    pub last_ticks: PassCounts,
    pub last_axes: PassCounts,
    pub last_polygons: PassCounts,
    pub last_vertices: PassCounts,
    pub last_legend: PassCounts,
    pub last_polygon_outlines: IndexMap<String, Vec<PixelPoint>>,
}

impl Surface for NullSurface {
    fn apply(&mut self, pass: &RenderPass) -> RadarResult<()> {
        pass.validate()?;
        self.passes_applied += 1;
        self.last_ticks = PassCounts::of(&pass.ticks);
        self.last_axes = PassCounts::of(&pass.axes);
        self.last_polygons = PassCounts::of(&pass.polygons);
        self.last_vertices = PassCounts::of(&pass.vertices);
        self.last_legend = PassCounts::of(&pass.legend);

        self.last_polygon_outlines.clear();
        for (key, polygon) in pass.polygons.enter.iter().chain(pass.polygons.update.iter()) {
            self.last_polygon_outlines
                .insert(key.clone(), polygon.points.to_vec());
        }
        Ok(())
    }
}
