use indexmap::IndexMap;

use crate::core::{Axis, Polygon, ProjectedPoint};
use crate::reconcile::VertexKey;
use crate::render::{LegendEntry, TickKey, TickRing};

/// Keyed view-model retained across renders.
///
/// This is the only persisted visual state: it exists so the next render can
/// partition keys into enter/update/exit. Values are replaced wholesale on
/// every successful pass, never patched in place.
#[derive(Debug, Clone, Default)]
pub(crate) struct RetainedState {
    pub(crate) ticks: IndexMap<TickKey, TickRing>,
    pub(crate) axes: IndexMap<String, Axis>,
    pub(crate) polygons: IndexMap<String, Polygon>,
    pub(crate) vertices: IndexMap<VertexKey, ProjectedPoint>,
    pub(crate) legend: IndexMap<String, LegendEntry>,
}
