use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::core::geometry::{CIRCLE_RADIANS, RADIANS_TO_ROTATE};
use crate::core::types::Row;
use crate::error::RadarResult;

/// One radar spoke: a distinct axis-column value with its fixed angle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub key: String,
    pub angle_radians: f64,
}

/// Ordered, key-addressable set of axes for one render pass.
///
/// Insertion order is first-seen order in the source rows; the map doubles as
/// the lookup hash used by projection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisSet {
    axes: IndexMap<String, Axis>,
}

impl AxisSet {
    #[must_use]
    pub fn len(&self) -> usize {
        self.axes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Axis> {
        self.axes.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Axis> {
        self.axes.values()
    }

    #[must_use]
    pub fn as_map(&self) -> &IndexMap<String, Axis> {
        &self.axes
    }
}

/// Extracts the ordered, deduplicated axis set from rows.
///
/// Angles partition the circle into `len` equal sectors with axis 0 at the
/// top. Zero distinct axes yield an empty set, not an error; the angle step
/// is never computed for an empty set.
pub fn extract_axes(rows: &[Row], axis_column: &str) -> RadarResult<AxisSet> {
    let mut keys: IndexSet<String> = IndexSet::new();
    for row in rows {
        keys.insert(row.key_of(axis_column)?);
    }

    if keys.is_empty() {
        return Ok(AxisSet::default());
    }

    let radians_per_axis = CIRCLE_RADIANS / keys.len() as f64;
    let axes = keys
        .into_iter()
        .enumerate()
        .map(|(index, key)| {
            let axis = Axis {
                key: key.clone(),
                angle_radians: index as f64 * radians_per_axis + RADIANS_TO_ROTATE,
            };
            (key, axis)
        })
        .collect();

    Ok(AxisSet { axes })
}
