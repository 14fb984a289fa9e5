use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::axes::AxisSet;
use crate::core::color::ColorMap;
use crate::core::geometry::PolarProjector;
use crate::core::scale::RadialScale;
use crate::core::types::{Color, ColumnBindings, PixelPoint, Row};
use crate::error::{RadarError, RadarResult};

/// One row projected into pixel space, with the metadata downstream
/// grouping, tooltips, and interaction need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    pub axis: String,
    pub category: String,
    pub value: f64,
    pub pixel: PixelPoint,
    pub color: Color,
    pub source: Row,
}

/// Projects each visible row onto its axis at the scaled radial distance.
///
/// The axis set and color map must have been built over a superset of
/// `rows`; a miss is an ordering-contract violation surfaced as
/// `AxisNotFound` / `CategoryNotFound` rather than a silently dropped row.
pub fn project_rows(
    rows: &[Row],
    bindings: &ColumnBindings,
    axes: &AxisSet,
    colors: &ColorMap,
    scale: &dyn RadialScale,
    projector: PolarProjector,
) -> RadarResult<Vec<ProjectedPoint>> {
    #[cfg(feature = "parallel-projection")]
    {
        let projected: Vec<RadarResult<ProjectedPoint>> = rows
            .par_iter()
            .map(|row| project_single_row(row, bindings, axes, colors, scale, projector))
            .collect();
        projected.into_iter().collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            out.push(project_single_row(
                row, bindings, axes, colors, scale, projector,
            )?);
        }
        Ok(out)
    }
}

fn project_single_row(
    row: &Row,
    bindings: &ColumnBindings,
    axes: &AxisSet,
    colors: &ColorMap,
    scale: &dyn RadialScale,
    projector: PolarProjector,
) -> RadarResult<ProjectedPoint> {
    let axis_key = row.key_of(&bindings.axis_column)?;
    let axis = axes
        .get(&axis_key)
        .ok_or_else(|| RadarError::AxisNotFound {
            axis: axis_key.clone(),
        })?;

    let category = row.key_of(&bindings.polygon_column)?;
    let color = colors
        .color_of(&category)
        .ok_or_else(|| RadarError::CategoryNotFound {
            category: category.clone(),
        })?;

    let value = row.numeric_of(&bindings.value_column)?;
    let distance = scale.scale(value);

    Ok(ProjectedPoint {
        pixel: projector.point_on(axis.angle_radians, distance),
        axis: axis_key,
        category,
        value,
        color,
        source: row.clone(),
    })
}
