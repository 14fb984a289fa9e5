use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::projection::ProjectedPoint;
use crate::core::types::{Color, PixelPoint};

/// One category's shape: ordered pixel outline plus the projected vertices.
///
/// Category order is first-seen order within the visible point list, which
/// can differ from the full-dataset color order when filters hide the rows
/// that originally introduced a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub category: String,
    pub color: Color,
    pub points: SmallVec<[PixelPoint; 8]>,
    pub vertices: Vec<ProjectedPoint>,
}

/// Folds projected points into per-category polygons in input order.
///
/// Paths are not auto-closed: a category with fewer vertices than axes keeps
/// an open or degenerate outline, and a category missing an axis simply has
/// no vertex there.
#[must_use]
pub fn group_polygons(points: Vec<ProjectedPoint>) -> Vec<Polygon> {
    let mut grouped: IndexMap<String, Polygon> = IndexMap::new();
    for point in points {
        let polygon = grouped
            .entry(point.category.clone())
            .or_insert_with(|| Polygon {
                category: point.category.clone(),
                color: point.color,
                points: SmallVec::new(),
                vertices: Vec::new(),
            });
        polygon.points.push(point.pixel);
        polygon.vertices.push(point);
    }
    grouped.into_values().collect()
}
