use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::types::{Color, Row};
use crate::error::{RadarError, RadarResult};

/// One category with its assigned color, in first-seen dataset order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryColor {
    pub category: String,
    pub color: Color,
}

/// Stable category-to-color assignment for one bound dataset.
///
/// Built over the full unfiltered dataset so filtering or excluding a
/// category never reassigns the colors of the remaining ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorMap {
    entries: IndexMap<String, Color>,
}

impl ColorMap {
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn color_of(&self, category: &str) -> Option<Color> {
        self.entries.get(category).copied()
    }

    /// Categories in first-seen order with their colors.
    pub fn iter(&self) -> impl Iterator<Item = CategoryColor> + '_ {
        self.entries.iter().map(|(category, color)| CategoryColor {
            category: category.clone(),
            color: *color,
        })
    }
}

/// Scans rows once and assigns palette colors positionally by first-seen
/// category order.
///
/// When distinct categories outnumber the palette, assignment wraps around
/// the palette (index modulo length). The wrap is deterministic and logged.
pub fn build_color_map(
    rows: &[Row],
    category_column: &str,
    palette: &[Color],
) -> RadarResult<ColorMap> {
    let mut entries: IndexMap<String, Color> = IndexMap::new();
    for row in rows {
        let category = row.key_of(category_column)?;
        if entries.contains_key(&category) {
            continue;
        }
        if palette.is_empty() {
            return Err(RadarError::Configuration(
                "color palette must not be empty".to_owned(),
            ));
        }
        let color = palette[entries.len() % palette.len()];
        entries.insert(category, color);
    }

    if entries.len() > palette.len() {
        warn!(
            categories = entries.len(),
            palette = palette.len(),
            "palette exhausted; category colors wrap positionally"
        );
    }

    Ok(ColorMap { entries })
}
