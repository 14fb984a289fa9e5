use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{RadarError, RadarResult};

/// One tabular record bound to the engine.
///
/// Cells are opaque to the engine except for the three configured columns
/// (axis, value, category). Rows are never mutated after construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    cells: serde_json::Map<String, Value>,
}

impl Row {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Chainable cell setter for test fixtures and programmatic row building.
    #[must_use]
    pub fn with_cell(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.cells.insert(column.into(), value.into());
        self
    }

    #[must_use]
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.cells.get(column)
    }

    /// Canonicalizes a cell into a grouping key (axis or category).
    ///
    /// Strings pass through; numbers and bools use their display form so a
    /// numeric category column still produces stable keys.
    pub fn key_of(&self, column: &str) -> RadarResult<String> {
        let cell = self.get(column).ok_or_else(|| RadarError::MissingColumn {
            column: column.to_owned(),
        })?;
        match cell {
            Value::String(text) => Ok(text.clone()),
            Value::Number(number) => Ok(number.to_string()),
            Value::Bool(flag) => Ok(flag.to_string()),
            other => Err(RadarError::InvalidValue {
                column: column.to_owned(),
                raw: other.to_string(),
            }),
        }
    }

    /// Reads a cell as a finite numeric value.
    ///
    /// Accepts JSON numbers and numeric strings; anything else is an
    /// `InvalidValue` error.
    pub fn numeric_of(&self, column: &str) -> RadarResult<f64> {
        let cell = self.get(column).ok_or_else(|| RadarError::MissingColumn {
            column: column.to_owned(),
        })?;
        let parsed = match cell {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => text.trim().parse::<f64>().ok(),
            _ => None,
        };
        match parsed {
            Some(value) if value.is_finite() => Ok(value),
            _ => Err(RadarError::InvalidValue {
                column: column.to_owned(),
                raw: cell.to_string(),
            }),
        }
    }
}

impl From<serde_json::Map<String, Value>> for Row {
    fn from(cells: serde_json::Map<String, Value>) -> Self {
        Self { cells }
    }
}

/// The three column bindings the engine reads from every row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnBindings {
    pub axis_column: String,
    pub value_column: String,
    pub polygon_column: String,
}

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> RadarResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(RadarError::Configuration(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// One point in surface pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ChartMargins {
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
}

impl ChartMargins {
    #[must_use]
    pub const fn new(top: f64, left: f64, right: f64, bottom: f64) -> Self {
        Self {
            top,
            left,
            right,
            bottom,
        }
    }
}

/// Configured chart surface size; center and radius derive from it once.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartSize {
    pub width: f64,
    pub height: f64,
    pub margin: ChartMargins,
}

impl ChartSize {
    #[must_use]
    pub const fn new(width: f64, height: f64, margin: ChartMargins) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    #[must_use]
    pub fn center(self) -> PixelPoint {
        PixelPoint::new(
            self.width / 2.0 - self.margin.left,
            self.height / 2.0 - self.margin.top,
        )
    }

    /// Radius of the largest circle that fits the plot area inside the margins.
    #[must_use]
    pub fn radius(self) -> f64 {
        let horizontal = (self.width - self.margin.left - self.margin.right) / 2.0;
        let vertical = (self.height - self.margin.top - self.margin.bottom) / 2.0;
        horizontal.min(vertical)
    }

    pub fn validate(self) -> RadarResult<()> {
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(RadarError::Configuration(
                "chart size must be finite".to_owned(),
            ));
        }
        for (side, value) in [
            ("top", self.margin.top),
            ("left", self.margin.left),
            ("right", self.margin.right),
            ("bottom", self.margin.bottom),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(RadarError::Configuration(format!(
                    "chart margin `{side}` must be finite and >= 0"
                )));
            }
        }
        if self.radius() <= 0.0 {
            return Err(RadarError::Configuration(format!(
                "chart plot area is empty: width={}, height={}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}
