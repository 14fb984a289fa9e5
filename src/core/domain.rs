use serde::{Deserialize, Serialize};

use crate::core::scale::RadialScale;
use crate::core::types::Row;
use crate::error::RadarResult;

/// Value domain and tick values of the currently visible rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DomainTicks {
    pub min: f64,
    pub max: f64,
    pub ticks: Vec<f64>,
}

/// Folds the integer-parsed value column into `(min, max)`.
///
/// Values truncate toward zero; an empty row set yields `(0, 0)`.
pub fn min_max(rows: &[Row], value_column: &str) -> RadarResult<(f64, f64)> {
    let mut bounds: Option<(f64, f64)> = None;
    for row in rows {
        let value = row.numeric_of(value_column)?.trunc();
        bounds = Some(match bounds {
            None => (value, value),
            Some((min, max)) => (min.min(value), max.max(value)),
        });
    }
    Ok(bounds.unwrap_or((0.0, 0.0)))
}

/// Computes the visible value domain, pushes it into the scale, and collects
/// the scale's tick values.
///
/// A leading zero tick is dropped: it always sits at the chart center and
/// need not be rendered.
pub fn compute_domain_ticks(
    rows: &[Row],
    value_column: &str,
    scale: &mut dyn RadialScale,
    tick_count: usize,
) -> RadarResult<DomainTicks> {
    let (min, max) = min_max(rows, value_column)?;
    scale.set_domain(min, max);

    let mut ticks = scale.ticks(tick_count);
    if ticks.first() == Some(&0.0) {
        ticks.remove(0);
    }

    Ok(DomainTicks { min, max, ticks })
}

#[cfg(test)]
mod tests {
    use super::{compute_domain_ticks, min_max};
    use crate::core::scale::LinearRadialScale;
    use crate::core::types::Row;

    fn value_rows(values: &[i64]) -> Vec<Row> {
        values
            .iter()
            .map(|value| Row::new().with_cell("value", *value))
            .collect()
    }

    #[test]
    fn min_max_picks_the_correct_bounds() {
        let rows = value_rows(&[100, 200, 300, 400, 500, 600, 10, 12, 3]);
        assert_eq!(min_max(&rows, "value").expect("min max"), (3.0, 600.0));
    }

    #[test]
    fn min_max_of_no_rows_is_zero_zero() {
        assert_eq!(min_max(&[], "value").expect("min max"), (0.0, 0.0));
    }

    #[test]
    fn fractional_values_truncate_toward_zero() {
        let rows = vec![
            Row::new().with_cell("value", 3.9),
            Row::new().with_cell("value", 600.2),
        ];
        assert_eq!(min_max(&rows, "value").expect("min max"), (3.0, 600.0));
    }

    #[test]
    fn leading_zero_tick_is_dropped() {
        let rows = value_rows(&[0, 100]);
        let mut scale = LinearRadialScale::new();
        let domain = compute_domain_ticks(&rows, "value", &mut scale, 10).expect("domain");
        assert_eq!(domain.min, 0.0);
        assert_eq!(domain.max, 100.0);
        assert_eq!(domain.ticks.first().copied(), Some(10.0));
    }

    #[test]
    fn non_zero_leading_tick_list_is_unchanged() {
        let rows = value_rows(&[50, 100]);
        let mut scale = LinearRadialScale::new();
        let domain = compute_domain_ticks(&rows, "value", &mut scale, 10).expect("domain");
        assert_eq!(domain.ticks.first().copied(), Some(50.0));
    }

    #[test]
    fn empty_rows_produce_no_ticks() {
        let mut scale = LinearRadialScale::new();
        let domain = compute_domain_ticks(&[], "value", &mut scale, 10).expect("domain");
        assert_eq!(domain.min, 0.0);
        assert_eq!(domain.max, 0.0);
        assert!(domain.ticks.is_empty());
    }
}
