//! Aggregation output types.

use super::request::{Dimension, Mode};
use serde::{Deserialize, Serialize};

/// One grouped row: key values, summed cases and optional percentage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationRow {
    /// Key values, in the order of the request's dimensions
    pub keys: Vec<String>,

    /// Sum of "Number of Cases" for the group
    pub cases: f64,

    /// Share of the group or grand total, when a percentage mode was used
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
}

impl AggregationRow {
    pub fn new(keys: Vec<String>, cases: f64) -> Self {
        Self {
            keys,
            cases,
            percentage: None,
        }
    }
}

/// Ordered, grouped output of one aggregation
#[derive(Debug, Clone, PartialEq)]
pub struct AggregationResult {
    pub dimensions: Vec<Dimension>,
    pub mode: Mode,
    pub rows: Vec<AggregationRow>,
}

impl AggregationResult {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum of cases over every row
    pub fn total(&self) -> f64 {
        self.rows.iter().map(|r| r.cases).sum()
    }

    /// Copy with percentages rounded to two decimals for display
    pub fn rounded(&self) -> Self {
        let rows = self
            .rows
            .iter()
            .map(|row| AggregationRow {
                percentage: row.percentage.map(round2),
                ..row.clone()
            })
            .collect();

        Self {
            dimensions: self.dimensions.clone(),
            mode: self.mode,
            rows,
        }
    }

    /// Distinct values of `dimension` in row order
    ///
    /// Returns an empty list if the dimension is not part of the key.
    pub fn category_order(&self, dimension: Dimension) -> Vec<String> {
        let Some(position) = self.dimensions.iter().position(|d| *d == dimension) else {
            return Vec::new();
        };

        let mut seen = Vec::new();
        for row in &self.rows {
            if let Some(value) = row.keys.get(position) {
                if !seen.contains(value) {
                    seen.push(value.clone());
                }
            }
        }
        seen
    }

    /// Column headers for tabular output
    pub fn columns(&self) -> Vec<String> {
        let mut columns: Vec<String> = self
            .dimensions
            .iter()
            .map(|d| d.label().to_string())
            .collect();

        columns.push("Number of Cases".to_string());
        if self.mode != Mode::Sum {
            columns.push("Percentage".to_string());
        }
        columns
    }
}

/// Round to two decimals
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result() -> AggregationResult {
        AggregationResult {
            dimensions: vec![Dimension::AgeGroup, Dimension::InjuryType],
            mode: Mode::PercentageOfGroup,
            rows: vec![
                AggregationRow {
                    percentage: Some(200.0 / 3.0),
                    ..AggregationRow::new(vec!["0-4".into(), "Falls".into()], 20.0)
                },
                AggregationRow {
                    percentage: Some(100.0 / 3.0),
                    ..AggregationRow::new(vec!["0-4".into(), "Poisoning".into()], 10.0)
                },
                AggregationRow {
                    percentage: Some(100.0),
                    ..AggregationRow::new(vec!["5-9".into(), "Falls".into()], 5.0)
                },
            ],
        }
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(85.714285), 85.71);
        assert_eq!(round2(14.285714), 14.29);
        assert_eq!(round2(100.0), 100.0);
    }

    #[test]
    fn test_rounded_only_touches_percentages() {
        let rounded = result().rounded();
        assert_eq!(rounded.rows[0].percentage, Some(66.67));
        assert_eq!(rounded.rows[1].percentage, Some(33.33));
        assert_eq!(rounded.rows[0].cases, 20.0);
    }

    #[test]
    fn test_category_order() {
        let result = result();
        assert_eq!(result.category_order(Dimension::AgeGroup), vec!["0-4", "5-9"]);
        assert_eq!(
            result.category_order(Dimension::InjuryType),
            vec!["Falls", "Poisoning"]
        );
        assert!(result.category_order(Dimension::Year).is_empty());
    }

    #[test]
    fn test_columns() {
        assert_eq!(
            result().columns(),
            vec!["Age Group", "Injury Type", "Number of Cases", "Percentage"]
        );
    }
}
