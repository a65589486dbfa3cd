//! Turn raw source rows into the two named subsets.
//!
//! Rows are routed by `TableReference`: `H1` feeds the age-indexed subset,
//! `D2` the year-indexed subset, everything else is ignored before its
//! measure is even looked at.

use super::schema::{Record, Subset, SubsetKind, Subsets};
use super::source::RawRow;
use crate::utils::error::DataLoadError;
use log::debug;

/// Split raw rows into age-indexed and year-indexed subsets
///
/// **Public** - called by `load_subsets` after reading the source
///
/// # Errors
/// * `DataLoadError::MalformedMeasure` - a selected row's measure is empty,
///   non-numeric or non-finite. The whole load fails; nothing is skipped.
pub fn normalize(rows: Vec<RawRow>) -> Result<Subsets, DataLoadError> {
    let mut age_records = Vec::new();
    let mut year_records = Vec::new();
    let mut ignored = 0usize;

    for row in rows {
        let Some(kind) = SubsetKind::from_table_reference(&row.table_reference) else {
            ignored += 1;
            continue;
        };

        let cases = parse_measure(&row)?;
        let record = Record {
            table_reference: row.table_reference,
            injury_type: row.injury_type,
            category: row.category,
            cases,
        };

        match kind {
            SubsetKind::AgeIndexed => age_records.push(record),
            SubsetKind::YearIndexed => year_records.push(record),
        }
    }

    debug!(
        "Routed {} H1 rows and {} D2 rows ({} rows from other tables ignored)",
        age_records.len(),
        year_records.len(),
        ignored
    );

    Ok(Subsets {
        age: Subset::from_records(SubsetKind::AgeIndexed, age_records),
        year: Subset::from_records(SubsetKind::YearIndexed, year_records),
    })
}

/// Parse a measure cell, accepting thousands separators
pub fn parse_measure(row: &RawRow) -> Result<f64, DataLoadError> {
    let malformed = || DataLoadError::MalformedMeasure {
        row: row.row,
        value: row.measure.clone(),
    };

    let cleaned: String = row.measure.chars().filter(|c| *c != ',').collect();

    let value = cleaned.trim().parse::<f64>().map_err(|_| malformed())?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(malformed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(row: usize, table: &str, injury: &str, category: &str, measure: &str) -> RawRow {
        RawRow {
            row,
            table_reference: table.to_string(),
            measure: measure.to_string(),
            injury_type: injury.to_string(),
            category: category.to_string(),
        }
    }

    #[test]
    fn test_normalize_routes_and_filters() {
        let subsets = normalize(vec![
            raw(2, "H1", "Falls", "0-4", "10"),
            raw(3, "H1", "Falls", "All ages", "99"),
            raw(4, "H1", "All external causes", "5-9", "99"),
            raw(5, "D2", "Falls", "2019", "1,200"),
            raw(6, "D2", "All external causes", "2019", "99"),
            raw(7, "E4", "Falls", "Males", "n.p."),
        ])
        .unwrap();

        assert_eq!(subsets.age.len(), 1);
        assert_eq!(subsets.age.records()[0].category, "0-4");
        assert_eq!(subsets.year.len(), 1);
        assert_eq!(subsets.year.records()[0].cases, 1200.0);
    }

    #[test]
    fn test_malformed_measure_fails_whole_load() {
        let result = normalize(vec![
            raw(2, "H1", "Falls", "0-4", "10"),
            raw(3, "H1", "Falls", "5-9", "n.p."),
        ]);

        match result {
            Err(DataLoadError::MalformedMeasure { row, value }) => {
                assert_eq!(row, 3);
                assert_eq!(value, "n.p.");
            }
            other => panic!("expected MalformedMeasure, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_and_non_finite_measures_rejected() {
        assert!(parse_measure(&raw(2, "H1", "Falls", "0-4", "")).is_err());
        assert!(parse_measure(&raw(2, "H1", "Falls", "0-4", "inf")).is_err());
        assert!(parse_measure(&raw(2, "H1", "Falls", "0-4", "NaN")).is_err());
        assert_eq!(parse_measure(&raw(2, "H1", "Falls", "0-4", "12.5")).unwrap(), 12.5);
    }
}
