//! Group-and-sum over a subset.
//!
//! Groups are collected in a `BTreeMap`, so without an age dimension the
//! rows come out in ascending key order. With an age dimension they are
//! then stably reordered by `AGE_ORDER`.

use super::age_order::order_by_age;
use super::request::{GroupingRequest, Mode};
use super::result::{AggregationResult, AggregationRow};
use crate::loader::schema::Subset;
use crate::utils::error::AggregateError;
use log::debug;
use std::collections::{BTreeMap, HashMap};

/// Aggregate a subset
///
/// **Public** - main entry point for the aggregator stage
///
/// # Arguments
/// * `subset` - Sentinel-free subset from the loader
/// * `request` - Keys, mode and unknown-age policy
///
/// # Errors
/// * `AggregateError::InvalidKey` - empty, repeated or more than two keys
/// * `AggregateError::DimensionNotInSubset` - e.g. `Year` on the age subset
/// * `AggregateError::NonFiniteMeasure` - a record's cases is NaN or infinite
pub fn aggregate(
    subset: &Subset,
    request: &GroupingRequest,
) -> Result<AggregationResult, AggregateError> {
    request.validate(subset.kind())?;

    let mut groups: BTreeMap<Vec<String>, f64> = BTreeMap::new();

    for (index, record) in subset.records().iter().enumerate() {
        if !record.cases.is_finite() {
            return Err(AggregateError::NonFiniteMeasure {
                index,
                value: record.cases,
            });
        }

        let key: Vec<String> = request
            .keys
            .iter()
            .map(|d| d.value(record).to_string())
            .collect();

        *groups.entry(key).or_insert(0.0) += record.cases;
    }

    let mut rows: Vec<AggregationRow> = groups
        .into_iter()
        .map(|(keys, cases)| AggregationRow::new(keys, cases))
        .collect();

    if let Some(position) = request.age_position() {
        order_by_age(&mut rows, position, request.unknown_ages);
    }

    match request.mode {
        Mode::Sum => {}
        Mode::PercentageOfGroup => apply_group_percentages(&mut rows),
        Mode::PercentageOfTotal => apply_total_percentages(&mut rows),
    }

    debug!(
        "Aggregated {} records of {} subset into {} rows ({:?})",
        subset.len(),
        subset.kind().label(),
        rows.len(),
        request.mode
    );

    Ok(AggregationResult {
        dimensions: request.keys.clone(),
        mode: request.mode,
        rows,
    })
}

/// Percent of the row's first-key group
fn apply_group_percentages(rows: &mut [AggregationRow]) {
    let mut totals: HashMap<String, f64> = HashMap::new();
    for row in rows.iter() {
        *totals.entry(row.keys[0].clone()).or_insert(0.0) += row.cases;
    }

    for row in rows.iter_mut() {
        let total = totals.get(&row.keys[0]).copied().unwrap_or(0.0);
        row.percentage = Some(share(row.cases, total));
    }
}

/// Percent of the grand total
fn apply_total_percentages(rows: &mut [AggregationRow]) {
    let total: f64 = rows.iter().map(|r| r.cases).sum();

    for row in rows.iter_mut() {
        row.percentage = Some(share(row.cases, total));
    }
}

fn share(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        0.0
    } else {
        part / whole * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::age_order::UnknownAgePolicy;
    use crate::aggregator::request::Dimension;
    use crate::loader::schema::{Record, SubsetKind};

    fn age_subset(records: Vec<Record>) -> Subset {
        Subset::from_records(SubsetKind::AgeIndexed, records)
    }

    #[test]
    fn test_sum_single_key_is_sorted_by_key() {
        let subset = age_subset(vec![
            Record::new("H1", "Poisoning", "0-4", 5.0),
            Record::new("H1", "Falls", "0-4", 10.0),
            Record::new("H1", "Falls", "5-9", 20.0),
        ]);

        let result = aggregate(&subset, &GroupingRequest::by(Dimension::InjuryType)).unwrap();

        assert_eq!(result.rows.len(), 2);
        assert_eq!(result.rows[0].keys, vec!["Falls"]);
        assert_eq!(result.rows[0].cases, 30.0);
        assert_eq!(result.rows[1].keys, vec!["Poisoning"]);
        assert!(result.rows.iter().all(|r| r.percentage.is_none()));
    }

    #[test]
    fn test_age_dimension_beats_lexicographic_order() {
        let subset = age_subset(vec![
            Record::new("H1", "Falls", "10-14", 1.0),
            Record::new("H1", "Falls", "5-9", 1.0),
            Record::new("H1", "Falls", "95+", 1.0),
        ]);

        let result = aggregate(&subset, &GroupingRequest::by(Dimension::AgeGroup)).unwrap();

        let bands: Vec<&str> = result.rows.iter().map(|r| r.keys[0].as_str()).collect();
        assert_eq!(bands, vec!["5-9", "10-14", "95+"]);
    }

    #[test]
    fn test_zero_group_total_gives_zero_percentage() {
        let subset = age_subset(vec![Record::new("H1", "Falls", "0-4", 0.0)]);

        let request = GroupingRequest::by_pair(Dimension::AgeGroup, Dimension::InjuryType)
            .with_mode(Mode::PercentageOfGroup);
        let result = aggregate(&subset, &request).unwrap();

        assert_eq!(result.rows[0].percentage, Some(0.0));
    }

    #[test]
    fn test_non_finite_measure_fails() {
        let subset = age_subset(vec![
            Record::new("H1", "Falls", "0-4", 1.0),
            Record::new("H1", "Falls", "5-9", f64::NAN),
        ]);

        let err = aggregate(&subset, &GroupingRequest::by(Dimension::InjuryType)).unwrap_err();
        assert!(matches!(err, AggregateError::NonFiniteMeasure { index: 1, .. }));
    }

    #[test]
    fn test_drop_policy_excludes_from_percentages() {
        let subset = age_subset(vec![
            Record::new("H1", "Falls", "0-4", 30.0),
            Record::new("H1", "Falls", "35-39", 70.0),
        ]);

        let request = GroupingRequest::by_pair(Dimension::InjuryType, Dimension::AgeGroup)
            .with_mode(Mode::PercentageOfTotal)
            .with_unknown_ages(UnknownAgePolicy::Drop);
        let result = aggregate(&subset, &request).unwrap();

        assert_eq!(result.rows.len(), 1);
        assert_eq!(result.rows[0].percentage, Some(100.0));
    }
}
