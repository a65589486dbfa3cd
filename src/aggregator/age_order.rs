//! The fixed domain ordering of age bands.
//!
//! This is the only place the band list is declared. Charts, sorting and
//! axis ordering all read it from here.

use super::result::AggregationRow;
use log::warn;
use serde::{Deserialize, Serialize};

/// Age bands in display order
///
/// `35-39` and `40-44` do not exist in the source dataset's category scheme.
pub const AGE_ORDER: [&str; 18] = [
    "0-4", "5-9", "10-14", "15-19", "20-24", "25-29", "30-34", "45-49", "50-54", "55-59",
    "60-64", "65-69", "70-74", "75-79", "80-84", "85-89", "90-94", "95+",
];

/// Position of a band in `AGE_ORDER`, or `None` for an unlisted band
pub fn age_rank(band: &str) -> Option<usize> {
    AGE_ORDER.iter().position(|b| *b == band)
}

/// What to do with an Age Group value that is not in `AGE_ORDER`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnknownAgePolicy {
    /// Keep the rows, ordered after every listed band
    #[default]
    Append,
    /// Remove the rows before percentages are computed
    Drop,
}

/// Apply `policy` and order rows by the age key at `position`
///
/// The sort is stable: rows sharing a band keep their grouping order, and
/// unlisted bands (under `Append`) keep their relative order at the end,
/// which is lexicographic when the rows come from `aggregate`.
pub fn order_by_age(rows: &mut Vec<AggregationRow>, position: usize, policy: UnknownAgePolicy) {
    if policy == UnknownAgePolicy::Drop {
        let before = rows.len();
        rows.retain(|row| age_rank(band_at(row, position)).is_some());

        let dropped = before - rows.len();
        if dropped > 0 {
            warn!("Dropped {} grouped rows with unlisted age bands", dropped);
        }
    }

    rows.sort_by_key(|row| age_rank(band_at(row, position)).unwrap_or(AGE_ORDER.len()));
}

fn band_at(row: &AggregationRow, position: usize) -> &str {
    row.keys.get(position).map(String::as_str).unwrap_or("")
}
