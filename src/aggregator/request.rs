//! Grouping keys and aggregation modes.

use super::age_order::UnknownAgePolicy;
use crate::loader::schema::{Record, SubsetKind};
use crate::utils::error::AggregateError;
use serde::{Deserialize, Serialize};

/// A categorical field records can be grouped by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dimension {
    InjuryType,
    AgeGroup,
    Year,
}

impl Dimension {
    /// Column label used in chart documents
    pub fn label(self) -> &'static str {
        match self {
            Dimension::InjuryType => "Injury Type",
            Dimension::AgeGroup => "Age Group",
            Dimension::Year => "Year",
        }
    }

    pub fn available_in(self, kind: SubsetKind) -> bool {
        match self {
            Dimension::InjuryType => true,
            Dimension::AgeGroup => kind == SubsetKind::AgeIndexed,
            Dimension::Year => kind == SubsetKind::YearIndexed,
        }
    }

    /// The record's value for this dimension
    pub fn value(self, record: &Record) -> &str {
        match self {
            Dimension::InjuryType => &record.injury_type,
            Dimension::AgeGroup | Dimension::Year => &record.category,
        }
    }
}

/// How group sums are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Plain group sums
    #[default]
    Sum,
    /// Share of the total of the row's first key
    PercentageOfGroup,
    /// Share of the grand total
    PercentageOfTotal,
}

/// One aggregation: which keys, which mode, and the unknown-age policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupingRequest {
    pub keys: Vec<Dimension>,
    pub mode: Mode,
    pub unknown_ages: UnknownAgePolicy,
}

impl GroupingRequest {
    /// Group by a single dimension
    pub fn by(key: Dimension) -> Self {
        Self {
            keys: vec![key],
            mode: Mode::Sum,
            unknown_ages: UnknownAgePolicy::default(),
        }
    }

    /// Group by two dimensions; the first one defines percentage groups
    pub fn by_pair(first: Dimension, second: Dimension) -> Self {
        Self {
            keys: vec![first, second],
            ..Self::by(first)
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_unknown_ages(mut self, policy: UnknownAgePolicy) -> Self {
        self.unknown_ages = policy;
        self
    }

    /// Index of the age dimension in the key, if any
    pub fn age_position(&self) -> Option<usize> {
        self.keys.iter().position(|k| *k == Dimension::AgeGroup)
    }

    /// Check the key against the subset it will run on
    pub fn validate(&self, kind: SubsetKind) -> Result<(), AggregateError> {
        match self.keys.as_slice() {
            [] => {
                return Err(AggregateError::InvalidKey(
                    "at least one dimension is required".to_string(),
                ))
            }
            [a, b] if a == b => {
                return Err(AggregateError::InvalidKey(format!(
                    "dimension '{}' repeated",
                    a.label()
                )))
            }
            [_] | [_, _] => {}
            keys => {
                return Err(AggregateError::InvalidKey(format!(
                    "at most two dimensions are supported, got {}",
                    keys.len()
                )))
            }
        }

        for key in &self.keys {
            if !key.available_in(kind) {
                return Err(AggregateError::DimensionNotInSubset {
                    dimension: key.label(),
                    subset: kind.label(),
                });
            }
        }

        Ok(())
    }
}
