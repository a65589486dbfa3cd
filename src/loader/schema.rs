//! Record and subset definitions.
//!
//! A `Subset` can only be built through `Subset::from_records`, which runs
//! the sentinel filter, so every subset in the program is free of
//! aggregate-total rows.

use crate::filter::retain_observations;
use crate::utils::config::{AGE_TABLE, YEAR_TABLE};
use serde::{Deserialize, Serialize};

/// Which logical table a subset was cut from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubsetKind {
    /// Table H1: injury counts per age group
    AgeIndexed,
    /// Table D2: injury counts per year
    YearIndexed,
}

impl SubsetKind {
    /// `TableReference` value selecting this subset
    pub fn table_reference(self) -> &'static str {
        match self {
            SubsetKind::AgeIndexed => AGE_TABLE,
            SubsetKind::YearIndexed => YEAR_TABLE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SubsetKind::AgeIndexed => "age-indexed",
            SubsetKind::YearIndexed => "year-indexed",
        }
    }

    pub fn from_table_reference(table: &str) -> Option<Self> {
        match table {
            AGE_TABLE => Some(SubsetKind::AgeIndexed),
            YEAR_TABLE => Some(SubsetKind::YearIndexed),
            _ => None,
        }
    }
}

/// One row of the normalized dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// `TableReference`
    pub table_reference: String,

    /// `ReportingCategory2`, renamed "Injury Type"
    pub injury_type: String,

    /// `ReportingCategory4`: "Age Group" in H1, "Year" in D2
    pub category: String,

    /// `MeasureValueNumber`, renamed "Number of Cases"
    pub cases: f64,
}

impl Record {
    pub fn new(
        table_reference: impl Into<String>,
        injury_type: impl Into<String>,
        category: impl Into<String>,
        cases: f64,
    ) -> Self {
        Self {
            table_reference: table_reference.into(),
            injury_type: injury_type.into(),
            category: category.into(),
            cases,
        }
    }
}

/// An immutable, sentinel-free partition of the record set
#[derive(Debug, Clone, PartialEq)]
pub struct Subset {
    kind: SubsetKind,
    records: Vec<Record>,
}

impl Subset {
    /// Build a subset, dropping sentinel rows for `kind`
    pub fn from_records(kind: SubsetKind, records: Vec<Record>) -> Self {
        Self {
            kind,
            records: retain_observations(kind, records),
        }
    }

    pub fn kind(&self) -> SubsetKind {
        self.kind
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of "Number of Cases" over every record
    pub fn total_cases(&self) -> f64 {
        self.records.iter().map(|r| r.cases).sum()
    }
}

/// Both subsets derived from one source file
#[derive(Debug, Clone, PartialEq)]
pub struct Subsets {
    pub age: Subset,
    pub year: Subset,
}

impl Subsets {
    pub fn get(&self, kind: SubsetKind) -> &Subset {
        match kind {
            SubsetKind::AgeIndexed => &self.age,
            SubsetKind::YearIndexed => &self.year,
        }
    }
}
