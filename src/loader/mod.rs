//! Source loading and normalization.
//!
//! This module handles:
//! - Reading CSV exports and Excel workbooks
//! - Renaming the provider's columns to their semantic names
//! - Splitting the record set into the age-indexed and year-indexed subsets

pub mod normalize;
pub mod schema;
pub mod source;

use crate::utils::error::DataLoadError;
use log::info;
use std::path::Path;

// Re-export main types
pub use normalize::normalize;
pub use schema::{Record, Subset, SubsetKind, Subsets};
pub use source::{read_rows, RawRow, SourceFormat};

/// Load both subsets from a tabular source
///
/// **Public** - main entry point for the loader stage
///
/// Failure is all-or-nothing: any read, header or measure problem returns
/// an error and no subsets.
pub fn load_subsets(path: impl AsRef<Path>) -> Result<Subsets, DataLoadError> {
    let path = path.as_ref();

    info!("Loading source data from: {}", path.display());

    let rows = read_rows(path)?;
    let subsets = normalize(rows)?;

    info!(
        "Loaded {} age-indexed and {} year-indexed records",
        subsets.age.len(),
        subsets.year.len()
    );

    Ok(subsets)
}
