//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the source data file
///
/// Every variant is fatal to the pipeline: no partial subsets are returned.
#[derive(Error, Debug)]
pub enum DataLoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet parsing failed: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("Workbook has no worksheets: {0}")]
    EmptyWorkbook(PathBuf),

    #[error("Unsupported source format: {0}")]
    UnsupportedFormat(String),

    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("Malformed measure value '{value}' at row {row}")]
    MalformedMeasure { row: usize, value: String },
}

/// Errors that can occur during aggregation
#[derive(Error, Debug, PartialEq)]
pub enum AggregateError {
    #[error("Invalid grouping key: {0}")]
    InvalidKey(String),

    #[error("Dimension '{dimension}' is not available in the {subset} subset")]
    DimensionNotInSubset {
        dimension: &'static str,
        subset: &'static str,
    },

    #[error("Non-finite measure {value} in record {index}")]
    NonFiniteMeasure { index: usize, value: f64 },
}

/// A referenced pre-rendered document is absent
///
/// Non-fatal: callers report the missing item and keep going.
#[derive(Error, Debug)]
#[error("Document not found: {name} ({})", .path.display())]
pub struct DocumentNotFoundError {
    pub name: String,
    pub path: PathBuf,
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

/// Errors that can occur while reading the optional config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}
