//! Output writers for chart documents.
//!
//! This module handles:
//! - JSON chart documents (write and read back)
//! - Plain-text summaries for the terminal

pub mod json;
pub mod summary;

// Re-export main functions
pub use json::{read_chart, write_chart};
pub use summary::render_summary;

use crate::utils::error::OutputError;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
