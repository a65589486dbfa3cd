//! JSON chart document writer.
//!
//! Writes ChartDocument structs to JSON files with proper formatting.

use super::validate_path;
use crate::utils::error::OutputError;
use crate::views::ChartDocument;
use log::{debug, info};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write a chart document to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Arguments
/// * `chart` - Chart document to write
/// * `output_path` - Path to output JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
///
/// # Example
/// ```ignore
/// let chart = build_chart(View::StackedByAge, &subsets)?;
/// write_chart(&chart, "artifacts/stacked-by-age.json")?;
/// ```
pub fn write_chart(chart: &ChartDocument, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing chart to: {}", output_path.display());

    validate_path(output_path)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, chart)?;

    info!(
        "Chart written successfully ({} bytes)",
        std::fs::metadata(output_path).map(|m| m.len()).unwrap_or(0)
    );

    Ok(())
}

/// Read a chart document from a JSON file
///
/// **Public** - used by the inspect command and tests
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_chart(input_path: impl AsRef<Path>) -> Result<ChartDocument, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading chart from: {}", input_path.display());

    let file = File::open(input_path)?;
    let chart: ChartDocument = serde_json::from_reader(file)?;

    debug!("Chart loaded: version {}, view {}", chart.version, chart.view);

    Ok(chart)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::{AggregationResult, AggregationRow, Dimension, Mode};
    use crate::views::View;
    use tempfile::NamedTempFile;

    fn create_test_chart() -> ChartDocument {
        let result = AggregationResult {
            dimensions: vec![Dimension::InjuryType],
            mode: Mode::Sum,
            rows: vec![
                AggregationRow::new(vec!["Falls".to_string()], 30.0),
                AggregationRow::new(vec!["Poisoning".to_string()], 5.0),
            ],
        };
        ChartDocument::from_result(View::TotalByType, &result)
    }

    #[test]
    fn test_write_and_read_chart() {
        let chart = create_test_chart();
        let temp_file = NamedTempFile::new().unwrap();

        write_chart(&chart, temp_file.path()).unwrap();
        let loaded = read_chart(temp_file.path()).unwrap();

        assert_eq!(loaded, chart);
    }

    #[test]
    fn test_sum_rows_omit_percentage_field() {
        let json = serde_json::to_string_pretty(&create_test_chart()).unwrap();
        assert!(!json.contains("\"percentage\""));
        assert!(json.contains("\"view\": \"total-by-type\""));
        assert!(json.contains("\"kind\": \"bar\""));
    }

    #[test]
    fn test_read_chart_rejects_garbage() {
        let temp_file = NamedTempFile::new().unwrap();
        std::fs::write(temp_file.path(), "{ not json").unwrap();

        assert!(matches!(
            read_chart(temp_file.path()),
            Err(OutputError::SerializationFailed(_))
        ));
    }
}
