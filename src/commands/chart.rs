//! Chart command implementation.
//!
//! The chart command:
//! 1. Loads the source subsets (through the cache)
//! 2. Aggregates them for the selected view
//! 3. Writes the chart document and optionally prints a summary

use super::models::ChartArgs;
use crate::cache::SubsetCache;
use crate::loader::SourceFormat;
use crate::output::{render_summary, write_chart};
use crate::views::{build_chart, ChartDocument};
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the chart command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Chart command arguments
/// * `cache` - Subset cache shared across requests
///
/// # Returns
/// The chart document that was written
///
/// # Errors
/// * Source load failures (fatal, nothing is written)
/// * Aggregation errors
/// * File write errors
pub fn execute_chart(args: &ChartArgs, cache: &SubsetCache) -> Result<ChartDocument> {
    let start_time = Instant::now();

    info!("Building view '{}' from {}", args.view, args.data_path.display());

    // Step 1: Load subsets
    info!("Step 1/3: Loading source data...");
    let subsets = cache
        .get_or_load(&args.data_path)
        .with_context(|| format!("Failed to load data from {}", args.data_path.display()))?;

    debug!(
        "Subsets: {} age-indexed records ({} cases), {} year-indexed records ({} cases)",
        subsets.age.len(),
        subsets.age.total_cases(),
        subsets.year.len(),
        subsets.year.total_cases()
    );

    // Step 2: Aggregate
    info!("Step 2/3: Aggregating...");
    let chart = build_chart(args.view, &subsets)
        .with_context(|| format!("Failed to aggregate view '{}'", args.view))?;

    debug!("Chart has {} rows, {} total cases", chart.rows.len(), chart.total_cases);

    // Step 3: Write outputs
    info!("Step 3/3: Writing chart document...");
    write_chart(&chart, &args.output_json).context("Failed to write chart JSON")?;

    info!("✓ Chart written to: {}", args.output_json.display());

    if args.print_summary {
        println!("\n{}", "=".repeat(80));
        println!("CHART SUMMARY");
        println!("{}", "=".repeat(80));
        println!("{}", render_summary(&chart, args.summary_rows));
        println!("{}", "=".repeat(80));
    }

    info!(
        "Chart completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(chart)
}

/// Validate chart arguments
///
/// **Public** - can be called before execute_chart for early validation
pub fn validate_args(args: &ChartArgs) -> Result<()> {
    if args.data_path.as_os_str().is_empty() {
        anyhow::bail!("Data path cannot be empty");
    }

    SourceFormat::detect(&args.data_path)
        .context("Data file must be a .csv or spreadsheet workbook")?;

    if args.output_json.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    if args.summary_rows == 0 {
        anyhow::bail!("summary rows must be greater than 0");
    }

    if args.summary_rows > 1000 {
        anyhow::bail!("summary rows is too large (max 1000)");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_validate_args_default_is_valid() {
        assert!(validate_args(&ChartArgs::default()).is_ok());
    }

    #[test]
    fn test_validate_args_empty_data_path() {
        let args = ChartArgs {
            data_path: PathBuf::new(),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_unsupported_format() {
        let args = ChartArgs {
            data_path: PathBuf::from("data/injuries.parquet"),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_summary_rows_bounds() {
        let zero = ChartArgs {
            summary_rows: 0,
            ..Default::default()
        };
        let huge = ChartArgs {
            summary_rows: 5000,
            ..Default::default()
        };
        assert!(validate_args(&zero).is_err());
        assert!(validate_args(&huge).is_err());
    }
}
