use crate::aggregator::AGE_ORDER;
use crate::loader::load_subsets;
use crate::output::read_chart;
use crate::utils::config::SCHEMA_VERSION;
use crate::views::View;
use anyhow::{Context, Result};
use std::path::Path;

/// Load a source file and report what the pipeline sees in it
pub fn validate_data_file(file_path: &Path) -> Result<()> {
    println!("Validating source: {}", file_path.display());

    let subsets = load_subsets(file_path)
        .with_context(|| format!("Failed to load {}", file_path.display()))?;

    println!("✓ Valid source data");
    for subset in [&subsets.age, &subsets.year] {
        println!(
            "  {} ({}): {} records, {} cases",
            subset.kind().label(),
            subset.kind().table_reference(),
            subset.len(),
            subset.total_cases()
        );
    }

    let unlisted: Vec<&str> = subsets
        .age
        .records()
        .iter()
        .map(|r| r.category.as_str())
        .filter(|band| !AGE_ORDER.contains(band))
        .collect();

    if !unlisted.is_empty() {
        println!(
            "  {} age-indexed records use bands outside the fixed age order",
            unlisted.len()
        );
    }

    Ok(())
}

/// Re-read a chart document and print its header
pub fn inspect_chart_file(file_path: &Path) -> Result<()> {
    println!("Inspecting chart: {}", file_path.display());

    let chart = read_chart(file_path).context("Failed to read chart document")?;

    println!("✓ Valid chart JSON");
    println!("  Version: {}", chart.version);
    println!("  View: {}", chart.view);
    println!("  Kind: {}", chart.kind.label());
    println!("  Title: {}", chart.title);
    println!("  Rows: {}", chart.rows.len());
    println!("  Total Cases: {}", chart.total_cases);
    println!("  Generated: {}", chart.generated_at);

    Ok(())
}

/// List every view with its chart kind and title
pub fn display_views() {
    println!("Available views:");
    for view in View::ALL {
        let spec = view.chart();
        println!("  {:<26} {:<12} {}", view.id(), spec.kind.label(), spec.title);
    }
}

/// Display version information
pub fn display_version() {
    println!("Injury Insights v{}", env!("CARGO_PKG_VERSION"));
    println!("Chart Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Chart-ready aggregation of AIHW injury statistics.");
}
