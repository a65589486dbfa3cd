//! Injury Insights CLI
//!
//! Builds chart documents from the AIHW injury workbook and serves the
//! pre-rendered presentation decks.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use injury_insights::cache::SubsetCache;
use injury_insights::commands::{
    display_version, display_views, execute_chart, execute_slides, inspect_chart_file,
    validate_args, validate_data_file, validate_slides_args, ChartArgs, SlidesArgs,
};
use injury_insights::documents::DeckId;
use injury_insights::utils::config::Settings;
use injury_insights::views::View;

/// Injury Insights - chart-ready AIHW injury statistics
#[derive(Parser, Debug)]
#[command(name = "injury-insights")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file with default paths (injury-insights.toml if present)
    #[arg(long, global = true, env = "INJURY_INSIGHTS_CONFIG")]
    config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a chart document for one view
    Chart {
        /// View to build
        #[arg(long, value_enum)]
        view: View,

        /// Source data file (.csv or spreadsheet workbook)
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Output path for the chart JSON (placed in artifacts/ by default)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,

        /// Rows shown in the text summary
        #[arg(long, default_value = "20")]
        rows: usize,
    },

    /// List available views
    Views,

    /// Load a source file and report subset sizes
    Validate {
        /// Source data file (.csv or spreadsheet workbook)
        #[arg(short, long)]
        data: Option<PathBuf>,
    },

    /// Read back a chart JSON file
    Inspect {
        /// Path to chart JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// List a presentation deck or print one slide
    Slides {
        /// Deck to show
        #[arg(long, value_enum, default_value = "population")]
        deck: DeckId,

        /// Directory the deck documents live in
        #[arg(long)]
        root: Option<PathBuf>,

        /// One-based slide number to print
        #[arg(long)]
        slide: Option<usize>,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let settings = Settings::resolve(cli.config.as_deref()).context("Failed to load config")?;

    // Execute command
    match cli.command {
        Commands::Chart {
            view,
            data,
            output,
            summary,
            rows,
        } => {
            let artifacts_dir = settings.artifacts_dir();

            // Bare file names go to the artifacts directory
            let output_json = match output {
                Some(path) if path.parent().map(|p| p.as_os_str().is_empty()).unwrap_or(true) => {
                    artifacts_dir.join(path)
                }
                Some(path) => path,
                None => ChartArgs::default_output(&artifacts_dir, view),
            };

            let args = ChartArgs {
                view,
                data_path: settings.data_path(data),
                output_json,
                print_summary: summary,
                summary_rows: rows,
            };

            // Validate args first
            validate_args(&args)?;

            let cache = SubsetCache::new();
            execute_chart(&args, &cache)?;
        }

        Commands::Views => {
            display_views();
        }

        Commands::Validate { data } => {
            validate_data_file(&settings.data_path(data))?;
        }

        Commands::Inspect { file } => {
            inspect_chart_file(&file)?;
        }

        Commands::Slides { deck, root, slide } => {
            let args = SlidesArgs {
                deck,
                documents_root: settings.documents_root(root),
                slide,
            };

            validate_slides_args(&args)?;
            execute_slides(&args)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
