use crate::documents::DeckId;
use crate::utils::config::{DEFAULT_ARTIFACTS_DIR, DEFAULT_DATA_PATH, DEFAULT_DOCUMENTS_ROOT};
use crate::views::View;
use std::path::PathBuf;

/// Arguments for the chart command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ChartArgs {
    /// View to build
    pub view: View,

    /// Source data file (CSV or workbook)
    pub data_path: PathBuf,

    /// Output path for the JSON chart document
    pub output_json: PathBuf,

    /// Print text summary to stdout
    pub print_summary: bool,

    /// Rows shown in the text summary
    pub summary_rows: usize,
}

impl ChartArgs {
    /// Default output location for a view: `<artifacts>/<view-id>.json`
    pub fn default_output(artifacts_dir: impl Into<PathBuf>, view: View) -> PathBuf {
        artifacts_dir.into().join(format!("{}.json", view.id()))
    }
}

impl Default for ChartArgs {
    fn default() -> Self {
        Self {
            view: View::TotalByType,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            output_json: Self::default_output(DEFAULT_ARTIFACTS_DIR, View::TotalByType),
            print_summary: false,
            summary_rows: 20,
        }
    }
}

/// Arguments for the slides command
#[derive(Debug, Clone)]
pub struct SlidesArgs {
    pub deck: DeckId,

    /// Directory the deck's document names are relative to
    pub documents_root: PathBuf,

    /// One-based slide to print; `None` lists the whole deck
    pub slide: Option<usize>,
}

impl Default for SlidesArgs {
    fn default() -> Self {
        Self {
            deck: DeckId::Population,
            documents_root: PathBuf::from(DEFAULT_DOCUMENTS_ROOT),
            slide: None,
        }
    }
}
