//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod chart;
pub mod models;
pub mod slides;
pub mod utils;

// Re-export main command functions
pub use chart::{execute_chart, validate_args};
pub use models::{ChartArgs, SlidesArgs};
pub use slides::{execute_slides, validate_slides_args};
pub use utils::{display_version, display_views, inspect_chart_file, validate_data_file};
