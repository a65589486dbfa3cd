//! Chart request dispatch.
//!
//! Maps a selected view to its aggregation request and wraps the result
//! in a chart document for the display surface.

pub mod catalog;
pub mod chart;

pub use catalog::{ChartKind, ChartSpec, Measure, View};
pub use chart::{build_chart, ChartDocument};
