//! Chart documents handed to the display surface.
//!
//! A chart document is everything a renderer needs: chart kind, axis
//! bindings, title, category order and the aggregated rows. Schema is
//! versioned to allow future evolution.

use super::catalog::{ChartKind, View};
use crate::aggregator::{aggregate, AggregationResult, AggregationRow, Dimension};
use crate::loader::schema::Subsets;
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::AggregateError;
use chrono::Utc;
use log::info;
use serde::{Deserialize, Serialize};

/// Top-level chart structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDocument {
    /// Schema version for compatibility checking
    pub version: String,

    pub view: View,
    pub title: String,
    pub kind: ChartKind,

    /// Category axis column (slice names for a pie)
    pub x: String,

    /// Value axis column (slice sizes for a pie)
    pub y: String,

    /// Series column, if the chart is split into series
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Order of the categories along `x`
    pub category_order: Vec<String>,

    /// Column labels matching each row's keys, then the measures
    pub columns: Vec<String>,

    /// Aggregated rows, percentages rounded to two decimals
    pub rows: Vec<AggregationRow>,

    /// Sum of cases over all rows
    pub total_cases: f64,

    /// Timestamp when the document was generated
    pub generated_at: String,
}

impl ChartDocument {
    /// Build the document for `view` from an already computed result
    pub fn from_result(view: View, result: &AggregationResult) -> Self {
        let spec = view.chart();

        Self {
            version: SCHEMA_VERSION.to_string(),
            view,
            title: spec.title.to_string(),
            kind: spec.kind,
            x: spec.x.label().to_string(),
            y: spec.y.label().to_string(),
            color: spec.color.map(|d| d.label().to_string()),
            category_order: axis_order(result, spec.x),
            columns: result.columns(),
            rows: result.rounded().rows,
            total_cases: result.total(),
            generated_at: Utc::now().to_rfc3339(),
        }
    }
}

/// Age bands keep their domain order; any other axis is alphabetical
fn axis_order(result: &AggregationResult, x: Dimension) -> Vec<String> {
    let mut order = result.category_order(x);
    if x != Dimension::AgeGroup {
        order.sort();
    }
    order
}

/// Run the aggregation for `view` and wrap it as a chart document
///
/// **Public** - the dispatcher entry point used by the chart command
pub fn build_chart(view: View, subsets: &Subsets) -> Result<ChartDocument, AggregateError> {
    info!("Building chart '{}'", view);

    let subset = subsets.get(view.subset());
    let result = aggregate(subset, &view.request())?;

    Ok(ChartDocument::from_result(view, &result))
}
