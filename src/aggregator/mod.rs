//! Aggregation of subsets into chart-ready summaries.
//!
//! This module transforms a subset into:
//! - Group sums keyed by one or two dimensions
//! - Within-group or grand-total percentages
//! - Rows ordered by the fixed age-band order when an age key is present

pub mod age_order;
pub mod group;
pub mod request;
pub mod result;

// Re-export main types and functions
pub use age_order::{age_rank, UnknownAgePolicy, AGE_ORDER};
pub use group::aggregate;
pub use request::{Dimension, GroupingRequest, Mode};
pub use result::{round2, AggregationResult, AggregationRow};
