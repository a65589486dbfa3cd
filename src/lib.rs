//! Injury Insights
//!
//! Chart-ready aggregation of AIHW injury statistics, plus the reader
//! that serves the pre-rendered presentation decks.
//!
//! The pipeline is `loader` -> `filter` -> `aggregator`, dispatched per
//! chart by `views` and written out by `output`.

pub mod aggregator;
pub mod cache;
pub mod commands;
pub mod documents;
pub mod filter;
pub mod loader;
pub mod output;
pub mod utils;
pub mod views;
