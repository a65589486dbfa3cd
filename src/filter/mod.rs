//! Sentinel-row filtering applied to every subset.

pub mod sentinel;

pub use sentinel::{is_sentinel, retain_observations};
