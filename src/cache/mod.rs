//! Memoization of loader output keyed by source identity.

pub mod subset_cache;

pub use subset_cache::{SourceKey, SubsetCache};
