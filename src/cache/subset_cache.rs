//! Explicit memoization of loaded subsets.
//!
//! Entries are keyed by a hash of the source identity (canonical path,
//! length and modification time), so editing the file produces a new key.
//! Entries are write-once: the first writer wins and a concurrent loser's
//! result is discarded.

use crate::loader::{load_subsets, Subsets};
use crate::utils::error::DataLoadError;
use log::debug;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::SystemTime;

/// Hash of a source file's identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceKey(u64);

impl SourceKey {
    /// Compute the key for the file at `path` as it is right now
    pub fn for_path(path: &Path) -> Result<Self, DataLoadError> {
        let io_error = |source| DataLoadError::Io {
            path: path.to_path_buf(),
            source,
        };

        let canonical: PathBuf = path.canonicalize().map_err(io_error)?;
        let metadata = std::fs::metadata(&canonical).map_err(io_error)?;
        let modified = metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH);

        let mut hasher = DefaultHasher::new();
        canonical.hash(&mut hasher);
        metadata.len().hash(&mut hasher);
        modified.hash(&mut hasher);

        Ok(Self(hasher.finish()))
    }
}

/// Cache of loaded subsets with caller-controlled invalidation
#[derive(Debug, Default)]
pub struct SubsetCache {
    entries: RwLock<HashMap<SourceKey, Arc<Subsets>>>,
}

impl SubsetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached subsets for `path`, loading them on a miss
    ///
    /// Loading runs outside the lock. Errors are returned to the caller and
    /// never cached.
    pub fn get_or_load(&self, path: impl AsRef<Path>) -> Result<Arc<Subsets>, DataLoadError> {
        let path = path.as_ref();
        let key = SourceKey::for_path(path)?;

        if let Some(hit) = self.read_entries().get(&key) {
            debug!("Subset cache hit for {}", path.display());
            return Ok(Arc::clone(hit));
        }

        debug!("Subset cache miss for {}", path.display());
        let loaded = Arc::new(load_subsets(path)?);

        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let published = entries.entry(key).or_insert(loaded);

        Ok(Arc::clone(published))
    }

    /// Drop the entry for the file at `path` as it is right now
    ///
    /// Returns whether an entry was removed.
    pub fn invalidate(&self, path: impl AsRef<Path>) -> Result<bool, DataLoadError> {
        let key = SourceKey::for_path(path.as_ref())?;
        let removed = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&key)
            .is_some();
        Ok(removed)
    }

    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub fn len(&self) -> usize {
        self.read_entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_entries().is_empty()
    }

    fn read_entries(&self) -> std::sync::RwLockReadGuard<'_, HashMap<SourceKey, Arc<Subsets>>> {
        // Entries are only ever inserted whole, so a poisoned lock still
        // holds consistent data.
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }
}
