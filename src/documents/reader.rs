//! Static document reader.
//!
//! Serves pre-rendered markup by name from a root directory. A missing
//! document is reported to the caller, who decides how to show it; one
//! missing slide never stops the rest of a deck.

use super::deck::Deck;
use crate::utils::error::DocumentNotFoundError;
use log::{debug, warn};
use serde::Serialize;
use std::path::{Component, Path, PathBuf};

/// Reads documents relative to a fixed root
#[derive(Debug, Clone)]
pub struct DocumentReader {
    root: PathBuf,
}

/// Availability of one referenced document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentStatus {
    pub slide: usize,
    pub name: &'static str,
    pub available: bool,
}

/// Availability of every document in a deck
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeckReport {
    pub documents: Vec<DocumentStatus>,
}

impl DeckReport {
    pub fn missing(&self) -> impl Iterator<Item = &DocumentStatus> {
        self.documents.iter().filter(|d| !d.available)
    }

    pub fn available_count(&self) -> usize {
        self.documents.iter().filter(|d| d.available).count()
    }

    pub fn is_complete(&self) -> bool {
        self.missing().next().is_none()
    }
}

impl DocumentReader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a name to a path under the root
    ///
    /// Absolute names and names climbing out with `..` resolve to `None`.
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        let relative = Path::new(name);
        let confined = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));

        if name.is_empty() || !confined {
            return None;
        }

        Some(self.root.join(relative))
    }

    fn not_found(&self, name: &str) -> DocumentNotFoundError {
        DocumentNotFoundError {
            name: name.to_string(),
            path: self.root.join(name),
        }
    }

    pub fn exists(&self, name: &str) -> bool {
        self.resolve(name).is_some_and(|p| p.is_file())
    }

    /// Read a document's markup
    ///
    /// # Errors
    /// * `DocumentNotFoundError` - the name escapes the root, or the file is
    ///   absent or unreadable
    pub fn read(&self, name: &str) -> Result<String, DocumentNotFoundError> {
        let path = self.resolve(name).ok_or_else(|| self.not_found(name))?;

        debug!("Reading document: {}", path.display());

        std::fs::read_to_string(&path).map_err(|e| {
            warn!("Document {} unavailable: {}", path.display(), e);
            self.not_found(name)
        })
    }

    /// Check every document a deck references
    pub fn check_deck(&self, deck: &Deck) -> DeckReport {
        let documents = deck
            .slides
            .iter()
            .enumerate()
            .flat_map(|(slide, s)| {
                s.documents.iter().copied().map(move |name| DocumentStatus {
                    slide,
                    name,
                    available: self.exists(name),
                })
            })
            .collect();

        DeckReport { documents }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_existing_document() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("html")).unwrap();
        std::fs::write(dir.path().join("html/chart.html"), "<div>chart</div>").unwrap();

        let reader = DocumentReader::new(dir.path());
        assert_eq!(reader.read("html/chart.html").unwrap(), "<div>chart</div>");
        assert!(reader.exists("html/chart.html"));
    }

    #[test]
    fn test_missing_document_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let reader = DocumentReader::new(dir.path());

        let err = reader.read("html/absent.html").unwrap_err();
        assert_eq!(err.name, "html/absent.html");
        assert_eq!(err.path, dir.path().join("html/absent.html"));
    }

    #[test]
    fn test_names_cannot_escape_root() {
        let dir = tempfile::tempdir().unwrap();
        let inner = dir.path().join("inner");
        std::fs::create_dir_all(&inner).unwrap();
        std::fs::write(dir.path().join("secret.html"), "secret").unwrap();

        let reader = DocumentReader::new(&inner);
        assert!(reader.read("../secret.html").is_err());
        assert!(reader.read("").is_err());
        assert!(!reader.exists("../secret.html"));
    }
}
