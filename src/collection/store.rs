//! Collection persistence.
//!
//! The whole collection is serialized as one JSON document: read once at
//! startup, rewritten in full after every change. A missing or unreadable
//! file is never fatal - it loads as an empty collection and the problem
//! goes to the log.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::collection::Collection;

/// Failed to write the collection to disk.
///
/// Reads have no error type on purpose: per the persistence contract a bad
/// read degrades to an empty collection.
#[derive(Debug, thiserror::Error)]
#[error("failed to save collection to {path}: {source}")]
pub struct SaveError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Storage backend for the card collection.
pub trait CollectionStore {
    /// Load the persisted collection, or an empty one if nothing usable
    /// is stored.
    fn load(&self) -> Collection;

    /// Persist the full collection, replacing whatever was stored.
    fn save(&self, collection: &Collection) -> Result<(), SaveError>;
}

/// JSON-file-backed store.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform default location
    /// (`<data dir>/cardforge/collection.json`).
    #[must_use]
    pub fn at_default_path() -> Self {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::new(base.join("cardforge").join("collection.json"))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CollectionStore for JsonFileStore {
    fn load(&self) -> Collection {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no saved collection, starting empty");
                return Collection::new();
            }
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "failed to read saved collection, starting empty"
                );
                return Collection::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(collection) => collection,
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "saved collection is not valid JSON, starting empty"
                );
                Collection::new()
            }
        }
    }

    fn save(&self, collection: &Collection) -> Result<(), SaveError> {
        let wrap = |source: io::Error| SaveError {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(wrap)?;
        }

        // Partial writes must not clobber the only copy of the deck, so
        // write to a sibling temp file and rename over the target.
        let json = serde_json::to_vec_pretty(collection)
            .map_err(|err| wrap(io::Error::new(io::ErrorKind::InvalidData, err)))?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(wrap)?;
        fs::rename(&tmp, &self.path).map_err(wrap)?;

        tracing::debug!(
            path = %self.path.display(),
            cards = collection.len(),
            "collection saved"
        );
        Ok(())
    }
}

/// In-memory store for tests and ephemeral runs.
#[derive(Default)]
pub struct MemoryStore {
    saved: std::cell::RefCell<Option<Collection>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cards in the last saved snapshot, if any.
    #[must_use]
    pub fn saved_len(&self) -> Option<usize> {
        self.saved.borrow().as_ref().map(Collection::len)
    }
}

impl CollectionStore for MemoryStore {
    fn load(&self) -> Collection {
        self.saved.borrow().clone().unwrap_or_default()
    }

    fn save(&self, collection: &Collection) -> Result<(), SaveError> {
        *self.saved.borrow_mut() = Some(collection.clone());
        Ok(())
    }
}
