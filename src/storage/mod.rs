//! Catalog persistence — one contract, two flat-file backends.
//!
//! | Backend | File format |
//! |---|---|
//! | [`JsonStorage`] | one pretty-printed JSON document, name → movie object |
//! | [`CsvStorage`] | header row + one CSV row per movie |
//!
//! The module is split into:
//! - **Contract**: [`CatalogStore`] trait + [`StorageError`]
//! - **Backends**: [`json`] and [`csv`], each only implementing load/save
//!
//! ## One policy, shared by construction
//!
//! Only `list` and `save` are backend-specific. The mutating operations
//! (`add`, `delete`, `update`) are provided methods on the trait built
//! from that pair, so both backends behave identically:
//!
//! - `add` overwrites an existing entry under the same name
//! - `delete` and `update` on an absent name return [`StorageError::NotFound`]
//! - a missing backing file reads as an empty catalog, never an error
//! - unreadable file content is [`StorageError::Malformed`], never
//!   silently treated as empty
//!
//! ## Crash safety
//!
//! Every mutation rewrites the whole backing file. `write_atomic` stages
//! the new content in a temp file in the target's directory and renames it
//! over the old file, so a crash mid-write leaves the previous catalog
//! intact.
//!
//! ## Not covered
//!
//! Single process, single user. There is no file locking: two processes
//! mutating the same catalog file can interleave read-modify-write cycles
//! and lose updates.

pub mod csv;
pub mod json;

// self:: disambiguates the child module from the csv crate itself.
pub use self::csv::CsvStorage;
pub use self::json::JsonStorage;

use crate::types::{Catalog, Movie};
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("catalog file is malformed: {path}: {message}")]
    Malformed { path: PathBuf, message: String },
    #[error("movie '{0}' not found in the catalog")]
    NotFound(String),
}

/// The storage contract implemented by both flat-file backends.
///
/// Implementors supply `list` and `save`; the mutating operations are
/// derived from them and must not be overridden, so duplicate/missing-key
/// policy stays uniform across backends.
pub trait CatalogStore {
    /// Load the current catalog. A missing backing file is an empty
    /// catalog; anything else unreadable is [`StorageError::Malformed`].
    fn list(&self) -> Result<Catalog, StorageError>;

    /// Rewrite the entire backing file from `catalog`, atomically.
    fn save(&self, catalog: &Catalog) -> Result<(), StorageError>;

    /// Insert `movie` under its name, replacing any existing entry.
    fn add(&self, movie: Movie) -> Result<(), StorageError> {
        let mut catalog = self.list()?;
        catalog.insert(movie.name.clone(), movie);
        self.save(&catalog)
    }

    /// Remove the entry for `name`, returning the removed movie.
    fn delete(&self, name: &str) -> Result<Movie, StorageError> {
        let mut catalog = self.list()?;
        let removed = catalog
            .remove(name)
            .ok_or_else(|| StorageError::NotFound(name.to_string()))?;
        self.save(&catalog)?;
        Ok(removed)
    }

    /// Set `notes` on the entry for `name`, leaving other fields untouched.
    fn update(&self, name: &str, notes: &str) -> Result<(), StorageError> {
        let mut catalog = self.list()?;
        let movie = catalog
            .get_mut(name)
            .ok_or_else(|| StorageError::NotFound(name.to_string()))?;
        movie.notes = Some(notes.to_string());
        self.save(&catalog)
    }
}

/// Write `content` to `path` via a temp file in the same directory plus a
/// rename. The temp file must live on the same filesystem as the target
/// for the rename to be atomic, hence `new_in` rather than the system
/// temp dir.
pub(crate) fn write_atomic(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let mut tmp = match dir {
        Some(dir) => tempfile::NamedTempFile::new_in(dir)?,
        None => tempfile::NamedTempFile::new_in(".")?,
    };
    tmp.write_all(content)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
