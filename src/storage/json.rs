//! JSON backend — the catalog as one pretty-printed document.
//!
//! The file maps movie name to a movie object:
//!
//! ```json
//! {
//!     "Alien": {
//!         "name": "Alien",
//!         "year": "1979",
//!         "rating": "8.5",
//!         "poster": "https://...",
//!         "notes": "rewatch"
//!     }
//! }
//! ```
//!
//! `notes` is omitted for movies that have none. Indented output keeps the
//! file readable and diffable by hand.

use super::{write_atomic, CatalogStore, StorageError};
use crate::types::Catalog;
use std::io::ErrorKind;
use std::path::PathBuf;

pub struct JsonStorage {
    file_path: PathBuf,
}

impl JsonStorage {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }
}

impl CatalogStore for JsonStorage {
    fn list(&self) -> Result<Catalog, StorageError> {
        let content = match std::fs::read_to_string(&self.file_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Catalog::new()),
            Err(e) => return Err(e.into()),
        };
        serde_json::from_str(&content).map_err(|e| StorageError::Malformed {
            path: self.file_path.clone(),
            message: e.to_string(),
        })
    }

    fn save(&self, catalog: &Catalog) -> Result<(), StorageError> {
        // Serializing a BTreeMap of plain structs cannot fail; treat an
        // error as malformed anyway rather than panicking.
        let json =
            serde_json::to_string_pretty(catalog).map_err(|e| StorageError::Malformed {
                path: self.file_path.clone(),
                message: e.to_string(),
            })?;
        write_atomic(&self.file_path, json.as_bytes())?;
        Ok(())
    }
}
