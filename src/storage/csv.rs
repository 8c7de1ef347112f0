//! CSV backend — the catalog as header + one row per movie.
//!
//! The column set is fixed at `name,year,rating,poster,notes` for every
//! operation, so no field is ever dropped by a rewrite. An empty `notes`
//! cell reads back as no notes. The `csv` crate quotes embedded commas
//! and quotes, so titles like `Crouching Tiger, Hidden Dragon` survive
//! the round trip.

use super::{write_atomic, CatalogStore, StorageError};
use crate::types::{Catalog, Movie};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::PathBuf;

const HEADER: [&str; 5] = ["name", "year", "rating", "poster", "notes"];

/// On-disk row shape. Kept separate from [`Movie`] so the column set is
/// fixed here and `notes` maps through a plain string cell instead of the
/// JSON backend's omit-when-absent convention.
#[derive(Serialize, Deserialize)]
struct Row {
    name: String,
    year: String,
    rating: String,
    poster: String,
    notes: String,
}

impl From<&Movie> for Row {
    fn from(movie: &Movie) -> Self {
        Self {
            name: movie.name.clone(),
            year: movie.year.clone(),
            rating: movie.rating.clone(),
            poster: movie.poster.clone(),
            notes: movie.notes.clone().unwrap_or_default(),
        }
    }
}

impl From<Row> for Movie {
    fn from(row: Row) -> Self {
        Self {
            name: row.name,
            year: row.year,
            rating: row.rating,
            poster: row.poster,
            notes: Some(row.notes).filter(|n| !n.is_empty()),
        }
    }
}

pub struct CsvStorage {
    file_path: PathBuf,
}

impl CsvStorage {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }
}

impl CatalogStore for CsvStorage {
    fn list(&self) -> Result<Catalog, StorageError> {
        let content = match std::fs::read_to_string(&self.file_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Catalog::new()),
            Err(e) => return Err(e.into()),
        };
        let mut reader = csv::Reader::from_reader(content.as_bytes());
        let mut catalog = Catalog::new();
        for result in reader.deserialize::<Row>() {
            let movie: Movie = result
                .map_err(|e| StorageError::Malformed {
                    path: self.file_path.clone(),
                    message: e.to_string(),
                })?
                .into();
            catalog.insert(movie.name.clone(), movie);
        }
        Ok(catalog)
    }

    fn save(&self, catalog: &Catalog) -> Result<(), StorageError> {
        // Header written explicitly so an empty catalog still produces a
        // well-formed file with the fixed schema.
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        let to_storage_err = |e: csv::Error| StorageError::Malformed {
            path: self.file_path.clone(),
            message: e.to_string(),
        };
        writer.write_record(HEADER).map_err(to_storage_err)?;
        for movie in catalog.values() {
            writer.serialize(Row::from(movie)).map_err(to_storage_err)?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| StorageError::Io(e.into_error()))?;
        write_atomic(&self.file_path, &bytes)?;
        Ok(())
    }
}
