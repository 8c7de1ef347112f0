//! Integration test driving both storage backends through the same
//! operation sequence and asserting they end up with equal catalogs.
//!
//! The backends serialize differently but must agree on every observable
//! behavior: add/overwrite, delete, update, not-found reporting, and the
//! empty state for a missing file.

use movie_shelf::storage::{CatalogStore, CsvStorage, JsonStorage, StorageError};
use movie_shelf::types::Movie;
use tempfile::TempDir;

fn movie(name: &str, year: &str, rating: &str) -> Movie {
    Movie {
        name: name.to_string(),
        year: year.to_string(),
        rating: rating.to_string(),
        poster: format!("https://example.com/{name}.jpg"),
        notes: None,
    }
}

fn backends(tmp: &TempDir) -> Vec<Box<dyn CatalogStore>> {
    vec![
        Box::new(JsonStorage::new(tmp.path().join("movies.json"))),
        Box::new(CsvStorage::new(tmp.path().join("movies.csv"))),
    ]
}

/// One mixed sequence of mutations, applied to a fresh store.
fn exercise(store: &dyn CatalogStore) {
    store.add(movie("Alien", "1979", "8.5")).unwrap();
    store.add(movie("Heat", "1995", "8.3")).unwrap();
    store.add(movie("Waterworld", "1995", "6.2")).unwrap();
    // Overwrite Alien with a corrected rating.
    store.add(movie("Alien", "1979", "8.6")).unwrap();
    store.update("Heat", "rewatch the diner scene").unwrap();
    store.delete("Waterworld").unwrap();
}

#[test]
fn both_backends_agree_after_the_same_operations() {
    let tmp = TempDir::new().unwrap();
    let stores = backends(&tmp);
    for store in &stores {
        exercise(store.as_ref());
    }

    let json_catalog = stores[0].list().unwrap();
    let csv_catalog = stores[1].list().unwrap();
    assert_eq!(json_catalog, csv_catalog);

    assert_eq!(json_catalog.len(), 2);
    assert_eq!(json_catalog["Alien"].rating, "8.6");
    assert_eq!(
        json_catalog["Heat"].notes.as_deref(),
        Some("rewatch the diner scene")
    );
}

#[test]
fn both_backends_report_not_found_the_same_way() {
    let tmp = TempDir::new().unwrap();
    for store in backends(&tmp) {
        let err = store.delete("Nonexistent").unwrap_err();
        assert!(matches!(err, StorageError::NotFound(name) if name == "Nonexistent"));
        let err = store.update("Nonexistent", "notes").unwrap_err();
        assert!(matches!(err, StorageError::NotFound(_)));
    }
}

#[test]
fn both_backends_read_a_missing_file_as_empty() {
    let tmp = TempDir::new().unwrap();
    for store in backends(&tmp) {
        assert!(store.list().unwrap().is_empty());
    }
}

#[test]
fn round_trip_preserves_every_field_on_both_backends() {
    let tmp = TempDir::new().unwrap();
    for store in backends(&tmp) {
        let mut tricky = movie("Crouching Tiger, Hidden Dragon", "2000", "7.9");
        tricky.notes = Some("subtitles, not dubbed".to_string());
        store.add(tricky.clone()).unwrap();
        let catalog = store.list().unwrap();
        assert_eq!(catalog[&tricky.name], tricky);
    }
}
