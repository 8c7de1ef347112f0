//! Shared test utilities for the movie-shelf test suite.
//!
//! Small constructors for movies and catalogs so tests state only the
//! fields they care about.

use crate::types::{Catalog, Movie};

/// A movie with the given name, year, and rating; poster derived from the
/// name, no notes.
pub fn movie(name: &str, year: &str, rating: &str) -> Movie {
    Movie {
        name: name.to_string(),
        year: year.to_string(),
        rating: rating.to_string(),
        poster: format!("https://example.com/{}.jpg", name.to_lowercase().replace(' ', "-")),
        notes: None,
    }
}

/// Catalog from `(name, rating)` pairs; years are synthetic.
pub fn catalog_of(entries: &[(&str, &str)]) -> Catalog {
    entries
        .iter()
        .map(|(name, rating)| {
            let m = movie(name, "2000", rating);
            (m.name.clone(), m)
        })
        .collect()
}

/// A three-movie catalog with distinct years and ratings.
pub fn sample_catalog() -> Catalog {
    [
        movie("Alien", "1979", "8.5"),
        movie("Heat", "1995", "8.3"),
        movie("Waterworld", "1995", "6.2"),
    ]
    .into_iter()
    .map(|m| (m.name.clone(), m))
    .collect()
}
