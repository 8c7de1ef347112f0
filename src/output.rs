//! CLI output formatting for catalog commands.
//!
//! Each display has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! # Output Format
//!
//! ## Listing
//!
//! ```text
//! 3 movies in the catalog
//! Alien (1979), rated 8.5
//! Heat (1995), rated 8.3 — rewatch with the director's commentary
//! ```
//!
//! ## Stats
//!
//! ```text
//! Average rating: 7.00
//! Median rating: 7.00
//! Best: Alien (8.5)
//! Worst: Waterworld (6.2)
//! ```

use crate::stats::RatingStats;
use crate::types::{Catalog, Movie};

/// One listing line: name, year, rating, and notes when present.
fn movie_line(name: &str, movie: &Movie) -> String {
    match &movie.notes {
        Some(notes) => format!("{} ({}), rated {} — {}", name, movie.year, movie.rating, notes),
        None => format!("{} ({}), rated {}", name, movie.year, movie.rating),
    }
}

/// Full catalog listing with a count header.
pub fn format_catalog(catalog: &Catalog) -> Vec<String> {
    if catalog.is_empty() {
        return vec!["The catalog is empty".to_string()];
    }
    let header = match catalog.len() {
        1 => "1 movie in the catalog".to_string(),
        n => format!("{} movies in the catalog", n),
    };
    std::iter::once(header)
        .chain(catalog.iter().map(|(name, movie)| movie_line(name, movie)))
        .collect()
}

/// Rating statistics block.
pub fn format_stats(stats: &RatingStats, catalog: &Catalog) -> Vec<String> {
    let rated = |name: &String| -> String {
        let rating = catalog.get(name).map(|m| m.rating.as_str()).unwrap_or("?");
        format!("{} ({})", name, rating)
    };
    let mut lines = vec![
        format!("Average rating: {:.2}", stats.mean),
        format!("Median rating: {:.2}", stats.median),
    ];
    for name in &stats.best {
        lines.push(format!("Best: {}", rated(name)));
    }
    for name in &stats.worst {
        lines.push(format!("Worst: {}", rated(name)));
    }
    lines
}

/// Search results, or a miss message.
pub fn format_search_results(results: &[(&String, &Movie)]) -> Vec<String> {
    if results.is_empty() {
        return vec!["No movies found".to_string()];
    }
    results
        .iter()
        .map(|(name, movie)| format!("{}, {}", name, movie.rating))
        .collect()
}

/// Rating-descending listing.
pub fn format_sorted(entries: &[(&String, &Movie)]) -> Vec<String> {
    entries
        .iter()
        .map(|(name, movie)| format!("{}, {}", name, movie.rating))
        .collect()
}

pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}
