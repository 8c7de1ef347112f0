//! Catalog queries: rating statistics, sorting, search, random pick.
//!
//! Everything here is a pure function over a [`Catalog`] except
//! [`random_pick`], which draws from the thread RNG. Ratings are parsed
//! as decimals on the fly; entries whose rating does not parse (OMDb
//! returns `"N/A"` for some titles) are left out of the numeric
//! statistics but still appear in listings and search.

use crate::types::{Catalog, Movie};
use rand::Rng;

/// Aggregate rating statistics over a catalog.
#[derive(Debug, PartialEq)]
pub struct RatingStats {
    pub mean: f64,
    pub median: f64,
    /// All names tied at the maximum rating, catalog order.
    pub best: Vec<String>,
    /// All names tied at the minimum rating, catalog order.
    pub worst: Vec<String>,
}

/// Compute mean/median/best/worst. `None` when no entry has a parseable
/// rating.
pub fn compute(catalog: &Catalog) -> Option<RatingStats> {
    let mut ratings: Vec<f64> = catalog
        .values()
        .filter_map(Movie::rating_value)
        .collect();
    if ratings.is_empty() {
        return None;
    }
    ratings.sort_by(|a, b| a.total_cmp(b));

    let mean = ratings.iter().sum::<f64>() / ratings.len() as f64;
    let n = ratings.len();
    let median = if n % 2 == 0 {
        (ratings[n / 2 - 1] + ratings[n / 2]) / 2.0
    } else {
        ratings[n / 2]
    };

    let max = ratings[n - 1];
    let min = ratings[0];
    let tied_at = |bound: f64| -> Vec<String> {
        catalog
            .iter()
            .filter(|(_, m)| m.rating_value() == Some(bound))
            .map(|(name, _)| name.clone())
            .collect()
    };

    Some(RatingStats {
        mean,
        median,
        best: tied_at(max),
        worst: tied_at(min),
    })
}

/// Entries in descending rating order. Unparseable ratings sort last;
/// ties keep catalog order (stable sort).
pub fn sorted_by_rating(catalog: &Catalog) -> Vec<(&String, &Movie)> {
    let mut entries: Vec<(&String, &Movie)> = catalog.iter().collect();
    entries.sort_by(|(_, a), (_, b)| {
        let a = a.rating_value().unwrap_or(f64::NEG_INFINITY);
        let b = b.rating_value().unwrap_or(f64::NEG_INFINITY);
        b.total_cmp(&a)
    });
    entries
}

/// Case-insensitive substring search over movie names.
pub fn search<'a>(catalog: &'a Catalog, query: &str) -> Vec<(&'a String, &'a Movie)> {
    let query = query.to_lowercase();
    catalog
        .iter()
        .filter(|(name, _)| name.to_lowercase().contains(&query))
        .collect()
}

/// Uniformly random catalog entry, `None` for an empty catalog.
pub fn random_pick(catalog: &Catalog) -> Option<(&String, &Movie)> {
    if catalog.is_empty() {
        return None;
    }
    let index = rand::rng().random_range(0..catalog.len());
    catalog.iter().nth(index)
}
