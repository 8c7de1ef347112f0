//! Shared types used across storage backends and the site generator.
//!
//! These types are serialized to the backing file (JSON document or CSV
//! rows) and must be identical across both backends.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single movie's stored attributes.
///
/// `year` and `rating` stay strings: they are persisted exactly as OMDb
/// returns them (`"1994"`, `"9.3"`, occasionally `"N/A"`), and only the
/// statistics commands parse `rating` as a decimal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Title — also the catalog key.
    pub name: String,
    /// Release year as reported by OMDb (may be a range for series).
    pub year: String,
    /// Decimal-formatted rating string, e.g. `"8.6"`.
    pub rating: String,
    /// Poster image URL.
    pub poster: String,
    /// Free-form user notes, set by the update command.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// The full keyed collection of movies.
///
/// A BTreeMap rather than a HashMap: nothing requires an ordering, but
/// deterministic iteration keeps listings, CSV rows, and the generated
/// site stable across runs.
pub type Catalog = BTreeMap<String, Movie>;

impl Movie {
    /// Rating parsed as a decimal, `None` for unparseable values like `"N/A"`.
    pub fn rating_value(&self) -> Option<f64> {
        self.rating.trim().parse().ok()
    }
}
