//! OMDb metadata lookup.
//!
//! The add command does not ask the user for year/rating/poster — it asks
//! OMDb. A lookup is a single blocking GET:
//!
//! ```text
//! GET {base_url}/?t={title}&apikey={key}
//! ```
//!
//! OMDb signals success in-band: a JSON body with `"Response": "True"`
//! carries `Title`, `Year`, `imdbRating`, `Poster`; `"Response": "False"`
//! carries an `Error` message instead. Transport failures and no-match
//! replies are distinct error cases so the controller can word them
//! differently.
//!
//! Body parsing is a pure function ([`parse_reply`]) so tests never touch
//! the network.

use crate::types::Movie;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "http://www.omdbapi.com";

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("could not reach OMDb: {0}")]
    Network(#[from] reqwest::Error),
    #[error("OMDb has no match for '{title}': {message}")]
    NoMatch { title: String, message: String },
    #[error("unexpected OMDb reply: {0}")]
    Malformed(String),
}

/// Raw OMDb reply. Every field except `Response` is optional because the
/// no-match reply carries none of them.
#[derive(Deserialize)]
struct Reply {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Title")]
    title: Option<String>,
    #[serde(rename = "Year")]
    year: Option<String>,
    #[serde(rename = "imdbRating")]
    imdb_rating: Option<String>,
    #[serde(rename = "Poster")]
    poster: Option<String>,
    #[serde(rename = "Error")]
    error: Option<String>,
}

/// Blocking OMDb client holding the HTTP client, base URL, and API key.
pub struct OmdbClient {
    client: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        // Builder failure means a broken TLS/resolver setup; the default
        // client (no timeout) still works there.
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| reqwest::blocking::Client::new());
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Look up a movie by title and return its catalog record.
    pub fn lookup(&self, title: &str) -> Result<Movie, LookupError> {
        let url = format!("{}/", self.base_url);
        let body = self
            .client
            .get(&url)
            .query(&[("t", title), ("apikey", self.api_key.as_str())])
            .send()?
            .text()?;
        parse_reply(title, &body)
    }
}

/// Turn an OMDb reply body into a [`Movie`].
///
/// `Movie::name` is OMDb's canonical `Title`, not the query string, so
/// the catalog key matches what listings display even when the user
/// typed a partial or lowercased title.
pub fn parse_reply(title: &str, body: &str) -> Result<Movie, LookupError> {
    let reply: Reply =
        serde_json::from_str(body).map_err(|e| LookupError::Malformed(e.to_string()))?;

    if !reply.response.eq_ignore_ascii_case("true") {
        return Err(LookupError::NoMatch {
            title: title.to_string(),
            message: reply.error.unwrap_or_else(|| "no details given".into()),
        });
    }

    match (reply.title, reply.year, reply.imdb_rating, reply.poster) {
        (Some(name), Some(year), Some(rating), Some(poster)) => Ok(Movie {
            name,
            year,
            rating,
            poster,
            notes: None,
        }),
        _ => Err(LookupError::Malformed(
            "positive reply missing Title/Year/imdbRating/Poster".into(),
        )),
    }
}
