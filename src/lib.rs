//! # Movie Shelf
//!
//! A single-user movie catalog for the terminal. Movies live in one flat
//! file (JSON or CSV, your pick), metadata comes from OMDb, and the whole
//! catalog can be rendered into a static HTML page.
//!
//! # Architecture
//!
//! ```text
//! CLI / menu  →  MovieApp (controller)  →  CatalogStore  →  flat file
//!                      │                        ↑
//!                      ├── OmdbClient (add)     │
//!                      └── website::generate ───┘
//! ```
//!
//! The controller never touches a file format directly: both backends sit
//! behind the [`storage::CatalogStore`] trait, and the mutating operations
//! are provided methods on that trait, so duplicate-add and missing-key
//! behavior cannot drift between backends.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | `Movie` record and `Catalog` map, serialized by both backends |
//! | [`storage`] | `CatalogStore` contract, atomic writes, JSON and CSV backends |
//! | [`omdb`] | OMDb metadata lookup over blocking HTTP |
//! | [`stats`] | rating statistics, sorting, search, random pick |
//! | [`website`] | template-token substitution into a static `index.html` |
//! | [`output`] | pure `format_*` display functions + `print_*` wrappers |
//! | [`config`] | optional `movie-shelf.toml`, flag/file/default layering |
//! | [`app`] | the interactive menu controller and command error boundary |
//!
//! # Design Decisions
//!
//! ## Whole-file rewrites, atomically
//!
//! The catalog is small by design, so every mutation reloads the file,
//! mutates the map, and rewrites everything. What the rewrite must never
//! do is truncate the file and then crash: all writes go through a temp
//! file in the target directory followed by a rename.
//!
//! ## Maud for the markup, tokens for the template
//!
//! The page skeleton is a user-editable template file with two literal
//! placeholder tokens — users can restyle the site without recompiling.
//! The per-movie fragments injected into it are generated with
//! [Maud](https://maud.lambda.xyz/), so titles and URLs are escaped by
//! construction.
//!
//! ## Absence is data, corruption is not
//!
//! A missing catalog file reads as an empty catalog — first run needs no
//! setup step. A file that exists but does not parse is an error that
//! stops the command; silently treating it as empty would rewrite the
//! file and destroy whatever the user had.
//!
//! # Known Limitations
//!
//! Single process, single user. Backend operations are unlocked
//! read-modify-write cycles; two processes sharing a catalog file can
//! lose updates. Fine for a personal movie list, by explicit scope.

pub mod app;
pub mod config;
pub mod omdb;
pub mod output;
pub mod stats;
pub mod storage;
pub mod types;
pub mod website;

#[cfg(test)]
pub(crate) mod test_helpers;
