//! Static site generation.
//!
//! Takes the current catalog and an HTML template and produces a single
//! `index.html`. The template is user-editable and must contain two
//! literal placeholder tokens:
//!
//! - `__TEMPLATE_TITLE__` — replaced with the site title
//! - `__TEMPLATE_MOVIE_GRID__` — replaced with one markup fragment per
//!   movie, in catalog order
//!
//! The per-movie fragments are rendered with [maud](https://maud.lambda.xyz/),
//! so movie names and poster URLs are auto-escaped; the surrounding
//! template is substituted verbatim. A missing template is a deployment
//! error and propagates instead of being swallowed like data errors are.

use crate::storage;
use crate::types::{Catalog, Movie};
use maud::{html, Markup};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const TITLE_TOKEN: &str = "__TEMPLATE_TITLE__";
pub const GRID_TOKEN: &str = "__TEMPLATE_MOVIE_GRID__";

/// Title substituted for [`TITLE_TOKEN`].
pub const SITE_TITLE: &str = "My Movie App";

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("template file not found: {0}")]
    TemplateMissing(PathBuf),
    #[error("template is missing the {0} placeholder")]
    TokenMissing(&'static str),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Render the site from `catalog` into `output_path`.
///
/// The output file is replaced atomically, so a crash mid-generation
/// never leaves a half-written site behind.
pub fn generate(
    catalog: &Catalog,
    template_path: &Path,
    output_path: &Path,
) -> Result<(), SiteError> {
    let template = match std::fs::read_to_string(template_path) {
        Ok(template) => template,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(SiteError::TemplateMissing(template_path.to_path_buf()))
        }
        Err(e) => return Err(e.into()),
    };
    for token in [TITLE_TOKEN, GRID_TOKEN] {
        if !template.contains(token) {
            return Err(SiteError::TokenMissing(token));
        }
    }

    let page = template
        .replace(TITLE_TOKEN, SITE_TITLE)
        .replace(GRID_TOKEN, &render_grid(catalog).into_string());
    storage::write_atomic(output_path, page.as_bytes())?;
    Ok(())
}

/// Concatenated movie fragments, one per catalog entry in catalog order.
fn render_grid(catalog: &Catalog) -> Markup {
    html! {
        @for movie in catalog.values() {
            (movie_fragment(movie))
        }
    }
}

/// One grid cell: poster image plus name and year.
fn movie_fragment(movie: &Movie) -> Markup {
    html! {
        div.movie {
            img.movie-poster src=(movie.poster) alt=(movie.name);
            div.movie-details {
                div.movie-name { (movie.name) }
                div.movie-year { (movie.year) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::sample_catalog;
    use tempfile::TempDir;

    const TEMPLATE: &str = "<html><head><title>__TEMPLATE_TITLE__</title></head>\
                            <body><ol class=\"movie-grid\">__TEMPLATE_MOVIE_GRID__</ol></body></html>";

    fn write_template(tmp: &TempDir) -> PathBuf {
        let path = tmp.path().join("index_template.html");
        std::fs::write(&path, TEMPLATE).unwrap();
        path
    }

    #[test]
    fn output_has_one_fragment_per_movie_and_no_leftover_tokens() {
        let tmp = TempDir::new().unwrap();
        let template = write_template(&tmp);
        let output = tmp.path().join("index.html");
        let catalog = sample_catalog();

        generate(&catalog, &template, &output).unwrap();

        let page = std::fs::read_to_string(&output).unwrap();
        assert_eq!(page.matches("class=\"movie\"").count(), catalog.len());
        assert!(!page.contains(TITLE_TOKEN));
        assert!(!page.contains(GRID_TOKEN));
        assert!(page.contains(SITE_TITLE));
        for movie in catalog.values() {
            assert!(page.contains(&movie.name));
            assert!(page.contains(&movie.year));
        }
    }

    #[test]
    fn empty_catalog_still_generates_a_page() {
        let tmp = TempDir::new().unwrap();
        let template = write_template(&tmp);
        let output = tmp.path().join("index.html");
        generate(&Catalog::new(), &template, &output).unwrap();
        let page = std::fs::read_to_string(&output).unwrap();
        assert!(!page.contains(GRID_TOKEN));
        assert_eq!(page.matches("class=\"movie\"").count(), 0);
    }

    #[test]
    fn missing_template_is_a_distinct_error() {
        let tmp = TempDir::new().unwrap();
        let err = generate(
            &sample_catalog(),
            &tmp.path().join("nope.html"),
            &tmp.path().join("index.html"),
        )
        .unwrap_err();
        assert!(matches!(err, SiteError::TemplateMissing(_)));
    }

    #[test]
    fn template_without_tokens_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.html");
        std::fs::write(&path, "<html>__TEMPLATE_TITLE__</html>").unwrap();
        let err = generate(&sample_catalog(), &path, &tmp.path().join("index.html")).unwrap_err();
        assert!(matches!(err, SiteError::TokenMissing(token) if token == GRID_TOKEN));
    }

    #[test]
    fn movie_names_are_escaped_in_markup() {
        let mut catalog = Catalog::new();
        let mut movie = crate::test_helpers::movie("Fast & Furious", "2001", "6.8");
        movie.poster = "https://example.com/ff.jpg?a=1&b=2".into();
        catalog.insert(movie.name.clone(), movie);

        let grid = render_grid(&catalog).into_string();
        assert!(grid.contains("Fast &amp; Furious"));
        assert!(!grid.contains("Fast & Furious<"));
    }

    #[test]
    fn regenerating_overwrites_previous_output() {
        let tmp = TempDir::new().unwrap();
        let template = write_template(&tmp);
        let output = tmp.path().join("index.html");
        generate(&sample_catalog(), &template, &output).unwrap();
        generate(&Catalog::new(), &template, &output).unwrap();
        let page = std::fs::read_to_string(&output).unwrap();
        assert_eq!(page.matches("class=\"movie\"").count(), 0);
    }
}
