//! The application controller: the interactive menu and the command
//! implementations behind it.
//!
//! [`MovieApp`] owns a storage backend behind the [`CatalogStore`] trait,
//! an OMDb client, and the site paths. Each command is a small method so
//! the one-shot CLI subcommands and the interactive menu dispatch to the
//! same code.
//!
//! ## Error boundary
//!
//! The menu loop is where command failures stop propagating: a failed
//! lookup, a missing movie, or a malformed catalog file is printed and
//! the menu comes back. Two things do escape the loop:
//!
//! - a missing HTML template (deployment error, not a data error)
//! - prompt/terminal IO failures (the loop cannot continue without stdin)

use crate::config::Settings;
use crate::omdb::{LookupError, OmdbClient};
use crate::output;
use crate::stats;
use crate::storage::{CatalogStore, StorageError};
use crate::website::{self, SiteError};
use dialoguer::{Input, Select};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Lookup(#[from] LookupError),
    #[error(transparent)]
    Site(#[from] SiteError),
    #[error("prompt failed: {0}")]
    Prompt(#[from] std::io::Error),
}

/// Menu entries, in the 0–9 order the selection indexes map to.
const MENU: &[&str] = &[
    "Exit",
    "List movies",
    "Add movie",
    "Delete movie",
    "Update movie",
    "Stats",
    "Random movie",
    "Search movie",
    "Movies sorted by rating",
    "Generate website",
];

pub struct MovieApp {
    store: Box<dyn CatalogStore>,
    omdb: OmdbClient,
    template_path: PathBuf,
    output_path: PathBuf,
}

impl MovieApp {
    pub fn new(store: Box<dyn CatalogStore>, omdb: OmdbClient, settings: &Settings) -> Self {
        Self {
            store,
            omdb,
            template_path: settings.template.clone(),
            output_path: settings.output.clone(),
        }
    }

    /// Run the interactive menu until the user exits.
    pub fn run(&self) -> Result<(), AppError> {
        loop {
            println!();
            println!("******** My Movies Database ********");
            let choice = Select::new()
                .with_prompt("Menu")
                .items(MENU)
                .default(0)
                .interact()?;

            let result = match choice {
                0 => {
                    println!("Bye!");
                    return Ok(());
                }
                1 => self.list(),
                2 => {
                    let title: String =
                        Input::new().with_prompt("Enter movie title").interact_text()?;
                    self.add(&title)
                }
                3 => {
                    let name: String = Input::new()
                        .with_prompt("Enter movie title to delete")
                        .interact_text()?;
                    self.delete(&name)
                }
                4 => {
                    let name: String =
                        Input::new().with_prompt("Enter movie title").interact_text()?;
                    let notes: String = Input::new()
                        .with_prompt("Enter new movie notes")
                        .interact_text()?;
                    self.update(&name, &notes)
                }
                5 => self.stats(),
                6 => self.random(),
                7 => {
                    let query: String = Input::new()
                        .with_prompt("Enter part of movie name")
                        .interact_text()?;
                    self.search(&query)
                }
                8 => self.sorted(),
                9 => self.website(),
                _ => unreachable!("menu has exactly {} entries", MENU.len()),
            };

            if let Err(e) = result {
                // An absent template means the install is broken, not the
                // data; let it take the process down.
                if matches!(e, AppError::Site(SiteError::TemplateMissing(_))) {
                    return Err(e);
                }
                println!("{e}");
            }
        }
    }

    pub fn list(&self) -> Result<(), AppError> {
        let catalog = self.store.list()?;
        output::print_lines(&output::format_catalog(&catalog));
        Ok(())
    }

    /// Fetch metadata for `title` from OMDb and add the result.
    pub fn add(&self, title: &str) -> Result<(), AppError> {
        let movie = self.omdb.lookup(title)?;
        let name = movie.name.clone();
        self.store.add(movie)?;
        println!("Movie '{name}' successfully added!");
        Ok(())
    }

    pub fn delete(&self, name: &str) -> Result<(), AppError> {
        let removed = self.store.delete(name)?;
        println!("Movie '{}' deleted successfully!", removed.name);
        Ok(())
    }

    pub fn update(&self, name: &str, notes: &str) -> Result<(), AppError> {
        self.store.update(name, notes)?;
        println!("Notes for movie '{name}' updated.");
        Ok(())
    }

    pub fn stats(&self) -> Result<(), AppError> {
        let catalog = self.store.list()?;
        match stats::compute(&catalog) {
            Some(stats) => output::print_lines(&output::format_stats(&stats, &catalog)),
            None => println!("No rated movies in the catalog yet"),
        }
        Ok(())
    }

    pub fn random(&self) -> Result<(), AppError> {
        let catalog = self.store.list()?;
        match stats::random_pick(&catalog) {
            Some((name, movie)) => {
                println!("Your movie for tonight: {}. It's rated {}.", name, movie.rating)
            }
            None => println!("The catalog is empty"),
        }
        Ok(())
    }

    pub fn search(&self, query: &str) -> Result<(), AppError> {
        let catalog = self.store.list()?;
        output::print_lines(&output::format_search_results(&stats::search(
            &catalog, query,
        )));
        Ok(())
    }

    pub fn sorted(&self) -> Result<(), AppError> {
        let catalog = self.store.list()?;
        output::print_lines(&output::format_sorted(&stats::sorted_by_rating(&catalog)));
        Ok(())
    }

    pub fn website(&self) -> Result<(), AppError> {
        let catalog = self.store.list()?;
        website::generate(&catalog, &self.template_path, &self.output_path)?;
        println!("Website was generated successfully.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::JsonStorage;
    use crate::test_helpers::sample_catalog;
    use tempfile::TempDir;

    fn app_in(tmp: &TempDir) -> MovieApp {
        let settings = Settings {
            storage: crate::config::StorageKind::Json,
            data_file: tmp.path().join("movies.json"),
            api_key: "test".into(),
            template: tmp.path().join("index_template.html"),
            output: tmp.path().join("index.html"),
        };
        let store = Box::new(JsonStorage::new(settings.data_file.clone()));
        let omdb = OmdbClient::new("http://localhost:9", "test");
        MovieApp::new(store, omdb, &settings)
    }

    #[test]
    fn delete_and_update_go_through_the_store() {
        let tmp = TempDir::new().unwrap();
        let app = app_in(&tmp);
        let store = JsonStorage::new(tmp.path().join("movies.json"));
        store.save(&sample_catalog()).unwrap();

        app.update("Alien", "classic").unwrap();
        app.delete("Heat").unwrap();

        let catalog = store.list().unwrap();
        assert_eq!(catalog["Alien"].notes.as_deref(), Some("classic"));
        assert!(!catalog.contains_key("Heat"));
    }

    #[test]
    fn missing_movie_surfaces_not_found() {
        let tmp = TempDir::new().unwrap();
        let app = app_in(&tmp);
        let err = app.delete("Nonexistent").unwrap_err();
        assert!(matches!(
            err,
            AppError::Storage(StorageError::NotFound(_))
        ));
    }

    #[test]
    fn website_without_template_is_a_site_error() {
        let tmp = TempDir::new().unwrap();
        let app = app_in(&tmp);
        let err = app.website().unwrap_err();
        assert!(matches!(
            err,
            AppError::Site(SiteError::TemplateMissing(_))
        ));
    }

    #[test]
    fn website_renders_the_catalog() {
        let tmp = TempDir::new().unwrap();
        let app = app_in(&tmp);
        let store = JsonStorage::new(tmp.path().join("movies.json"));
        store.save(&sample_catalog()).unwrap();
        std::fs::write(
            tmp.path().join("index_template.html"),
            "<title>__TEMPLATE_TITLE__</title><main>__TEMPLATE_MOVIE_GRID__</main>",
        )
        .unwrap();

        app.website().unwrap();

        let page = std::fs::read_to_string(tmp.path().join("index.html")).unwrap();
        assert!(page.contains("Alien"));
    }
}
