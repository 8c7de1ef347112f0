//! Application configuration from an optional `movie-shelf.toml`.
//!
//! Everything here can also be set with a CLI flag; flags win over the
//! file, the file wins over the built-in defaults. A typical config:
//!
//! ```toml
//! storage = "csv"
//! data_file = "movies.csv"
//! api_key = "efa33e0b"
//! template = "index_template.html"
//! output = "index.html"
//! ```
//!
//! A missing config file is not an error — it means all defaults. A
//! present-but-unparseable file is surfaced, and unknown keys are
//! rejected to catch typos early.

use serde::Deserialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "movie-shelf.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Which flat-file backend holds the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    #[default]
    Json,
    Csv,
}

/// Values loadable from the config file. All optional; `None` means
/// "not set here", so the CLI layer can layer flags over file over
/// defaults without losing track of what was explicit.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub storage: Option<StorageKind>,
    pub data_file: Option<PathBuf>,
    pub api_key: Option<String>,
    pub template: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

/// Load the config file at `path`, or defaults if it does not exist.
pub fn load(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(AppConfig::default()),
        Err(e) => return Err(e.into()),
    };
    Ok(toml::from_str(&content)?)
}

pub const DEFAULT_TEMPLATE_FILE: &str = "index_template.html";
pub const DEFAULT_OUTPUT_FILE: &str = "index.html";
pub const DEFAULT_API_KEY: &str = "efa33e0b";

/// Fully resolved configuration: flags over file over defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    pub storage: StorageKind,
    pub data_file: PathBuf,
    pub api_key: String,
    pub template: PathBuf,
    pub output: PathBuf,
}

impl Settings {
    /// Layer `flags` (CLI) over `file` (config file) over built-in
    /// defaults. The default data file name follows the backend:
    /// `movies.json` or `movies.csv`.
    pub fn resolve(flags: AppConfig, file: AppConfig) -> Self {
        let storage = flags.storage.or(file.storage).unwrap_or_default();
        let default_data_file = match storage {
            StorageKind::Json => "movies.json",
            StorageKind::Csv => "movies.csv",
        };
        Self {
            storage,
            data_file: flags
                .data_file
                .or(file.data_file)
                .unwrap_or_else(|| PathBuf::from(default_data_file)),
            api_key: flags
                .api_key
                .or(file.api_key)
                .unwrap_or_else(|| DEFAULT_API_KEY.to_string()),
            template: flags
                .template
                .or(file.template)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATE_FILE)),
            output: flags
                .output
                .or(file.output)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE)),
        }
    }
}
