use clap::{Parser, Subcommand};
use movie_shelf::app::MovieApp;
use movie_shelf::config::{self, AppConfig, Settings, StorageKind};
use movie_shelf::omdb::{self, OmdbClient};
use movie_shelf::storage::{CatalogStore, CsvStorage, JsonStorage};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "movie-shelf")]
#[command(version)]
#[command(about = "A movie catalog in a flat file, with stats and a static site")]
#[command(long_about = "\
A movie catalog in a flat file, with stats and a static site

Movies are stored in a single JSON or CSV file. Adding a movie looks its
year, rating, and poster up on OMDb; the catalog can be rendered into a
static index.html from a template you control.

Run without a subcommand for the interactive menu. Every menu entry is
also available as a one-shot subcommand for scripting.

Configuration is layered: command-line flags override movie-shelf.toml,
which overrides built-in defaults. The default catalog file is
movies.json (or movies.csv with --storage csv).")]
struct Cli {
    /// Storage backend for the catalog file
    #[arg(long, value_enum, global = true)]
    storage: Option<StorageKind>,

    /// Catalog file path
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Config file path
    #[arg(long, default_value = config::DEFAULT_CONFIG_FILE, global = true)]
    config: PathBuf,

    /// HTML template for website generation
    #[arg(long, global = true)]
    template: Option<PathBuf>,

    /// Output path for the generated website
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// OMDb API key
    #[arg(long, global = true)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Interactive menu (the default)
    Menu,
    /// List all movies in the catalog
    List,
    /// Look a movie up on OMDb and add it
    Add { title: String },
    /// Delete a movie by name
    Delete { name: String },
    /// Set the notes on a movie
    Update { name: String, notes: String },
    /// Mean/median rating and best/worst movies
    Stats,
    /// Pick a random movie
    Random,
    /// Case-insensitive search over movie names
    Search { query: String },
    /// List movies by rating, best first
    Sorted,
    /// Generate the static website
    Website,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let file_config = config::load(&cli.config)?;
    let flags = AppConfig {
        storage: cli.storage,
        data_file: cli.file,
        api_key: cli.api_key,
        template: cli.template,
        output: cli.output,
    };
    let settings = Settings::resolve(flags, file_config);

    let store: Box<dyn CatalogStore> = match settings.storage {
        StorageKind::Json => Box::new(JsonStorage::new(settings.data_file.clone())),
        StorageKind::Csv => Box::new(CsvStorage::new(settings.data_file.clone())),
    };
    let client = OmdbClient::new(omdb::DEFAULT_BASE_URL, settings.api_key.clone());
    let app = MovieApp::new(store, client, &settings);

    match cli.command.unwrap_or(Command::Menu) {
        Command::Menu => app.run()?,
        Command::List => app.list()?,
        Command::Add { title } => app.add(&title)?,
        Command::Delete { name } => app.delete(&name)?,
        Command::Update { name, notes } => app.update(&name, &notes)?,
        Command::Stats => app.stats()?,
        Command::Random => app.random()?,
        Command::Search { query } => app.search(&query)?,
        Command::Sorted => app.sorted()?,
        Command::Website => app.website()?,
    }

    Ok(())
}
