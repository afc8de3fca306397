//! Artfolio CLI application entry point
//!
//! A command-line presentation layer over the gallery catalog.
//!
//! # Usage
//!
//! ```bash
//! # Add a work
//! artfolio add --title "Cat Logo" --author Ann -t "Logo Design"
//!
//! # List everything, or narrow by text and tags
//! artfolio
//! artfolio list -s cat -t "logo design"
//!
//! # Bookmarks
//! artfolio save 1700000000000
//! artfolio fav add Ann
//!
//! # Quiet mode (only output results)
//! artfolio -q list -t poster
//! ```
//!
//! # Configuration
//!
//! On first run, artfolio prompts for initial setup. Configuration is stored in
//! the user's config directory (`~/.config/artfolio/config.toml` on Linux).

use artfolio::{
    ArtfolioError,
    catalog::{Catalog, SystemClock},
    cli::{Cli, Commands, LogLevel},
    commands,
    config::{self, ArtfolioConfig},
    db::{SledStore, WorkDraft},
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, ArtfolioError>;

/// Install the stderr log subscriber
///
/// `RUST_LOG` wins over `--log-level` when set.
fn initialize_tracing(log_level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config() -> Result<ArtfolioConfig> {
    let path = ArtfolioConfig::config_path()?;
    if path.exists() {
        Ok(ArtfolioConfig::load_from(&path)?)
    } else {
        Ok(config::first_time_setup()?)
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = load_config()?;
    let quiet = cli.quiet || config.quiet;
    let command = cli.get_command();

    if let Commands::Config { command } = &command {
        let path = ArtfolioConfig::config_path()?;
        return commands::config(&mut config, &path, command, quiet);
    }

    let db_path = match &cli.db {
        Some(path) => path.clone(),
        None => config.database_path()?,
    };
    debug!(path = %db_path.display(), "opening gallery database");

    let store = SledStore::open(&db_path)?;
    let mut catalog = Catalog::open(store, SystemClock, config.load_policy)?;

    match command {
        Commands::Add {
            title,
            author,
            description,
            tags,
            image,
            instagram_url,
        } => {
            let mut draft = WorkDraft::new(title, author)
                .description(description)
                .image(image)
                .tags(tags);
            draft.instagram_url = instagram_url;
            commands::add(&mut catalog, &config, draft, quiet)?;
        }
        Commands::Delete { id, yes } => {
            commands::delete(&mut catalog, id, yes, quiet)?;
        }
        Commands::List { query, tags } => {
            commands::list(&mut catalog, query.as_deref(), &tags, quiet)?;
        }
        Commands::Tags { predefined } => {
            commands::tags(&catalog, &config, predefined, quiet)?;
        }
        Commands::Save { id } => {
            commands::save(&mut catalog, id, quiet)?;
        }
        Commands::Saved => {
            commands::saved(&catalog, quiet)?;
        }
        Commands::Fav { command } => {
            commands::fav(&mut catalog, &command, quiet)?;
        }
        // Handled before the catalog is opened
        Commands::Config { .. } => {}
    }

    catalog.store().flush()?;
    Ok(())
}

fn main() {
    let cli = Cli::parse_args();
    initialize_tracing(cli.log_level);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
