//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for artfolio using the `clap` crate.
//! The CLI is one presentation layer over the catalog library: every command
//! maps onto catalog or filter-engine operations.
//!
//! # Commands
//!
//! - **add**: Add a work to the gallery
//! - **delete**: Remove a work by id
//! - **list**: Show works, optionally narrowed by a search query and tag filters (default)
//! - **tags**: Show the tag vocabulary with usage counts
//! - **save** / **saved**: Toggle and list saved works
//! - **fav**: Manage favorite artists
//! - **config**: Read and change settings
//!
//! # Examples
//!
//! ```
//! use artfolio::cli::{Cli, Commands};
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["artfolio", "list", "-s", "cat", "-t", "Logo Design"]);
//! assert!(matches!(cli.get_command(), Commands::List { .. }));
//! ```

use crate::db::WorkId;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Log verbosity for the `--log-level` flag
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// `EnvFilter` directive for this level
    #[must_use]
    pub const fn to_filter_directive(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "artfolio")]
#[command(about = "A local gallery catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Catalog database directory (overrides config)
    #[arg(long = "db", value_name = "PATH", global = true)]
    pub db: Option<PathBuf>,

    /// Log verbosity (RUST_LOG takes precedence)
    #[arg(long = "log-level", value_enum, default_value_t = LogLevel::Warn, global = true)]
    pub log_level: LogLevel,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Add a work to the gallery
    #[command(visible_alias = "a")]
    Add {
        /// Title of the work
        #[arg(long)]
        title: String,

        /// Author of the work
        #[arg(long)]
        author: String,

        /// Free-text description
        #[arg(short = 'd', long, default_value = "")]
        description: String,

        /// Tags (at least one: -t tag1 -t tag2)
        #[arg(short = 't', long = "tag", value_name = "TAG", required = true)]
        tags: Vec<String>,

        /// Embedded image data (e.g. a data URL)
        #[arg(long, default_value = "")]
        image: String,

        /// Instagram profile link
        #[arg(long = "instagram", value_name = "URL")]
        instagram_url: Option<String>,
    },

    /// Remove a work by id
    #[command(visible_alias = "rm")]
    Delete {
        /// Id of the work to delete
        id: WorkId,

        /// Skip confirmation
        #[arg(short = 'y', long = "yes")]
        yes: bool,
    },

    /// List works, narrowed by a search query and tag filters (default)
    #[command(visible_alias = "ls")]
    List {
        /// Case-insensitive text matched against title, description and author
        #[arg(short = 's', long = "search", value_name = "QUERY")]
        query: Option<String>,

        /// Show only works with any of these tags (-t tag1 -t tag2)
        #[arg(short = 't', long = "tag", value_name = "TAG")]
        tags: Vec<String>,
    },

    /// Show the tag vocabulary
    Tags {
        /// Show the predefined tag list instead of tags in use
        #[arg(long)]
        predefined: bool,
    },

    /// Toggle whether a work is saved
    Save {
        /// Id of the work
        id: WorkId,
    },

    /// List saved works
    Saved,

    /// Manage favorite artists
    Fav {
        #[command(subcommand)]
        command: FavCommands,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Favorite artist subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum FavCommands {
    /// Bookmark an artist
    Add {
        /// Artist name (matched exactly)
        name: String,
    },

    /// Remove a bookmarked artist
    #[command(visible_alias = "rm")]
    Remove {
        /// Artist name (matched exactly)
        name: String,
    },

    /// List bookmarked artists
    #[command(visible_alias = "ls")]
    List,
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., load_policy=lenient)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., quiet)
        #[arg(value_name = "KEY")]
        key: String,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to an unfiltered List
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::List {
            query: None,
            tags: Vec::new(),
        })
    }
}
