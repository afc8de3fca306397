//! Interactive setup wizard for first-time configuration
//!
//! This module handles the interactive prompts for creating an initial
//! configuration when artfolio is run for the first time.

use super::ArtfolioConfig;
use crate::catalog::LoadPolicy;
use config::ConfigError;
use dialoguer::{Input, Select, theme::ColorfulTheme};
use std::path::PathBuf;

/// Interactive first-time setup
///
/// 1. Prompts for the catalog database location (default: system data directory)
/// 2. Asks how corrupt stored data should be handled
/// 3. Saves the configuration to the default config path
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - The system data directory cannot be determined
/// - User input cannot be read
/// - The configuration cannot be saved
pub fn first_time_setup() -> Result<ArtfolioConfig, ConfigError> {
    println!("Welcome to artfolio! Let's set up your gallery.\n");

    let default_path = ArtfolioConfig::default_database_path()?;
    let db_path_str: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Gallery database location")
        .default(default_path.to_string_lossy().to_string())
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("If stored gallery data is corrupt")
        .items(&["stop with an error", "start that collection empty"])
        .default(0)
        .interact()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let config = ArtfolioConfig {
        database: Some(PathBuf::from(db_path_str)),
        load_policy: if choice == 0 {
            LoadPolicy::Strict
        } else {
            LoadPolicy::Lenient
        },
        ..ArtfolioConfig::default()
    };

    config.save()?;

    println!("\nConfiguration saved successfully!");
    Ok(config)
}
