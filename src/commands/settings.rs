//! Config command - read and change settings

use crate::cli::ConfigCommands;
use crate::config::ArtfolioConfig;
use crate::ArtfolioError;
use std::path::Path;

type Result<T> = std::result::Result<T, ArtfolioError>;

/// Execute a config subcommand against the file at `path`
///
/// # Errors
/// Returns an error for unknown keys, bad values, or if the file cannot be saved
pub fn execute(
    config: &mut ArtfolioConfig,
    path: &Path,
    command: &ConfigCommands,
    quiet: bool,
) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            config.set_value(setting)?;
            config.save_to(path)?;
            if !quiet {
                println!("Updated {setting}");
            }
        }
        ConfigCommands::Get { key } => {
            println!("{}", config.get_value(key)?);
        }
    }
    Ok(())
}
