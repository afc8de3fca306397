//! Tags command - show the tag vocabulary

use crate::catalog::{Catalog, Clock};
use crate::config::ArtfolioConfig;
use crate::db::BlobStore;
use crate::{output, ArtfolioError};

type Result<T> = std::result::Result<T, ArtfolioError>;

/// Execute the tags command
///
/// # Errors
/// Does not currently fail; the signature matches the other commands.
pub fn execute<S: BlobStore, C: Clock>(
    catalog: &Catalog<S, C>,
    config: &ArtfolioConfig,
    predefined: bool,
    quiet: bool,
) -> Result<()> {
    if predefined {
        if !quiet {
            println!("Predefined tags:");
        }
        for tag in &config.predefined_tags {
            if quiet {
                println!("{tag}");
            } else {
                println!("  {tag}");
            }
        }
        return Ok(());
    }

    let counts = catalog.tag_counts();
    if counts.is_empty() {
        if !quiet {
            println!("No tags found in gallery.");
        }
        return Ok(());
    }

    if !quiet {
        println!("Tags in gallery:");
    }
    for (tag, count) in counts {
        println!("{}", output::tag_with_count(&tag, count, quiet));
    }
    Ok(())
}
