//! Delete command - remove a work from the gallery

use crate::catalog::{Catalog, Clock};
use crate::db::{BlobStore, WorkId};
use crate::ArtfolioError;
use dialoguer::Confirm;

type Result<T> = std::result::Result<T, ArtfolioError>;

/// Execute the delete command
///
/// Asks for confirmation unless `yes` or `quiet` is set. Deleting an unknown
/// id is not an error.
///
/// # Errors
/// Returns an error if confirmation cannot be read or the catalog cannot be saved
pub fn execute<S: BlobStore, C: Clock>(
    catalog: &mut Catalog<S, C>,
    id: WorkId,
    yes: bool,
    quiet: bool,
) -> Result<bool> {
    let Some(work) = catalog.work(id) else {
        if !quiet {
            println!("No work with id {id}.");
        }
        return Ok(false);
    };

    if !yes && !quiet {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete '{}' by {}?", work.title, work.author))
            .default(false)
            .interact()
            .map_err(|e| ArtfolioError::InvalidInput(format!("Failed to read confirmation: {e}")))?;
        if !confirmed {
            println!("Cancelled.");
            return Ok(false);
        }
    }

    let removed = catalog.delete_work(id)?;
    if removed && !quiet {
        println!("Deleted {id}");
    }
    Ok(removed)
}
