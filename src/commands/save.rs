//! Save and saved commands - bookmark works by id

use crate::catalog::{Catalog, Clock};
use crate::db::{BlobStore, WorkId};
use crate::{output, ArtfolioError};

type Result<T> = std::result::Result<T, ArtfolioError>;

/// Toggle the saved state of a work and report it
///
/// Ids that are not in the catalog are rejected so typos don't leave
/// dangling bookmarks.
///
/// # Errors
/// Returns an error if the id is unknown or the catalog cannot be saved
pub fn execute<S: BlobStore, C: Clock>(
    catalog: &mut Catalog<S, C>,
    id: WorkId,
    quiet: bool,
) -> Result<bool> {
    if catalog.work(id).is_none() && !catalog.is_work_saved(id) {
        return Err(ArtfolioError::InvalidInput(format!("No work with id {id}")));
    }

    let saved = catalog.toggle_save_work(id)?;
    if !quiet {
        if saved {
            println!("Saved {id}");
        } else {
            println!("Unsaved {id}");
        }
    }
    Ok(saved)
}

/// List saved works in save order
///
/// # Errors
/// Does not currently fail; the signature matches the other commands.
pub fn list_saved<S: BlobStore, C: Clock>(catalog: &Catalog<S, C>, quiet: bool) -> Result<()> {
    let works = catalog.saved_works();
    if works.is_empty() {
        if !quiet {
            println!("No saved works.");
        }
        return Ok(());
    }

    if !quiet {
        println!("Saved works:");
    }
    for work in works {
        println!("{}", output::work_line(work, true, quiet));
    }
    Ok(())
}
