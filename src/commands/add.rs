//! Add command - put a new work into the gallery

use crate::catalog::{Catalog, Clock};
use crate::config::ArtfolioConfig;
use crate::db::{BlobStore, WorkDraft, WorkId};
use crate::ArtfolioError;

type Result<T> = std::result::Result<T, ArtfolioError>;

/// Execute the add command
///
/// Tags outside the predefined vocabulary are accepted with a warning.
///
/// # Errors
/// Returns an error if the draft has no tags or the catalog cannot be saved
pub fn execute<S: BlobStore, C: Clock>(
    catalog: &mut Catalog<S, C>,
    config: &ArtfolioConfig,
    draft: WorkDraft,
    quiet: bool,
) -> Result<WorkId> {
    if !quiet {
        for tag in draft.tags.iter().filter(|t| !config.is_predefined_tag(t)) {
            eprintln!("Warning: '{tag}' is not a predefined tag");
        }
    }

    let title = draft.title.clone();
    let id = catalog.add_work(draft)?;

    if quiet {
        println!("{id}");
    } else {
        println!("Added '{title}' as {id}");
    }
    Ok(id)
}
