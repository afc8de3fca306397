//! List command - show the filtered gallery

use crate::catalog::{Catalog, Clock};
use crate::db::{BlobStore, Work};
use crate::{output, ArtfolioError};

type Result<T> = std::result::Result<T, ArtfolioError>;

/// Execute the list command
///
/// Applies `query` and each tag in `tags` through the filter engine and
/// prints the resulting view in catalog order.
///
/// # Errors
/// Does not currently fail; the signature matches the other commands.
pub fn execute<S: BlobStore, C: Clock>(
    catalog: &mut Catalog<S, C>,
    query: Option<&str>,
    tags: &[String],
    quiet: bool,
) -> Result<()> {
    let ids: Vec<_> = visible_works(catalog, query, tags)
        .into_iter()
        .map(|work| work.id)
        .collect();

    if ids.is_empty() {
        if !quiet {
            println!("No works found.");
        }
        return Ok(());
    }

    if !quiet {
        println!("Works ({} of {}):", ids.len(), catalog.len());
    }
    for id in ids {
        if let Some(work) = catalog.work(id) {
            println!("{}", output::work_line(work, catalog.is_work_saved(id), quiet));
            if !quiet && let Some(details) = output::work_details(work) {
                println!("{details}");
            }
        }
    }
    Ok(())
}

/// Drive the filter engine with the CLI criteria and return the view
pub fn visible_works<'c, S: BlobStore, C: Clock>(
    catalog: &'c mut Catalog<S, C>,
    query: Option<&str>,
    tags: &[String],
) -> Vec<&'c Work> {
    catalog.set_search_query(query.unwrap_or_default());
    catalog.clear_filters();
    for tag in tags {
        if !catalog.filter().is_filter_active(tag) {
            catalog.toggle_filter(tag);
        }
    }
    catalog.filtered_works()
}
