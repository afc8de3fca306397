//! Fav command - manage favorite artists

use crate::catalog::{Catalog, Clock};
use crate::cli::FavCommands;
use crate::db::{ArtistDraft, BlobStore};
use crate::{output, ArtfolioError};

type Result<T> = std::result::Result<T, ArtfolioError>;

/// Execute a favorites subcommand
///
/// # Errors
/// Returns an error if the catalog cannot be saved
pub fn execute<S: BlobStore, C: Clock>(
    catalog: &mut Catalog<S, C>,
    command: &FavCommands,
    quiet: bool,
) -> Result<()> {
    match command {
        FavCommands::Add { name } => add(catalog, name, quiet),
        FavCommands::Remove { name } => remove(catalog, name, quiet),
        FavCommands::List => {
            list(catalog, quiet);
            Ok(())
        }
    }
}

fn add<S: BlobStore, C: Clock>(catalog: &mut Catalog<S, C>, name: &str, quiet: bool) -> Result<()> {
    let work_count = u32::try_from(catalog.works_by_author(name).len()).unwrap_or(u32::MAX);
    let added = catalog.add_favorite(ArtistDraft::new(name, work_count))?;
    if !quiet {
        if added {
            println!("Added {name} to favorites");
        } else {
            println!("{name} is already a favorite");
        }
    }
    Ok(())
}

fn remove<S: BlobStore, C: Clock>(catalog: &mut Catalog<S, C>, name: &str, quiet: bool) -> Result<()> {
    let removed = catalog.remove_favorite(name)?;
    if !quiet {
        if removed > 0 {
            println!("Removed {name} from favorites");
        } else {
            println!("{name} is not a favorite");
        }
    }
    Ok(())
}

fn list<S: BlobStore, C: Clock>(catalog: &Catalog<S, C>, quiet: bool) {
    let favorites = catalog.favorites();
    if favorites.is_empty() {
        if !quiet {
            println!("No favorite artists.");
        }
        return;
    }

    if !quiet {
        println!("Favorite artists:");
    }
    for favorite in favorites {
        println!("{}", output::favorite_line(favorite, quiet));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{TestStore, cat_logo};

    #[test]
    fn test_fav_add_counts_author_works() {
        let test_store = TestStore::new();
        let mut catalog = test_store.catalog(1_700_000_000_000);
        catalog.add_work(cat_logo()).unwrap();
        catalog.add_work(cat_logo()).unwrap();

        execute(&mut catalog, &FavCommands::Add { name: "Ann".into() }, true).unwrap();
        execute(&mut catalog, &FavCommands::Add { name: "Ann".into() }, true).unwrap();

        assert_eq!(catalog.favorites().len(), 1);
        assert_eq!(catalog.favorites()[0].work_count, 2);
    }

    #[test]
    fn test_fav_remove() {
        let test_store = TestStore::new();
        let mut catalog = test_store.catalog(1_700_000_000_000);

        execute(&mut catalog, &FavCommands::Add { name: "Bo".into() }, true).unwrap();
        execute(&mut catalog, &FavCommands::Remove { name: "Bo".into() }, true).unwrap();
        execute(&mut catalog, &FavCommands::Remove { name: "Bo".into() }, true).unwrap();

        assert!(!catalog.is_favorited("Bo"));
        assert!(execute(&mut catalog, &FavCommands::List, true).is_ok());
    }
}
