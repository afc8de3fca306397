//! The gallery catalog
//!
//! [`Catalog`] owns the works, favorite artists and saved-work bookmarks,
//! persists each collection under its own key in a [`BlobStore`], and keeps a
//! [`FilterEngine`] view in sync after every change.
//!
//! # Examples
//!
//! ```
//! use artfolio::catalog::{Catalog, LoadPolicy, SystemClock};
//! use artfolio::db::{MemoryStore, WorkDraft};
//!
//! let mut catalog = Catalog::open(MemoryStore::new(), SystemClock, LoadPolicy::Strict)?;
//! let id = catalog.add_work(WorkDraft::new("Cat Logo", "Ann").tag("Logo Design"))?;
//!
//! catalog.set_search_query("cat");
//! assert_eq!(catalog.filtered_works()[0].id, id);
//! # Ok::<(), artfolio::catalog::CatalogError>(())
//! ```

pub mod clock;
pub mod error;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::CatalogError;

use crate::db::{ArtistDraft, BlobStore, FavoriteArtist, Work, WorkDraft, WorkId, keys};
use crate::search::{FilterEngine, vocabulary};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, warn};

type Result<T> = std::result::Result<T, CatalogError>;

/// What to do when a stored collection cannot be parsed
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LoadPolicy {
    /// Fail to open with `CatalogError::MalformedPersistedData`
    #[default]
    Strict,
    /// Start that collection empty and log a warning
    Lenient,
}

impl std::str::FromStr for LoadPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            other => Err(format!("unknown load policy '{other}' (expected strict or lenient)")),
        }
    }
}

/// Catalog service bound to a blob store and a clock
pub struct Catalog<S: BlobStore, C: Clock = SystemClock> {
    store: S,
    clock: C,
    works: Vec<Work>,
    favorites: Vec<FavoriteArtist>,
    saved: Vec<WorkId>,
    filter: FilterEngine,
    last_id: Option<WorkId>,
}

impl<S: BlobStore, C: Clock> Catalog<S, C> {
    /// Load all three collections from `store`
    ///
    /// Missing keys yield empty collections.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Database` if the store cannot be read, and
    /// `CatalogError::MalformedPersistedData` for an unparsable payload under
    /// `LoadPolicy::Strict`.
    pub fn open(store: S, clock: C, policy: LoadPolicy) -> Result<Self> {
        let works: Vec<Work> = load_collection(&store, keys::WORKS, policy)?;
        let favorites: Vec<FavoriteArtist> = load_collection(&store, keys::FAVORITES, policy)?;
        let saved: Vec<WorkId> = load_collection(&store, keys::SAVED, policy)?;

        let last_id = works.iter().map(|work| work.id).max();
        let mut filter = FilterEngine::new();
        filter.apply_filters(&works);

        debug!(
            works = works.len(),
            favorites = favorites.len(),
            saved = saved.len(),
            "catalog loaded"
        );

        Ok(Self {
            store,
            clock,
            works,
            favorites,
            saved,
            filter,
            last_id,
        })
    }

    // Works

    /// Append a new work and return its assigned id
    ///
    /// Ids come from the clock in milliseconds and are bumped past the last
    /// assigned id, so they stay unique and increasing within a catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Validation` if the draft carries no non-blank
    /// tag, `CatalogError::IdsExhausted` if no id above the highest stored one
    /// is left, or a storage error if persisting fails. On a storage error the
    /// work stays in memory and the filtered view already includes it.
    pub fn add_work(&mut self, draft: WorkDraft) -> Result<WorkId> {
        if draft.tags.iter().all(|tag| tag.trim().is_empty()) {
            return Err(CatalogError::Validation(
                "at least one tag is required".into(),
            ));
        }

        let id = self.next_id()?;
        self.works.push(draft.into_work(id));
        self.filter.apply_filters(&self.works);
        debug!(work_id = %id, "work added");

        persist(&mut self.store, keys::WORKS, &self.works)?;
        Ok(id)
    }

    /// Remove the work with `id`; returns whether one was removed
    ///
    /// # Errors
    ///
    /// Returns a storage error if persisting fails. The work is already gone
    /// from memory and from the filtered view at that point.
    pub fn delete_work(&mut self, id: WorkId) -> Result<bool> {
        let before = self.works.len();
        self.works.retain(|work| work.id != id);
        let removed = self.works.len() != before;
        self.filter.apply_filters(&self.works);
        debug!(work_id = %id, removed, "work deleted");

        persist(&mut self.store, keys::WORKS, &self.works)?;
        Ok(removed)
    }

    #[must_use]
    pub fn work(&self, id: WorkId) -> Option<&Work> {
        self.works.iter().find(|work| work.id == id)
    }

    #[must_use]
    pub fn works(&self) -> &[Work] {
        &self.works
    }

    /// Works whose author is exactly `author`
    #[must_use]
    pub fn works_by_author(&self, author: &str) -> Vec<&Work> {
        self.works.iter().filter(|work| work.author == author).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.works.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.works.is_empty()
    }

    /// Sorted, deduplicated, normalized tags across all works
    #[must_use]
    pub fn all_tags(&self) -> Vec<String> {
        vocabulary::all_tags(&self.works)
    }

    /// Normalized tags with the number of works carrying each
    #[must_use]
    pub fn tag_counts(&self) -> Vec<(String, usize)> {
        vocabulary::tag_counts(&self.works)
    }

    // Saved works

    /// Flip the saved state of `id`; returns the new state
    ///
    /// # Errors
    ///
    /// Returns a storage error if persisting fails.
    pub fn toggle_save_work(&mut self, id: WorkId) -> Result<bool> {
        let saved = if let Some(pos) = self.saved.iter().position(|&s| s == id) {
            self.saved.remove(pos);
            false
        } else {
            self.saved.push(id);
            true
        };
        debug!(work_id = %id, saved, "saved state toggled");

        persist(&mut self.store, keys::SAVED, &self.saved)?;
        Ok(saved)
    }

    #[must_use]
    pub fn is_work_saved(&self, id: WorkId) -> bool {
        self.saved.contains(&id)
    }

    /// Saved ids in the order they were saved
    #[must_use]
    pub fn saved_work_ids(&self) -> &[WorkId] {
        &self.saved
    }

    /// Saved works that still exist in the catalog, in save order
    #[must_use]
    pub fn saved_works(&self) -> Vec<&Work> {
        self.saved.iter().filter_map(|&id| self.work(id)).collect()
    }

    // Favorites

    /// Bookmark an artist; returns `false` if `name` is already a favorite
    ///
    /// Names are compared exactly, without normalization.
    ///
    /// # Errors
    ///
    /// Returns a storage error if persisting fails.
    pub fn add_favorite(&mut self, artist: ArtistDraft) -> Result<bool> {
        if self.is_favorited(&artist.name) {
            debug!(name = %artist.name, "favorite already present");
            return Ok(false);
        }

        let favorite = artist.into_favorite(self.clock.now());
        debug!(name = %favorite.name, "favorite added");
        self.favorites.push(favorite);

        persist(&mut self.store, keys::FAVORITES, &self.favorites)?;
        Ok(true)
    }

    /// Remove every favorite named exactly `name`; returns how many were removed
    ///
    /// # Errors
    ///
    /// Returns a storage error if persisting fails.
    pub fn remove_favorite(&mut self, name: &str) -> Result<usize> {
        let before = self.favorites.len();
        self.favorites.retain(|favorite| favorite.name != name);
        let removed = before - self.favorites.len();
        debug!(name, removed, "favorite removed");

        persist(&mut self.store, keys::FAVORITES, &self.favorites)?;
        Ok(removed)
    }

    #[must_use]
    pub fn is_favorited(&self, name: &str) -> bool {
        self.favorites.iter().any(|favorite| favorite.name == name)
    }

    #[must_use]
    pub fn favorites(&self) -> &[FavoriteArtist] {
        &self.favorites
    }

    // Filtering

    /// Set the free-text query (stored verbatim) and recompute the view
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.filter.set_search_query(query, &self.works);
    }

    /// Toggle a tag filter; returns `true` if it is active afterwards
    pub fn toggle_filter(&mut self, tag: &str) -> bool {
        self.filter.toggle_filter(tag, &self.works)
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear_filters(&self.works);
    }

    /// Recompute the filtered view
    pub fn apply_filters(&mut self) {
        self.filter.apply_filters(&self.works);
    }

    #[must_use]
    pub fn search_query(&self) -> &str {
        self.filter.search_query()
    }

    #[must_use]
    pub const fn active_filters(&self) -> &BTreeSet<String> {
        self.filter.active_filters()
    }

    /// Works passing the current query and tag filters, in catalog order
    #[must_use]
    pub fn filtered_works(&self) -> Vec<&Work> {
        self.filter.filtered_works(&self.works)
    }

    #[must_use]
    pub const fn filter(&self) -> &FilterEngine {
        &self.filter
    }

    // Plumbing

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Give back the underlying store
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    fn next_id(&mut self) -> Result<WorkId> {
        let now = self.clock.now().timestamp_millis();
        let id = match self.last_id {
            Some(WorkId(last)) if now <= last => {
                WorkId(last.checked_add(1).ok_or(CatalogError::IdsExhausted { last })?)
            }
            _ => WorkId(now),
        };
        self.last_id = Some(id);
        Ok(id)
    }
}

fn load_collection<S, T>(store: &S, key: &str, policy: LoadPolicy) -> Result<Vec<T>>
where
    S: BlobStore,
    T: DeserializeOwned,
{
    let Some(raw) = store.get(key)? else {
        return Ok(Vec::new());
    };

    match serde_json::from_str(&raw) {
        Ok(items) => Ok(items),
        Err(source) => match policy {
            LoadPolicy::Strict => Err(CatalogError::MalformedPersistedData {
                key: key.to_string(),
                source,
            }),
            LoadPolicy::Lenient => {
                warn!(key, error = %source, "discarding malformed collection");
                Ok(Vec::new())
            }
        },
    }
}

fn persist<S, T>(store: &mut S, key: &str, items: &[T]) -> Result<()>
where
    S: BlobStore,
    T: Serialize,
{
    let payload = serde_json::to_string(items).map_err(CatalogError::Serialize)?;
    store.set(key, &payload)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{DbError, MemoryStore};
    use crate::testing::{banner, cat_logo, clock_at};
    use chrono::{DateTime, Duration};
    use pretty_assertions::assert_eq;
    use std::cell::Cell;
    use std::io;
    use std::rc::Rc;

    /// Memory store whose writes start failing once `failing` is set
    struct FailingStore {
        inner: MemoryStore,
        failing: Rc<Cell<bool>>,
    }

    impl BlobStore for FailingStore {
        fn get(&self, key: &str) -> std::result::Result<Option<String>, DbError> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), DbError> {
            if self.failing.get() {
                return Err(io::Error::other("disk full").into());
            }
            self.inner.set(key, value)
        }
    }

    fn failing_catalog() -> (Catalog<FailingStore, FixedClock>, Rc<Cell<bool>>) {
        let failing = Rc::new(Cell::new(false));
        let store = FailingStore {
            inner: MemoryStore::new(),
            failing: Rc::clone(&failing),
        };
        let catalog = Catalog::open(store, clock_at(1_700_000_000_000), LoadPolicy::Strict).unwrap();
        (catalog, failing)
    }

    fn filtered_titles<S: BlobStore, C: Clock>(catalog: &Catalog<S, C>) -> Vec<String> {
        catalog.filtered_works().iter().map(|w| w.title.clone()).collect()
    }

    fn empty_catalog() -> Catalog<MemoryStore, FixedClock> {
        Catalog::open(MemoryStore::new(), clock_at(1_700_000_000_000), LoadPolicy::Strict).unwrap()
    }

    fn sample_catalog() -> (Catalog<MemoryStore, FixedClock>, WorkId, WorkId) {
        let mut catalog = empty_catalog();
        let first = catalog.add_work(cat_logo()).unwrap();
        let second = catalog.add_work(banner()).unwrap();
        (catalog, first, second)
    }

    fn titles(works: &[&Work]) -> Vec<String> {
        works.iter().map(|w| w.title.clone()).collect()
    }

    #[test]
    fn test_open_empty_store() {
        let catalog = empty_catalog();
        assert!(catalog.is_empty());
        assert!(catalog.favorites().is_empty());
        assert!(catalog.saved_work_ids().is_empty());
        assert_eq!(catalog.store().writes(), 0);
    }

    #[test]
    fn test_add_work_assigns_unique_ids() {
        let mut catalog = empty_catalog();
        let ids: Vec<WorkId> = (0..5)
            .map(|_| catalog.add_work(cat_logo()).unwrap())
            .collect();

        assert_eq!(catalog.len(), 5);
        let unique: BTreeSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), 5);
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_add_work_uses_clock_millis() {
        let clock = clock_at(1_700_000_000_000);
        let mut catalog = Catalog::open(MemoryStore::new(), &clock, LoadPolicy::Strict).unwrap();

        assert_eq!(catalog.add_work(cat_logo()).unwrap(), WorkId(1_700_000_000_000));

        clock.set(DateTime::from_timestamp_millis(1_700_000_005_000).unwrap());
        assert_eq!(catalog.add_work(banner()).unwrap(), WorkId(1_700_000_005_000));
    }

    #[test]
    fn test_add_work_id_after_loaded_works() {
        let (catalog, _, second) = sample_catalog();
        let store = catalog.into_store();

        let mut reopened =
            Catalog::open(store, clock_at(1_000), LoadPolicy::Strict).unwrap();
        let id = reopened.add_work(cat_logo()).unwrap();
        assert_eq!(id, WorkId(second.0 + 1));
    }

    #[test]
    fn test_add_work_after_max_id_is_an_error() {
        let last = WorkDraft::new("Last", "Ann")
            .tag("Poster")
            .into_work(WorkId(i64::MAX));
        let payload = serde_json::to_string(&[last]).unwrap();
        let store = MemoryStore::with_blobs([(keys::WORKS, payload)]);
        let mut catalog =
            Catalog::open(store, clock_at(1_700_000_000_000), LoadPolicy::Strict).unwrap();

        let result = catalog.add_work(cat_logo());
        assert!(matches!(
            result,
            Err(CatalogError::IdsExhausted { last: i64::MAX })
        ));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.store().writes(), 0);
    }

    #[test]
    fn test_delete_work_store_failure_keeps_view_consistent() {
        let (mut catalog, failing) = failing_catalog();
        let first = catalog.add_work(cat_logo()).unwrap();
        let second = catalog.add_work(banner()).unwrap();
        catalog.set_search_query("banner");

        failing.set(true);
        let result = catalog.delete_work(first);
        assert!(matches!(result, Err(CatalogError::Database(DbError::Io(_)))));

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.filter().filtered_ids(), &[second]);
        assert_eq!(filtered_titles(&catalog), vec!["Banner"]);
    }

    #[test]
    fn test_add_work_store_failure_keeps_view_consistent() {
        let (mut catalog, failing) = failing_catalog();
        catalog.add_work(banner()).unwrap();
        catalog.set_search_query("cat");
        assert!(filtered_titles(&catalog).is_empty());

        failing.set(true);
        assert!(catalog.add_work(cat_logo()).is_err());

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.filter().filtered_ids().len(), 1);
        assert_eq!(filtered_titles(&catalog), vec!["Cat Logo"]);
    }

    #[test]
    fn test_add_work_preserves_insertion_order_and_persists() {
        let (catalog, first, second) = sample_catalog();
        let ids: Vec<WorkId> = catalog.works().iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![first, second]);

        let stored: Vec<Work> =
            serde_json::from_str(catalog.store().blob(keys::WORKS).unwrap()).unwrap();
        assert_eq!(stored, catalog.works());
    }

    #[test]
    fn test_add_work_requires_a_tag() {
        let mut catalog = empty_catalog();

        let result = catalog.add_work(WorkDraft::new("Untagged", "Ann"));
        assert!(matches!(result, Err(CatalogError::Validation(_))));

        let result = catalog.add_work(WorkDraft::new("Blank", "Ann").tag("   "));
        assert!(matches!(result, Err(CatalogError::Validation(_))));

        assert!(catalog.is_empty());
        assert_eq!(catalog.store().writes(), 0);
    }

    #[test]
    fn test_add_work_allows_empty_fields() {
        let mut catalog = empty_catalog();
        let id = catalog.add_work(WorkDraft::new("", "").tag("Poster")).unwrap();
        assert_eq!(catalog.work(id).unwrap().title, "");
    }

    #[test]
    fn test_delete_work_is_idempotent() {
        let (mut catalog, first, second) = sample_catalog();

        assert!(catalog.delete_work(first).unwrap());
        let after_first: Vec<Work> = catalog.works().to_vec();

        assert!(!catalog.delete_work(first).unwrap());
        assert_eq!(catalog.works(), after_first.as_slice());
        assert_eq!(catalog.works()[0].id, second);
    }

    #[test]
    fn test_delete_work_updates_filtered_view() {
        let (mut catalog, first, _) = sample_catalog();
        catalog.set_search_query("cat");
        assert_eq!(catalog.filtered_works().len(), 1);

        catalog.delete_work(first).unwrap();
        assert!(catalog.filtered_works().is_empty());
    }

    #[test]
    fn test_all_tags_across_works() {
        let mut catalog = empty_catalog();
        catalog
            .add_work(WorkDraft::new("a", "x").tags(["Logo Design", " logo design "]))
            .unwrap();
        catalog.add_work(WorkDraft::new("b", "y").tag("UI Design")).unwrap();

        assert_eq!(catalog.all_tags(), vec!["logo design", "ui design"]);
    }

    #[test]
    fn test_all_tags_not_cached() {
        let (mut catalog, first, _) = sample_catalog();
        assert_eq!(catalog.all_tags(), vec!["banner design", "logo design"]);

        catalog.delete_work(first).unwrap();
        assert_eq!(catalog.all_tags(), vec!["banner design"]);
    }

    #[test]
    fn test_toggle_save_work_is_involution() {
        let (mut catalog, first, _) = sample_catalog();
        let before = catalog.is_work_saved(first);

        assert!(catalog.toggle_save_work(first).unwrap());
        assert!(catalog.is_work_saved(first));

        assert!(!catalog.toggle_save_work(first).unwrap());
        assert_eq!(catalog.is_work_saved(first), before);
    }

    #[test]
    fn test_toggle_save_work_persists_each_time() {
        let (mut catalog, first, second) = sample_catalog();
        let writes = catalog.store().writes();

        catalog.toggle_save_work(second).unwrap();
        catalog.toggle_save_work(first).unwrap();
        assert_eq!(catalog.store().writes(), writes + 2);
        assert_eq!(catalog.store().blob(keys::SAVED), Some(&*format!("[{second},{first}]")));
    }

    #[test]
    fn test_is_work_saved_has_no_side_effect() {
        let (catalog, first, _) = sample_catalog();
        let writes = catalog.store().writes();
        assert!(!catalog.is_work_saved(first));
        assert_eq!(catalog.store().writes(), writes);
    }

    #[test]
    fn test_saved_works_skip_deleted() {
        let (mut catalog, first, second) = sample_catalog();
        catalog.toggle_save_work(second).unwrap();
        catalog.toggle_save_work(first).unwrap();
        catalog.delete_work(second).unwrap();

        assert_eq!(catalog.saved_work_ids(), &[second, first]);
        assert_eq!(titles(&catalog.saved_works()), vec!["Cat Logo"]);
    }

    #[test]
    fn test_add_favorite_twice_keeps_one() {
        let mut catalog = empty_catalog();
        assert!(catalog.add_favorite(ArtistDraft::new("A", 1)).unwrap());
        assert!(!catalog.add_favorite(ArtistDraft::new("A", 9)).unwrap());

        assert_eq!(catalog.favorites().len(), 1);
        assert_eq!(catalog.favorites()[0].work_count, 1);
    }

    #[test]
    fn test_add_favorite_sets_added_date() {
        let clock = clock_at(1_700_000_000_000);
        let mut catalog = Catalog::open(MemoryStore::new(), &clock, LoadPolicy::Strict).unwrap();
        catalog.add_favorite(ArtistDraft::new("Ann", 2)).unwrap();

        assert_eq!(catalog.favorites()[0].added_date, clock.now());
        let raw = catalog.store().blob(keys::FAVORITES).unwrap();
        assert!(raw.contains("\"addedDate\":\"2023-11-14T22:13:20Z\""));
    }

    #[test]
    fn test_favorite_names_match_exactly() {
        let mut catalog = empty_catalog();
        catalog.add_favorite(ArtistDraft::new("Ann", 1)).unwrap();

        assert!(catalog.is_favorited("Ann"));
        assert!(!catalog.is_favorited("ann"));
        assert!(!catalog.is_favorited(" Ann"));

        assert!(catalog.add_favorite(ArtistDraft::new("ann", 1)).unwrap());
        assert_eq!(catalog.favorites().len(), 2);
    }

    #[test]
    fn test_remove_favorite() {
        let mut catalog = empty_catalog();
        catalog.add_favorite(ArtistDraft::new("Ann", 1)).unwrap();
        catalog.add_favorite(ArtistDraft::new("Bo", 1)).unwrap();

        assert_eq!(catalog.remove_favorite("Ann").unwrap(), 1);
        assert!(!catalog.is_favorited("Ann"));
        assert!(catalog.is_favorited("Bo"));

        assert_eq!(catalog.remove_favorite("Ann").unwrap(), 0);
    }

    #[test]
    fn test_remove_favorite_removes_all_duplicates_from_storage() {
        let date = "2024-01-01T00:00:00Z";
        let favorites = format!(
            r#"[{{"name":"A","workCount":1,"addedDate":"{date}"}},{{"name":"A","workCount":2,"addedDate":"{date}"}}]"#
        );
        let store = MemoryStore::with_blobs([(keys::FAVORITES, favorites)]);
        let mut catalog = Catalog::open(store, clock_at(0), LoadPolicy::Strict).unwrap();

        assert_eq!(catalog.remove_favorite("A").unwrap(), 2);
        assert_eq!(catalog.store().blob(keys::FAVORITES), Some("[]"));
    }

    #[test]
    fn test_search_query_filters_title() {
        let (mut catalog, first, _) = sample_catalog();
        catalog.set_search_query("cat");

        let filtered = catalog.filtered_works();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, first);
    }

    #[test]
    fn test_toggle_filter_then_clear_restores() {
        let (mut catalog, _, _) = sample_catalog();

        catalog.toggle_filter("logo design");
        catalog.apply_filters();
        assert_eq!(titles(&catalog.filtered_works()), vec!["Cat Logo"]);

        catalog.clear_filters();
        assert_eq!(titles(&catalog.filtered_works()), vec!["Cat Logo", "Banner"]);
    }

    #[test]
    fn test_query_and_filter_both_required() {
        let (mut catalog, _, _) = sample_catalog();
        catalog.set_search_query("cat");
        catalog.toggle_filter("Banner Design");

        assert!(catalog.filtered_works().is_empty());
    }

    #[test]
    fn test_new_work_appears_in_active_view() {
        let (mut catalog, _, _) = sample_catalog();
        catalog.toggle_filter("banner design");
        assert_eq!(catalog.filtered_works().len(), 1);

        catalog
            .add_work(WorkDraft::new("Sale Banner", "Cy").tag("Banner Design"))
            .unwrap();
        assert_eq!(titles(&catalog.filtered_works()), vec!["Banner", "Sale Banner"]);
    }

    #[test]
    fn test_filter_state_not_persisted() {
        let (mut catalog, _, _) = sample_catalog();
        let writes = catalog.store().writes();

        catalog.set_search_query("cat");
        catalog.toggle_filter("logo design");
        catalog.clear_filters();

        assert_eq!(catalog.store().writes(), writes);
    }

    #[test]
    fn test_strict_policy_rejects_malformed_data() {
        let store = MemoryStore::with_blobs([(keys::SAVED, "not json")]);
        let result = Catalog::open(store, clock_at(0), LoadPolicy::Strict);

        match result {
            Err(CatalogError::MalformedPersistedData { key, .. }) => assert_eq!(key, keys::SAVED),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("malformed data was accepted"),
        }
    }

    #[test]
    fn test_strict_policy_rejects_wrong_shape() {
        let store = MemoryStore::with_blobs([(keys::WORKS, r#"[{"id":1}]"#)]);
        let result = Catalog::open(store, clock_at(0), LoadPolicy::Strict);
        assert!(matches!(
            result,
            Err(CatalogError::MalformedPersistedData { .. })
        ));
    }

    #[test]
    fn test_lenient_policy_starts_empty_collection() {
        let store = MemoryStore::with_blobs([
            (keys::WORKS.to_string(), "{broken".to_string()),
            (keys::SAVED.to_string(), "[5]".to_string()),
        ]);
        let mut catalog = Catalog::open(store, clock_at(0), LoadPolicy::Lenient).unwrap();

        assert!(catalog.is_empty());
        assert!(catalog.is_work_saved(WorkId(5)));
        assert_eq!(catalog.store().blob(keys::WORKS), Some("{broken"));

        catalog.add_work(cat_logo()).unwrap();
        let stored: Vec<Work> =
            serde_json::from_str(catalog.store().blob(keys::WORKS).unwrap()).unwrap();
        assert_eq!(stored.len(), 1);
    }

    #[test]
    fn test_round_trip_through_store() {
        let clock = clock_at(1_700_000_000_000);
        let mut catalog = Catalog::open(MemoryStore::new(), &clock, LoadPolicy::Strict).unwrap();
        let id = catalog
            .add_work(cat_logo().instagram_url("https://instagram.com/ann"))
            .unwrap();
        catalog.toggle_save_work(id).unwrap();
        clock.set(clock.now() + Duration::milliseconds(1_234));
        catalog.add_favorite(ArtistDraft::new("Ann", 1)).unwrap();

        let works = catalog.works().to_vec();
        let favorites = catalog.favorites().to_vec();
        let store = catalog.into_store();

        let reopened = Catalog::open(store, &clock, LoadPolicy::Strict).unwrap();
        assert_eq!(reopened.works(), works.as_slice());
        assert_eq!(reopened.favorites(), favorites.as_slice());
        assert!(reopened.is_work_saved(id));
    }

    #[test]
    fn test_works_by_author_exact() {
        let (catalog, _, _) = sample_catalog();
        assert_eq!(catalog.works_by_author("Ann").len(), 1);
        assert!(catalog.works_by_author("ann").is_empty());
    }

    #[test]
    fn test_load_policy_from_str() {
        assert_eq!("strict".parse::<LoadPolicy>(), Ok(LoadPolicy::Strict));
        assert_eq!(" Lenient ".parse::<LoadPolicy>(), Ok(LoadPolicy::Lenient));
        assert!("loose".parse::<LoadPolicy>().is_err());
    }
}
