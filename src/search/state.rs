//! Filter state and recomputation
//!
//! [`FilterEngine`] owns the current search query and active tag filters and
//! keeps a snapshot of the works that pass both predicates:
//!
//! ```
//! use artfolio::db::{WorkDraft, WorkId};
//! use artfolio::search::FilterEngine;
//!
//! let works = vec![
//!     WorkDraft::new("Cat Logo", "Ann").tag("Logo Design").into_work(WorkId(1)),
//!     WorkDraft::new("Banner", "Bo").tag("Banner Design").into_work(WorkId(2)),
//! ];
//!
//! let mut engine = FilterEngine::new();
//! engine.set_search_query("cat", &works);
//! assert_eq!(engine.filtered_ids(), &[WorkId(1)]);
//! ```
//!
//! Every mutation recomputes the whole view, O(works × tags per work).

use super::filter::{matches_query, matches_tags, normalize_tag};
use crate::db::{Work, WorkId};
use std::collections::{BTreeSet, HashSet};
use tracing::trace;

/// Current query, active filters and the derived visible subset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Raw query as entered; empty matches all
    pub search_query: String,
    /// Normalized tags; empty matches all
    pub active_filters: BTreeSet<String>,
    /// Ids of visible works, in catalog order
    pub filtered: Vec<WorkId>,
}

/// Derives the visible subset of the catalog
#[derive(Debug, Clone, Default)]
pub struct FilterEngine {
    state: FilterState,
}

impl FilterEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `query` verbatim and recompute
    pub fn set_search_query(&mut self, query: impl Into<String>, works: &[Work]) {
        self.state.search_query = query.into();
        self.apply_filters(works);
    }

    /// Toggle the normalized `tag` in the active filters and recompute
    ///
    /// Returns `true` if the tag is active afterwards.
    pub fn toggle_filter(&mut self, tag: &str, works: &[Work]) -> bool {
        let tag = normalize_tag(tag);
        let active = if self.state.active_filters.remove(&tag) {
            false
        } else {
            self.state.active_filters.insert(tag);
            true
        };
        self.apply_filters(works);
        active
    }

    /// Drop every active filter and recompute
    pub fn clear_filters(&mut self, works: &[Work]) {
        self.state.active_filters.clear();
        self.apply_filters(works);
    }

    /// Recompute the visible subset from scratch
    pub fn apply_filters(&mut self, works: &[Work]) {
        let state = &mut self.state;
        state.filtered = works
            .iter()
            .filter(|work| {
                matches_query(work, &state.search_query)
                    && matches_tags(work, &state.active_filters)
            })
            .map(|work| work.id)
            .collect();
        trace!(
            total = works.len(),
            visible = state.filtered.len(),
            "recomputed filtered works"
        );
    }

    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.state.search_query
    }

    #[must_use]
    pub const fn active_filters(&self) -> &BTreeSet<String> {
        &self.state.active_filters
    }

    #[must_use]
    pub fn is_filter_active(&self, tag: &str) -> bool {
        self.state.active_filters.contains(&normalize_tag(tag))
    }

    #[must_use]
    pub fn filtered_ids(&self) -> &[WorkId] {
        &self.state.filtered
    }

    /// Resolve the visible ids against `works`, keeping catalog order
    ///
    /// Works missing from `works` are skipped.
    #[must_use]
    pub fn filtered_works<'w>(&self, works: &'w [Work]) -> Vec<&'w Work> {
        let visible: HashSet<WorkId> = self.state.filtered.iter().copied().collect();
        works.iter().filter(|work| visible.contains(&work.id)).collect()
    }

    #[must_use]
    pub const fn state(&self) -> &FilterState {
        &self.state
    }
}
