//! Work predicates used by the filter engine
//!
//! This module provides the two independent predicates a work must satisfy to
//! be visible: a free-text search match and a tag match.
//!
//! # Iterator Adapters
//!
//! [`WorkFilterExt`] adds the same predicates to any iterator of `&Work`, so
//! ad-hoc collections can be filtered with the exact semantics the engine
//! uses:
//!
//! ```
//! use artfolio::db::{WorkDraft, WorkId};
//! use artfolio::search::filter::WorkFilterExt;
//! use std::collections::BTreeSet;
//!
//! let works = vec![
//!     WorkDraft::new("Cat Logo", "Ann").tag("Logo Design").into_work(WorkId(1)),
//!     WorkDraft::new("Banner", "Bo").tag("Banner Design").into_work(WorkId(2)),
//! ];
//! let filters: BTreeSet<String> = ["logo design".to_string()].into();
//!
//! let hits: Vec<_> = works.iter().matching_query("cat").matching_tags(&filters).collect();
//! assert_eq!(hits.len(), 1);
//! ```

use crate::db::Work;
use std::collections::BTreeSet;

/// Normalize a tag for matching: trimmed and lower-cased
#[must_use]
pub fn normalize_tag(tag: &str) -> String {
    tag.trim().to_lowercase()
}

/// Case-insensitive substring match of `query` on title, description or author
///
/// An empty query matches every work. The query is not trimmed.
#[must_use]
pub fn matches_query(work: &Work, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    [&work.title, &work.description, &work.author]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// True if any of the work's normalized tags is an active filter
///
/// An empty filter set matches every work. `filters` must already hold
/// normalized tags.
#[must_use]
pub fn matches_tags(work: &Work, filters: &BTreeSet<String>) -> bool {
    filters.is_empty() || work.tags.iter().any(|tag| filters.contains(&normalize_tag(tag)))
}

/// Extension trait adding the work predicates to iterators
pub trait WorkFilterExt<'a>: Iterator<Item = &'a Work> + Sized {
    /// Keep works matching the free-text `query`
    fn matching_query(self, query: &'a str) -> impl Iterator<Item = &'a Work> {
        self.filter(move |work| matches_query(work, query))
    }

    /// Keep works carrying at least one of the normalized `filters`
    fn matching_tags(self, filters: &'a BTreeSet<String>) -> impl Iterator<Item = &'a Work> {
        self.filter(move |work| matches_tags(work, filters))
    }
}

impl<'a, I> WorkFilterExt<'a> for I where I: Iterator<Item = &'a Work> {}
