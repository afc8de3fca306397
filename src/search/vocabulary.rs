//! Tag vocabulary derived from the catalog

use super::filter::normalize_tag;
use crate::db::Work;
use std::collections::{BTreeMap, BTreeSet};

/// Sorted, deduplicated normalized tags across all `works`
#[must_use]
pub fn all_tags(works: &[Work]) -> Vec<String> {
    works
        .iter()
        .flat_map(|work| work.tags.iter().map(|tag| normalize_tag(tag)))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Number of works carrying each normalized tag, sorted by tag
///
/// A work listing the same tag twice (in any casing) counts once.
#[must_use]
pub fn tag_counts(works: &[Work]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for work in works {
        let distinct: BTreeSet<String> = work.tags.iter().map(|tag| normalize_tag(tag)).collect();
        for tag in distinct {
            *counts.entry(tag).or_default() += 1;
        }
    }
    counts.into_iter().collect()
}
