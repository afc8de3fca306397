//! Record types persisted by the catalog
//!
//! These are the explicit shapes of the three stored collections. They are
//! serialized as JSON with camelCase field names, so the payloads stay
//! readable by any other client of the same blob store.
//!
//! # Types
//!
//! - **`WorkId`**: Integer identifier assigned when a work is added
//! - **`Work`**: A catalog entry (image payload plus metadata)
//! - **`WorkDraft`**: Caller-supplied fields of a work, before an id exists
//! - **`FavoriteArtist`**: A bookmarked creator name
//! - **`ArtistDraft`**: Caller-supplied fields of a favorite
//!
//! # Examples
//!
//! ```
//! use artfolio::db::types::{WorkDraft, WorkId};
//!
//! let draft = WorkDraft::new("Cat Logo", "Ann")
//!     .description("A cat, as a logo")
//!     .tag("Logo Design");
//! let work = draft.into_work(WorkId(1));
//! assert_eq!(work.tags, vec!["Logo Design".to_string()]);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a [`Work`]
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct WorkId(pub i64);

impl fmt::Display for WorkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for WorkId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// A creative submission
///
/// Tags are kept exactly as entered; normalization only happens when
/// matching or building the tag vocabulary.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Work {
    pub id: WorkId,
    pub image: String,
    pub title: String,
    pub description: String,
    pub author: String,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram_url: Option<String>,
}

/// Fields of a work supplied by the caller
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorkDraft {
    pub image: String,
    pub title: String,
    pub description: String,
    pub author: String,
    pub tags: Vec<String>,
    pub instagram_url: Option<String>,
}

impl WorkDraft {
    /// Create a draft with a title and author, everything else empty
    #[must_use]
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Append a single tag
    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    #[must_use]
    pub fn tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn instagram_url(mut self, url: impl Into<String>) -> Self {
        self.instagram_url = Some(url.into());
        self
    }

    /// Turn the draft into a stored work under `id`
    #[must_use]
    pub fn into_work(self, id: WorkId) -> Work {
        Work {
            id,
            image: self.image,
            title: self.title,
            description: self.description,
            author: self.author,
            tags: self.tags,
            instagram_url: self.instagram_url,
        }
    }
}

/// A bookmarked creator, keyed by exact `name`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteArtist {
    pub name: String,
    pub work_count: u32,
    pub added_date: DateTime<Utc>,
}

/// Fields of a favorite supplied by the caller
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtistDraft {
    pub name: String,
    pub work_count: u32,
}

impl ArtistDraft {
    #[must_use]
    pub fn new(name: impl Into<String>, work_count: u32) -> Self {
        Self {
            name: name.into(),
            work_count,
        }
    }

    #[must_use]
    pub fn into_favorite(self, added_date: DateTime<Utc>) -> FavoriteArtist {
        FavoriteArtist {
            name: self.name,
            work_count: self.work_count,
            added_date,
        }
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
