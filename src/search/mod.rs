//! Search and filtering over the catalog
//!
//! Provides the filter engine that derives the visible subset of works from a
//! free-text query and a set of active tag filters, plus the tag vocabulary
//! used to offer filter choices.

pub mod filter;
pub mod state;
pub mod vocabulary;

pub use filter::{WorkFilterExt, matches_query, matches_tags, normalize_tag};
pub use state::{FilterEngine, FilterState};
pub use vocabulary::{all_tags, tag_counts};
