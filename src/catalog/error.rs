//! Catalog-specific error types
//!
//! # Error Types
//!
//! - **`Database`**: The blob store failed to read or write
//! - **`MalformedPersistedData`**: A stored collection could not be parsed
//! - **`Serialize`**: A collection could not be encoded for storage
//! - **`Validation`**: A draft was rejected at the catalog boundary
//! - **`IdsExhausted`**: No work id is left above the highest one in use
//!
//! Missing entries and duplicate favorites are not errors; the operations
//! report them through their return values.

use thiserror::Error;

/// Catalog errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Blob store error
    #[error("Storage error: {0}")]
    Database(#[from] crate::db::DbError),

    /// Stored payload for `key` is not a valid collection
    #[error("Malformed data stored under '{key}': {source}")]
    MalformedPersistedData {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Collection could not be encoded
    #[error("Error while encoding data: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Draft failed validation
    #[error("Invalid work: {0}")]
    Validation(String),

    /// The highest stored id leaves no room for a new one
    #[error("No work id available after {last}")]
    IdsExhausted { last: i64 },
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
