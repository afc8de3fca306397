//! Storage-specific error types
//!
//! This module defines the errors a [`BlobStore`](super::BlobStore) backend can
//! raise. Parsing the stored payloads is not the store's concern; those errors
//! live in [`crate::catalog::CatalogError`].
//!
//! # Error Types
//!
//! - **`SledError`**: Errors from the underlying sled embedded database
//! - **`InvalidUtf8`**: A stored blob is not valid UTF-8 text
//! - **`Io`**: Filesystem errors while preparing the database directory

use thiserror::Error;

/// Blob store errors
#[derive(Debug, Error)]
pub enum DbError {
    /// Represents a sled database error
    #[error("Database error: {0}")]
    SledError(#[from] sled::Error),

    /// Stored bytes under `key` are not valid UTF-8
    #[error("Stored value for key '{key}' is not valid UTF-8")]
    InvalidUtf8 { key: String },

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
