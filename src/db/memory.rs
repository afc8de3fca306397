//! In-memory blob store

use super::{BlobStore, DbError};
use std::collections::HashMap;

/// Blob store backed by a `HashMap`
///
/// Nothing is written to disk. Useful as a test double and for catalogs that
/// only live as long as the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blobs: HashMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `(key, value)` pairs
    #[must_use]
    pub fn with_blobs<I, K, V>(blobs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            blobs: blobs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
            writes: 0,
        }
    }

    /// Raw blob stored under `key`
    #[must_use]
    pub fn blob(&self, key: &str) -> Option<&str> {
        self.blobs.get(key).map(String::as_str)
    }

    /// Number of `set` calls since creation
    #[must_use]
    pub const fn writes(&self) -> usize {
        self.writes
    }
}

impl BlobStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, DbError> {
        Ok(self.blobs.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), DbError> {
        self.blobs.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}
