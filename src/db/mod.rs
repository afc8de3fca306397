//! Blob storage for artfolio
//!
//! The catalog persists its three collections as independent string blobs.
//! This module defines that contract ([`BlobStore`]) and two backends:
//!
//! - [`SledStore`]: on-disk store using sled as the embedded database
//! - [`MemoryStore`]: in-process map, used as a test double and for
//!   throwaway catalogs
//!
//! Keys used by the catalog live in [`keys`].

use sled::{Db, Tree};
use std::path::Path;

pub mod error;
pub mod memory;
pub mod types;

pub use error::DbError;
pub use memory::MemoryStore;
pub use types::{ArtistDraft, FavoriteArtist, Work, WorkDraft, WorkId};

/// Storage keys for the persisted collections
pub mod keys {
    /// JSON array of works
    pub const WORKS: &str = "artfolio.works";
    /// JSON array of favorite artists
    pub const FAVORITES: &str = "artfolio.favorites";
    /// JSON array of saved work ids
    pub const SAVED: &str = "artfolio.saved";
}

/// Opaque key-value store of string blobs
///
/// A missing key is `Ok(None)`, never an error.
pub trait BlobStore {
    /// Read the blob stored under `key`
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, DbError>;

    /// Store `value` under `key`, replacing any previous blob
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the backend cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), DbError>;
}

impl<S: BlobStore + ?Sized> BlobStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, DbError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), DbError> {
        (**self).set(key, value)
    }
}

/// sled-backed blob store
///
/// All blobs live in a single `blobs` tree as UTF-8 bytes.
pub struct SledStore {
    db: Db,
    blobs: Tree,
}

impl SledStore {
    /// Opens or creates a store at the specified path
    ///
    /// # Examples
    /// ```no_run
    /// use artfolio::db::SledStore;
    /// let store = SledStore::open("my_gallery").unwrap();
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the parent directory cannot be created or the
    /// database cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DbError> {
        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let db = sled::open(path)?;
        let blobs = db.open_tree("blobs")?;
        Ok(Self { db, blobs })
    }

    /// Flush all pending writes to disk
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the flush operation fails.
    pub fn flush(&self) -> Result<(), DbError> {
        self.db.flush()?;
        Ok(())
    }

    /// Remove every stored blob
    ///
    /// # Errors
    ///
    /// Returns `DbError` if clearing the tree fails.
    pub fn clear(&self) -> Result<(), DbError> {
        self.blobs.clear()?;
        Ok(())
    }

    /// Store raw bytes under `key`, bypassing UTF-8 handling
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the write fails.
    pub fn set_raw(&self, key: &str, value: &[u8]) -> Result<(), DbError> {
        self.blobs.insert(key.as_bytes(), value)?;
        Ok(())
    }
}

impl BlobStore for SledStore {
    fn get(&self, key: &str) -> Result<Option<String>, DbError> {
        match self.blobs.get(key.as_bytes())? {
            Some(value) => String::from_utf8(value.to_vec())
                .map(Some)
                .map_err(|_| DbError::InvalidUtf8 { key: key.to_string() }),
            None => Ok(None),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), DbError> {
        self.blobs.insert(key.as_bytes(), value.as_bytes())?;
        Ok(())
    }
}

impl Drop for SledStore {
    fn drop(&mut self) {
        // Best-effort flush; callers needing durability call flush()
        let _ = self.db.flush();
    }
}
