//! Testing utilities for artfolio
//!
//! Fixture drafts, a frozen clock, and `TestStore`, a temporary sled store
//! that removes itself on drop.
//!
//! Only available when compiled with `cfg(test)`.

use crate::catalog::{Catalog, FixedClock, LoadPolicy};
use crate::db::{SledStore, WorkDraft};
use chrono::DateTime;
use std::path::PathBuf;
use tempfile::TempDir;

/// "Cat Logo" by Ann, tagged "Logo Design"
pub fn cat_logo() -> WorkDraft {
    WorkDraft::new("Cat Logo", "Ann")
        .image("data:image/png;base64,Q0FU")
        .tag("Logo Design")
}

/// "Banner" by Bo, tagged "Banner Design"
pub fn banner() -> WorkDraft {
    WorkDraft::new("Banner", "Bo")
        .image("data:image/png;base64,QkFO")
        .tag("Banner Design")
}

/// Clock frozen at `millis` since the Unix epoch
///
/// # Panics
/// Panics if `millis` is out of chrono's range.
pub fn clock_at(millis: i64) -> FixedClock {
    FixedClock::new(DateTime::from_timestamp_millis(millis).expect("timestamp in range"))
}

/// Temporary on-disk store that is deleted when dropped
pub struct TestStore {
    dir: TempDir,
}

impl TestStore {
    /// # Panics
    /// Panics if the temporary directory cannot be created.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Path of the sled database inside the temp directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().join("db")
    }

    /// Open (or reopen) the sled store
    ///
    /// # Panics
    /// Panics if the store cannot be opened.
    pub fn open(&self) -> SledStore {
        SledStore::open(self.path()).expect("Failed to open test store")
    }

    /// Open a strict catalog over the store with a frozen clock
    ///
    /// # Panics
    /// Panics if the catalog cannot be loaded.
    pub fn catalog(&self, millis: i64) -> Catalog<SledStore, FixedClock> {
        Catalog::open(self.open(), clock_at(millis), LoadPolicy::Strict)
            .expect("Failed to open test catalog")
    }
}

impl Default for TestStore {
    fn default() -> Self {
        Self::new()
    }
}
