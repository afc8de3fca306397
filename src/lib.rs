//! Artfolio - a local gallery catalog
//!
//! This library stores creative works (an image payload plus metadata),
//! lets callers tag, search, filter and bookmark them, and persists every
//! collection to a pluggable key-value blob store.
//!
//! The entry point is [`catalog::Catalog`], constructed over any
//! [`db::BlobStore`] and [`catalog::Clock`].

use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod output;
pub mod search;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum ArtfolioError {
    /// Storage error
    #[error("Database error: {0}")]
    DbError(#[from] db::DbError),
    /// Catalog error
    #[error("Catalog error: {0}")]
    CatalogError(#[from] catalog::CatalogError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
