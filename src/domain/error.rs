//! Error types for the style catalog.
//!
//! This module defines the centralized error type [`CatalogError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented using the
//! `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for catalog operations.
///
/// Reads against the record store surface as [`CatalogError::Store`] and abort
/// the refresh in flight. Failed writes surface as [`CatalogError::Mutation`];
/// the store guarantees no partial record exists afterwards.
///
/// # Examples
///
/// ```
/// use style_catalog::domain::CatalogError;
///
/// fn fetch() -> Result<(), CatalogError> {
///     Err(CatalogError::Store("connection lost".to_string()))
/// }
///
/// assert!(fetch().is_err());
/// ```
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Fetching records from the store failed.
    ///
    /// Also raised when a style references a client or creator the store
    /// cannot resolve.
    #[error("Store error: {0}")]
    Store(String),

    /// Creating a record failed. No partial record was written.
    #[error("Mutation error: {0}")]
    Mutation(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog JSON could not be parsed or serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration is invalid or unreadable.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
