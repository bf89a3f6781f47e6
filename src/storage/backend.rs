//! Record store abstraction.
//!
//! This module defines the [`RecordStore`] trait that abstracts over the table
//! storage supplied by the host platform. The controller and card presenters
//! only ever talk to the store through this trait.
//!
//! # Design Philosophy
//!
//! The trait is minimal and focused on the operations the list screen needs,
//! not a generic ORM. There are no transactions beyond single-record atomicity:
//! [`RecordStore::add_style`] either creates the whole row or nothing.

use crate::domain::error::Result;
use crate::domain::{Client, ClientId, MasterStyle, NewStyle, StyleId, User, UserId};

/// Predicate pushed down to the store when fetching styles.
///
/// Only the client filter is pushed down. Every other filter is evaluated in
/// memory after the fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleQuery {
    /// Every style in the catalog.
    All,
    /// Styles whose client is the given one.
    ByClient(ClientId),
}

impl StyleQuery {
    /// Returns `true` if `style` satisfies this query.
    #[must_use]
    pub fn matches(&self, style: &MasterStyle) -> bool {
        match self {
            Self::All => true,
            Self::ByClient(client) => &style.client == client,
        }
    }
}

/// Abstraction over the catalog's record storage.
///
/// Fetches return records in insertion order; the controller relies on this
/// order to break ties when sorting.
///
/// # Implementations
///
/// - [`MemoryStore`](crate::storage::MemoryStore): records held in memory
/// - [`JsonStore`](crate::storage::JsonStore): JSON file with atomic writes
pub trait RecordStore: Send {
    /// Returns every style matching `query`, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn search_styles(&self, query: &StyleQuery) -> Result<Vec<MasterStyle>>;

    /// Retrieves a single style. Returns `Ok(None)` if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn get_style(&self, id: &StyleId) -> Result<Option<MasterStyle>>;

    /// Returns every client, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn all_clients(&self) -> Result<Vec<Client>>;

    /// Retrieves a single user. Returns `Ok(None)` if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn get_user(&self, id: &UserId) -> Result<Option<User>>;

    /// Counts SKU records referencing `style`.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn count_skus(&self, style: &StyleId) -> Result<usize>;

    /// Creates a style and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Mutation`](crate::domain::CatalogError::Mutation)
    /// if the row could not be created. No partial row remains in that case.
    fn add_style(&mut self, style: NewStyle) -> Result<MasterStyle>;
}
