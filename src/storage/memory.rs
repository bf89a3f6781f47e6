//! In-memory record store.
//!
//! Holds a [`CatalogData`] and answers every query by scanning it. Used by
//! embedders that already have the records loaded, and as the read path of
//! [`JsonStore`](crate::storage::JsonStore).

use crate::domain::error::Result;
use crate::domain::{Client, MasterStyle, NewStyle, StyleId, User, UserId};
use crate::storage::backend::{RecordStore, StyleQuery};
use crate::storage::models::CatalogData;

/// Record store backed by an in-memory [`CatalogData`].
///
/// # Examples
///
/// ```
/// use style_catalog::storage::{CatalogData, MemoryStore, RecordStore, StyleQuery};
///
/// let store = MemoryStore::new(CatalogData::default());
/// assert!(store.search_styles(&StyleQuery::All)?.is_empty());
/// # Ok::<(), style_catalog::CatalogError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: CatalogData,
}

impl MemoryStore {
    #[must_use]
    pub const fn new(data: CatalogData) -> Self {
        Self { data }
    }

    #[must_use]
    pub const fn data(&self) -> &CatalogData {
        &self.data
    }

    /// Removes the most recently added style. Used to undo a failed write.
    pub(crate) fn pop_style(&mut self) -> Option<MasterStyle> {
        self.data.styles.pop()
    }
}

impl RecordStore for MemoryStore {
    fn search_styles(&self, query: &StyleQuery) -> Result<Vec<MasterStyle>> {
        let _span = tracing::debug_span!("memory_search_styles", query = ?query).entered();

        let styles: Vec<MasterStyle> = self
            .data
            .styles
            .iter()
            .filter(|style| query.matches(style))
            .cloned()
            .collect();

        tracing::debug!(count = styles.len(), "retrieved styles");
        Ok(styles)
    }

    fn get_style(&self, id: &StyleId) -> Result<Option<MasterStyle>> {
        Ok(self.data.styles.iter().find(|style| &style.id == id).cloned())
    }

    fn all_clients(&self) -> Result<Vec<Client>> {
        Ok(self.data.clients.clone())
    }

    fn get_user(&self, id: &UserId) -> Result<Option<User>> {
        Ok(self.data.users.iter().find(|user| &user.id == id).cloned())
    }

    fn count_skus(&self, style: &StyleId) -> Result<usize> {
        Ok(self.data.skus.iter().filter(|sku| &sku.style == style).count())
    }

    fn add_style(&mut self, style: NewStyle) -> Result<MasterStyle> {
        let _span = tracing::debug_span!("memory_add_style", ref_id = %style.ref_id).entered();

        let id = self.data.next_style_id();
        let stored = style.into_style(id);
        self.data.styles.push(stored.clone());

        tracing::debug!(style_id = %stored.id, "style added");
        Ok(stored)
    }
}
