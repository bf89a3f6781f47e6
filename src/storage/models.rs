//! Catalog container shared by the storage backends.
//!
//! [`CatalogData`] is the full set of tables as serialized to disk by
//! [`JsonStore`](crate::storage::JsonStore) and held by
//! [`MemoryStore`](crate::storage::MemoryStore).

use crate::domain::{Client, MasterStyle, SkuRecord, StyleId, User};
use serde::{Deserialize, Serialize};

/// Current version of the catalog file format.
pub const CATALOG_VERSION: u32 = 1;

/// All catalog tables.
///
/// Each table is a `Vec` so insertion order is preserved across loads.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "clients": [
///     { "id": "c1", "name": "Acme", "country": "UK", "price_category": "Low" }
///   ],
///   "users": [
///     { "id": "u1", "name": "Dana" }
///   ],
///   "styles": [
///     {
///       "id": "1",
///       "ref_id": "A1",
///       "client": "c1",
///       "picture": null,
///       "description": "red dress",
///       "created_at": "2024-03-01T09:00:00Z",
///       "created_by": "u1"
///     }
///   ],
///   "skus": [
///     { "id": "sku-1", "style": "1" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogData {
    /// Version of the file format for future migrations.
    pub version: u32,

    #[serde(default)]
    pub clients: Vec<Client>,

    #[serde(default)]
    pub users: Vec<User>,

    #[serde(default)]
    pub styles: Vec<MasterStyle>,

    #[serde(default)]
    pub skus: Vec<SkuRecord>,
}

impl Default for CatalogData {
    fn default() -> Self {
        Self {
            version: CATALOG_VERSION,
            clients: Vec::new(),
            users: Vec::new(),
            styles: Vec::new(),
            skus: Vec::new(),
        }
    }
}

impl CatalogData {
    /// Returns the next free numeric style id.
    ///
    /// Ids are 1-indexed. Non-numeric ids already present are skipped when
    /// looking for the maximum.
    #[must_use]
    pub fn next_style_id(&self) -> StyleId {
        let max = self
            .styles
            .iter()
            .filter_map(|style| style.id.0.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        StyleId::new(max.saturating_add(1).to_string())
    }
}
