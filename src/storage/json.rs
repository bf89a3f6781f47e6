//! JSON file-based record store.
//!
//! This module provides a human-readable catalog file backend. The whole
//! catalog is loaded into memory on open and written back after every
//! mutation, using atomic file writes (write-to-temp + rename) so the file is
//! never left half-written.

use crate::domain::error::{CatalogError, Result};
use crate::domain::{Client, MasterStyle, NewStyle, StyleId, User, UserId};
use crate::storage::backend::{RecordStore, StyleQuery};
use crate::storage::memory::MemoryStore;
use crate::storage::models::CatalogData;
use std::path::{Path, PathBuf};

/// JSON file record store.
///
/// Reads are served from the in-memory copy. [`RecordStore::add_style`] writes
/// the file before returning; if the write fails the new row is dropped from
/// memory too, so a failed mutation leaves no trace.
///
/// # Thread Safety
///
/// This type is `Send` but not `Sync`. It is owned by a single controller.
pub struct JsonStore {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory tables, loaded on open.
    records: MemoryStore,
}

impl JsonStore {
    /// Opens a catalog file, or starts an empty catalog if it doesn't exist.
    ///
    /// Parent directories are created automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - File exists but contains invalid JSON
    /// - File permissions prevent reading
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use style_catalog::storage::JsonStore;
    ///
    /// let store = JsonStore::open("/tmp/catalog.json")?;
    /// # Ok::<(), style_catalog::CatalogError>(())
    /// ```
    pub fn open(file_path: impl Into<PathBuf>) -> Result<Self> {
        let file_path = file_path.into();
        tracing::debug!(path = ?file_path, "opening JSON catalog");

        if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("catalog file missing, starting empty");
            CatalogData::default()
        };

        tracing::debug!(
            clients = data.clients.len(),
            styles = data.styles.len(),
            skus = data.skus.len(),
            "catalog opened"
        );

        Ok(Self {
            file_path,
            records: MemoryStore::new(data),
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<CatalogData> {
        let contents = std::fs::read_to_string(path)?;
        let data: CatalogData = serde_json::from_str(&contents)
            .map_err(|e| CatalogError::Store(format!("failed to parse catalog: {e}")))?;

        tracing::debug!(version = data.version, "loaded catalog data");
        Ok(data)
    }

    fn save_to_file(&self) -> Result<()> {
        tracing::debug!(path = ?self.file_path, "saving catalog");

        let json = serde_json::to_string_pretty(self.records.data())?;
        let tmp_path = self.file_path.with_extension("tmp");

        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::debug!("catalog saved");
        Ok(())
    }
}

impl RecordStore for JsonStore {
    fn search_styles(&self, query: &StyleQuery) -> Result<Vec<MasterStyle>> {
        self.records.search_styles(query)
    }

    fn get_style(&self, id: &StyleId) -> Result<Option<MasterStyle>> {
        self.records.get_style(id)
    }

    fn all_clients(&self) -> Result<Vec<Client>> {
        self.records.all_clients()
    }

    fn get_user(&self, id: &UserId) -> Result<Option<User>> {
        self.records.get_user(id)
    }

    fn count_skus(&self, style: &StyleId) -> Result<usize> {
        self.records.count_skus(style)
    }

    fn add_style(&mut self, style: NewStyle) -> Result<MasterStyle> {
        let _span = tracing::debug_span!("json_add_style", ref_id = %style.ref_id).entered();

        let stored = self.records.add_style(style)?;

        if let Err(e) = self.save_to_file() {
            tracing::error!(error = %e, "failed to persist style, rolling back");
            self.records.pop_style();
            return Err(CatalogError::Mutation(format!(
                "failed to save style {}: {e}",
                stored.ref_id
            )));
        }

        Ok(stored)
    }
}
