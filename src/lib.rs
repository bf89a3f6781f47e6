//! Style Catalog: master style browsing for an apparel styling catalog.
//!
//! The crate implements one screen of a styling platform: a list of "master
//! style" records that can be filtered by client, price category, country and
//! free text, each shown as a summary card with quick actions (view detail,
//! duplicate, show code).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Binary (main.rs, cli.rs)                           │  ← CLI viewer
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - StyleListController: filters, refresh pipeline   │
//! │  - StyleCardPresenter: card derivation, actions     │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Host Layer    │
//! │ (ui/)         │   │ (storage/)    │   │ (host/)       │
//! │ - Snapshots   │   │ - RecordStore │   │ - Notifier    │
//! │ - Rendering   │   │ - JSON/memory │   │ - Navigator   │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/): records, ids, errors             │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! Everything runs synchronously on the caller's thread. A refresh either
//! publishes a new [`ui::ListSnapshot`] or fails and leaves the previous one.
//!
//! # Example
//!
//! ```rust
//! use style_catalog::app::{FilterUpdate, StyleListController};
//! use style_catalog::domain::Country;
//! use style_catalog::storage::{CatalogData, MemoryStore};
//! use style_catalog::ui::render;
//!
//! let mut controller = StyleListController::new(MemoryStore::new(CatalogData::default()));
//! controller.set_filter(FilterUpdate::Country(Some(Country::Us)))?;
//! println!("{}", render(controller.snapshot()));
//! # Ok::<(), style_catalog::CatalogError>(())
//! ```

pub mod app;
pub mod cli;
pub mod domain;
pub mod host;
pub mod observability;
pub mod storage;
pub mod ui;

#[cfg(test)]
mod testing;

pub use app::{Action, FilterState, FilterUpdate, StyleCardPresenter, StyleListController};
pub use domain::{CatalogError, Result};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use storage::JsonStore;

/// Catalog configuration.
///
/// # Example
///
/// ```toml
/// catalog = "/srv/styles/catalog.json"
/// placeholder_image = "assets/no-picture.png"
/// trace_level = "debug"
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to the JSON catalog file. Default: `catalog.json`
    pub catalog_path: PathBuf,

    /// Image shown on cards whose style has no picture.
    pub placeholder_image: String,

    /// Tracing level. Options: `trace`, `debug`, `info`, `warn`, `error`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("catalog.json"),
            placeholder_image: app::DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            trace_level: None,
        }
    }
}

/// On-disk shape of the configuration file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    catalog: Option<PathBuf>,
    placeholder_image: Option<String>,
    trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from a string map.
    ///
    /// Recognized keys: `catalog`, `placeholder_image`, `trace_level`. Missing
    /// or empty values fall back to defaults; unknown keys are ignored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use style_catalog::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("catalog".to_string(), "styles.json".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.catalog_path.to_str(), Some("styles.json"));
    /// assert_eq!(config.placeholder_image, "placeholder.png");
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let value = |key: &str| {
            map.get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        Self {
            catalog_path: value("catalog").map_or(defaults.catalog_path, PathBuf::from),
            placeholder_image: value("placeholder_image").unwrap_or(defaults.placeholder_image),
            trace_level: value("trace_level"),
        }
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Config`] if the file cannot be read or is not
    /// valid TOML with the recognized keys.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            CatalogError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        let file: ConfigFile = toml::from_str(&contents).map_err(|e| {
            CatalogError::Config(format!("failed to parse {}: {e}", path.display()))
        })?;

        let defaults = Self::default();
        Ok(Self {
            catalog_path: file.catalog.unwrap_or(defaults.catalog_path),
            placeholder_image: file.placeholder_image.unwrap_or(defaults.placeholder_image),
            trace_level: file.trace_level,
        })
    }
}

/// Initializes tracing and opens the configured catalog.
///
/// The returned controller has not been refreshed yet.
///
/// # Errors
///
/// Returns an error if the catalog file exists but cannot be read or parsed.
pub fn initialize(config: &Config) -> Result<StyleListController<JsonStore>> {
    observability::init_tracing(config);
    tracing::debug!(catalog = ?config.catalog_path, "initializing style catalog");

    let store = JsonStore::open(&config.catalog_path)?;
    Ok(StyleListController::new(store).with_placeholder_image(config.placeholder_image.clone()))
}
