//! Domain layer for the style catalog.
//!
//! This module contains the record types and error types of the catalog,
//! independent of any storage backend or host environment.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`client`]: Clients, countries and price categories
//! - [`style`]: Master styles, users and SKU variants
//!
//! # Examples
//!
//! ```
//! use style_catalog::domain::{Client, Country, PriceCategory};
//!
//! let client = Client::new("c1", "Acme", Country::Uk, PriceCategory::Low);
//! assert_eq!(client.dropdown_label(), "Acme (UK)");
//! ```

pub mod client;
pub mod error;
pub mod style;

pub use client::{Client, ClientId, Country, PriceCategory};
pub use error::{CatalogError, Result};
pub use style::{MasterStyle, NewStyle, SkuRecord, StyleId, User, UserId};
