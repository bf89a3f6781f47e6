//! Storage layer for catalog records.
//!
//! This module provides the record-store abstraction the list screen reads
//! styles, clients, users and SKU counts through, plus two backends.
//!
//! # Modules
//!
//! - `backend`: [`RecordStore`] trait and the [`StyleQuery`] fetch predicate
//! - `memory`: In-memory store over a [`CatalogData`]
//! - `json`: JSON file store with atomic writes
//! - `models`: The serialized catalog container

pub mod backend;
pub mod json;
pub mod memory;
pub mod models;

pub use backend::{RecordStore, StyleQuery};
pub use json::JsonStore;
pub use memory::MemoryStore;
pub use models::CatalogData;
