//! User interface layer: view models and their text rendering.
//!
//! The list controller publishes an immutable [`ListSnapshot`] after every
//! refresh. Rendering is a pure function of that snapshot, so the business
//! logic is independent of any UI toolkit.
//!
//! ```text
//! StyleListController::refresh → ListSnapshot → render → String
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Plain-text renderer for snapshots and filter dropdowns

pub mod renderer;
pub mod viewmodel;

pub use renderer::{render, render_filters};
pub use viewmodel::{DropdownOption, EmptyState, FilterOptions, ListSnapshot, StyleCard};
