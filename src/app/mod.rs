//! Application layer: the list controller and its card presenters.
//!
//! Data flows one way through this layer:
//!
//! ```text
//! FilterUpdate → Controller → RecordStore fetch → filter → sort
//!                                  ↓
//!               StyleCardPresenter per style → ListSnapshot
//!                                  ↓
//!               card operation → Vec<Action> → Controller executes
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effects a card hands back to its controller
//! - [`controller`]: Filter state owner and refresh pipeline
//! - [`filter`]: Filter predicates, client resolution and ordering
//! - [`presenter`]: Per-style card derivation and card operations

pub mod actions;
pub mod controller;
pub mod filter;
pub mod presenter;

pub use actions::Action;
pub use controller::{Host, StyleListController, DEFAULT_PLACEHOLDER_IMAGE};
pub use filter::{FilterState, FilterUpdate, ResolvedStyle};
pub use presenter::StyleCardPresenter;
