//! View model types representing renderable UI state.
//!
//! View models are immutable snapshots produced by the list controller after
//! each refresh. They contain no business logic, only display-ready data, and
//! are consumed by [`render`](crate::ui::render).
//!
//! # Example
//!
//! ```rust
//! use style_catalog::app::FilterState;
//! use style_catalog::ui::ListSnapshot;
//!
//! let snapshot = ListSnapshot::new(vec![], FilterState::default());
//! assert_eq!(snapshot.count_label, "Showing 0 styles");
//! assert!(snapshot.empty_state.is_some());
//! ```

use crate::app::filter::FilterState;
use crate::domain::{ClientId, Country, PriceCategory, StyleId};
use std::borrow::Cow;
use std::fmt;

/// Everything the list screen displays after a refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSnapshot {
    /// One card per style, newest first.
    pub cards: Vec<StyleCard>,

    /// `"Showing {n} styles"`.
    pub count_label: String,

    /// Filters the cards were computed with, for showing dropdown selections.
    pub filters: FilterState,

    /// Message shown instead of cards when nothing matched.
    pub empty_state: Option<EmptyState>,
}

impl ListSnapshot {
    #[must_use]
    pub fn new(cards: Vec<StyleCard>, filters: FilterState) -> Self {
        let count_label = format!("Showing {} styles", cards.len());
        let empty_state = cards.is_empty().then(|| EmptyState {
            message: "No styles found".to_string(),
            subtitle: "Try clearing some filters".to_string(),
        });

        Self {
            cards,
            count_label,
            filters,
            empty_state,
        }
    }
}

impl Default for ListSnapshot {
    fn default() -> Self {
        Self::new(vec![], FilterState::default())
    }
}

/// Display strings of a single style card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleCard {
    pub style_id: StyleId,
    /// Picture reference, or the placeholder when the style has none.
    pub image: String,
    pub title: String,
    pub client_ref: String,
    pub client_line: String,
    pub description: String,
    pub stats: String,
    pub created: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// One entry of a filter dropdown. `value` is `None` for the "All ..." entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownOption<T> {
    pub label: String,
    pub value: Option<T>,
}

impl<T> DropdownOption<T> {
    pub fn all(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: None,
        }
    }

    pub fn new(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            value: Some(value),
        }
    }
}

/// Entries of the three filter dropdowns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptions {
    pub clients: Vec<DropdownOption<ClientId>>,
    pub price_categories: Vec<DropdownOption<PriceCategory>>,
    pub countries: Vec<DropdownOption<Country>>,
}

impl FilterOptions {
    /// Label of the entry whose value equals `selected`.
    ///
    /// No selection shows the leading "All ..." entry. A selection with no
    /// matching entry shows the raw value, so an active filter never reads
    /// as "All".
    #[must_use]
    pub fn selected_label<'a, T: PartialEq + fmt::Display>(
        options: &'a [DropdownOption<T>],
        selected: Option<&T>,
    ) -> Cow<'a, str> {
        match selected {
            None => options
                .first()
                .map_or(Cow::Borrowed(""), |option| Cow::Borrowed(option.label.as_str())),
            Some(value) => options
                .iter()
                .find(|option| option.value.as_ref() == Some(value))
                .map_or_else(
                    || Cow::Owned(value.to_string()),
                    |option| Cow::Borrowed(option.label.as_str()),
                ),
        }
    }
}
