//! Filter state and the in-memory refinement pipeline.
//!
//! [`FilterState`] holds the four list filters. A style is shown when it
//! satisfies every active filter: client, price category and country are
//! combined with AND, while the search term matches if it occurs in the
//! reference, the description, OR the client name.
//!
//! Price category and country are read from the style's client, so styles are
//! first paired with their client into a [`ResolvedStyle`].

use crate::domain::error::{CatalogError, Result};
use crate::domain::{Client, ClientId, Country, MasterStyle, PriceCategory};
use crate::storage::StyleQuery;
use std::collections::HashMap;

/// A style together with the client it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStyle {
    pub style: MasterStyle,
    pub client: Client,
}

/// One change to the filter state, as produced by a dropdown or the search box.
///
/// `None` stands for the "All ..." entry of a dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterUpdate {
    Client(Option<ClientId>),
    PriceCategory(Option<PriceCategory>),
    Country(Option<Country>),
    Search(String),
}

/// Transient filter state owned by the list controller.
///
/// The default value has no active filter and matches every style.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub client_id: Option<ClientId>,
    pub price_category: Option<PriceCategory>,
    pub country: Option<Country>,
    pub search_term: Option<String>,
}

impl FilterState {
    /// Applies a single field update. Any value is accepted.
    pub fn apply(&mut self, update: FilterUpdate) {
        match update {
            FilterUpdate::Client(client_id) => self.client_id = client_id,
            FilterUpdate::PriceCategory(category) => self.price_category = category,
            FilterUpdate::Country(country) => self.country = country,
            FilterUpdate::Search(term) => {
                self.search_term = if term.is_empty() { None } else { Some(term) };
            }
        }
    }

    /// Returns `true` if no filter is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.client_id.is_none()
            && self.price_category.is_none()
            && self.country.is_none()
            && self.normalized_search().is_none()
    }

    /// Fetch predicate for the store. Only the client filter is pushed down.
    #[must_use]
    pub fn query(&self) -> StyleQuery {
        self.client_id
            .clone()
            .map_or(StyleQuery::All, StyleQuery::ByClient)
    }

    /// Search term trimmed and lowercased, `None` if blank.
    #[must_use]
    pub fn normalized_search(&self) -> Option<String> {
        self.search_term
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase)
    }

    /// Returns `true` if `row` satisfies every active filter.
    #[must_use]
    pub fn matches(&self, row: &ResolvedStyle) -> bool {
        self.matches_with(row, self.normalized_search().as_deref())
    }

    /// Retains only the rows matching every active filter, keeping their order.
    pub fn retain_matching(&self, rows: &mut Vec<ResolvedStyle>) {
        let _span = tracing::debug_span!("retain_matching",
            total = rows.len(),
            filters = ?self
        ).entered();

        let term = self.normalized_search();
        rows.retain(|row| self.matches_with(row, term.as_deref()));

        tracing::debug!(filtered_count = rows.len(), "filters applied");
    }

    fn matches_with(&self, row: &ResolvedStyle, term: Option<&str>) -> bool {
        if self
            .client_id
            .as_ref()
            .is_some_and(|client| &row.style.client != client)
        {
            return false;
        }

        if self
            .price_category
            .is_some_and(|category| row.client.price_category != category)
        {
            return false;
        }

        if self
            .country
            .as_ref()
            .is_some_and(|country| &row.client.country != country)
        {
            return false;
        }

        term.map_or(true, |term| {
            row.style.ref_id.to_lowercase().contains(term)
                || row.style.description.to_lowercase().contains(term)
                || row.client.name.to_lowercase().contains(term)
        })
    }
}

/// Pairs each style with its client.
///
/// # Errors
///
/// Returns [`CatalogError::Store`] if a style references a client that is not
/// in `clients`. Every style must have exactly one client.
pub fn resolve_clients(
    styles: Vec<MasterStyle>,
    clients: &HashMap<ClientId, Client>,
) -> Result<Vec<ResolvedStyle>> {
    styles
        .into_iter()
        .map(|style| {
            let client = clients.get(&style.client).cloned().ok_or_else(|| {
                CatalogError::Store(format!(
                    "style {} references unknown client {}",
                    style.id, style.client
                ))
            })?;
            Ok(ResolvedStyle { style, client })
        })
        .collect()
}

/// Sorts rows newest first. Rows created at the same instant keep their order.
pub fn sort_newest_first(rows: &mut [ResolvedStyle]) {
    rows.sort_by(|a, b| b.style.created_at.cmp(&a.style.created_at));
}
