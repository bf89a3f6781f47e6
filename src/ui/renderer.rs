//! Plain-text rendering of list snapshots.
//!
//! Rendering is a pure function from view models to a `String`; the caller
//! decides where the text goes. Nothing here reads controller or store state.
//!
//! # Example
//!
//! ```rust
//! use style_catalog::ui::{render, ListSnapshot};
//!
//! let text = render(&ListSnapshot::default());
//! assert!(text.starts_with("Showing 0 styles"));
//! ```

use crate::ui::viewmodel::{FilterOptions, ListSnapshot, StyleCard};
use std::fmt::Write;

/// Width of the card separator line.
const RULE_WIDTH: usize = 60;

/// Renders the count label followed by every card, or the empty state.
#[must_use]
pub fn render(snapshot: &ListSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", snapshot.count_label);

    if let Some(empty) = &snapshot.empty_state {
        let _ = writeln!(out);
        let _ = writeln!(out, "  {}", empty.message);
        let _ = writeln!(out, "  {}", empty.subtitle);
        return out;
    }

    for (index, card) in snapshot.cards.iter().enumerate() {
        render_card(&mut out, index, card);
    }
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
    out
}

/// Renders the three dropdowns with their current selection.
#[must_use]
pub fn render_filters(options: &FilterOptions, snapshot: &ListSnapshot) -> String {
    let filters = &snapshot.filters;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Client: {} | Price: {} | Country: {}",
        FilterOptions::selected_label(&options.clients, filters.client_id.as_ref()),
        FilterOptions::selected_label(&options.price_categories, filters.price_category.as_ref()),
        FilterOptions::selected_label(&options.countries, filters.country.as_ref()),
    );
    if let Some(term) = filters.search_term.as_deref().filter(|t| !t.trim().is_empty()) {
        let _ = writeln!(out, "Search: {term}");
    }
    out
}

fn render_card(out: &mut String, index: usize, card: &StyleCard) {
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
    let _ = writeln!(out, "[{index}] {}  [{}]", card.title, card.image);
    let _ = writeln!(out, "    {}", card.client_ref);
    let _ = writeln!(out, "    {}", card.client_line.trim_end());
    if !card.description.is_empty() {
        let _ = writeln!(out, "    {}", card.description);
    }
    let _ = writeln!(out, "    {}", card.stats);
    let _ = writeln!(out, "    {}", card.created);
    let _ = writeln!(out, "    (view) (copy) (code)");
}
