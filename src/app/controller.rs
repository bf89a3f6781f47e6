//! List controller: filter state, refresh pipeline, and card dispatch.
//!
//! [`StyleListController`] owns the filter state and the record store. Every
//! filter change runs [`StyleListController::refresh`], which rebuilds the card
//! presenters and publishes a new [`ListSnapshot`].
//!
//! # Refresh Pipeline
//!
//! 1. Fetch styles, pushing only the client filter down to the store
//! 2. Pair each style with its client
//! 3. Retain rows matching price category, country and search term
//! 4. Sort newest first (stable, ties keep fetch order)
//! 5. Build one presenter per row and publish the snapshot
//!
//! A refresh either completes and replaces the snapshot, or fails and leaves
//! the previous snapshot in place.
//!
//! # Example
//!
//! ```rust
//! use style_catalog::app::{FilterUpdate, StyleListController};
//! use style_catalog::domain::PriceCategory;
//! use style_catalog::storage::{CatalogData, MemoryStore};
//!
//! let mut controller = StyleListController::new(MemoryStore::new(CatalogData::default()));
//! controller.set_filter(FilterUpdate::PriceCategory(Some(PriceCategory::High)))?;
//! assert_eq!(controller.snapshot().count_label, "Showing 0 styles");
//! # Ok::<(), style_catalog::CatalogError>(())
//! ```

use super::actions::Action;
use super::filter::{resolve_clients, sort_newest_first, FilterState, FilterUpdate, ResolvedStyle};
use super::presenter::{StyleCardPresenter, CODE_BUTTONS};
use crate::domain::error::{CatalogError, Result};
use crate::domain::{Client, ClientId, Country, PriceCategory, User};
use crate::host::{AlertButton, AlertContent, Navigator, Notifier};
use crate::storage::RecordStore;
use crate::ui::viewmodel::{DropdownOption, FilterOptions, ListSnapshot};
use std::collections::HashMap;

/// Image shown on cards whose style has no picture.
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "placeholder.png";

/// Buttons offered by the new-style form.
pub const NEW_STYLE_BUTTONS: [AlertButton; 2] =
    [AlertButton::new("Save", true), AlertButton::new("Cancel", false)];

/// The host surfaces the controller drives: dialogs and navigation.
pub trait Host: Notifier + Navigator {}

impl<T: Notifier + Navigator + ?Sized> Host for T {}

/// Controller of the master style list screen.
pub struct StyleListController<S: RecordStore> {
    store: S,
    filters: FilterState,
    placeholder_image: String,
    presenters: Vec<StyleCardPresenter>,
    snapshot: ListSnapshot,
}

impl<S: RecordStore> StyleListController<S> {
    /// Creates a controller with no filters and an empty snapshot.
    ///
    /// Call [`refresh`](Self::refresh) to load the first list.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store,
            filters: FilterState::default(),
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            presenters: Vec::new(),
            snapshot: ListSnapshot::default(),
        }
    }

    /// Sets the image shown on cards without a picture.
    #[must_use]
    pub fn with_placeholder_image(mut self, placeholder_image: impl Into<String>) -> Self {
        self.placeholder_image = placeholder_image.into();
        self
    }

    #[must_use]
    pub const fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Snapshot published by the last successful refresh.
    #[must_use]
    pub const fn snapshot(&self) -> &ListSnapshot {
        &self.snapshot
    }

    #[must_use]
    pub fn presenters(&self) -> &[StyleCardPresenter] {
        &self.presenters
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Updates one filter field, then refreshes.
    ///
    /// # Errors
    ///
    /// Returns the refresh error. The filter change is kept.
    pub fn set_filter(&mut self, update: FilterUpdate) -> Result<()> {
        tracing::debug!(update = ?update, "set filter");
        self.filters.apply(update);
        self.refresh()
    }

    /// Replaces the whole filter state, then refreshes once.
    ///
    /// # Errors
    ///
    /// Returns the refresh error. The new filters are kept.
    pub fn set_filters(&mut self, filters: FilterState) -> Result<()> {
        tracing::debug!(filters = ?filters, "set filters");
        self.filters = filters;
        self.refresh()
    }

    /// Resets every filter to "All", then refreshes.
    ///
    /// # Errors
    ///
    /// Returns the refresh error.
    pub fn clear_filters(&mut self) -> Result<()> {
        tracing::debug!("clear filters");
        self.filters = FilterState::default();
        self.refresh()
    }

    /// Re-runs the fetch, filter, sort and render pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Store`] if any read fails or a style's client
    /// or creator cannot be resolved. The previous snapshot is kept.
    pub fn refresh(&mut self) -> Result<()> {
        let _span = tracing::debug_span!("refresh", filters = ?self.filters).entered();

        let styles = self.store.search_styles(&self.filters.query())?;
        let clients: HashMap<ClientId, Client> = self
            .store
            .all_clients()?
            .into_iter()
            .map(|client| (client.id.clone(), client))
            .collect();

        let mut rows = resolve_clients(styles, &clients)?;
        self.filters.retain_matching(&mut rows);
        sort_newest_first(&mut rows);

        let presenters = rows
            .into_iter()
            .map(|row| self.present(row))
            .collect::<Result<Vec<_>>>()?;

        let cards = presenters.iter().map(|p| p.card().clone()).collect();
        self.snapshot = ListSnapshot::new(cards, self.filters.clone());
        self.presenters = presenters;

        tracing::debug!(count = self.presenters.len(), "refresh complete");
        Ok(())
    }

    /// Dropdown entries for the client, price category and country filters.
    ///
    /// # Errors
    ///
    /// Returns an error if the clients cannot be fetched.
    pub fn load_filter_options(&self) -> Result<FilterOptions> {
        let clients = self.store.all_clients()?;

        let clients = std::iter::once(DropdownOption::all("All Clients"))
            .chain(
                clients
                    .into_iter()
                    .map(|client| DropdownOption::new(client.dropdown_label(), client.id)),
            )
            .collect();

        let price_categories = std::iter::once(DropdownOption::all("All Categories"))
            .chain(
                PriceCategory::ALL
                    .into_iter()
                    .map(|category| DropdownOption::new(category.as_str(), category)),
            )
            .collect();

        let countries = std::iter::once(DropdownOption::all("All Countries"))
            .chain(Country::KNOWN.into_iter().map(|country| {
                DropdownOption::new(format!("{} {}", country.flag(), country.name()), country)
            }))
            .collect();

        Ok(FilterOptions {
            clients,
            price_categories,
            countries,
        })
    }

    /// Opens the external creation form and refreshes if it was saved.
    ///
    /// # Errors
    ///
    /// Returns the refresh error.
    pub fn new_style<H: Host + ?Sized>(&mut self, host: &mut H) -> Result<()> {
        let saved = host.alert(AlertContent::NewStyleForm, &NEW_STYLE_BUTTONS);
        tracing::debug!(saved = ?saved, "new style form closed");

        if saved == Some(true) {
            self.refresh()?;
        }
        Ok(())
    }

    /// Opens the detail view of the card at `index`. No-op if out of range.
    ///
    /// # Errors
    ///
    /// Never fails today; returns `Result` like the other card actions.
    pub fn view_details<H: Host + ?Sized>(&mut self, index: usize, host: &mut H) -> Result<()> {
        let Some(presenter) = self.presenters.get(index) else {
            tracing::debug!(index, "no card at index");
            return Ok(());
        };
        let actions = presenter.view_details();
        self.execute(actions, host)
    }

    /// Duplicates the style of the card at `index` on behalf of `user`.
    ///
    /// No-op if out of range or if the user declines the confirmation.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Mutation`] if the copy could not be created, or
    /// the refresh error if the list could not be reloaded afterwards.
    pub fn quick_copy<H: Host + ?Sized>(
        &mut self,
        index: usize,
        user: &User,
        host: &mut H,
    ) -> Result<()> {
        let Some(presenter) = self.presenters.get(index) else {
            tracing::debug!(index, "no card at index");
            return Ok(());
        };
        let actions = presenter
            .quick_copy(&mut self.store, user, &mut *host)
            .map_err(|e| match e {
                CatalogError::Mutation(_) => e,
                other => CatalogError::Mutation(other.to_string()),
            })?;
        self.execute(actions, host)
    }

    /// Shows the code display for the card at `index`. No-op if out of range.
    ///
    /// # Errors
    ///
    /// Never fails today; returns `Result` like the other card actions.
    pub fn show_code<H: Host + ?Sized>(&mut self, index: usize, host: &mut H) -> Result<()> {
        let Some(presenter) = self.presenters.get(index) else {
            tracing::debug!(index, "no card at index");
            return Ok(());
        };
        let actions = presenter.show_code();
        self.execute(actions, host)
    }

    fn execute<H: Host + ?Sized>(&mut self, actions: Vec<Action>, host: &mut H) -> Result<()> {
        for action in actions {
            tracing::debug!(action = ?action, "executing action");
            match action {
                Action::Refresh => self.refresh()?,
                Action::Notify(message) => host.notify(&message),
                Action::Navigate(view) => host.open(view),
                Action::ShowCode(style_id) => {
                    host.alert(AlertContent::StyleCode(style_id), &CODE_BUTTONS);
                }
            }
        }
        Ok(())
    }

    fn present(&self, row: ResolvedStyle) -> Result<StyleCardPresenter> {
        let creator = self.store.get_user(&row.style.created_by)?.ok_or_else(|| {
            CatalogError::Store(format!(
                "style {} references unknown user {}",
                row.style.id, row.style.created_by
            ))
        })?;
        let sku_count = self.store.count_skus(&row.style.id)?;

        Ok(StyleCardPresenter::new(
            row.style,
            &row.client,
            &creator,
            sku_count,
            &self.placeholder_image,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ClientId, MasterStyle, StyleId, UserId};
    use crate::host::View;
    use crate::storage::{CatalogData, MemoryStore, StyleQuery};
    use crate::testing::{sample_catalog, CountingStore, RecordingHost};
    use chrono::{TimeZone, Utc};
    use std::collections::BTreeSet;

    fn controller() -> StyleListController<MemoryStore> {
        let mut controller = StyleListController::new(MemoryStore::new(sample_catalog()));
        controller.refresh().unwrap();
        controller
    }

    fn refs<S: RecordStore>(controller: &StyleListController<S>) -> Vec<String> {
        controller
            .presenters()
            .iter()
            .map(|p| p.style().ref_id.clone())
            .collect()
    }

    /// Independent statement of the filter semantics over the raw catalog.
    fn expected_ids(data: &CatalogData, filters: &FilterState) -> BTreeSet<StyleId> {
        let term = filters
            .search_term
            .as_deref()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty());

        data.styles
            .iter()
            .filter(|style| {
                let client = data.clients.iter().find(|c| c.id == style.client).unwrap();
                filters.client_id.as_ref().map_or(true, |id| *id == client.id)
                    && filters.price_category.map_or(true, |p| p == client.price_category)
                    && filters.country.as_ref().map_or(true, |c| *c == client.country)
                    && term.as_ref().map_or(true, |t| {
                        style.ref_id.to_lowercase().contains(t.as_str())
                            || style.description.to_lowercase().contains(t.as_str())
                            || client.name.to_lowercase().contains(t.as_str())
                    })
            })
            .map(|style| style.id.clone())
            .collect()
    }

    #[test]
    fn every_filter_combination_yields_exact_subset() {
        let data = sample_catalog();
        let clients = [None, Some("acme"), Some("zenith"), Some("koala"), Some("nord")];
        let prices = [
            None,
            Some(PriceCategory::Low),
            Some(PriceCategory::Medium),
            Some(PriceCategory::High),
        ];
        let countries = [
            None,
            Some(Country::Uk),
            Some(Country::Us),
            Some(Country::Australia),
            Some(Country::from("Norway")),
        ];
        let terms = ["", "  ", "red", "ACME", "a", "zz", "K7"];

        let mut controller = StyleListController::new(MemoryStore::new(data.clone()));
        for client in clients {
            for price in prices {
                for country in &countries {
                    for term in terms {
                        controller
                            .set_filter(FilterUpdate::Client(client.map(ClientId::new)))
                            .unwrap();
                        controller.set_filter(FilterUpdate::PriceCategory(price)).unwrap();
                        controller
                            .set_filter(FilterUpdate::Country(country.clone()))
                            .unwrap();
                        controller
                            .set_filter(FilterUpdate::Search(term.to_string()))
                            .unwrap();

                        let actual: BTreeSet<StyleId> = controller
                            .snapshot()
                            .cards
                            .iter()
                            .map(|card| card.style_id.clone())
                            .collect();
                        assert_eq!(
                            actual,
                            expected_ids(&data, controller.filters()),
                            "filters: {:?}",
                            controller.filters()
                        );
                        assert_eq!(actual.len(), controller.snapshot().cards.len());
                    }
                }
            }
        }
    }

    #[test]
    fn list_is_newest_first_with_stable_ties() {
        let controller = controller();

        // A1 and K7 share a timestamp; A1 was inserted first.
        assert_eq!(refs(&controller), vec!["B2", "A1", "K7", "A2", "N1"]);

        let times: Vec<_> = controller
            .presenters()
            .iter()
            .map(|p| p.style().created_at)
            .collect();
        assert!(times.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn count_label_reflects_filtered_count() {
        let mut controller = controller();
        assert_eq!(controller.snapshot().count_label, "Showing 5 styles");

        controller
            .set_filter(FilterUpdate::Client(Some(ClientId::new("acme"))))
            .unwrap();
        assert_eq!(controller.snapshot().count_label, "Showing 2 styles");
        assert!(controller.snapshot().empty_state.is_none());

        controller.set_filter(FilterUpdate::Search("nothing".to_string())).unwrap();
        assert_eq!(controller.snapshot().count_label, "Showing 0 styles");
        assert!(controller.snapshot().empty_state.is_some());
    }

    #[test]
    fn clear_filters_matches_fresh_controller() {
        let mut controller = controller();
        controller.set_filter(FilterUpdate::Country(Some(Country::Us))).unwrap();
        controller.set_filter(FilterUpdate::Search("blue".to_string())).unwrap();
        assert_eq!(refs(&controller), vec!["B2"]);

        controller.clear_filters().unwrap();

        let fresh = self::controller();
        assert_eq!(controller.filters(), &FilterState::default());
        assert_eq!(controller.snapshot(), fresh.snapshot());
    }

    #[test]
    fn search_example_returns_only_matching_style() {
        let mut data = sample_catalog();
        data.styles.retain(|s| s.ref_id == "A1" || s.ref_id == "B2");
        let mut controller = StyleListController::new(MemoryStore::new(data));

        controller.set_filter(FilterUpdate::Search("red".to_string())).unwrap();

        assert_eq!(refs(&controller), vec!["A1"]);
    }

    #[test]
    fn country_filter_excludes_other_clients_matching_price_and_search() {
        let mut data = sample_catalog();
        // Acme (UK) shares Zenith's price category, and "e" matches styles of both.
        data.clients[0].price_category = PriceCategory::High;
        let mut controller = StyleListController::new(MemoryStore::new(data));

        let price_and_search = FilterState {
            price_category: Some(PriceCategory::High),
            search_term: Some("e".to_string()),
            ..FilterState::default()
        };
        controller.set_filters(price_and_search.clone()).unwrap();
        assert_eq!(refs(&controller), vec!["B2", "A1", "A2"]);

        controller.set_filter(FilterUpdate::Country(Some(Country::Us))).unwrap();
        assert_eq!(refs(&controller), vec!["B2"]);
        assert_eq!(controller.snapshot().cards[0].client_line, "Client: Zenith (High) 🇺🇸");

        controller
            .set_filters(FilterState {
                country: Some(Country::Uk),
                ..price_and_search
            })
            .unwrap();
        assert_eq!(refs(&controller), vec!["A1", "A2"]);
    }

    #[test]
    fn set_filters_refreshes_once() {
        let mut controller = StyleListController::new(CountingStore::new(sample_catalog()));

        controller
            .set_filters(FilterState {
                client_id: Some(ClientId::new("acme")),
                price_category: Some(PriceCategory::Low),
                country: Some(Country::Uk),
                search_term: Some("RED".to_string()),
            })
            .unwrap();

        assert_eq!(controller.store().fetches(), 1);
        assert_eq!(refs(&controller), vec!["A1", "A2"]);
        assert_eq!(controller.filters().search_term.as_deref(), Some("RED"));
    }

    #[test]
    fn card_lines_come_from_related_records() {
        let controller = controller();
        let a1 = &controller.snapshot().cards[1];

        assert_eq!(a1.title, "Style: 1");
        assert_eq!(a1.image, "img/a1.png");
        assert_eq!(a1.stats, "SKUs: 2 variants | Active RFQs: 0");
        assert_eq!(a1.created, "Created: Mar 01, 2024 by Dana Reyes");

        let b2 = &controller.snapshot().cards[0];
        assert_eq!(b2.image, DEFAULT_PLACEHOLDER_IMAGE);
    }

    #[test]
    fn placeholder_image_is_configurable() {
        let mut controller = StyleListController::new(MemoryStore::new(sample_catalog()))
            .with_placeholder_image("assets/none.svg");
        controller.refresh().unwrap();

        assert_eq!(controller.snapshot().cards[0].image, "assets/none.svg");
    }

    #[test]
    fn fetch_failure_keeps_previous_snapshot() {
        let mut controller = StyleListController::new(CountingStore::new(sample_catalog()));
        controller.refresh().unwrap();
        let before = controller.snapshot().clone();

        controller.store().fail_reads(true);
        let result = controller.set_filter(FilterUpdate::Search("red".to_string()));

        assert!(matches!(result, Err(CatalogError::Store(_))));
        assert_eq!(controller.snapshot(), &before);
    }

    #[test]
    fn dangling_creator_aborts_refresh() {
        let mut data = sample_catalog();
        data.styles[0].created_by = UserId::new("ghost");
        let mut controller = StyleListController::new(MemoryStore::new(data));

        assert!(matches!(controller.refresh(), Err(CatalogError::Store(_))));
        assert!(controller.presenters().is_empty());
    }

    #[test]
    fn quick_copy_creates_copy_and_refreshes_once() {
        let mut data = sample_catalog();
        data.styles.push(MasterStyle {
            id: StyleId::new("9"),
            ref_id: "X9".to_string(),
            client: ClientId::new("zenith"),
            picture: Some("img/x9.png".to_string()),
            description: "pleated skirt".to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            created_by: UserId::new("lee"),
        });
        let mut controller = StyleListController::new(CountingStore::new(data));
        controller.refresh().unwrap();
        assert_eq!(refs(&controller)[0], "X9");

        let mut host = RecordingHost::default();
        let user = User::new("dana", "Dana Reyes");
        controller.store().reset_fetches();

        controller.quick_copy(0, &user, &mut host).unwrap();

        assert_eq!(controller.store().fetches(), 1);
        let copy = controller
            .store()
            .search_styles(&StyleQuery::All)
            .unwrap()
            .into_iter()
            .find(|s| s.ref_id == "X9-COPY")
            .unwrap();
        assert_eq!(copy.client, ClientId::new("zenith"));
        assert_eq!(copy.picture.as_deref(), Some("img/x9.png"));
        assert!(copy.description.starts_with("Copy of: "));
        assert_eq!(copy.created_by, user.id);

        assert_eq!(refs(&controller)[0], "X9-COPY");
        assert_eq!(host.notifications, vec!["Style copied as X9-COPY".to_string()]);
    }

    #[test]
    fn declined_copy_does_not_refresh() {
        let mut controller = StyleListController::new(CountingStore::new(sample_catalog()));
        controller.refresh().unwrap();
        controller.store().reset_fetches();
        let mut host = RecordingHost {
            confirm_answer: false,
            ..RecordingHost::default()
        };

        controller
            .quick_copy(0, &User::new("dana", "Dana Reyes"), &mut host)
            .unwrap();

        assert_eq!(controller.store().fetches(), 0);
        assert_eq!(refs(&controller).len(), 5);
        assert!(host.notifications.is_empty());
    }

    #[test]
    fn failed_copy_is_a_mutation_error_without_refresh() {
        let mut controller = StyleListController::new(CountingStore::new(sample_catalog()));
        controller.refresh().unwrap();
        controller.store().reset_fetches();
        controller.store().fail_writes(true);
        let mut host = RecordingHost::default();

        let result = controller.quick_copy(0, &User::new("dana", "Dana Reyes"), &mut host);

        assert!(matches!(result, Err(CatalogError::Mutation(_))));
        assert_eq!(controller.store().fetches(), 0);
        assert!(host.notifications.is_empty());
    }

    #[test]
    fn out_of_range_card_is_ignored() {
        let mut controller = controller();
        let mut host = RecordingHost::default();

        controller.view_details(99, &mut host).unwrap();
        controller.show_code(99, &mut host).unwrap();
        controller
            .quick_copy(99, &User::new("dana", "Dana Reyes"), &mut host)
            .unwrap();

        assert!(host.opened.is_empty());
        assert!(host.alerts.is_empty());
        assert!(host.confirmations.is_empty());
    }

    #[test]
    fn view_details_opens_detail_view_with_record() {
        let mut controller = controller();
        let mut host = RecordingHost::default();

        controller.view_details(0, &mut host).unwrap();

        let expected = controller.presenters()[0].style().clone();
        assert_eq!(host.opened, vec![View::StyleDetail(expected)]);
        assert_eq!(host.opened[0].name(), "MasterStyleDetail");
    }

    #[test]
    fn show_code_opens_code_alert() {
        let mut controller = controller();
        let mut host = RecordingHost::default();

        controller.show_code(1, &mut host).unwrap();

        assert_eq!(host.alerts, vec![AlertContent::StyleCode(StyleId::new("1"))]);
    }

    #[test]
    fn new_style_refreshes_only_when_saved() {
        let mut controller = StyleListController::new(CountingStore::new(sample_catalog()));

        let mut cancelled = RecordingHost {
            alert_answer: Some(false),
            ..RecordingHost::default()
        };
        controller.new_style(&mut cancelled).unwrap();
        assert_eq!(controller.store().fetches(), 0);

        let mut dismissed = RecordingHost {
            alert_answer: None,
            ..RecordingHost::default()
        };
        controller.new_style(&mut dismissed).unwrap();
        assert_eq!(controller.store().fetches(), 0);

        let mut saved = RecordingHost::default();
        controller.new_style(&mut saved).unwrap();
        assert_eq!(controller.store().fetches(), 1);
        assert_eq!(saved.alerts, vec![AlertContent::NewStyleForm]);
    }

    #[test]
    fn filter_options_list_sentinels_and_flags() {
        let options = controller().load_filter_options().unwrap();

        let client_labels: Vec<&str> = options.clients.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(
            client_labels,
            vec![
                "All Clients",
                "Acme (UK)",
                "Zenith (US)",
                "Koala Threads (Australia)",
                "Nord (Norway)"
            ]
        );
        assert_eq!(options.clients[0].value, None);
        assert_eq!(options.clients[1].value, Some(ClientId::new("acme")));

        let price_labels: Vec<&str> =
            options.price_categories.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(price_labels, vec!["All Categories", "Low", "Medium", "High"]);

        let country_labels: Vec<&str> = options.countries.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(
            country_labels,
            vec!["All Countries", "🇬🇧 UK", "🇺🇸 US", "🇦🇺 Australia"]
        );
        assert_eq!(options.countries[3].value, Some(Country::Australia));
    }
}
