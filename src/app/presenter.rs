//! Summary card for a single master style.
//!
//! A [`StyleCardPresenter`] derives every display string of its card once, at
//! construction, from the style, its client, its creator and its SKU count.
//! The three card operations return [`Action`]s for the controller to run.

use super::actions::Action;
use crate::domain::error::Result;
use crate::domain::{Client, MasterStyle, User};
use crate::host::{AlertButton, Notifier, View};
use crate::storage::RecordStore;
use crate::ui::viewmodel::StyleCard;
use chrono::{DateTime, Utc};

/// Descriptions longer than this are truncated.
pub const DESCRIPTION_LIMIT: usize = 100;

/// Marker appended to a truncated description.
pub const ELLIPSIS: &str = "...";

/// Buttons offered by the code display.
pub const CODE_BUTTONS: [AlertButton; 1] = [AlertButton::new("Close", true)];

/// Presenter for one style card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleCardPresenter {
    style: MasterStyle,
    card: StyleCard,
}

impl StyleCardPresenter {
    /// Builds the presenter and derives its card.
    ///
    /// `placeholder_image` is shown when the style has no picture.
    #[must_use]
    pub fn new(
        style: MasterStyle,
        client: &Client,
        creator: &User,
        sku_count: usize,
        placeholder_image: &str,
    ) -> Self {
        let card = StyleCard {
            style_id: style.id.clone(),
            image: style
                .picture
                .clone()
                .unwrap_or_else(|| placeholder_image.to_string()),
            title: format!("Style: {}", style.id),
            client_ref: format!("Client Ref: {}", style.ref_id),
            client_line: client_line(client),
            description: truncate_description(&style.description),
            stats: stats_line(sku_count, active_rfq_count(&style)),
            created: created_line(style.created_at, &creator.name),
        };

        Self { style, card }
    }

    #[must_use]
    pub const fn style(&self) -> &MasterStyle {
        &self.style
    }

    #[must_use]
    pub const fn card(&self) -> &StyleCard {
        &self.card
    }

    /// Opens the detail view for this style. Changes nothing locally.
    #[must_use]
    pub fn view_details(&self) -> Vec<Action> {
        vec![Action::Navigate(View::StyleDetail(self.style.clone()))]
    }

    /// Opens the code display for this style. Read-only.
    #[must_use]
    pub fn show_code(&self) -> Vec<Action> {
        vec![Action::ShowCode(self.style.id.clone())]
    }

    /// Duplicates this style after asking the user to confirm.
    ///
    /// The copy is created by `user`, now. Returns no actions when the user
    /// declines; otherwise a notification followed by a refresh request.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the copy could not be created. Nothing is
    /// created in that case and no refresh is requested.
    pub fn quick_copy<S, N>(&self, store: &mut S, user: &User, notifier: &mut N) -> Result<Vec<Action>>
    where
        S: RecordStore + ?Sized,
        N: Notifier + ?Sized,
    {
        let _span = tracing::debug_span!("quick_copy",
            style_id = %self.style.id,
            ref_id = %self.style.ref_id
        ).entered();

        let question = format!("Create a copy of style {}?", self.style.ref_id);
        if !notifier.confirm(&question) {
            tracing::debug!("copy declined");
            return Ok(vec![]);
        }

        let copy = store.add_style(self.style.duplicate(&user.id, Utc::now()))?;

        tracing::debug!(new_style_id = %copy.id, "style copied");
        Ok(vec![
            Action::Notify(format!("Style copied as {}", copy.ref_id)),
            Action::Refresh,
        ])
    }
}

/// Number of open RFQs for a style.
///
/// Always zero: RFQ tracking lives outside this crate.
#[must_use]
pub const fn active_rfq_count(_style: &MasterStyle) -> usize {
    0
}

/// Shortens a description to at most [`DESCRIPTION_LIMIT`] characters.
///
/// Longer text keeps its first 97 characters followed by [`ELLIPSIS`]. The cut
/// is not word-aware.
#[must_use]
pub fn truncate_description(description: &str) -> String {
    if description.chars().count() <= DESCRIPTION_LIMIT {
        return description.to_string();
    }

    let keep = DESCRIPTION_LIMIT - ELLIPSIS.chars().count();
    let mut truncated: String = description.chars().take(keep).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

/// `Client: {name} ({price_category}) {flag}`.
#[must_use]
pub fn client_line(client: &Client) -> String {
    format!(
        "Client: {} ({}) {}",
        client.name,
        client.price_category,
        client.country.flag()
    )
}

/// `SKUs: {n} variants | Active RFQs: {m}`.
#[must_use]
pub fn stats_line(sku_count: usize, rfq_count: usize) -> String {
    format!("SKUs: {sku_count} variants | Active RFQs: {rfq_count}")
}

/// `Created: Mar 01, 2024 by {creator}`.
#[must_use]
pub fn created_line(created_at: DateTime<Utc>, creator: &str) -> String {
    format!("Created: {} by {creator}", created_at.format("%b %d, %Y"))
}
