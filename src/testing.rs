//! Shared fixtures and host doubles for unit tests.

use crate::domain::error::{CatalogError, Result};
use crate::domain::{
    Client, ClientId, Country, MasterStyle, NewStyle, PriceCategory, SkuRecord, StyleId, User,
    UserId,
};
use crate::host::{AlertButton, AlertContent, Navigator, Notifier, View};
use crate::storage::{CatalogData, MemoryStore, RecordStore, StyleQuery};
use chrono::{TimeZone, Utc};
use std::cell::Cell;

fn style(
    id: &str,
    ref_id: &str,
    client: &str,
    description: &str,
    created: (i32, u32, u32, u32),
    creator: &str,
) -> MasterStyle {
    let (year, month, day, hour) = created;
    MasterStyle {
        id: StyleId::new(id),
        ref_id: ref_id.to_string(),
        client: ClientId::new(client),
        picture: None,
        description: description.to_string(),
        created_at: Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap(),
        created_by: UserId::new(creator),
    }
}

/// Four clients, two users, five styles (A1 and K7 share a timestamp).
pub fn sample_catalog() -> CatalogData {
    let mut a1 = style("1", "A1", "acme", "red dress", (2024, 3, 1, 9), "dana");
    a1.picture = Some("img/a1.png".to_string());

    CatalogData {
        clients: vec![
            Client::new("acme", "Acme", Country::Uk, PriceCategory::Low),
            Client::new("zenith", "Zenith", Country::Us, PriceCategory::High),
            Client::new("koala", "Koala Threads", Country::Australia, PriceCategory::Medium),
            Client::new("nord", "Nord", Country::from("Norway"), PriceCategory::Medium),
        ],
        users: vec![User::new("dana", "Dana Reyes"), User::new("lee", "Lee Park")],
        styles: vec![
            a1,
            style("2", "B2", "zenith", "blue shirt", (2024, 3, 5, 10), "lee"),
            style("3", "A2", "acme", "green coat with red trim", (2024, 2, 10, 8), "dana"),
            style("4", "K7", "koala", "Summer shorts", (2024, 3, 1, 9), "lee"),
            style("5", "N1", "nord", "wool sweater", (2024, 1, 15, 12), "dana"),
        ],
        skus: vec![
            SkuRecord {
                id: "sku-1".to_string(),
                style: StyleId::new("1"),
            },
            SkuRecord {
                id: "sku-2".to_string(),
                style: StyleId::new("1"),
            },
            SkuRecord {
                id: "sku-3".to_string(),
                style: StyleId::new("4"),
            },
        ],
        ..CatalogData::default()
    }
}

/// Store that counts style fetches and can be told to fail.
pub struct CountingStore {
    inner: MemoryStore,
    fetches: Cell<usize>,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
}

impl CountingStore {
    pub fn new(data: CatalogData) -> Self {
        Self {
            inner: MemoryStore::new(data),
            fetches: Cell::new(0),
            fail_reads: Cell::new(false),
            fail_writes: Cell::new(false),
        }
    }

    pub fn fetches(&self) -> usize {
        self.fetches.get()
    }

    pub fn reset_fetches(&self) {
        self.fetches.set(0);
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    fn check_read(&self) -> Result<()> {
        if self.fail_reads.get() {
            return Err(CatalogError::Store("store unavailable".to_string()));
        }
        Ok(())
    }
}

impl RecordStore for CountingStore {
    fn search_styles(&self, query: &StyleQuery) -> Result<Vec<MasterStyle>> {
        self.fetches.set(self.fetches.get() + 1);
        self.check_read()?;
        self.inner.search_styles(query)
    }

    fn get_style(&self, id: &StyleId) -> Result<Option<MasterStyle>> {
        self.check_read()?;
        self.inner.get_style(id)
    }

    fn all_clients(&self) -> Result<Vec<Client>> {
        self.check_read()?;
        self.inner.all_clients()
    }

    fn get_user(&self, id: &UserId) -> Result<Option<User>> {
        self.check_read()?;
        self.inner.get_user(id)
    }

    fn count_skus(&self, style: &StyleId) -> Result<usize> {
        self.check_read()?;
        self.inner.count_skus(style)
    }

    fn add_style(&mut self, style: NewStyle) -> Result<MasterStyle> {
        if self.fail_writes.get() {
            return Err(CatalogError::Mutation("write rejected".to_string()));
        }
        self.inner.add_style(style)
    }
}

/// Host double that records every call and answers with canned values.
#[derive(Debug)]
pub struct RecordingHost {
    pub confirm_answer: bool,
    pub alert_answer: Option<bool>,
    pub confirmations: Vec<String>,
    pub notifications: Vec<String>,
    pub alerts: Vec<AlertContent>,
    pub opened: Vec<View>,
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self {
            confirm_answer: true,
            alert_answer: Some(true),
            confirmations: Vec::new(),
            notifications: Vec::new(),
            alerts: Vec::new(),
            opened: Vec::new(),
        }
    }
}

impl Notifier for RecordingHost {
    fn confirm(&mut self, message: &str) -> bool {
        self.confirmations.push(message.to_string());
        self.confirm_answer
    }

    fn notify(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }

    fn alert(&mut self, content: AlertContent, _buttons: &[AlertButton]) -> Option<bool> {
        self.alerts.push(content);
        self.alert_answer
    }
}

impl Navigator for RecordingHost {
    fn open(&mut self, view: View) {
        self.opened.push(view);
    }
}
