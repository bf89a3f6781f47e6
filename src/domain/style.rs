//! Master style records, their creators, and SKU variants.
//!
//! A [`MasterStyle`] always belongs to exactly one client. Styles are created by
//! duplication or by an external creation form and are never deleted here.

use super::client::ClientId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Suffix appended to the reference of a duplicated style.
pub const COPY_SUFFIX: &str = "-COPY";

/// Prefix prepended to the description of a duplicated style.
pub const COPY_DESCRIPTION_PREFIX: &str = "Copy of: ";

/// Identifier of a master style record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleId(pub String);

impl StyleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for StyleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a user record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A platform user. Stamped on styles as their creator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: UserId::new(id),
            name: name.into(),
        }
    }
}

/// A catalog record representing one apparel design, scoped to a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasterStyle {
    pub id: StyleId,
    /// Client-facing style reference, e.g. `"SS24-014"`.
    pub ref_id: String,
    pub client: ClientId,
    /// Image reference, `None` when no picture was uploaded.
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub created_by: UserId,
}

impl MasterStyle {
    /// Fields for a duplicate of this style, stamped with `creator` and `now`.
    ///
    /// The copy keeps the client and picture, suffixes the reference with
    /// [`COPY_SUFFIX`] and prefixes the description with
    /// [`COPY_DESCRIPTION_PREFIX`].
    #[must_use]
    pub fn duplicate(&self, creator: &UserId, now: DateTime<Utc>) -> NewStyle {
        NewStyle {
            ref_id: format!("{}{COPY_SUFFIX}", self.ref_id),
            client: self.client.clone(),
            picture: self.picture.clone(),
            description: format!("{COPY_DESCRIPTION_PREFIX}{}", self.description),
            created_at: now,
            created_by: creator.clone(),
        }
    }
}

/// Fields of a style that has not been stored yet. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStyle {
    pub ref_id: String,
    pub client: ClientId,
    pub picture: Option<String>,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub created_by: UserId,
}

impl NewStyle {
    #[must_use]
    pub fn into_style(self, id: StyleId) -> MasterStyle {
        MasterStyle {
            id,
            ref_id: self.ref_id,
            client: self.client,
            picture: self.picture,
            description: self.description,
            created_at: self.created_at,
            created_by: self.created_by,
        }
    }
}

/// A SKU variant linked to a master style. Only counted by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkuRecord {
    pub id: String,
    pub style: StyleId,
}
