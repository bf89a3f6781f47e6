//! Client records and the enumerations used to filter by them.
//!
//! Price category and country live on the [`Client`], never on the style. Style
//! filters on those attributes are evaluated through the style's client.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a client record in the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(pub String);

impl ClientId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pricing tier of a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceCategory {
    Low,
    Medium,
    High,
}

impl PriceCategory {
    /// Every category, in dropdown order.
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Parses a category name, ignoring ASCII case.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl fmt::Display for PriceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Country a client is based in.
///
/// The three known countries carry a flag glyph. Anything else is kept
/// verbatim in [`Country::Other`] and displays without a flag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Country {
    Uk,
    Us,
    Australia,
    Other(String),
}

impl Country {
    /// The countries offered by the country dropdown.
    pub const KNOWN: [Self; 3] = [Self::Uk, Self::Us, Self::Australia];

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Uk => "UK",
            Self::Us => "US",
            Self::Australia => "Australia",
            Self::Other(name) => name,
        }
    }

    /// Flag glyph shown next to the country, empty for unknown countries.
    #[must_use]
    pub const fn flag(&self) -> &'static str {
        match self {
            Self::Uk => "🇬🇧",
            Self::Us => "🇺🇸",
            Self::Australia => "🇦🇺",
            Self::Other(_) => "",
        }
    }
}

impl From<String> for Country {
    fn from(value: String) -> Self {
        match value.as_str() {
            "UK" => Self::Uk,
            "US" => Self::Us,
            "Australia" => Self::Australia,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for Country {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<Country> for String {
    fn from(country: Country) -> Self {
        match country {
            Country::Other(name) => name,
            known => known.name().to_string(),
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A client of the styling business. Referenced by styles, never modified here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub country: Country,
    pub price_category: PriceCategory,
}

impl Client {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        country: Country,
        price_category: PriceCategory,
    ) -> Self {
        Self {
            id: ClientId::new(id),
            name: name.into(),
            country,
            price_category,
        }
    }

    /// Label used by the client dropdown, e.g. `"Acme (UK)"`.
    #[must_use]
    pub fn dropdown_label(&self) -> String {
        format!("{} ({})", self.name, self.country)
    }
}
