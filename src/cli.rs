//! Command-line arguments of the `style-catalog` viewer.
//!
//! The binary opens a catalog, applies the filters given here in one step and
//! prints the dropdowns and cards. Parsing lives in the library so it can be
//! tested without spawning the binary.

use crate::app::FilterState;
use crate::domain::error::Result;
use crate::domain::{ClientId, Country, PriceCategory};
use crate::Config;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "style-catalog")]
#[command(about = "Browse master styles of an apparel catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the JSON catalog file
    pub catalog: Option<PathBuf>,

    /// Only show styles of this client id
    #[arg(long)]
    pub client: Option<String>,

    /// Only show styles whose client is in this price category
    #[arg(long, value_enum, ignore_case = true)]
    pub price: Option<PriceArg>,

    /// Only show styles whose client is in this country (UK, US, Australia, ...)
    #[arg(long, value_parser = parse_country)]
    pub country: Option<Country>,

    /// Free-text search over reference, description and client name
    #[arg(long)]
    pub search: Option<String>,

    /// TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Tracing level (trace, debug, info, warn, error)
    #[arg(long)]
    pub trace_level: Option<String>,

    /// Image shown for styles without a picture
    #[arg(long)]
    pub placeholder_image: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PriceArg {
    Low,
    Medium,
    High,
}

impl From<PriceArg> for PriceCategory {
    fn from(arg: PriceArg) -> Self {
        match arg {
            PriceArg::Low => Self::Low,
            PriceArg::Medium => Self::Medium,
            PriceArg::High => Self::High,
        }
    }
}

/// Maps the known countries case-insensitively; anything else is kept as given.
fn parse_country(value: &str) -> std::result::Result<Country, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err("country must not be empty".to_string());
    }

    Ok(Country::KNOWN
        .into_iter()
        .find(|country| country.name().eq_ignore_ascii_case(value))
        .unwrap_or_else(|| Country::from(value)))
}

impl Cli {
    /// Configuration file (if any) with command-line overrides applied.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Config`](crate::CatalogError::Config) if the
    /// configuration file cannot be read or parsed.
    pub fn config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };

        if let Some(catalog) = &self.catalog {
            config.catalog_path.clone_from(catalog);
        }
        if let Some(placeholder) = &self.placeholder_image {
            config.placeholder_image.clone_from(placeholder);
        }
        if self.trace_level.is_some() {
            config.trace_level.clone_from(&self.trace_level);
        }
        Ok(config)
    }

    /// Filter state described by the filter flags.
    #[must_use]
    pub fn filters(&self) -> FilterState {
        FilterState {
            client_id: self.client.as_deref().map(ClientId::new),
            price_category: self.price.map(PriceCategory::from),
            country: self.country.clone(),
            search_term: self.search.clone().filter(|term| !term.is_empty()),
        }
    }
}
