//! Structured logging for the catalog.
//!
//! Every store call, refresh and card action is instrumented with `tracing`
//! spans and events. This module wires those into a `tracing-subscriber`
//! pipeline that prints them to stderr.
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Usage
//!
//! ```rust
//! use style_catalog::observability::init_tracing;
//! use style_catalog::Config;
//!
//! init_tracing(&Config::default());
//! tracing::info!("catalog started");
//! ```

mod init;

pub use init::init_tracing;
