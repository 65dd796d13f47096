//! Market Tickers Crate
//!
//! Resolves free-form, human-typed security names ("Nifty", "Reliance",
//! "USDINR") into the canonical ticker symbols used by price-data providers
//! ("^NSEI", "RELIANCE.NS", "USDINR=X").
//!
//! # Overview
//!
//! The crate supports:
//! - Four categories: stocks (per country), indices, ETFs, currency pairs
//! - Two normalization policies (strict and lenient)
//! - Dataset-free shortcuts for index aliases and currency pairs
//! - An exact → prefix → contains matching cascade with country tie-breaks
//! - Cross-category "smart" resolution
//! - Default benchmark index lookup
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |    raw name      |
//! +------------------+
//!          |
//!          v
//! +------------------+     +---------------------+
//! |  TickerResolver  | --> | shortcuts (aliases, |
//! +------------------+     | currency pattern)   |
//!          |               +---------------------+
//!          v
//! +------------------+
//! | DatasetProvider  |  (CSV files, in-memory, snapshot)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! | CategoryMatcher  |  (exact / prefix / contains + tie-break)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |     ticker       |
//! +------------------+
//! ```
//!
//! # Example
//!
//! ```
//! use market_tickers::provider::InMemoryProvider;
//! use market_tickers::{Record, TickerResolver};
//!
//! let provider = InMemoryProvider::new()
//!     .with_stocks("united_states", vec![Record::stock("Apple Inc", "AAPL")]);
//! let resolver = TickerResolver::new(provider);
//!
//! assert_eq!(resolver.get("Apple Inc", Some("united_states")).unwrap(), "AAPL");
//! assert_eq!(resolver.get_default_index("Apple Inc", Some("us")).unwrap(), "^GSPC");
//! ```

pub mod errors;
pub mod matcher;
pub mod models;
pub mod normalize;
pub mod provider;
pub mod resolver;

pub use errors::{FallbackClass, Result, TickerError};
pub use matcher::{CategoryMatcher, MatchOutcome, MatchTier};
pub use models::{normalize_country, Category, CountryKey, Record, Ticker};
pub use normalize::NormalizationPolicy;
pub use provider::{CsvDatasetProvider, DatasetProvider, DatasetSnapshot, InMemoryProvider};
pub use resolver::{
    CurrencyPairStrategy, DefaultIndexStrategy, ResolverConfig, TickerLookup, TickerResolver,
};
