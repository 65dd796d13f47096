//! Name resolution.
//!
//! Converts a free-form security name into a provider ticker.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                       TickerResolver                          │
//! │                                                               │
//! │  raw name ──► NormalizationPolicy ──► query                   │
//! │                                                               │
//! │  ┌─────────────────────────────────────────────────────────┐ │
//! │  │ 1. Shortcuts (no dataset access)                         │ │
//! │  │    - index alias table ("nifty" → ^NSEI)                 │ │
//! │  │    - six-letter currency pair ("usdinr" → USDINR=X)      │ │
//! │  └─────────────────────────────────────────────────────────┘ │
//! │                           │ miss                              │
//! │                           ▼                                   │
//! │  ┌─────────────────────────────────────────────────────────┐ │
//! │  │ 2. DatasetProvider ──► record set for the category       │ │
//! │  │ 3. CategoryMatcher: exact → prefix → contains            │ │
//! │  │    with country tie-break (India prefers .NS)            │ │
//! │  └─────────────────────────────────────────────────────────┘ │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Smart Resolution
//!
//! [`TickerResolver::get`] tries categories in priority order:
//!
//! 1. **Index** if the name is an alias or contains an index keyword
//! 2. **Currency** if the name is six letters
//! 3. **Stock** (the common case)
//! 4. **ETF**
//!
//! A category that does not know the name passes to the next one. Invalid
//! requests stop the chain immediately.

mod config;
mod default_index;
mod shortcuts;
mod ticker_resolver;
mod traits;

pub use config::ResolverConfig;
pub use default_index::{country_default_index, DefaultIndexStrategy, STOCK_REGIONS};
pub use shortcuts::{
    currency_ticker, has_index_signal, index_alias, index_aliases, CurrencyPairStrategy,
    INDEX_SIGNALS,
};
pub use ticker_resolver::TickerResolver;
pub use traits::TickerLookup;
