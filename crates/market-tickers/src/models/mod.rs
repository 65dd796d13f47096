//! Resolution data model
//!
//! This module contains the core data types for name resolution:
//! - `types` - Type aliases for tickers and country keys
//! - `category` - The record-set selector (Category)
//! - `record` - Dataset records (Record)

mod category;
mod record;
mod types;

pub use category::Category;
pub use record::Record;
pub use types::{normalize_country, CountryKey, Ticker, INDIA};
