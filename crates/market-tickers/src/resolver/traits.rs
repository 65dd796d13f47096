//! Resolution traits.
//!
//! Callers that only need lookups (the CLI, services embedding the crate)
//! depend on [`TickerLookup`] rather than on a concrete resolver.

use crate::errors::Result;
use crate::models::{Category, Ticker};

/// Public lookup surface.
pub trait TickerLookup: Send + Sync {
    /// Resolve `name` within one category (default: stocks).
    ///
    /// # Errors
    /// `InvalidInput`, `NotFound`, or `Ambiguous`.
    fn get_ticker(
        &self,
        name: &str,
        country: Option<&str>,
        category: Option<Category>,
    ) -> Result<Ticker>;

    /// Resolve `name` trying index, currency, stock, then ETF.
    fn get(&self, name: &str, country: Option<&str>) -> Result<Ticker>;

    /// Benchmark index ticker for a stock or country.
    ///
    /// # Errors
    /// `UnsupportedCountry` or `NotFound`.
    fn get_default_index(&self, stock_name: &str, country: Option<&str>) -> Result<Ticker>;
}
