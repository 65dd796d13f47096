//! In-memory dataset provider.

use std::borrow::Cow;
use std::collections::HashMap;

use crate::models::{normalize_country, Category, CountryKey, Record};

use super::merge::merge_by_ticker;
use super::traits::DatasetProvider;

/// Record sets held in memory, populated with builder calls.
///
/// Useful for embedding a small universe of names and for tests.
///
/// ```
/// use market_tickers::provider::{DatasetProvider, InMemoryProvider};
/// use market_tickers::Record;
///
/// let provider = InMemoryProvider::new()
///     .with_stocks("India", vec![Record::stock("Infosys", "INFY.NS")]);
/// assert_eq!(provider.load_stocks("india").len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct InMemoryProvider {
    stocks: HashMap<CountryKey, Vec<Record>>,
    indices: Vec<Record>,
    etfs: Vec<Record>,
    currencies: Vec<Record>,
}

impl InMemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add stocks for a country. Records are merged by ticker with any
    /// already present, later ones winning.
    pub fn with_stocks(mut self, country: &str, records: Vec<Record>) -> Self {
        let key = normalize_country(country);
        let existing = self.stocks.remove(&key).unwrap_or_default();
        let records = records.into_iter().map(|r| tag(r, Category::Stock));
        self.stocks
            .insert(key, merge_by_ticker(existing.into_iter().chain(records)));
        self
    }

    pub fn with_indices(mut self, records: Vec<Record>) -> Self {
        self.indices
            .extend(records.into_iter().map(|r| tag(r, Category::Index)));
        self
    }

    pub fn with_etfs(mut self, records: Vec<Record>) -> Self {
        self.etfs
            .extend(records.into_iter().map(|r| tag(r, Category::Etf)));
        self
    }

    pub fn with_currencies(mut self, records: Vec<Record>) -> Self {
        self.currencies
            .extend(records.into_iter().map(|r| tag(r, Category::Currency)));
        self
    }
}

fn tag(mut record: Record, category: Category) -> Record {
    record.category = category;
    record
}

impl DatasetProvider for InMemoryProvider {
    fn load_stocks(&self, country: &str) -> Cow<'_, [Record]> {
        match self.stocks.get(&normalize_country(country)) {
            Some(records) => Cow::Borrowed(records.as_slice()),
            None => Cow::Borrowed(&[]),
        }
    }

    fn load_indices(&self) -> Cow<'_, [Record]> {
        Cow::Borrowed(self.indices.as_slice())
    }

    fn load_etfs(&self) -> Cow<'_, [Record]> {
        Cow::Borrowed(self.etfs.as_slice())
    }

    fn load_currencies(&self) -> Cow<'_, [Record]> {
        Cow::Borrowed(self.currencies.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stocks_keyed_by_country() {
        let provider = InMemoryProvider::new()
            .with_stocks("United States", vec![Record::stock("Apple Inc", "AAPL")]);

        assert_eq!(provider.load_stocks("united_states").len(), 1);
        assert!(provider.load_stocks("india").is_empty());
    }

    #[test]
    fn test_repeated_stock_batches_merge() {
        let provider = InMemoryProvider::new()
            .with_stocks("india", vec![Record::stock("Old Name", "ABC.NS")])
            .with_stocks("india", vec![Record::stock("New Name", "ABC.NS")]);

        let stocks = provider.load_stocks("india");
        assert_eq!(stocks.len(), 1);
        assert_eq!(stocks[0].name, "New Name");
    }

    #[test]
    fn test_records_are_tagged_with_category() {
        let provider =
            InMemoryProvider::new().with_etfs(vec![Record::stock("Nifty Bees", "NIFTYBEES.NS")]);
        assert_eq!(provider.load(Category::Etf, "india")[0].category, Category::Etf);
    }
}
