//! Dataset records.

use serde::{Deserialize, Serialize};

use super::category::Category;

/// One tradable or indexable entity from a dataset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Display name (e.g., "Reliance Industries")
    pub name: String,

    /// Provider ticker (e.g., "RELIANCE.NS", "^GSPC", "USDINR=X")
    pub ticker: String,

    /// Record set this record belongs to
    pub category: Category,

    /// Lowercase country key (e.g., "india")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Listing exchange (e.g., "NSE", "NASDAQ")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange: Option<String>,

    /// Display name of the benchmark index, resolvable through the index set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_index: Option<String>,
}

impl Record {
    /// Create a new record with required fields.
    pub fn new(name: impl Into<String>, ticker: impl Into<String>, category: Category) -> Self {
        Self {
            name: name.into(),
            ticker: ticker.into(),
            category,
            country: None,
            exchange: None,
            default_index: None,
        }
    }

    /// Shorthand for a stock record.
    pub fn stock(name: impl Into<String>, ticker: impl Into<String>) -> Self {
        Self::new(name, ticker, Category::Stock)
    }

    /// Set the country.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Set the exchange.
    pub fn with_exchange(mut self, exchange: impl Into<String>) -> Self {
        self.exchange = Some(exchange.into());
        self
    }

    /// Set the default index reference.
    pub fn with_default_index(mut self, index_name: impl Into<String>) -> Self {
        self.default_index = Some(index_name.into());
        self
    }

    /// Only records with a non-blank name and ticker take part in matching.
    pub fn is_eligible(&self) -> bool {
        !self.name.trim().is_empty() && !self.ticker.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eligibility() {
        assert!(Record::stock("Apple Inc", "AAPL").is_eligible());
        assert!(!Record::stock("", "AAPL").is_eligible());
        assert!(!Record::stock("Apple Inc", "  ").is_eligible());
    }

    #[test]
    fn test_builder() {
        let record = Record::stock("Infosys", "INFY.NS")
            .with_country("india")
            .with_exchange("NSE")
            .with_default_index("Nifty 50");
        assert_eq!(record.country.as_deref(), Some("india"));
        assert_eq!(record.exchange.as_deref(), Some("NSE"));
        assert_eq!(record.default_index.as_deref(), Some("Nifty 50"));
        assert_eq!(record.category, Category::Stock);
    }
}
