//! Benchmark index lookup for a stock or a country.

use std::collections::HashMap;
use std::str::FromStr;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Country key → benchmark index ticker.
    static ref COUNTRY_DEFAULT_INDEX: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("india", "^NSEI");
        m.insert("us", "^GSPC");
        m.insert("usa", "^GSPC");
        m.insert("united_states", "^GSPC");
        m
    };
}

/// Stock regions a record-reference lookup walks, after the default region,
/// when the caller names no country.
pub const STOCK_REGIONS: [&str; 4] = ["india", "united_states", "us", "usa"];

/// How the default index of a stock is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DefaultIndexStrategy {
    /// Static country → index table; the stock name is not consulted.
    #[default]
    CountryTable,
    /// Look the stock up and resolve its `default_index` name as an index.
    /// Without a country every region in [`STOCK_REGIONS`] is searched.
    RecordReference,
}

impl FromStr for DefaultIndexStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "country_table" | "country" => Ok(Self::CountryTable),
            "record_reference" | "record" => Ok(Self::RecordReference),
            other => Err(format!("unknown default index strategy: {}", other)),
        }
    }
}

/// Benchmark index for a normalized country key.
pub fn country_default_index(country: &str) -> Option<&'static str> {
    COUNTRY_DEFAULT_INDEX.get(country).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_table() {
        assert_eq!(country_default_index("india"), Some("^NSEI"));
        assert_eq!(country_default_index("us"), Some("^GSPC"));
        assert_eq!(country_default_index("united_states"), Some("^GSPC"));
        assert_eq!(country_default_index("japan"), None);
    }
}
