//! Eagerly loaded, immutable dataset snapshot.
//!
//! Loading happens once, up front, and the snapshot is only handed out after
//! every record set has been read. Resolution calls then share it read-only
//! (wrap it in an `Arc` to share across threads).

use std::borrow::Cow;
use std::collections::HashMap;

use log::{debug, info};

use crate::models::{normalize_country, CountryKey, Record};

use super::traits::DatasetProvider;

/// Record sets copied out of another provider at construction time.
#[derive(Clone, Debug, Default)]
pub struct DatasetSnapshot {
    stocks: HashMap<CountryKey, Vec<Record>>,
    indices: Vec<Record>,
    etfs: Vec<Record>,
    currencies: Vec<Record>,
}

impl DatasetSnapshot {
    /// Load indices, ETFs, currencies, and the stocks of `countries` from
    /// `provider`.
    pub fn load<P>(provider: &P, countries: &[&str]) -> Self
    where
        P: DatasetProvider + ?Sized,
    {
        let mut stocks = HashMap::new();
        for country in countries {
            let key = normalize_country(country);
            let records = provider.load_stocks(&key).into_owned();
            stocks.insert(key, records);
        }

        let snapshot = Self {
            stocks,
            indices: provider.load_indices().into_owned(),
            etfs: provider.load_etfs().into_owned(),
            currencies: provider.load_currencies().into_owned(),
        };

        info!(
            "Dataset snapshot loaded: {} stock countries, {} records",
            snapshot.stocks.len(),
            snapshot.record_count()
        );
        snapshot
    }

    /// Countries whose stocks were loaded.
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.stocks.keys().map(String::as_str)
    }

    /// Total number of records across every set.
    pub fn record_count(&self) -> usize {
        self.stocks.values().map(Vec::len).sum::<usize>()
            + self.indices.len()
            + self.etfs.len()
            + self.currencies.len()
    }
}

impl DatasetProvider for DatasetSnapshot {
    fn load_stocks(&self, country: &str) -> Cow<'_, [Record]> {
        match self.stocks.get(&normalize_country(country)) {
            Some(records) => Cow::Borrowed(records.as_slice()),
            None => {
                debug!("Country '{}' not in snapshot", country);
                Cow::Borrowed(&[])
            }
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
