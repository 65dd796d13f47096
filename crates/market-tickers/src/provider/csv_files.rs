//! CSV-backed dataset provider.
//!
//! Reads the bundled dataset tree:
//!
//! ```text
//! <root>/
//!   stocks/stocks_<country>.csv      legacy per-country listings
//!   new_stocks/india_stocks.csv      newer listings, merged over legacy
//!   new_stocks/us_stocks.csv
//!   indices/indices.csv
//!   etfs/etfs.csv
//!   currencies/currencies.csv
//! ```
//!
//! Columns: `name`, `ticker`, and optionally `exchange`, `country`,
//! `default_index`. Legacy rows may carry `symbol` + `exchange` instead of a
//! ticker.

use std::borrow::Cow;
use std::io;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use serde::Deserialize;

use crate::errors::TickerError;
use crate::models::{normalize_country, Category, Record, INDIA};

use super::merge::merge_by_ticker;
use super::traits::DatasetProvider;

const INDICES_FILE: &str = "indices/indices.csv";
const ETFS_FILE: &str = "etfs/etfs.csv";
const CURRENCIES_FILE: &str = "currencies/currencies.csv";

/// One CSV row. Every column is optional; rows missing a name or ticker are
/// dropped later by eligibility checks.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(default, alias = "display_name", alias = "displayName")]
    name: Option<String>,
    #[serde(default)]
    ticker: Option<String>,
    #[serde(default)]
    symbol: Option<String>,
    #[serde(default)]
    exchange: Option<String>,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    default_index: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Build a ticker for a legacy row that only has a bare symbol.
///
/// Indian listings get the NSE (`.NS`) or BSE (`.BO`) suffix; everything
/// else is used as-is.
pub fn build_ticker(symbol: &str, exchange: Option<&str>, country: Option<&str>) -> String {
    if country == Some(INDIA) {
        match exchange.map(str::trim) {
            Some(e) if e.eq_ignore_ascii_case("NSE") => format!("{}.NS", symbol),
            _ => format!("{}.BO", symbol),
        }
    } else {
        symbol.to_string()
    }
}

impl CsvRow {
    fn into_record(self, category: Category, fallback_country: Option<&str>) -> Option<Record> {
        let country = non_blank(self.country)
            .map(|c| normalize_country(&c))
            .or_else(|| fallback_country.map(str::to_string));
        let exchange = non_blank(self.exchange);

        let ticker = match non_blank(self.ticker) {
            Some(ticker) => ticker,
            None => {
                let symbol = non_blank(self.symbol)?;
                build_ticker(&symbol, exchange.as_deref(), country.as_deref())
            }
        };

        Some(Record {
            name: non_blank(self.name).unwrap_or_default(),
            ticker,
            category,
            country,
            exchange,
            default_index: non_blank(self.default_index),
        })
    }
}

/// Dataset provider reading CSV files under a data root.
#[derive(Clone, Debug)]
pub struct CsvDatasetProvider {
    root: PathBuf,
}

impl CsvDatasetProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Files feeding a country's stock list, oldest first.
    pub fn stock_sources(country: &str) -> Vec<String> {
        let mut sources = vec![format!("stocks/stocks_{}.csv", country)];
        match country {
            INDIA => sources.push("new_stocks/india_stocks.csv".to_string()),
            "united_states" | "us" => sources.push("new_stocks/us_stocks.csv".to_string()),
            _ => {}
        }
        sources
    }

    /// Read one file, degrading to an empty list when it is missing or unreadable.
    fn read(&self, relative: &str, category: Category, country: Option<&str>) -> Vec<Record> {
        match self.try_read(relative, category, country) {
            Ok(Some(records)) => {
                debug!("Loaded {} {} records from {}", records.len(), category, relative);
                records
            }
            Ok(None) => {
                debug!("Dataset {} not present, treating as empty", relative);
                Vec::new()
            }
            Err(e) => {
                warn!("{}", e);
                Vec::new()
            }
        }
    }

    /// `Ok(None)` when the file does not exist.
    fn try_read(
        &self,
        relative: &str,
        category: Category,
        country: Option<&str>,
    ) -> Result<Option<Vec<Record>>, TickerError> {
        let path = self.root.join(relative);

        let mut reader = match ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_path(&path)
        {
            Ok(reader) => reader,
            Err(e) => {
                if let csv::ErrorKind::Io(err) = e.kind() {
                    if err.kind() == io::ErrorKind::NotFound {
                        return Ok(None);
                    }
                }
                return Err(TickerError::Dataset {
                    source_name: relative.to_string(),
                    message: e.to_string(),
                });
            }
        };

        let mut records = Vec::new();
        for (line, row) in reader.deserialize::<CsvRow>().enumerate() {
            match row {
                Ok(row) => records.extend(row.into_record(category, country)),
                Err(e) => warn!("Skipping row {} of {}: {}", line + 1, relative, e),
            }
        }
        Ok(Some(records))
    }
}

impl DatasetProvider for CsvDatasetProvider {
    fn load_stocks(&self, country: &str) -> Cow<'_, [Record]> {
        let country = normalize_country(country);
        let rows = Self::stock_sources(&country)
            .into_iter()
            .flat_map(|source| self.read(&source, Category::Stock, Some(country.as_str())));
        Cow::Owned(merge_by_ticker(rows))
    }

    fn load_indices(&self) -> Cow<'_, [Record]> {
        Cow::Owned(self.read(INDICES_FILE, Category::Index, None))
    }

    fn load_etfs(&self) -> Cow<'_, [Record]> {
        Cow::Owned(self.read(ETFS_FILE, Category::Etf, None))
    }

    fn load_currencies(&self) -> Cow<'_, [Record]> {
        Cow::Owned(self.read(CURRENCIES_FILE, Category::Currency, None))
    }
}
