//! Dataset provider trait definitions.
//!
//! The resolver never reads files itself. It asks a `DatasetProvider` for the
//! record set of one category and treats what it gets as read-only.

use std::borrow::Cow;
use std::sync::Arc;

use crate::models::{Category, Record};

/// Source of record sets, one per category.
///
/// Implementations must not fail: a missing or unreadable backing source is
/// reported as an empty record set so lookups degrade to "not found".
///
/// # Example
///
/// ```ignore
/// use std::borrow::Cow;
/// use market_tickers::provider::DatasetProvider;
/// use market_tickers::Record;
///
/// struct Fixed(Vec<Record>);
///
/// impl DatasetProvider for Fixed {
///     fn load_stocks(&self, _country: &str) -> Cow<'_, [Record]> {
///         Cow::Borrowed(&self.0)
///     }
///     fn load_indices(&self) -> Cow<'_, [Record]> { Cow::Borrowed(&[]) }
///     fn load_etfs(&self) -> Cow<'_, [Record]> { Cow::Borrowed(&[]) }
///     fn load_currencies(&self) -> Cow<'_, [Record]> { Cow::Borrowed(&[]) }
/// }
/// ```
pub trait DatasetProvider: Send + Sync {
    /// Stocks listed in `country` (a normalized country key), deduplicated
    /// by ticker with the later source winning.
    fn load_stocks(&self, country: &str) -> Cow<'_, [Record]>;

    /// Market indices of every region.
    fn load_indices(&self) -> Cow<'_, [Record]>;

    /// Exchange-traded funds.
    fn load_etfs(&self) -> Cow<'_, [Record]>;

    /// Currency pairs.
    fn load_currencies(&self) -> Cow<'_, [Record]>;

    /// Record set for `category`. `country` only applies to stocks.
    fn load(&self, category: Category, country: &str) -> Cow<'_, [Record]> {
        match category {
            Category::Stock => self.load_stocks(country),
            Category::Index => self.load_indices(),
            Category::Etf => self.load_etfs(),
            Category::Currency => self.load_currencies(),
        }
    }
}

impl<P: DatasetProvider + ?Sized> DatasetProvider for Arc<P> {
    fn load_stocks(&self, country: &str) -> Cow<'_, [Record]> {
        (**self).load_stocks(country)
    }

    fn load_indices(&self) -> Cow<'_, [Record]> {
        (**self).load_indices()
    }

    fn load_etfs(&self) -> Cow<'_, [Record]> {
        (**self).load_etfs()
    }

    fn load_currencies(&self) -> Cow<'_, [Record]> {
        (**self).load_currencies()
    }
}

impl<P: DatasetProvider + ?Sized> DatasetProvider for &P {
    fn load_stocks(&self, country: &str) -> Cow<'_, [Record]> {
        (**self).load_stocks(country)
    }

    fn load_indices(&self) -> Cow<'_, [Record]> {
        (**self).load_indices()
    }

    fn load_etfs(&self) -> Cow<'_, [Record]> {
        (**self).load_etfs()
    }

    fn load_currencies(&self) -> Cow<'_, [Record]> {
        (**self).load_currencies()
    }
}
