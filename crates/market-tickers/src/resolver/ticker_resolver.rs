//! The name-resolution orchestrator.

use log::debug;

use crate::errors::{FallbackClass, Result, TickerError};
use crate::matcher::{CategoryMatcher, MatchOutcome};
use crate::models::{normalize_country, Category, Record, Ticker};
use crate::normalize::looks_like_currency_pair;
use crate::provider::DatasetProvider;

use super::config::ResolverConfig;
use super::default_index::{country_default_index, DefaultIndexStrategy, STOCK_REGIONS};
use super::shortcuts::{currency_ticker, has_index_signal, index_alias, CurrencyPairStrategy};
use super::traits::TickerLookup;

/// Resolves free-form names to tickers over a [`DatasetProvider`].
///
/// Holds no mutable state: the same arguments always produce the same result
/// for the same datasets.
///
/// # Example
///
/// ```
/// use market_tickers::provider::InMemoryProvider;
/// use market_tickers::{Record, TickerResolver};
///
/// let provider = InMemoryProvider::new()
///     .with_stocks("india", vec![Record::stock("Reliance Industries", "RELIANCE.NS")]);
/// let resolver = TickerResolver::new(provider);
///
/// assert_eq!(resolver.get_ticker("reliance industries", None, None).unwrap(), "RELIANCE.NS");
/// assert_eq!(resolver.get_ticker("Nifty 50", None, None).unwrap(), "^NSEI");
/// assert_eq!(resolver.get_ticker("USDINR", None, None).unwrap(), "USDINR=X");
/// ```
pub struct TickerResolver<P> {
    provider: P,
    config: ResolverConfig,
    matcher: CategoryMatcher,
}

impl<P: DatasetProvider> TickerResolver<P> {
    /// Create a resolver with the default configuration.
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, ResolverConfig::default())
    }

    /// Create a resolver with an explicit configuration.
    pub fn with_config(provider: P, config: ResolverConfig) -> Self {
        let matcher = CategoryMatcher::new(config.normalization);
        Self {
            provider,
            config,
            matcher,
        }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Resolve with the category given as a string ("stock", "etf", ...).
    pub fn get_ticker_in(&self, name: &str, country: Option<&str>, category: &str) -> Result<Ticker> {
        let category: Category = category.parse()?;
        self.get_ticker(name, country, Some(category))
    }

    /// Validate `name` and return it trimmed with its normalized query.
    fn prepare<'a>(&self, name: &'a str) -> Result<(&'a str, String)> {
        let raw = name.trim();
        if raw.is_empty() {
            return Err(TickerError::InvalidInput(
                "name must be a non-empty string".to_string(),
            ));
        }
        Ok((raw, self.config.normalization.normalize_symbol(raw)))
    }

    /// Dataset-free resolution: index aliases, then the currency pattern.
    fn shortcut(&self, query: &str, category: Option<Category>) -> Option<Ticker> {
        if let Some(ticker) = index_alias(self.config.normalization, query) {
            debug!("Index alias '{}' -> {}", query, ticker);
            return Some(ticker.to_string());
        }

        let currency_allowed = matches!(category, None | Some(Category::Currency));
        if currency_allowed
            && self.config.currency_strategy == CurrencyPairStrategy::Immediate
            && looks_like_currency_pair(query)
        {
            let ticker = currency_ticker(query);
            debug!("Currency pattern '{}' -> {}", query, ticker);
            return Some(ticker);
        }

        None
    }

    /// Category searched when the caller names none.
    fn implied_category(&self, query: &str) -> Category {
        if self.config.currency_strategy == CurrencyPairStrategy::CategoryLookup
            && looks_like_currency_pair(query)
        {
            Category::Currency
        } else {
            Category::Stock
        }
    }

    fn lookup(
        &self,
        raw: &str,
        query: &str,
        country: Option<&str>,
        category: Category,
    ) -> Result<Record> {
        let country_key = country.map(normalize_country);
        let region = country_key
            .clone()
            .unwrap_or_else(|| normalize_country(&self.config.default_country));

        let records = self.provider.load(category, &region);
        let matched = self.matcher.find(query, &records, country_key.as_deref());
        debug!(
            "Lookup '{}' in {} ({}): {} at {:?}",
            query,
            category,
            region,
            outcome_label(&matched.outcome),
            matched.tier
        );

        match matched.outcome {
            MatchOutcome::Unique(record) => Ok(record),
            MatchOutcome::NotFound => Err(TickerError::NotFound(raw.to_string())),
            MatchOutcome::Ambiguous(records) => Err(TickerError::ambiguous(
                raw,
                records.into_iter().map(|r| r.ticker).collect(),
            )),
        }
    }

    /// Resolve `name` within one category.
    ///
    /// `country` defaults to the configured region for stock lookups and
    /// drives the exchange tie-break when given. `category` defaults to
    /// stocks (or currencies for pair-shaped names under
    /// [`CurrencyPairStrategy::CategoryLookup`]).
    pub fn get_ticker(
        &self,
        name: &str,
        country: Option<&str>,
        category: Option<Category>,
    ) -> Result<Ticker> {
        let (raw, query) = self.prepare(name)?;

        if let Some(ticker) = self.shortcut(&query, category) {
            return Ok(ticker);
        }
        if query.is_empty() {
            return Err(TickerError::InvalidInput(format!(
                "name has no searchable characters: {}",
                raw
            )));
        }

        let category = category.unwrap_or_else(|| self.implied_category(&query));
        self.lookup(raw, &query, country, category)
            .map(|record| record.ticker)
    }

    /// Smart resolution across categories.
    ///
    /// Tries index (only for alias or index-like names), currency (only for
    /// six-letter names), stock, then ETF. A category that does not know the
    /// name hands over to the next one; ambiguity does too unless
    /// `surface_ambiguity` is set. Invalid requests fail immediately.
    pub fn get(&self, name: &str, country: Option<&str>) -> Result<Ticker> {
        let (raw, query) = self.prepare(name)?;

        let mut plan = Vec::with_capacity(4);
        if index_alias(self.config.normalization, &query).is_some() || has_index_signal(&query) {
            plan.push(Category::Index);
        }
        if looks_like_currency_pair(&query) {
            plan.push(Category::Currency);
        }
        plan.push(Category::Stock);
        plan.push(Category::Etf);

        for category in plan {
            let scoped_country = if category == Category::Stock {
                country
            } else {
                None
            };
            match self.get_ticker(raw, scoped_country, Some(category)) {
                Ok(ticker) => {
                    debug!("'{}' resolved as {} -> {}", raw, category, ticker);
                    return Ok(ticker);
                }
                Err(e) => match e.fallback_class() {
                    FallbackClass::NextCategory => {
                        debug!("'{}' not found as {}, trying next", raw, category);
                    }
                    FallbackClass::Terminal if !self.config.surface_ambiguity => {
                        debug!("'{}' ambiguous as {}, trying next", raw, category);
                    }
                    FallbackClass::Terminal | FallbackClass::Propagate => return Err(e),
                },
            }
        }

        Err(TickerError::NotFound(raw.to_string()))
    }

    /// Stock lookup across the default region and then [`STOCK_REGIONS`].
    /// The first region that knows the name decides, ambiguity included.
    fn lookup_any_region(&self, raw: &str, query: &str, default_region: &str) -> Result<Record> {
        let regions = std::iter::once(default_region)
            .chain(STOCK_REGIONS.iter().copied().filter(|r| *r != default_region));

        for region in regions {
            match self.lookup(raw, query, Some(region), Category::Stock) {
                Err(TickerError::NotFound(_)) => {
                    debug!("'{}' not listed in {}", raw, region);
                }
                other => return other,
            }
        }
        Err(TickerError::NotFound(raw.to_string()))
    }

    /// Benchmark index for a stock, per the configured strategy.
    ///
    /// `country` defaults to the configured region. Under
    /// [`DefaultIndexStrategy::RecordReference`] a missing country widens the
    /// stock search to every known region.
    pub fn get_default_index(&self, stock_name: &str, country: Option<&str>) -> Result<Ticker> {
        let region = normalize_country(country.unwrap_or(self.config.default_country.as_str()));

        match self.config.default_index_strategy {
            DefaultIndexStrategy::CountryTable => country_default_index(&region)
                .map(str::to_string)
                .ok_or(TickerError::UnsupportedCountry(region)),
            DefaultIndexStrategy::RecordReference => {
                let (raw, query) = self.prepare(stock_name)?;
                let record = match country {
                    Some(_) => self.lookup(raw, &query, Some(region.as_str()), Category::Stock)?,
                    None => self.lookup_any_region(raw, &query, &region)?,
                };
                let index_name = record.default_index.ok_or_else(|| {
                    TickerError::NotFound(format!("default index of {}", raw))
                })?;
                debug!("'{}' references index '{}'", raw, index_name);
                self.get_ticker(&index_name, None, Some(Category::Index))
            }
        }
    }
}

fn outcome_label(outcome: &MatchOutcome) -> &'static str {
    match outcome {
        MatchOutcome::NotFound => "not found",
        MatchOutcome::Unique(_) => "unique",
        MatchOutcome::Ambiguous(_) => "ambiguous",
    }
}

impl<P: DatasetProvider> TickerLookup for TickerResolver<P> {
    fn get_ticker(
        &self,
        name: &str,
        country: Option<&str>,
        category: Option<Category>,
    ) -> Result<Ticker> {
        TickerResolver::get_ticker(self, name, country, category)
    }

    fn get(&self, name: &str, country: Option<&str>) -> Result<Ticker> {
        TickerResolver::get(self, name, country)
    }

    fn get_default_index(&self, stock_name: &str, country: Option<&str>) -> Result<Ticker> {
        TickerResolver::get_default_index(self, stock_name, country)
    }
}
