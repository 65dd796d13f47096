use std::str::FromStr;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::models::INDIA;
use crate::normalize::NormalizationPolicy;

use super::default_index::DefaultIndexStrategy;
use super::shortcuts::CurrencyPairStrategy;

/// Behavior switches for [`TickerResolver`](super::TickerResolver).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Policy applied to the query and to every record in a call.
    pub normalization: NormalizationPolicy,
    /// Handling of six-letter names such as "USDINR".
    pub currency_strategy: CurrencyPairStrategy,
    /// Stock region used when the caller names no country.
    pub default_country: String,
    /// How `get_default_index` finds a benchmark.
    pub default_index_strategy: DefaultIndexStrategy,
    /// Stop the smart fallback at the first ambiguous category.
    pub surface_ambiguity: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            normalization: NormalizationPolicy::default(),
            currency_strategy: CurrencyPairStrategy::default(),
            default_country: INDIA.to_string(),
            default_index_strategy: DefaultIndexStrategy::default(),
            surface_ambiguity: false,
        }
    }
}

impl ResolverConfig {
    /// Read `MT_*` environment variables over the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unparseable values keep the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            normalization: parse_or(&lookup, "MT_NORMALIZATION", defaults.normalization),
            currency_strategy: parse_or(
                &lookup,
                "MT_CURRENCY_STRATEGY",
                defaults.currency_strategy,
            ),
            default_country: lookup("MT_DEFAULT_COUNTRY")
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty())
                .unwrap_or(defaults.default_country),
            default_index_strategy: parse_or(
                &lookup,
                "MT_DEFAULT_INDEX_STRATEGY",
                defaults.default_index_strategy,
            ),
            surface_ambiguity: parse_or(
                &lookup,
                "MT_SURFACE_AMBIGUITY",
                defaults.surface_ambiguity,
            ),
        }
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
            warn!("Ignoring {}={}: {}", key, raw, e);
            default
        }),
        None => default,
    }
}
