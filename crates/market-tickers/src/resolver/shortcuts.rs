//! Shortcut rules that resolve a name without consulting any dataset.
//!
//! Two shortcuts exist: a static alias table for the common index nicknames
//! and the six-letter currency-pair pattern.

use std::collections::HashMap;
use std::str::FromStr;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::normalize::{NormalizationPolicy, CURRENCY_SUFFIX};

/// Index nicknames as people type them, and the ticker each one means.
const INDEX_ALIAS_TABLE: &[(&str, &str)] = &[
    ("nifty", "^NSEI"),
    ("nifty50", "^NSEI"),
    ("niftyfifty", "^NSEI"),
    ("sensex", "^BSESN"),
    ("bse", "^BSESN"),
    ("sp500", "^GSPC"),
    ("sandp500", "^GSPC"),
    ("s&p500", "^GSPC"),
    ("dow", "^DJI"),
    ("dowjones", "^DJI"),
    ("nasdaq", "^IXIC"),
];

/// Substrings that make a name worth trying as an index first.
pub const INDEX_SIGNALS: [&str; 5] = ["nifty", "sensex", "dow", "nasdaq", "sp"];

fn build_aliases(policy: NormalizationPolicy) -> HashMap<String, &'static str> {
    INDEX_ALIAS_TABLE
        .iter()
        .map(|(alias, ticker)| (policy.normalize(alias), *ticker))
        .collect()
}

lazy_static! {
    static ref STRICT_ALIASES: HashMap<String, &'static str> =
        build_aliases(NormalizationPolicy::Strict);
    static ref LENIENT_ALIASES: HashMap<String, &'static str> =
        build_aliases(NormalizationPolicy::Lenient);
}

/// The alias table with keys normalized under `policy`.
pub fn index_aliases(policy: NormalizationPolicy) -> &'static HashMap<String, &'static str> {
    match policy {
        NormalizationPolicy::Strict => &*STRICT_ALIASES,
        NormalizationPolicy::Lenient => &*LENIENT_ALIASES,
    }
}

/// Ticker for a normalized index alias, if it is one.
pub fn index_alias(policy: NormalizationPolicy, normalized: &str) -> Option<&'static str> {
    index_aliases(policy).get(normalized).copied()
}

/// Whether a normalized name contains one of the [`INDEX_SIGNALS`].
pub fn has_index_signal(normalized: &str) -> bool {
    INDEX_SIGNALS.iter().any(|signal| normalized.contains(signal))
}

/// Yahoo currency ticker for a six-letter pair: "usdinr" → "USDINR=X".
pub fn currency_ticker(normalized: &str) -> String {
    format!("{}{}", normalized.to_ascii_uppercase(), CURRENCY_SUFFIX)
}

/// What to do with a name shaped like a currency pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CurrencyPairStrategy {
    /// Build `<PAIR>=X` directly without looking at any dataset.
    #[default]
    Immediate,
    /// Search the currency record set instead of the stock set.
    CategoryLookup,
}

impl FromStr for CurrencyPairStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "immediate" => Ok(Self::Immediate),
            "category_lookup" | "lookup" => Ok(Self::CategoryLookup),
            other => Err(format!("unknown currency strategy: {}", other)),
        }
    }
}
