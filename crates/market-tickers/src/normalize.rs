//! Text normalization for name comparison.
//!
//! Every comparison in a resolution call runs both sides through the same
//! [`NormalizationPolicy`]; the resolver owns the policy and hands it to the
//! matcher so query and records can never be normalized differently.

use serde::{Deserialize, Serialize};

/// Suffix marking a Yahoo currency pair ticker ("EURUSD=X").
pub const CURRENCY_SUFFIX: &str = "=X";

/// How names are canonicalized before comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationPolicy {
    /// Lowercase and drop everything outside `[a-z0-9]`.
    #[default]
    Strict,
    /// Lowercase, spell `&` as "and", drop spaces and hyphens only.
    Lenient,
}

impl NormalizationPolicy {
    /// Canonicalize `text`. Total: never fails, may return an empty string.
    pub fn normalize(&self, text: &str) -> String {
        let lower = text.to_lowercase();
        match self {
            Self::Strict => lower
                .chars()
                .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
                .collect(),
            Self::Lenient => lower.replace('&', "and").replace(['-', ' '], ""),
        }
    }

    /// Normalize after removing a trailing currency-pair marker.
    pub fn normalize_symbol(&self, text: &str) -> String {
        self.normalize(strip_currency_suffix(text))
    }
}

impl std::str::FromStr for NormalizationPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            other => Err(format!("unknown normalization policy: {}", other)),
        }
    }
}

/// Remove a trailing `=X` (any case) from a ticker or query.
pub fn strip_currency_suffix(text: &str) -> &str {
    let trimmed = text.trim();
    let len = trimmed.len();
    if len >= CURRENCY_SUFFIX.len()
        && trimmed.is_char_boundary(len - CURRENCY_SUFFIX.len())
        && trimmed[len - CURRENCY_SUFFIX.len()..].eq_ignore_ascii_case(CURRENCY_SUFFIX)
    {
        &trimmed[..len - CURRENCY_SUFFIX.len()]
    } else {
        trimmed
    }
}

/// Six ASCII letters, e.g. "usdinr": the shape of a currency pair.
pub fn looks_like_currency_pair(normalized: &str) -> bool {
    normalized.len() == 6 && normalized.chars().all(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_strips_punctuation() {
        let policy = NormalizationPolicy::Strict;
        assert_eq!(policy.normalize("S&P 500"), "sp500");
        assert_eq!(policy.normalize("Bajaj-Auto Ltd."), "bajajautoltd");
        assert_eq!(policy.normalize("^NSEI"), "nsei");
    }

    #[test]
    fn test_lenient_substitutes_ampersand() {
        let policy = NormalizationPolicy::Lenient;
        assert_eq!(policy.normalize("S&P 500"), "sandp500");
        assert_eq!(policy.normalize("Bajaj-Auto Ltd."), "bajajautoltd.");
        assert_eq!(policy.normalize("M&M"), "mandm");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(NormalizationPolicy::Strict.normalize(""), "");
        assert_eq!(NormalizationPolicy::Strict.normalize("--"), "");
        assert_eq!(NormalizationPolicy::Lenient.normalize("--"), "");
    }

    #[test]
    fn test_strip_currency_suffix() {
        assert_eq!(strip_currency_suffix("USDINR=X"), "USDINR");
        assert_eq!(strip_currency_suffix("usdinr=x "), "usdinr");
        assert_eq!(strip_currency_suffix("AAPL"), "AAPL");
        assert_eq!(strip_currency_suffix("=X"), "");
    }

    #[test]
    fn test_normalize_symbol() {
        assert_eq!(
            NormalizationPolicy::Strict.normalize_symbol("EURUSD=X"),
            "eurusd"
        );
        assert_eq!(
            NormalizationPolicy::Strict.normalize_symbol("RELIANCE.NS"),
            "reliancens"
        );
    }

    #[test]
    fn test_currency_pair_shape() {
        assert!(looks_like_currency_pair("usdinr"));
        assert!(!looks_like_currency_pair("usdin1"));
        assert!(!looks_like_currency_pair("usdinrx"));
        assert!(!looks_like_currency_pair(""));
    }

    #[test]
    fn test_parse_policy() {
        assert_eq!(
            "LENIENT".parse::<NormalizationPolicy>().unwrap(),
            NormalizationPolicy::Lenient
        );
        assert!("fuzzy".parse::<NormalizationPolicy>().is_err());
    }
}
