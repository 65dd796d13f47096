//! Country-specific tie-breaks between equally good candidates.
//!
//! A country may name a preferred exchange suffix; among several matches the
//! candidate listed on that exchange wins. Only India has one today (NSE over
//! BSE).

use std::collections::HashMap;

use lazy_static::lazy_static;
use log::debug;

use crate::models::{Record, INDIA};

lazy_static! {
    /// Country key → preferred Yahoo exchange suffix.
    static ref PREFERRED_SUFFIXES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert(INDIA, ".NS");
        m
    };
}

/// How strictly a tie-break picks among preferred candidates.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TieBreakMode {
    /// Pick only when exactly one candidate is on the preferred exchange.
    Unique,
    /// Pick the first candidate (dataset order) on the preferred exchange.
    First,
}

/// Preferred exchange suffix for a country key, if it has one.
pub fn preferred_suffix(country: &str) -> Option<&'static str> {
    PREFERRED_SUFFIXES.get(country).copied()
}

/// Apply the country's tie-break to `candidates`.
///
/// Returns `None` when there is no country, the country has no preferred
/// exchange, or the mode's condition is not met.
pub fn break_tie<'a>(
    candidates: &[&'a Record],
    country: Option<&str>,
    mode: TieBreakMode,
) -> Option<&'a Record> {
    let suffix = preferred_suffix(country?)?;
    let mut preferred = candidates.iter().filter(|r| r.ticker.ends_with(suffix));

    let picked = match mode {
        TieBreakMode::Unique => {
            let first = preferred.next()?;
            if preferred.next().is_some() {
                return None;
            }
            first
        }
        TieBreakMode::First => preferred.next()?,
    };

    debug!(
        "Tie-break ({:?}) picked {} among {} candidates",
        mode,
        picked.ticker,
        candidates.len()
    );
    Some(*picked)
}
