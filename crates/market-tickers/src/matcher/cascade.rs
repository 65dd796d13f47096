//! Exact → prefix → contains matching over one record set.

use log::debug;

use crate::models::Record;
use crate::normalize::NormalizationPolicy;

use super::tie_break::{break_tie, TieBreakMode};

/// Cascade tier that produced a match.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MatchTier {
    /// Normalized name or ticker equals the query.
    Exact,
    /// Normalized name starts with the query.
    Prefix,
    /// Normalized name contains the query.
    Contains,
}

/// Result of matching a query against one record set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchOutcome {
    NotFound,
    Unique(Record),
    /// Competing records in dataset order.
    Ambiguous(Vec<Record>),
}

/// Outcome plus the tier that decided it (`None` when nothing matched).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TieredMatch {
    pub outcome: MatchOutcome,
    pub tier: Option<MatchTier>,
}

impl TieredMatch {
    fn not_found() -> Self {
        Self {
            outcome: MatchOutcome::NotFound,
            tier: None,
        }
    }

    fn at(tier: MatchTier, outcome: MatchOutcome) -> Self {
        Self {
            outcome,
            tier: Some(tier),
        }
    }
}

/// Runs the matching cascade for one category.
///
/// Tiers run in order and a tier only runs when the previous one matched
/// nothing, with one exception: several prefix matches fall through to the
/// contains tier instead of failing. Several exact matches are final.
#[derive(Clone, Copy, Debug, Default)]
pub struct CategoryMatcher {
    policy: NormalizationPolicy,
}

/// An eligible record with its normalized forms, computed once per call.
struct Candidate<'a> {
    record: &'a Record,
    name: String,
    ticker: String,
}

impl CategoryMatcher {
    pub fn new(policy: NormalizationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> NormalizationPolicy {
        self.policy
    }

    /// Match an already-normalized `query` against `records`.
    ///
    /// `country` is a normalized country key; it only feeds the tie-break.
    pub fn find(&self, query: &str, records: &[Record], country: Option<&str>) -> TieredMatch {
        if query.is_empty() {
            return TieredMatch::not_found();
        }

        let candidates: Vec<Candidate<'_>> = records
            .iter()
            .filter(|r| r.is_eligible())
            .map(|record| Candidate {
                record,
                name: self.policy.normalize(&record.name),
                ticker: self.policy.normalize_symbol(&record.ticker),
            })
            .collect();

        // Exact
        let exact = select(&candidates, |c| c.name == query || c.ticker == query);
        match exact.len() {
            0 => {}
            1 => return TieredMatch::at(MatchTier::Exact, MatchOutcome::Unique(exact[0].clone())),
            n => {
                debug!("Exact tier: {} matches for '{}'", n, query);
                let outcome = match break_tie(&exact, country, TieBreakMode::Unique) {
                    Some(record) => MatchOutcome::Unique(record.clone()),
                    None => MatchOutcome::Ambiguous(owned(&exact)),
                };
                return TieredMatch::at(MatchTier::Exact, outcome);
            }
        }

        // Prefix
        let prefix = select(&candidates, |c| c.name.starts_with(query));
        if prefix.len() == 1 {
            return TieredMatch::at(MatchTier::Prefix, MatchOutcome::Unique(prefix[0].clone()));
        }
        if prefix.len() > 1 {
            debug!(
                "Prefix tier: {} matches for '{}', falling through",
                prefix.len(),
                query
            );
        }

        // Contains
        let contains = select(&candidates, |c| c.name.contains(query));
        match contains.len() {
            0 => TieredMatch::not_found(),
            1 => TieredMatch::at(
                MatchTier::Contains,
                MatchOutcome::Unique(contains[0].clone()),
            ),
            n => {
                debug!("Contains tier: {} matches for '{}'", n, query);
                let outcome = match break_tie(&contains, country, TieBreakMode::First) {
                    Some(record) => MatchOutcome::Unique(record.clone()),
                    None => MatchOutcome::Ambiguous(owned(&contains)),
                };
                TieredMatch::at(MatchTier::Contains, outcome)
            }
        }
    }
}

fn select<'a, F>(candidates: &[Candidate<'a>], predicate: F) -> Vec<&'a Record>
where
    F: Fn(&Candidate<'a>) -> bool,
{
    candidates
        .iter()
        .filter(|c| predicate(*c))
        .map(|c| c.record)
        .collect()
}

fn owned(records: &[&Record]) -> Vec<Record> {
    records.iter().map(|r| (*r).clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn matcher() -> CategoryMatcher {
        CategoryMatcher::new(NormalizationPolicy::Strict)
    }

    fn tata() -> Vec<Record> {
        vec![
            Record::stock("Tata Motors", "TATAMOTORS.NS"),
            Record::stock("Tata Motors", "TATAMTR.BO"),
        ]
    }

    fn tickers(outcome: &MatchOutcome) -> Vec<String> {
        match outcome {
            MatchOutcome::Ambiguous(records) => records.iter().map(|r| r.ticker.clone()).collect(),
            other => panic!("Expected Ambiguous, got {:?}", other),
        }
    }

    #[test]
    fn test_exact_name_match() {
        let records = vec![Record::stock("Apple Inc", "AAPL")];
        let result = matcher().find("appleinc", &records, None);
        assert_eq!(result.tier, Some(MatchTier::Exact));
        assert_eq!(result.outcome, MatchOutcome::Unique(records[0].clone()));
    }

    #[test]
    fn test_exact_ticker_match_ignores_currency_suffix() {
        let records = vec![Record::new("US Dollar / Indian Rupee", "USDINR=X", Category::Currency)];
        let result = matcher().find("usdinr", &records, None);
        assert_eq!(result.tier, Some(MatchTier::Exact));
        assert!(matches!(result.outcome, MatchOutcome::Unique(r) if r.ticker == "USDINR=X"));
    }

    #[test]
    fn test_exact_ambiguity_is_final() {
        let records = tata();
        let result = matcher().find("tatamotors", &records, None);
        assert_eq!(result.tier, Some(MatchTier::Exact));
        assert_eq!(
            tickers(&result.outcome),
            vec!["TATAMOTORS.NS".to_string(), "TATAMTR.BO".to_string()]
        );
    }

    #[test]
    fn test_exact_india_tie_break() {
        let records = tata();
        let result = matcher().find("tatamotors", &records, Some("india"));
        assert!(matches!(result.outcome, MatchOutcome::Unique(r) if r.ticker == "TATAMOTORS.NS"));
    }

    #[test]
    fn test_exact_india_tie_break_needs_single_nse() {
        let records = vec![
            Record::stock("Tata Motors", "TATAMOTORS.NS"),
            Record::stock("Tata Motors", "TATAMOTORS-DVR.NS"),
        ];
        let result = matcher().find("tatamotors", &records, Some("india"));
        assert_eq!(tickers(&result.outcome).len(), 2);
    }

    #[test]
    fn test_exact_ambiguity_without_preferred_exchange() {
        let records = tata();
        let result = matcher().find("tatamotors", &records, Some("united_states"));
        assert_eq!(result.tier, Some(MatchTier::Exact));
        assert_eq!(tickers(&result.outcome).len(), 2);
    }

    #[test]
    fn test_unique_prefix() {
        let records = vec![
            Record::stock("Infosys Ltd", "INFY.NS"),
            Record::stock("Wipro Ltd", "WIPRO.NS"),
        ];
        let result = matcher().find("infos", &records, None);
        assert_eq!(result.tier, Some(MatchTier::Prefix));
        assert!(matches!(result.outcome, MatchOutcome::Unique(r) if r.ticker == "INFY.NS"));
    }

    #[test]
    fn test_prefix_ambiguity_falls_through_to_contains() {
        let records = vec![
            Record::stock("Reliance Industries", "RELIANCE.NS"),
            Record::stock("Reliance Power", "RPOWER.NS"),
        ];
        let result = matcher().find("reliance", &records, None);
        assert_eq!(result.tier, Some(MatchTier::Contains));
        assert_eq!(tickers(&result.outcome).len(), 2);

        let result = matcher().find("reliance", &records, Some("india"));
        assert_eq!(result.tier, Some(MatchTier::Contains));
        assert!(matches!(result.outcome, MatchOutcome::Unique(r) if r.ticker == "RELIANCE.NS"));
    }

    #[test]
    fn test_contains_india_without_nse_listing_stays_ambiguous() {
        let records = vec![
            Record::stock("Reliance Industries", "RELIANCE.BO"),
            Record::stock("Reliance Power", "RPOWER.BO"),
        ];
        let result = matcher().find("reliance", &records, Some("india"));
        assert_eq!(result.tier, Some(MatchTier::Contains));
        assert_eq!(
            tickers(&result.outcome),
            vec!["RELIANCE.BO".to_string(), "RPOWER.BO".to_string()]
        );
    }

    #[test]
    fn test_contains_match() {
        let records = vec![
            Record::stock("Housing Development Finance", "HDFC.NS"),
            Record::stock("State Bank of India", "SBIN.NS"),
        ];
        let result = matcher().find("bankof", &records, None);
        assert_eq!(result.tier, Some(MatchTier::Contains));
        assert!(matches!(result.outcome, MatchOutcome::Unique(r) if r.ticker == "SBIN.NS"));
    }

    #[test]
    fn test_ineligible_records_are_skipped() {
        let records = vec![
            Record::stock("Apple Inc", ""),
            Record::stock("", "APPLE"),
            Record::stock("Apple Inc", "AAPL"),
        ];
        let result = matcher().find("apple", &records, None);
        assert!(matches!(result.outcome, MatchOutcome::Unique(r) if r.ticker == "AAPL"));
    }

    #[test]
    fn test_no_match_and_empty_query() {
        let records = vec![Record::stock("Apple Inc", "AAPL")];
        assert_eq!(matcher().find("tesla", &records, None).outcome, MatchOutcome::NotFound);
        assert_eq!(matcher().find("", &records, None).outcome, MatchOutcome::NotFound);
        assert_eq!(matcher().find("apple", &[], None).outcome, MatchOutcome::NotFound);
    }

    #[test]
    fn test_lenient_policy_keeps_dots() {
        let records = vec![Record::stock("Dr. Reddy's", "DRREDDY.NS")];
        let lenient = CategoryMatcher::new(NormalizationPolicy::Lenient);
        assert_eq!(lenient.find("drreddy's", &records, None).outcome, MatchOutcome::NotFound);
        assert!(matches!(
            lenient.find("dr.reddy's", &records, None).outcome,
            MatchOutcome::Unique(_)
        ));
    }
}
