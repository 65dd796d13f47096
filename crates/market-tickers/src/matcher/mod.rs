//! Matching a normalized query against one category's record set.

mod cascade;
mod tie_break;

pub use cascade::{CategoryMatcher, MatchOutcome, MatchTier, TieredMatch};
pub use tie_break::{break_tie, preferred_suffix, TieBreakMode};
