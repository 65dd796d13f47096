/// Canonical ticker symbol as used by price-data providers (e.g. "RELIANCE.NS", "^GSPC").
pub type Ticker = String;

/// Country key: lowercase, words joined by underscores ("india", "united_states").
pub type CountryKey = String;

/// Country key for India, the only region with an exchange tie-break.
pub const INDIA: &str = "india";

/// Normalize a caller-supplied country into a [`CountryKey`].
///
/// "United States" becomes "united_states", " INDIA " becomes "india".
pub fn normalize_country(country: &str) -> CountryKey {
    country.trim().to_lowercase().replace(' ', "_")
}
