//! Error types and fallback classification for ticker resolution.
//!
//! This module provides:
//! - [`TickerError`]: The main error enum for all resolution operations
//! - [`FallbackClass`]: Classification used by the cross-category fallback

mod fallback;

pub use fallback::FallbackClass;

use thiserror::Error;

/// Hint attached to every ambiguity error.
pub const AMBIGUITY_HINT: &str = "Please use full company name (e.g. 'Reliance Industries').";

/// Errors that can occur while resolving a name to a ticker.
///
/// Each variant is classified into a [`FallbackClass`] via the
/// [`fallback_class`](Self::fallback_class) method.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TickerError {
    /// Empty name, unknown category string, or otherwise malformed request.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No record in the searched category matched the name.
    #[error("Ticker not found for: {0}")]
    NotFound(String),

    /// Several records matched and no tie-break applied.
    #[error("'{query}' is ambiguous. {hint}")]
    Ambiguous {
        /// The name as the caller typed it
        query: String,
        /// Tickers of the competing records, in dataset order
        candidates: Vec<String>,
        /// Human-actionable advice
        hint: String,
    },

    /// No default index is known for the country.
    #[error("No default index defined for country: {0}")]
    UnsupportedCountry(String),

    /// A backing dataset could not be read.
    /// Providers log this and degrade to an empty record set.
    #[error("Dataset error: {source_name} - {message}")]
    Dataset {
        /// The dataset file or source that failed
        source_name: String,
        /// What went wrong
        message: String,
    },
}

impl TickerError {
    /// Build an ambiguity error with the standard hint.
    pub fn ambiguous(query: impl Into<String>, candidates: Vec<String>) -> Self {
        Self::Ambiguous {
            query: query.into(),
            candidates,
            hint: AMBIGUITY_HINT.to_string(),
        }
    }

    /// Returns the fallback classification for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use market_tickers::errors::{FallbackClass, TickerError};
    ///
    /// let error = TickerError::NotFound("Acme".to_string());
    /// assert_eq!(error.fallback_class(), FallbackClass::NextCategory);
    ///
    /// let error = TickerError::InvalidInput("name must be a non-empty string".to_string());
    /// assert_eq!(error.fallback_class(), FallbackClass::Propagate);
    /// ```
    pub fn fallback_class(&self) -> FallbackClass {
        match self {
            Self::NotFound(_) | Self::Dataset { .. } => FallbackClass::NextCategory,
            Self::Ambiguous { .. } => FallbackClass::Terminal,
            Self::InvalidInput(_) | Self::UnsupportedCountry(_) => FallbackClass::Propagate,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TickerError>;
