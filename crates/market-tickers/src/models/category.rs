use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::TickerError;

/// Which record set a lookup searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Stock,
    Index,
    Etf,
    Currency,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stock => "stock",
            Self::Index => "index",
            Self::Etf => "etf",
            Self::Currency => "currency",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = TickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stock" => Ok(Self::Stock),
            "index" => Ok(Self::Index),
            "etf" => Ok(Self::Etf),
            "currency" => Ok(Self::Currency),
            _ => Err(TickerError::InvalidInput(format!("Unknown category: {}", s))),
        }
    }
}
