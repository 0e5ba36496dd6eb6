//! Exchange and catalog filter enums.

use serde::{Deserialize, Serialize};

/// Stock exchange a symbol is listed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Exchange {
    /// National Stock Exchange
    Nse,
    /// Bombay Stock Exchange
    Bse,
}

impl Exchange {
    /// Wire representation expected by the lookup endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nse => "NSE",
            Self::Bse => "BSE",
        }
    }
}

/// Mutual fund plan filter for catalog searches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanFilter {
    Direct,
    Regular,
}

impl PlanFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Regular => "regular",
        }
    }
}

impl Default for PlanFilter {
    fn default() -> Self {
        Self::Direct
    }
}

/// Scheme type filter for catalog searches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeFilter {
    Growth,
    Dividend,
    All,
}

impl TypeFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Growth => "growth",
            Self::Dividend => "dividend",
            Self::All => "all",
        }
    }
}

impl Default for TypeFilter {
    fn default() -> Self {
        Self::All
    }
}
