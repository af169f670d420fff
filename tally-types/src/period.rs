//! Reporting period kinds.
//!
//! Period kinds are closed enums: once a label has been parsed, every engine
//! function handles all variants, so `TallyError::InvalidPeriod` can only come
//! out of [`str::parse`].

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TallyError;

/// Granularity of an analysis window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisPeriod {
    /// Monday 00:00 through Sunday 23:59:59.999.
    Week,
    /// First through last instant of a calendar month.
    Month,
    /// January 1 through December 31.
    Year,
}

impl AnalysisPeriod {
    /// Lowercase label used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

impl fmt::Display for AnalysisPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisPeriod {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            _ => Err(TallyError::invalid_period(s)),
        }
    }
}

/// Look-back unit for fund price history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FundPeriod {
    /// Shift back whole calendar years.
    Year,
    /// Shift back whole calendar months.
    Month,
    /// Year to date: from January 1 of the reference year, ignoring length.
    Ytd,
}

impl FundPeriod {
    /// Lowercase label used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Ytd => "ytd",
        }
    }
}

impl fmt::Display for FundPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FundPeriod {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "year" => Ok(Self::Year),
            "month" => Ok(Self::Month),
            "ytd" => Ok(Self::Ytd),
            _ => Err(TallyError::invalid_period(s)),
        }
    }
}
