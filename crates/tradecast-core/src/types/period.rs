//! Lookback period definitions for history requests.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lookback window requested from the market-data provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LookbackPeriod {
    /// One month of daily bars
    #[serde(rename = "1mo")]
    OneMonth,
    /// Three months of daily bars
    #[serde(rename = "3mo")]
    ThreeMonths,
    /// Six months of daily bars
    #[serde(rename = "6mo")]
    #[default]
    SixMonths,
    /// One year of daily bars
    #[serde(rename = "1y")]
    OneYear,
}

impl LookbackPeriod {
    /// Provider-facing period string.
    pub fn as_str(&self) -> &'static str {
        match self {
            LookbackPeriod::OneMonth => "1mo",
            LookbackPeriod::ThreeMonths => "3mo",
            LookbackPeriod::SixMonths => "6mo",
            LookbackPeriod::OneYear => "1y",
        }
    }

    /// Periods to try for a fetch, preferred first. The tail is the fixed
    /// fallback sequence with the preferred period de-duplicated out.
    pub fn fallback_chain(preferred: LookbackPeriod) -> Vec<LookbackPeriod> {
        let mut chain = vec![preferred];
        for period in [
            LookbackPeriod::ThreeMonths,
            LookbackPeriod::OneMonth,
            LookbackPeriod::OneYear,
        ] {
            if period != preferred {
                chain.push(period);
            }
        }
        chain
    }
}

impl fmt::Display for LookbackPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LookbackPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1mo" | "1m" => Ok(LookbackPeriod::OneMonth),
            "3mo" | "3m" => Ok(LookbackPeriod::ThreeMonths),
            "6mo" | "6m" => Ok(LookbackPeriod::SixMonths),
            "1y" | "12mo" => Ok(LookbackPeriod::OneYear),
            _ => Err(format!("Invalid lookback period: {}", s)),
        }
    }
}
