//! Trade signal types.

use super::Bar;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ternary per-row trade signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    /// Exit / short bias (-1)
    Sell,
    /// No action (0)
    #[default]
    Hold,
    /// Entry / long bias (+1)
    Buy,
}

impl Signal {
    /// Integer encoding used in reports: sell = -1, hold = 0, buy = +1.
    pub fn as_i8(self) -> i8 {
        match self {
            Signal::Sell => -1,
            Signal::Hold => 0,
            Signal::Buy => 1,
        }
    }

    /// Whether this is the neutral signal.
    pub fn is_hold(self) -> bool {
        self == Signal::Hold
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i8())
    }
}

/// A price bar augmented with indicator columns and the derived signal.
///
/// Indicator fields are `None` until their own warm-up length is reached.
/// `position` carries the most recent non-hold signal at or before this
/// row, and is `None` until the first non-hold signal appears.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalRow {
    pub bar: Bar,
    pub rsi: Option<f64>,
    pub sma_fast: Option<f64>,
    pub sma_slow: Option<f64>,
    pub macd: Option<f64>,
    pub macd_signal: Option<f64>,
    pub signal: Signal,
    pub position: Option<Signal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_encoding() {
        assert_eq!(Signal::Sell.as_i8(), -1);
        assert_eq!(Signal::Hold.as_i8(), 0);
        assert_eq!(Signal::Buy.as_i8(), 1);
        assert!(Signal::Hold.is_hold());
        assert!(!Signal::Buy.is_hold());
    }

    #[test]
    fn test_signal_display() {
        assert_eq!(Signal::Buy.to_string(), "1");
        assert_eq!(Signal::Sell.to_string(), "-1");
    }
}
