//! The per-row signal rule.

use serde::{Deserialize, Serialize};
use tradecast_core::types::Signal;

/// Threshold configuration for the RSI + MA-crossover rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalRule {
    /// Buy side: RSI below this reads as oversold.
    pub oversold: f64,
    /// Sell side: RSI above this reads as overbought.
    pub overbought: f64,
}

impl Default for SignalRule {
    fn default() -> Self {
        Self {
            oversold: 30.0,
            overbought: 70.0,
        }
    }
}

impl SignalRule {
    /// Create a rule with custom thresholds.
    pub fn new(oversold: f64, overbought: f64) -> Self {
        assert!(
            oversold < overbought,
            "Oversold must be below overbought"
        );
        Self {
            oversold,
            overbought,
        }
    }

    /// Evaluate the rule for one row from that row's columns only.
    ///
    /// Buy when RSI is oversold AND the fast MA is above the slow MA;
    /// sell when RSI is overbought OR the fast MA is below the slow MA.
    /// Any comparison against an undefined column is false.
    ///
    /// The sell branch is applied after the buy branch, so a row matching
    /// both (possible because sell is a disjunction) resolves to sell.
    pub fn evaluate(
        &self,
        rsi: Option<f64>,
        sma_fast: Option<f64>,
        sma_slow: Option<f64>,
    ) -> Signal {
        let oversold = matches!(rsi, Some(r) if r < self.oversold);
        let overbought = matches!(rsi, Some(r) if r > self.overbought);
        let fast_above = matches!((sma_fast, sma_slow), (Some(f), Some(s)) if f > s);
        let fast_below = matches!((sma_fast, sma_slow), (Some(f), Some(s)) if f < s);

        let mut signal = Signal::Hold;
        if oversold && fast_above {
            signal = Signal::Buy;
        }
        if overbought || fast_below {
            signal = Signal::Sell;
        }
        signal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buy_on_oversold_with_uptrend() {
        let rule = SignalRule::default();
        assert_eq!(
            rule.evaluate(Some(25.0), Some(105.0), Some(100.0)),
            Signal::Buy
        );
    }

    #[test]
    fn test_sell_on_overbought_regardless_of_trend() {
        let rule = SignalRule::default();
        assert_eq!(
            rule.evaluate(Some(75.0), Some(105.0), Some(100.0)),
            Signal::Sell
        );
        assert_eq!(
            rule.evaluate(Some(75.0), Some(95.0), Some(100.0)),
            Signal::Sell
        );
    }

    #[test]
    fn test_sell_on_downtrend_alone() {
        let rule = SignalRule::default();
        assert_eq!(
            rule.evaluate(Some(50.0), Some(95.0), Some(100.0)),
            Signal::Sell
        );
    }

    #[test]
    fn test_sell_wins_when_both_branches_match() {
        // Oversold + downtrend satisfies neither buy (needs uptrend) nor
        // hold: the fast-below-slow leg of the sell branch fires.
        let rule = SignalRule::default();
        assert_eq!(
            rule.evaluate(Some(25.0), Some(95.0), Some(100.0)),
            Signal::Sell
        );
    }

    #[test]
    fn test_hold_in_neutral_band() {
        let rule = SignalRule::default();
        assert_eq!(
            rule.evaluate(Some(50.0), Some(105.0), Some(100.0)),
            Signal::Hold
        );
    }

    #[test]
    fn test_undefined_columns_read_as_false() {
        let rule = SignalRule::default();
        assert_eq!(rule.evaluate(None, None, None), Signal::Hold);
        assert_eq!(rule.evaluate(Some(25.0), None, None), Signal::Hold);
        // MAs defined without RSI: the trend leg of sell still applies
        assert_eq!(
            rule.evaluate(None, Some(95.0), Some(100.0)),
            Signal::Sell
        );
    }

    #[test]
    #[should_panic]
    fn test_inverted_thresholds_rejected() {
        SignalRule::new(70.0, 30.0);
    }
}
