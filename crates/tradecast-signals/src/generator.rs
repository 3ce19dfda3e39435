//! Signal row generation over a bar series.

use crate::SignalRule;
use tradecast_core::traits::Indicator;
use tradecast_core::types::{BarSeries, SignalRow};
use tradecast_indicators::{Macd, Rsi, Sma};

/// Computes indicator columns for a series and derives one signal per row.
pub struct SignalGenerator {
    rule: SignalRule,
    rsi: Rsi,
    sma_fast: Sma,
    sma_slow: Sma,
    macd: Macd,
}

impl SignalGenerator {
    /// Standard column set: RSI-14, SMA-20/SMA-50, MACD 12/26/9.
    pub fn new(rule: SignalRule) -> Self {
        Self {
            rule,
            rsi: Rsi::new(14),
            sma_fast: Sma::new(20),
            sma_slow: Sma::new(50),
            macd: Macd::new(),
        }
    }

    /// Generate signal rows, one per bar in the series.
    ///
    /// The position column is a scan with carry: it holds the most recent
    /// non-hold signal at or before each row.
    pub fn generate(&self, series: &BarSeries) -> Vec<SignalRow> {
        let closes = series.closes();
        let rsi = self.rsi.compute(&closes);
        let sma_fast = self.sma_fast.compute(&closes);
        let sma_slow = self.sma_slow.compute(&closes);
        let macd_lines = self.macd.compute_lines(&closes);

        let mut rows = Vec::with_capacity(series.len());
        let mut position = None;

        for (i, bar) in series.iter().enumerate() {
            let signal = self.rule.evaluate(rsi[i], sma_fast[i], sma_slow[i]);
            if !signal.is_hold() {
                position = Some(signal);
            }
            rows.push(SignalRow {
                bar: *bar,
                rsi: rsi[i],
                sma_fast: sma_fast[i],
                sma_slow: sma_slow[i],
                macd: macd_lines.macd[i],
                macd_signal: macd_lines.signal[i],
                signal,
                position,
            });
        }

        rows
    }
}

impl Default for SignalGenerator {
    fn default() -> Self {
        Self::new(SignalRule::default())
    }
}
