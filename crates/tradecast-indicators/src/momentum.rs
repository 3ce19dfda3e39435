//! Momentum and trend indicators.

use crate::Ema;
use tradecast_core::traits::Indicator;

/// Relative Strength Index (RSI).
///
/// Bounded momentum oscillator derived from average recent gains vs.
/// losses, smoothed with Wilder's method.
#[derive(Debug, Clone)]
pub struct Rsi {
    period: usize,
}

impl Rsi {
    /// Create a new RSI indicator. The common period is 14.
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "Period must be greater than 0");
        Self { period }
    }
}

impl Indicator for Rsi {
    type Output = f64;

    fn compute(&self, data: &[f64]) -> Vec<Option<f64>> {
        let mut out = vec![None; data.len()];
        if data.len() <= self.period {
            return out;
        }

        let period_f64 = self.period as f64;

        // Seed averages from the first `period` price changes
        let mut avg_gain = 0.0;
        let mut avg_loss = 0.0;
        for i in 1..=self.period {
            let change = data[i] - data[i - 1];
            if change > 0.0 {
                avg_gain += change;
            } else {
                avg_loss += -change;
            }
        }
        avg_gain /= period_f64;
        avg_loss /= period_f64;
        out[self.period] = Some(Self::to_rsi(avg_gain, avg_loss));

        // Wilder's smoothing: avg = (prev_avg * (period-1) + change) / period
        for i in (self.period + 1)..data.len() {
            let change = data[i] - data[i - 1];
            let (gain, loss) = if change > 0.0 {
                (change, 0.0)
            } else {
                (0.0, -change)
            };
            avg_gain = (avg_gain * (period_f64 - 1.0) + gain) / period_f64;
            avg_loss = (avg_loss * (period_f64 - 1.0) + loss) / period_f64;
            out[i] = Some(Self::to_rsi(avg_gain, avg_loss));
        }

        out
    }

    fn warmup(&self) -> usize {
        self.period
    }

    fn name(&self) -> &str {
        "RSI"
    }
}

impl Rsi {
    fn to_rsi(avg_gain: f64, avg_loss: f64) -> f64 {
        if avg_loss == 0.0 {
            100.0
        } else {
            100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
        }
    }
}

/// MACD columns, each aligned 1:1 with the input rows.
///
/// The MACD line becomes defined once the slow EMA warms up; the signal
/// line needs its own additional warm-up on top of that.
#[derive(Debug, Clone)]
pub struct MacdLines {
    pub macd: Vec<Option<f64>>,
    pub signal: Vec<Option<f64>>,
}

/// MACD (Moving Average Convergence Divergence).
///
/// Difference of a fast and a slow EMA, plus an EMA of that difference as
/// the signal line.
#[derive(Debug, Clone)]
pub struct Macd {
    fast: Ema,
    slow: Ema,
    signal_period: usize,
    slow_warmup: usize,
}

impl Macd {
    /// Create a new MACD with default parameters (12, 26, 9).
    pub fn new() -> Self {
        Self::with_periods(12, 26, 9)
    }

    /// Create a MACD with custom periods.
    pub fn with_periods(fast: usize, slow: usize, signal: usize) -> Self {
        assert!(fast > 0 && slow > 0 && signal > 0);
        assert!(fast < slow, "Fast period must be less than slow period");
        Self {
            fast: Ema::new(fast),
            slow: Ema::new(slow),
            signal_period: signal,
            slow_warmup: slow - 1,
        }
    }

    /// Compute the MACD and signal columns for the given closes.
    pub fn compute_lines(&self, data: &[f64]) -> MacdLines {
        let fast = self.fast.compute(data);
        let slow = self.slow.compute(data);

        let macd: Vec<Option<f64>> = fast
            .iter()
            .zip(slow.iter())
            .map(|(f, s)| match (f, s) {
                (Some(f), Some(s)) => Some(f - s),
                _ => None,
            })
            .collect();

        // Signal line: EMA over the defined stretch of the MACD line,
        // mapped back onto full-length row indices.
        let defined: Vec<f64> = macd.iter().flatten().copied().collect();
        let signal_tail = Ema::new(self.signal_period).compute(&defined);

        let mut signal = vec![None; data.len()];
        for (offset, value) in signal_tail.into_iter().enumerate() {
            signal[self.slow_warmup + offset] = value;
        }

        MacdLines { macd, signal }
    }

    /// Index of the first defined signal-line row.
    pub fn signal_warmup(&self) -> usize {
        self.slow_warmup + self.signal_period - 1
    }
}

impl Default for Macd {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rsi_warmup() {
        let rsi = Rsi::new(14);
        let data: Vec<f64> = (0..30).map(|i| 100.0 + (i as f64 * 0.5).sin() * 5.0).collect();
        let result = rsi.compute(&data);

        assert_eq!(result.len(), data.len());
        for value in &result[..14] {
            assert!(value.is_none());
        }
        for value in &result[14..] {
            let v = value.unwrap();
            assert!((0.0..=100.0).contains(&v));
        }
    }

    #[test]
    fn test_rsi_all_gains() {
        let rsi = Rsi::new(5);
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        let result = rsi.compute(&data);

        assert!((result[5].unwrap() - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_rsi_all_losses() {
        let rsi = Rsi::new(5);
        let data = vec![7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0];
        let result = rsi.compute(&data);

        assert!(result[5].unwrap().abs() < 1e-10);
    }

    #[test]
    fn test_rsi_short_input() {
        let rsi = Rsi::new(14);
        let result = rsi.compute(&[1.0, 2.0, 3.0]);
        assert!(result.iter().all(Option::is_none));
    }

    #[test]
    fn test_macd_warmups() {
        let macd = Macd::new();
        let data: Vec<f64> = (0..60).map(|i| 100.0 + i as f64).collect();
        let lines = macd.compute_lines(&data);

        assert_eq!(lines.macd.len(), data.len());
        assert_eq!(lines.signal.len(), data.len());

        assert!(lines.macd[24].is_none());
        assert!(lines.macd[25].is_some());
        assert!(lines.signal[32].is_none());
        assert!(lines.signal[33].is_some());
        assert_eq!(macd.signal_warmup(), 33);
    }

    #[test]
    fn test_macd_positive_in_uptrend() {
        let macd = Macd::new();
        let data: Vec<f64> = (0..60).map(|i| 100.0 + i as f64).collect();
        let lines = macd.compute_lines(&data);

        assert!(lines.macd.last().unwrap().unwrap() > 0.0);
    }

    #[test]
    fn test_macd_custom_periods() {
        let macd = Macd::with_periods(5, 10, 3);
        let data: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
        let lines = macd.compute_lines(&data);

        assert!(lines.signal[macd.signal_warmup()].is_some());
        assert!(lines.signal[macd.signal_warmup() - 1].is_none());
    }
}
