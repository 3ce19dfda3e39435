//! Moving average indicators.

use tradecast_core::traits::Indicator;

/// Simple Moving Average (SMA).
///
/// Arithmetic mean of the last N values.
#[derive(Debug, Clone)]
pub struct Sma {
    period: usize,
}

impl Sma {
    /// Create a new SMA with the specified period.
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "Period must be greater than 0");
        Self { period }
    }
}

impl Indicator for Sma {
    type Output = f64;

    fn compute(&self, data: &[f64]) -> Vec<Option<f64>> {
        let mut out = vec![None; data.len()];
        if data.len() < self.period {
            return out;
        }

        let period_f64 = self.period as f64;

        // Initial window, then slide
        let mut sum: f64 = data[..self.period].iter().sum();
        out[self.period - 1] = Some(sum / period_f64);

        for i in self.period..data.len() {
            sum = sum - data[i - self.period] + data[i];
            out[i] = Some(sum / period_f64);
        }

        out
    }

    fn warmup(&self) -> usize {
        self.period - 1
    }

    fn name(&self) -> &str {
        "SMA"
    }
}

/// Exponential Moving Average (EMA).
///
/// Gives more weight to recent values; seeded with the SMA of the first
/// period window.
#[derive(Debug, Clone)]
pub struct Ema {
    period: usize,
    multiplier: f64,
}

impl Ema {
    /// Create a new EMA with the specified period.
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "Period must be greater than 0");
        let multiplier = 2.0 / (period as f64 + 1.0);
        Self { period, multiplier }
    }
}

impl Indicator for Ema {
    type Output = f64;

    fn compute(&self, data: &[f64]) -> Vec<Option<f64>> {
        let mut out = vec![None; data.len()];
        if data.len() < self.period {
            return out;
        }

        let initial_sma: f64 = data[..self.period].iter().sum::<f64>() / self.period as f64;
        out[self.period - 1] = Some(initial_sma);

        let mut ema = initial_sma;
        let one_minus_mult = 1.0 - self.multiplier;

        for i in self.period..data.len() {
            ema = data[i] * self.multiplier + ema * one_minus_mult;
            out[i] = Some(ema);
        }

        out
    }

    fn warmup(&self) -> usize {
        self.period - 1
    }

    fn name(&self) -> &str {
        "EMA"
    }
}
