//! Indicator trait definition.

/// Trait for technical indicators computed over a full price series.
///
/// Outputs are aligned 1:1 with the input: `compute` returns one element
/// per input row, `None` for rows before the indicator's warm-up length.
pub trait Indicator: Send + Sync {
    /// The per-row output type of the indicator.
    type Output;

    /// Calculate indicator values for the given data (typically closes).
    fn compute(&self, data: &[f64]) -> Vec<Option<Self::Output>>;

    /// Index of the first defined output row.
    fn warmup(&self) -> usize;

    /// Get the name of the indicator.
    fn name(&self) -> &str;
}
