//! Evaluation metrics.

/// Fraction of predictions matching their labels, in [0,1].
///
/// Returns 0 for empty inputs; callers gate on a non-empty held-out set
/// before scoring.
pub fn accuracy(predictions: &[f64], labels: &[f64]) -> f64 {
    assert_eq!(predictions.len(), labels.len());
    if predictions.is_empty() {
        return 0.0;
    }

    let correct = predictions
        .iter()
        .zip(labels.iter())
        .filter(|(p, l)| (**p > 0.5) == (**l > 0.5))
        .count();

    correct as f64 / predictions.len() as f64
}
