//! Per-symbol label construction and model training.

use crate::{accuracy, Dataset, DecisionTree, TreeConfig};
use tradecast_core::error::ModelError;
use tradecast_core::types::SignalRow;

/// Feature columns fed to the classifier, in matrix order.
const FEATURE_NAMES: [&str; 5] = ["rsi", "macd", "volume", "sma_fast", "sma_slow"];

/// Fraction of samples held out for scoring.
const TEST_RATIO: f64 = 0.2;

/// Fixed RNG seed so every run splits identically.
const SPLIT_SEED: u64 = 42;

/// Fewest usable samples for a meaningful 80/20 split.
const MIN_SAMPLES: usize = 5;

/// A fitted classifier bound to one symbol.
pub struct TrainedModel {
    pub symbol: String,
    pub tree: DecisionTree,
    /// Accuracy on the held-out split, in [0,1].
    pub accuracy: f64,
}

/// Build the feature/label dataset from a symbol's signal rows.
///
/// The label is 1 when the next row's close is above the current close.
/// The final row has no next close and is dropped; rows before the
/// slowest indicator warm-up are dropped as undefined; any column still
/// missing after that is filled with 0.
pub fn build_dataset(rows: &[SignalRow]) -> Dataset {
    let mut dataset = Dataset::new(FEATURE_NAMES.to_vec());

    for pair in rows.windows(2) {
        let (row, next) = (&pair[0], &pair[1]);
        if row.sma_slow.is_none() {
            continue;
        }

        let label = if next.bar.close > row.bar.close {
            1.0
        } else {
            0.0
        };
        dataset.add_sample(
            vec![
                row.rsi.unwrap_or(0.0),
                row.macd.unwrap_or(0.0),
                row.bar.volume,
                row.sma_fast.unwrap_or(0.0),
                row.sma_slow.unwrap_or(0.0),
            ],
            label,
        );
    }

    dataset
}

/// Train a depth-5 decision tree for one symbol and score it on the
/// held-out split.
pub fn train_model(symbol: &str, rows: &[SignalRow]) -> Result<TrainedModel, ModelError> {
    let dataset = build_dataset(rows);

    if dataset.n_samples() == 0 {
        return Err(ModelError::EmptyDataset);
    }
    if dataset.n_samples() < MIN_SAMPLES {
        return Err(ModelError::InsufficientData {
            required: MIN_SAMPLES,
            available: dataset.n_samples(),
        });
    }
    if dataset.class_count() < 2 {
        return Err(ModelError::SingleClass);
    }

    let (train, test) = dataset.random_split(TEST_RATIO, SPLIT_SEED);

    let mut tree = DecisionTree::new(TreeConfig::default());
    tree.fit(&train);

    let predictions = tree.predict(&test);
    let accuracy = accuracy(&predictions, &test.labels);

    Ok(TrainedModel {
        symbol: symbol.to_string(),
        tree,
        accuracy,
    })
}
