//! Baseline ML layer: a shallow decision tree over indicator features.
//!
//! The model exists for interpretability, not predictive power. Per-symbol
//! training is skipped (never errored) when the data cannot support a fit.

mod dataset;
mod metrics;
mod trainer;
mod tree;

pub use dataset::Dataset;
pub use metrics::accuracy;
pub use trainer::{build_dataset, train_model, TrainedModel};
pub use tree::{DecisionTree, TreeConfig};
