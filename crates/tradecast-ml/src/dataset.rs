//! Feature/label container for training.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Dataset with a row-major feature matrix and binary labels (0.0 / 1.0).
#[derive(Debug, Clone)]
pub struct Dataset {
    pub features: Vec<Vec<f64>>,
    pub labels: Vec<f64>,
    pub feature_names: Vec<&'static str>,
}

impl Dataset {
    /// Create a new empty dataset.
    pub fn new(feature_names: Vec<&'static str>) -> Self {
        Self {
            features: Vec::new(),
            labels: Vec::new(),
            feature_names,
        }
    }

    /// Number of samples.
    pub fn n_samples(&self) -> usize {
        self.features.len()
    }

    /// Number of features per sample.
    pub fn n_features(&self) -> usize {
        self.feature_names.len()
    }

    /// Add one sample.
    pub fn add_sample(&mut self, features: Vec<f64>, label: f64) {
        assert_eq!(features.len(), self.feature_names.len());
        self.features.push(features);
        self.labels.push(label);
    }

    /// Number of distinct label classes present.
    pub fn class_count(&self) -> usize {
        let has_negative = self.labels.iter().any(|&l| l <= 0.5);
        let has_positive = self.labels.iter().any(|&l| l > 0.5);
        has_negative as usize + has_positive as usize
    }

    /// Shuffled train/test split with a fixed seed for reproducibility.
    pub fn random_split(&self, test_ratio: f64, seed: u64) -> (Dataset, Dataset) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let n = self.n_samples();

        let mut indices: Vec<usize> = (0..n).collect();
        indices.shuffle(&mut rng);

        let test_size = (test_ratio * n as f64) as usize;
        let (test_indices, train_indices) = indices.split_at(test_size);

        (self.subset(train_indices), self.subset(test_indices))
    }

    /// Create a subset of the dataset by sample indices.
    fn subset(&self, indices: &[usize]) -> Dataset {
        Dataset {
            features: indices.iter().map(|&i| self.features[i].clone()).collect(),
            labels: indices.iter().map(|&i| self.labels[i]).collect(),
            feature_names: self.feature_names.clone(),
        }
    }
}
