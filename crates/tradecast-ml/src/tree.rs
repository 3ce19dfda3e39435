//! CART-style decision tree classifier.

use crate::Dataset;

/// Tree construction limits.
#[derive(Debug, Clone, Copy)]
pub struct TreeConfig {
    /// Maximum tree depth.
    pub max_depth: usize,
    /// Minimum samples required to attempt a split.
    pub min_samples_split: usize,
    /// Minimum samples allowed in a child node.
    pub min_samples_leaf: usize,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_depth: 5,
            min_samples_split: 2,
            min_samples_leaf: 1,
        }
    }
}

#[derive(Debug, Clone)]
enum Node {
    Leaf {
        /// Fraction of positive samples in this leaf.
        probability: f64,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Split { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// Binary decision-tree classifier using gini impurity and midpoint
/// thresholds between adjacent distinct feature values.
#[derive(Debug, Clone)]
pub struct DecisionTree {
    config: TreeConfig,
    root: Option<Node>,
}

impl DecisionTree {
    /// Create an unfitted tree with the given limits.
    pub fn new(config: TreeConfig) -> Self {
        Self { config, root: None }
    }

    /// Fit the tree to a dataset.
    pub fn fit(&mut self, dataset: &Dataset) {
        let indices: Vec<usize> = (0..dataset.n_samples()).collect();
        self.root = Some(self.build(dataset, &indices, 0));
    }

    fn build(&self, dataset: &Dataset, indices: &[usize], depth: usize) -> Node {
        let probability = Self::positive_fraction(dataset, indices);
        let impurity = Self::gini(probability);

        if depth >= self.config.max_depth
            || indices.len() < self.config.min_samples_split
            || impurity < 1e-12
        {
            return Node::Leaf { probability };
        }

        match self.find_best_split(dataset, indices, impurity) {
            Some((feature, threshold, left_indices, right_indices)) => {
                if left_indices.len() < self.config.min_samples_leaf
                    || right_indices.len() < self.config.min_samples_leaf
                {
                    return Node::Leaf { probability };
                }
                Node::Split {
                    feature,
                    threshold,
                    left: Box::new(self.build(dataset, &left_indices, depth + 1)),
                    right: Box::new(self.build(dataset, &right_indices, depth + 1)),
                }
            }
            None => Node::Leaf { probability },
        }
    }

    /// Best (feature, threshold) pair by weighted gini gain, with the
    /// index partitions it induces.
    #[allow(clippy::type_complexity)]
    fn find_best_split(
        &self,
        dataset: &Dataset,
        indices: &[usize],
        parent_impurity: f64,
    ) -> Option<(usize, f64, Vec<usize>, Vec<usize>)> {
        let mut best_gain = 0.0;
        let mut best: Option<(usize, f64, Vec<usize>, Vec<usize>)> = None;

        for feature in 0..dataset.n_features() {
            let mut values: Vec<f64> = indices
                .iter()
                .map(|&i| dataset.features[i][feature])
                .collect();
            values.sort_by(|a, b| a.total_cmp(b));
            values.dedup();

            for window in values.windows(2) {
                let threshold = (window[0] + window[1]) / 2.0;

                let (left, right): (Vec<usize>, Vec<usize>) = indices
                    .iter()
                    .partition(|&&i| dataset.features[i][feature] <= threshold);

                if left.is_empty() || right.is_empty() {
                    continue;
                }

                let left_impurity = Self::gini(Self::positive_fraction(dataset, &left));
                let right_impurity = Self::gini(Self::positive_fraction(dataset, &right));

                let n_left = left.len() as f64;
                let n_right = right.len() as f64;
                let weighted =
                    (n_left * left_impurity + n_right * right_impurity) / (n_left + n_right);
                let gain = parent_impurity - weighted;

                if gain > best_gain {
                    best_gain = gain;
                    best = Some((feature, threshold, left, right));
                }
            }
        }

        best
    }

    fn positive_fraction(dataset: &Dataset, indices: &[usize]) -> f64 {
        if indices.is_empty() {
            return 0.0;
        }
        let positive = indices
            .iter()
            .filter(|&&i| dataset.labels[i] > 0.5)
            .count();
        positive as f64 / indices.len() as f64
    }

    fn gini(p: f64) -> f64 {
        2.0 * p * (1.0 - p)
    }

    /// Predict the class (0.0 or 1.0) for a single sample.
    pub fn predict_one(&self, features: &[f64]) -> f64 {
        let mut node = match &self.root {
            Some(node) => node,
            None => return 0.0,
        };

        loop {
            match node {
                Node::Leaf { probability } => {
                    return if *probability > 0.5 { 1.0 } else { 0.0 };
                }
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = if features[*feature] <= *threshold {
                        left
                    } else {
                        right
                    };
                }
            }
        }
    }

    /// Predict classes for every sample in a dataset.
    pub fn predict(&self, dataset: &Dataset) -> Vec<f64> {
        dataset
            .features
            .iter()
            .map(|f| self.predict_one(f))
            .collect()
    }

    /// Depth of the fitted tree (0 for a single leaf or an unfitted tree).
    pub fn depth(&self) -> usize {
        self.root.as_ref().map(Node::depth).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn separable_dataset() -> Dataset {
        let mut dataset = Dataset::new(vec!["x"]);
        for i in 0..100 {
            let x = i as f64 / 10.0;
            dataset.add_sample(vec![x], if x > 5.0 { 1.0 } else { 0.0 });
        }
        dataset
    }

    #[test]
    fn test_fits_separable_data() {
        let mut tree = DecisionTree::new(TreeConfig::default());
        let dataset = separable_dataset();
        tree.fit(&dataset);

        let predictions = tree.predict(&dataset);
        let correct = predictions
            .iter()
            .zip(dataset.labels.iter())
            .filter(|(p, l)| p == l)
            .count();
        assert!(correct as f64 / dataset.n_samples() as f64 > 0.95);
    }

    #[test]
    fn test_depth_limit() {
        let mut noisy = Dataset::new(vec!["x"]);
        for i in 0..200 {
            let x = i as f64;
            noisy.add_sample(vec![x], if (i * 7) % 3 == 0 { 1.0 } else { 0.0 });
        }

        let mut tree = DecisionTree::new(TreeConfig {
            max_depth: 3,
            ..Default::default()
        });
        tree.fit(&noisy);

        assert!(tree.depth() <= 3);
    }

    #[test]
    fn test_unfitted_predicts_negative() {
        let tree = DecisionTree::new(TreeConfig::default());
        assert_eq!(tree.predict_one(&[1.0]), 0.0);
    }

    #[test]
    fn test_pure_labels_yield_single_leaf() {
        let mut dataset = Dataset::new(vec!["x"]);
        for i in 0..20 {
            dataset.add_sample(vec![i as f64], 1.0);
        }

        let mut tree = DecisionTree::new(TreeConfig::default());
        tree.fit(&dataset);

        assert_eq!(tree.depth(), 0);
        assert_eq!(tree.predict_one(&[3.0]), 1.0);
    }
}
