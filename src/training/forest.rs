//! Random forest regressor

use ndarray::{Array1, Array2, Axis};
use rand::RngCore;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::tree::RegressionTree;
use super::{Predictor, TrainingConfig, FIXED_SEED};
use crate::error::{OrdercastError, Result};

/// Bootstrap-aggregated ensemble of regression trees.
///
/// Every tree is seeded from [`FIXED_SEED`] plus its index, so fitting the
/// same data with the same configuration reproduces the same model
/// regardless of how rayon schedules the per-tree work.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomForestRegressor {
    trees: Vec<RegressionTree>,
    /// Number of trees
    pub n_estimators: usize,
    /// Maximum depth per tree
    pub max_depth: Option<usize>,
    /// Minimum samples to split
    pub min_samples_split: usize,
    /// Minimum samples in leaf
    pub min_samples_leaf: usize,
    n_features: usize,
}

impl RandomForestRegressor {
    /// Create an unfitted forest from a training configuration.
    pub fn new(config: &TrainingConfig) -> Self {
        Self {
            trees: Vec::new(),
            n_estimators: config.n_estimators,
            max_depth: config.max_depth,
            min_samples_split: config.min_samples_split,
            min_samples_leaf: config.min_samples_leaf,
            n_features: 0,
        }
    }

    /// Fit the forest to training data
    pub fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>) -> Result<&mut Self> {
        let n_samples = x.nrows();

        if n_samples != y.len() {
            return Err(OrdercastError::ShapeError {
                expected: format!("y length = {}", n_samples),
                actual: format!("y length = {}", y.len()),
            });
        }
        if n_samples == 0 {
            return Err(OrdercastError::Training(
                "cannot fit on an empty dataset".to_string(),
            ));
        }

        self.n_features = x.ncols();

        let trees: Vec<RegressionTree> = (0..self.n_estimators)
            .into_par_iter()
            .map(|tree_idx| -> Result<RegressionTree> {
                let seed = FIXED_SEED.wrapping_add(tree_idx as u64);
                let mut rng = ChaCha8Rng::seed_from_u64(seed);

                // Bootstrap sample with replacement
                let sample_indices: Vec<usize> = (0..n_samples)
                    .map(|_| (rng.next_u64() as usize) % n_samples)
                    .collect();

                let x_boot = x.select(Axis(0), &sample_indices);
                let y_boot: Array1<f64> =
                    Array1::from_vec(sample_indices.iter().map(|&i| y[i]).collect());

                let mut tree = RegressionTree::new()
                    .with_min_samples_split(self.min_samples_split)
                    .with_min_samples_leaf(self.min_samples_leaf);
                if let Some(d) = self.max_depth {
                    tree = tree.with_max_depth(d);
                }

                tree.fit(&x_boot, &y_boot)?;
                Ok(tree)
            })
            .collect::<Result<Vec<RegressionTree>>>()?;

        self.trees = trees;
        Ok(self)
    }

    /// Get number of fitted trees
    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }
}

impl Predictor for RandomForestRegressor {
    /// Mean prediction across all trees, row-aligned with `x`.
    fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>> {
        if self.trees.is_empty() {
            return Err(OrdercastError::ModelNotFitted);
        }

        let all_predictions: Vec<Array1<f64>> = self
            .trees
            .par_iter()
            .map(|tree| tree.predict(x))
            .collect::<Result<Vec<Array1<f64>>>>()?;

        let n_samples = x.nrows();
        let predictions: Vec<f64> = (0..n_samples)
            .map(|i| {
                let sum: f64 = all_predictions.iter().map(|p| p[i]).sum();
                sum / all_predictions.len() as f64
            })
            .collect();

        Ok(Array1::from_vec(predictions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn linear_data() -> (Array2<f64>, Array1<f64>) {
        let x = Array2::from_shape_fn((30, 1), |(i, _)| i as f64);
        let y = Array1::from_shape_fn(30, |i| i as f64 * 3.0 + 2.0);
        (x, y)
    }

    #[test]
    fn test_regressor_fits_linear_trend() {
        let (x, y) = linear_data();
        let mut forest = RandomForestRegressor::new(&TrainingConfig::default().with_n_estimators(10));
        forest.fit(&x, &y).unwrap();
        assert_eq!(forest.n_trees(), 10);

        let predictions = forest.predict(&x).unwrap();
        let mse: f64 = predictions
            .iter()
            .zip(y.iter())
            .map(|(p, a)| (p - a).powi(2))
            .sum::<f64>()
            / y.len() as f64;
        assert!(mse < 20.0, "MSE too high: {}", mse);
    }

    #[test]
    fn test_fit_is_deterministic() {
        let (x, y) = linear_data();
        let config = TrainingConfig::default().with_n_estimators(5);

        let mut a = RandomForestRegressor::new(&config);
        a.fit(&x, &y).unwrap();
        let mut b = RandomForestRegressor::new(&config);
        b.fit(&x, &y).unwrap();

        assert_eq!(a.predict(&x).unwrap(), b.predict(&x).unwrap());
    }

    #[test]
    fn test_unfitted_forest_rejects_predict() {
        let forest = RandomForestRegressor::new(&TrainingConfig::default());
        let x = array![[1.0]];
        assert!(matches!(
            forest.predict(&x),
            Err(OrdercastError::ModelNotFitted)
        ));
    }

    #[test]
    fn test_empty_dataset_rejected() {
        let x = Array2::<f64>::zeros((0, 2));
        let y = Array1::<f64>::zeros(0);
        let mut forest = RandomForestRegressor::new(&TrainingConfig::default());
        assert!(matches!(
            forest.fit(&x, &y),
            Err(OrdercastError::Training(_))
        ));
    }
}
