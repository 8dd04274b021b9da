//! Model training
//!
//! Fits a regression model mapping feature columns to the target column.
//! Training is a single deterministic attempt: the ensemble is seeded with
//! [`FIXED_SEED`] so identical inputs always produce identical models.

mod config;
mod forest;
mod tree;

pub use config::TrainingConfig;
pub use forest::RandomForestRegressor;

use ndarray::{Array1, Array2};

use crate::error::{OrdercastError, Result};

/// Fixed random seed for reproducible training.
pub const FIXED_SEED: u64 = 42;

/// A fitted predictor: the single capability downstream stages rely on.
///
/// Predictions are row-aligned with the input matrix. Any concrete
/// regression implementation can stand in, which keeps the evaluator
/// testable against stub models.
pub trait Predictor: Send + Sync {
    fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>>;
}

/// Train a regression model on the feature matrix and target vector.
///
/// All trainer failures surface as [`OrdercastError::Training`]: row-count
/// mismatch, invalid configuration, empty dataset, or non-finite inputs.
pub fn train(
    x: &Array2<f64>,
    y: &Array1<f64>,
    config: &TrainingConfig,
) -> Result<RandomForestRegressor> {
    config
        .validate()
        .map_err(|e| OrdercastError::Training(e.to_string()))?;

    if x.nrows() != y.len() {
        return Err(OrdercastError::Training(format!(
            "X has {} rows but y has {} values",
            x.nrows(),
            y.len()
        )));
    }
    if x.nrows() == 0 {
        return Err(OrdercastError::Training(
            "cannot train on an empty dataset".to_string(),
        ));
    }
    if x.iter().any(|v| !v.is_finite()) || y.iter().any(|v| !v.is_finite()) {
        return Err(OrdercastError::Training(
            "input contains non-finite values".to_string(),
        ));
    }

    let mut model = RandomForestRegressor::new(config);
    model.fit(x, y)?;
    Ok(model)
}
