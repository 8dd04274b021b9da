//! Model evaluation
//!
//! Scores a fitted model against a feature/target pair. Pure computation:
//! no side effects, a fresh report per call.

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use crate::error::{OrdercastError, Result};
use crate::training::Predictor;

/// Regression accuracy metrics for one evaluation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Mean absolute error
    pub mae: f64,
    /// Coefficient of determination
    pub r2: f64,
}

/// Evaluate a fitted model against features `x` and targets `y`.
///
/// All failures surface as [`OrdercastError::Evaluation`]: row-count
/// mismatch between `x` and `y`, an unfitted model, or a prediction
/// misaligned with the input.
pub fn evaluate<P: Predictor + ?Sized>(
    model: &P,
    x: &Array2<f64>,
    y: &Array1<f64>,
) -> Result<EvaluationReport> {
    if x.nrows() != y.len() {
        return Err(OrdercastError::Evaluation(format!(
            "X has {} rows but y has {} values",
            x.nrows(),
            y.len()
        )));
    }
    if y.is_empty() {
        return Err(OrdercastError::Evaluation(
            "cannot evaluate on an empty dataset".to_string(),
        ));
    }

    let predictions = model
        .predict(x)
        .map_err(|e| OrdercastError::Evaluation(e.to_string()))?;

    if predictions.len() != y.len() {
        return Err(OrdercastError::Evaluation(format!(
            "model returned {} predictions for {} rows",
            predictions.len(),
            y.len()
        )));
    }

    Ok(EvaluationReport {
        mae: mean_absolute_error(y, &predictions),
        r2: r2_score(y, &predictions),
    })
}

/// Mean of absolute differences between targets and predictions.
fn mean_absolute_error(y_true: &Array1<f64>, y_pred: &Array1<f64>) -> f64 {
    let n = y_true.len() as f64;
    y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(t, p)| (t - p).abs())
        .sum::<f64>()
        / n
}

/// R² = 1 − SS_res / SS_tot. Reported as 0.0 when `y_true` has zero
/// variance, where the ratio is undefined.
fn r2_score(y_true: &Array1<f64>, y_pred: &Array1<f64>) -> f64 {
    let n = y_true.len() as f64;
    let y_mean = y_true.iter().sum::<f64>() / n;

    let ss_tot: f64 = y_true.iter().map(|y| (y - y_mean).powi(2)).sum();
    let ss_res: f64 = y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(t, p)| (t - p).powi(2))
        .sum();

    if ss_tot > 0.0 {
        1.0 - ss_res / ss_tot
    } else {
        0.0
    }
}
