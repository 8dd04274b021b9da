//! Model-ready feature table

use ndarray::{Array1, Array2};
use polars::prelude::*;

use crate::error::{OrdercastError, Result};

/// Tabular data ready for training: zero or more numeric feature columns
/// plus a designated target column with no missing values.
#[derive(Debug, Clone)]
pub struct FeatureTable {
    df: DataFrame,
    target: String,
}

impl FeatureTable {
    /// Wrap a data frame, validating the target contract: the column must
    /// exist and contain no nulls.
    pub fn new(df: DataFrame, target: impl Into<String>) -> Result<Self> {
        let target = target.into();

        let target_series = df
            .column(&target)
            .map_err(|_| OrdercastError::ColumnNotFound(target.clone()))?;

        if target_series.null_count() > 0 {
            return Err(OrdercastError::FeaturePreparation(format!(
                "target column '{}' has {} missing values",
                target,
                target_series.null_count()
            )));
        }

        Ok(Self { df, target })
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.df.height()
    }

    /// Name of the designated target column.
    pub fn target_column(&self) -> &str {
        &self.target
    }

    /// Names of the feature columns (everything except the target).
    pub fn feature_names(&self) -> Vec<String> {
        self.df
            .get_column_names()
            .into_iter()
            .filter(|name| *name != self.target)
            .map(|s| s.to_string())
            .collect()
    }

    /// The underlying data frame.
    pub fn frame(&self) -> &DataFrame {
        &self.df
    }

    /// Split into the feature matrix X and the target vector y.
    pub fn split(&self) -> Result<(Array2<f64>, Array1<f64>)> {
        let feature_cols = self.feature_names();
        let x = columns_to_array2(&self.df, &feature_cols)?;

        let target_f64 = self
            .df
            .column(&self.target)
            .map_err(|_| OrdercastError::ColumnNotFound(self.target.clone()))?
            .cast(&DataType::Float64)?;

        let y: Array1<f64> = target_f64
            .f64()
            .map_err(|e| OrdercastError::FeaturePreparation(e.to_string()))?
            .into_iter()
            .map(|v| v.unwrap_or(0.0))
            .collect();

        Ok((x, y))
    }
}

/// Extract named columns from a data frame into a row-major `Array2<f64>`.
///
/// Collects each column as a contiguous f64 vec first, then builds the
/// row-major array with `from_shape_fn` over the column-major source.
fn columns_to_array2(df: &DataFrame, col_names: &[String]) -> Result<Array2<f64>> {
    let n_rows = df.height();
    let n_cols = col_names.len();

    let col_data: Vec<Vec<f64>> = col_names
        .iter()
        .map(|col_name| {
            let series = df
                .column(col_name)
                .map_err(|_| OrdercastError::ColumnNotFound(col_name.clone()))?;
            let series_f64 = series.cast(&DataType::Float64)?;
            let values: Vec<f64> = series_f64
                .f64()
                .map_err(|e| OrdercastError::FeaturePreparation(e.to_string()))?
                .into_iter()
                .map(|v| v.unwrap_or(0.0))
                .collect();
            Ok(values)
        })
        .collect::<Result<Vec<Vec<f64>>>>()?;

    let col_refs: Vec<&[f64]> = col_data.iter().map(|c| c.as_slice()).collect();
    Ok(Array2::from_shape_fn((n_rows, n_cols), |(r, c)| {
        col_refs[c][r]
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_target_column_rejected() {
        let df = df!("a" => &[1.0, 2.0]).unwrap();
        let err = FeatureTable::new(df, "target").unwrap_err();
        assert!(matches!(err, OrdercastError::ColumnNotFound(_)));
    }

    #[test]
    fn test_null_target_rejected() {
        let df = df!(
            "a" => &[1.0, 2.0],
            "target" => &[Some(1.0), None]
        )
        .unwrap();
        let err = FeatureTable::new(df, "target").unwrap_err();
        assert!(matches!(err, OrdercastError::FeaturePreparation(_)));
    }

    #[test]
    fn test_split_shapes() {
        let df = df!(
            "a" => &[1.0, 2.0, 3.0],
            "b" => &[10.0, 20.0, 30.0],
            "target" => &[0.5, 1.5, 2.5]
        )
        .unwrap();
        let table = FeatureTable::new(df, "target").unwrap();

        let (x, y) = table.split().unwrap();
        assert_eq!(x.nrows(), 3);
        assert_eq!(x.ncols(), 2);
        assert_eq!(y.len(), 3);
        assert_eq!(x[[2, 1]], 30.0);
        assert_eq!(y[2], 2.5);
    }
}
