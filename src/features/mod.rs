//! Feature preparation
//!
//! Turns raw customer aggregates into a model-ready feature table:
//! - [`clean_records`] drops malformed rows (deterministic, order-preserving)
//! - [`build_features`] derives the feature columns and designates the target
//!
//! Cleaning may drop rows but never invents them, so the produced table
//! always has at most as many rows as the input, and the target column is
//! guaranteed complete.

mod table;

pub use table::FeatureTable;

use polars::prelude::*;
use std::collections::HashSet;
use tracing::info;

use crate::data::CustomerAggregate;
use crate::error::Result;

/// Name of the column the model is trained to predict.
pub const TARGET_COLUMN: &str = "total_order_value";

/// Drop records that cannot be used for training.
///
/// Rules, applied in input order:
/// - non-finite or negative `total_order_value` is dropped
/// - `total_orders` below 1 is dropped
/// - duplicate `cust_id` keeps the first occurrence
pub fn clean_records(records: Vec<CustomerAggregate>) -> Vec<CustomerAggregate> {
    let input_len = records.len();
    let mut seen: HashSet<i64> = HashSet::with_capacity(records.len());

    let cleaned: Vec<CustomerAggregate> = records
        .into_iter()
        .filter(|r| {
            r.total_order_value.is_finite()
                && r.total_order_value >= 0.0
                && r.total_orders >= 1
                && seen.insert(r.cust_id)
        })
        .collect();

    if cleaned.len() < input_len {
        info!(
            dropped = input_len - cleaned.len(),
            kept = cleaned.len(),
            "Dropped unusable customer records"
        );
    }

    cleaned
}

/// Build the feature table from cleaned customer aggregates.
///
/// Features: `total_orders` and the derived `avg_order_value`
/// (total value per order). `cust_id` is an identifier and is not a
/// feature. The target column is carried through unchanged.
pub fn build_features(records: &[CustomerAggregate]) -> Result<FeatureTable> {
    let n = records.len();
    let mut total_orders = Vec::with_capacity(n);
    let mut avg_order_value = Vec::with_capacity(n);
    let mut target = Vec::with_capacity(n);

    for r in records {
        total_orders.push(r.total_orders as f64);
        avg_order_value.push(r.total_order_value / r.total_orders as f64);
        target.push(r.total_order_value);
    }

    let df = df!(
        "total_orders" => &total_orders,
        "avg_order_value" => &avg_order_value,
        TARGET_COLUMN => &target
    )?;

    FeatureTable::new(df, TARGET_COLUMN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(cust_id: i64, value: f64, orders: i64) -> CustomerAggregate {
        CustomerAggregate {
            cust_id,
            total_order_value: value,
            total_orders: orders,
        }
    }

    #[test]
    fn test_clean_drops_bad_rows() {
        let records = vec![
            record(1, 100.0, 2),
            record(2, -5.0, 1),
            record(3, f64::NAN, 1),
            record(4, 40.0, 0),
            record(5, 12.5, 1),
        ];

        let cleaned = clean_records(records);
        let ids: Vec<i64> = cleaned.iter().map(|r| r.cust_id).collect();
        assert_eq!(ids, vec![1, 5]);
    }

    #[test]
    fn test_clean_dedupes_keeping_first() {
        let records = vec![record(1, 100.0, 2), record(1, 999.0, 9), record(2, 50.0, 1)];

        let cleaned = clean_records(records);
        assert_eq!(cleaned.len(), 2);
        assert_eq!(cleaned[0].total_order_value, 100.0);
    }

    #[test]
    fn test_clean_never_grows() {
        let records: Vec<CustomerAggregate> =
            (0..20).map(|i| record(i, i as f64 * 10.0, 1 + i % 3)).collect();
        let input_len = records.len();
        assert!(clean_records(records).len() <= input_len);
    }

    #[test]
    fn test_build_features_columns() {
        let records = vec![record(1, 100.0, 4), record(2, 30.0, 2)];
        let table = build_features(&records).unwrap();

        assert_eq!(table.height(), 2);
        assert_eq!(table.target_column(), TARGET_COLUMN);
        assert_eq!(
            table.feature_names(),
            vec!["total_orders".to_string(), "avg_order_value".to_string()]
        );

        let (x, y) = table.split().unwrap();
        assert_eq!(x.nrows(), 2);
        assert_eq!(x.ncols(), 2);
        // avg_order_value = total / count
        assert_eq!(x[[0, 1]], 25.0);
        assert_eq!(y[0], 100.0);
    }

    #[test]
    fn test_build_features_is_deterministic() {
        let records: Vec<CustomerAggregate> =
            (0..10).map(|i| record(i, (i * 7) as f64, 1 + i % 4)).collect();

        let a = build_features(&records).unwrap();
        let b = build_features(&records).unwrap();

        let (xa, ya) = a.split().unwrap();
        let (xb, yb) = b.split().unwrap();
        assert_eq!(xa, xb);
        assert_eq!(ya, yb);
    }
}
