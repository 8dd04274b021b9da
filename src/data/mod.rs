//! Customer order data access
//!
//! Executes a fixed aggregation over raw order transactions and returns one
//! summarized row per customer. The relational source is consumed through
//! the narrow [`OrderSource`] seam so tests can substitute an in-memory
//! source for the Postgres-backed one.

mod postgres;

pub use postgres::{PgOrderSource, CUSTOMER_AGGREGATE_QUERY};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One summarized row per customer, derived from raw order transactions.
///
/// Immutable once returned: downstream stages receive ownership and never
/// write back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CustomerAggregate {
    /// Unique customer key
    pub cust_id: i64,
    /// Sum of order amounts, non-negative for well-formed data
    pub total_order_value: f64,
    /// Number of orders placed, positive for well-formed data
    pub total_orders: i64,
}

/// Source of customer aggregate records.
#[async_trait]
pub trait OrderSource: Send + Sync {
    /// Fetch all customer aggregates from the underlying store.
    ///
    /// A single attempt; connection or query failures surface as
    /// data-access errors without retry.
    async fn fetch_customer_aggregates(&self) -> Result<Vec<CustomerAggregate>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_roundtrip() {
        let record = CustomerAggregate {
            cust_id: 7,
            total_order_value: 129.5,
            total_orders: 3,
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: CustomerAggregate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
