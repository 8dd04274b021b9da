//! Postgres-backed order source

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;
use tracing::info;

use super::{CustomerAggregate, OrderSource};
use crate::error::{OrdercastError, Result};

/// Fixed aggregation query: one row per customer with total order value
/// and order count.
pub const CUSTOMER_AGGREGATE_QUERY: &str = "\
SELECT cust_id, SUM(total_amount) AS total_order_value, COUNT(id) AS total_orders
FROM customer_orders GROUP BY cust_id";

/// Order source reading from a Postgres database.
///
/// The connection is scoped to a single fetch: a small pool is opened for
/// the duration of the query and closed before returning, on success and
/// failure alike.
pub struct PgOrderSource {
    database_url: String,
}

impl PgOrderSource {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
        }
    }
}

#[async_trait]
impl OrderSource for PgOrderSource {
    async fn fetch_customer_aggregates(&self) -> Result<Vec<CustomerAggregate>> {
        info!("Connecting to order database");

        let pool = PgPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(Duration::from_secs(10))
            .connect(&self.database_url)
            .await
            .map_err(|e| OrdercastError::DataAccess(format!("connection failed: {e}")))?;

        let rows = sqlx::query_as::<_, CustomerAggregate>(CUSTOMER_AGGREGATE_QUERY)
            .fetch_all(&pool)
            .await;

        // Release the connection on both exit paths before surfacing errors.
        pool.close().await;

        let records =
            rows.map_err(|e| OrdercastError::DataAccess(format!("query failed: {e}")))?;

        info!(customers = records.len(), "Loaded customer aggregates");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_text() {
        assert!(CUSTOMER_AGGREGATE_QUERY.contains("SUM(total_amount) AS total_order_value"));
        assert!(CUSTOMER_AGGREGATE_QUERY.contains("COUNT(id) AS total_orders"));
        assert!(CUSTOMER_AGGREGATE_QUERY.contains("FROM customer_orders GROUP BY cust_id"));
    }

    #[tokio::test]
    async fn test_unreachable_database_is_data_access_error() {
        let source = PgOrderSource::new("postgres://nobody@127.0.0.1:1/never");
        let err = source.fetch_customer_aggregates().await.unwrap_err();
        assert!(matches!(err, OrdercastError::DataAccess(_)));
    }
}
