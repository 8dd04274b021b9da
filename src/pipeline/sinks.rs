//! Persistence and metrics-logging extension points
//!
//! Both are intentionally inert: the current scope defers model
//! persistence and metrics logging, but the orchestrator already calls
//! through these seams so future implementations slot in without touching
//! its control flow.

use tracing::debug;

use crate::error::Result;
use crate::evaluation::EvaluationReport;
use crate::training::RandomForestRegressor;

/// Destination for trained models.
pub trait ModelStore: Send + Sync {
    fn save(&self, model: &RandomForestRegressor) -> Result<()>;
}

/// Destination for evaluation metrics.
pub trait MetricsSink: Send + Sync {
    fn log(&self, report: &EvaluationReport) -> Result<()>;
}

/// Model store that keeps nothing.
#[derive(Debug, Default)]
pub struct NullModelStore;

impl ModelStore for NullModelStore {
    fn save(&self, model: &RandomForestRegressor) -> Result<()> {
        debug!(trees = model.n_trees(), "Model persistence is disabled, skipping save");
        Ok(())
    }
}

/// Metrics sink that logs nowhere.
#[derive(Debug, Default)]
pub struct NullMetricsSink;

impl MetricsSink for NullMetricsSink {
    fn log(&self, report: &EvaluationReport) -> Result<()> {
        debug!(mae = report.mae, r2 = report.r2, "Metrics logging is disabled, skipping");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training::TrainingConfig;

    #[test]
    fn test_null_sinks_accept_everything() {
        let model = RandomForestRegressor::new(&TrainingConfig::default());
        let report = EvaluationReport { mae: 1.0, r2: 0.5 };

        assert!(NullModelStore.save(&model).is_ok());
        assert!(NullMetricsSink.log(&report).is_ok());
    }
}
