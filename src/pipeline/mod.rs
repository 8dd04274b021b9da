//! Training pipeline orchestration
//!
//! Composes the stages in a fixed linear order:
//! load → clean → build features → split → train → evaluate → report.
//! Each transition invokes exactly one stage; any stage error aborts the
//! run and propagates to the caller unmodified. No retries, no partial
//! recovery.

mod sinks;

pub use sinks::{MetricsSink, ModelStore, NullMetricsSink, NullModelStore};

use tracing::info;

use crate::config::AppConfig;
use crate::data::{OrderSource, PgOrderSource};
use crate::error::Result;
use crate::evaluation::{evaluate, EvaluationReport};
use crate::features::{build_features, clean_records};
use crate::training::{train, TrainingConfig};

/// Orchestrates one full training run over an [`OrderSource`].
pub struct TrainingPipeline<S: OrderSource> {
    source: S,
    config: TrainingConfig,
    model_store: Box<dyn ModelStore>,
    metrics_sink: Box<dyn MetricsSink>,
}

impl<S: OrderSource> TrainingPipeline<S> {
    pub fn new(source: S, config: TrainingConfig) -> Self {
        Self {
            source,
            config,
            model_store: Box::new(NullModelStore),
            metrics_sink: Box::new(NullMetricsSink),
        }
    }

    /// Replace the (default no-op) model store.
    pub fn with_model_store(mut self, store: Box<dyn ModelStore>) -> Self {
        self.model_store = store;
        self
    }

    /// Replace the (default no-op) metrics sink.
    pub fn with_metrics_sink(mut self, sink: Box<dyn MetricsSink>) -> Self {
        self.metrics_sink = sink;
        self
    }

    /// Run the full pipeline and return the evaluation report.
    pub async fn run(&self) -> Result<EvaluationReport> {
        info!(n_estimators = self.config.n_estimators, "Starting training pipeline");

        let records = self.source.fetch_customer_aggregates().await?;
        info!(customers = records.len(), "Data loaded");

        let records = clean_records(records);
        let table = build_features(&records)?;
        info!(
            rows = table.height(),
            features = ?table.feature_names(),
            target = table.target_column(),
            "Features built"
        );

        let (x, y) = table.split()?;
        let model = train(&x, &y, &self.config)?;
        info!(trees = model.n_trees(), "Model trained");

        let report = evaluate(&model, &x, &y)?;
        info!(mae = report.mae, r2 = report.r2, "Evaluation complete");

        self.model_store.save(&model)?;
        self.metrics_sink.log(&report)?;

        Ok(report)
    }
}

/// Run the pipeline against the Postgres source described by `config`.
///
/// This is the zero-argument entry point behind `ordercast run`: all
/// parameters arrive through the explicit configuration, nothing is read
/// from ambient state here.
pub async fn run_pipeline(config: &AppConfig) -> Result<EvaluationReport> {
    let source = PgOrderSource::new(config.database_url.clone());
    TrainingPipeline::new(source, config.training.clone())
        .run()
        .await
}
