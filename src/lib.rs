//! ordercast - Customer order value prediction
//!
//! A small training workflow over relational order data:
//! - [`data`] - customer aggregate loading from Postgres
//! - [`features`] - cleaning and feature building
//! - [`training`] - deterministic random-forest regression
//! - [`evaluation`] - MAE / R² scoring
//! - [`pipeline`] - the orchestrator wiring the stages together
//!
//! ## Services
//! - [`server`] - health-check HTTP service
//! - [`cli`] - command-line interface

// Core error handling
pub mod error;

// Pipeline stages
pub mod data;
pub mod features;
pub mod training;
pub mod evaluation;
pub mod pipeline;

// Configuration
pub mod config;

// Services
pub mod server;
pub mod cli;

pub use error::{OrdercastError, Result};

/// Re-export commonly used types
pub mod prelude {
    // Error handling
    pub use crate::error::{OrdercastError, Result};

    // Configuration
    pub use crate::config::AppConfig;

    // Data access
    pub use crate::data::{CustomerAggregate, OrderSource, PgOrderSource};

    // Features
    pub use crate::features::{build_features, clean_records, FeatureTable, TARGET_COLUMN};

    // Training
    pub use crate::training::{train, Predictor, RandomForestRegressor, TrainingConfig, FIXED_SEED};

    // Evaluation
    pub use crate::evaluation::{evaluate, EvaluationReport};

    // Orchestration
    pub use crate::pipeline::{
        run_pipeline, MetricsSink, ModelStore, NullMetricsSink, NullModelStore, TrainingPipeline,
    };
}
