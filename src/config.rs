//! Application configuration
//!
//! All externally supplied parameters are loaded once at startup and passed
//! explicitly into the pipeline entry point. Nothing reads ambient state
//! after `AppConfig::load` returns.

use serde::{Deserialize, Serialize};
use std::env;

use crate::error::{OrdercastError, Result};
use crate::training::TrainingConfig;

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Connection string for the customer order database
    pub database_url: String,
    /// Trainer configuration
    pub training: TrainingConfig,
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// A `.env` file in the working directory is honored if present.
    /// `DB_URL` is required; `N_ESTIMATORS` is optional and falls back to
    /// the trainer default.
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();

        let database_url = env::var("DB_URL")
            .map_err(|_| OrdercastError::Config("DB_URL is not set".to_string()))?;

        let mut training = TrainingConfig::default();
        if let Ok(raw) = env::var("N_ESTIMATORS") {
            let n = raw.parse::<usize>().map_err(|_| OrdercastError::InvalidParameter {
                name: "N_ESTIMATORS".to_string(),
                value: raw.clone(),
                reason: "must be a positive integer".to_string(),
            })?;
            training = training.with_n_estimators(n);
        }

        Ok(Self {
            database_url,
            training,
        })
    }
}
