//! Command-line interface
//!
//! Two entry points: `run` executes the training pipeline end-to-end,
//! `serve` starts the health-check web service.

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::pipeline::run_pipeline;
use crate::server::{run_server, ServerConfig};

#[derive(Parser)]
#[command(name = "ordercast")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Customer order value prediction pipeline")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the training pipeline and print the evaluation report
    Run {
        /// Number of trees in the ensemble (overrides N_ESTIMATORS)
        #[arg(long)]
        n_estimators: Option<usize>,
    },

    /// Start the health-check web service
    Serve {
        /// Host to bind to (overrides API_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides API_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

/// Execute the training pipeline with configuration from the environment.
pub async fn cmd_run(n_estimators: Option<usize>) -> anyhow::Result<()> {
    let mut config = AppConfig::load()?;
    if let Some(n) = n_estimators {
        config.training = config.training.with_n_estimators(n);
    }

    let report = run_pipeline(&config).await?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Start the health-check service.
pub async fn cmd_serve(host: Option<String>, port: Option<u16>) -> anyhow::Result<()> {
    let mut config = ServerConfig::default();
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    run_server(config).await
}
