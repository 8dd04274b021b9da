//! ordercast - Main Entry Point

use clap::Parser;
use ordercast::cli::{cmd_run, cmd_serve, Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ordercast=info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run { n_estimators }) => {
            cmd_run(n_estimators).await?;
        }
        Some(Commands::Serve { host, port }) => {
            cmd_serve(host, port).await?;
        }
        None => {
            // Default: run the pipeline (zero-argument invocation)
            cmd_run(None).await?;
        }
    }

    Ok(())
}
