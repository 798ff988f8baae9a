use crate::{config::SyncConfig, env::EnvManager, error::CliError};
use connectors::sql::mysql::adapter::MySqlAdapter;
use engine_runtime::{
    report::{SyncReport, TableOutcome},
    sync::runner::TableSyncer,
};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod env;
mod error;

#[tokio::main]
async fn main() -> Result<(), CliError> {
    // Initialize logger
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let result = run().await;
    if let Err(e) = &result {
        error!("{}", e);
    }
    result
}

async fn run() -> Result<(), CliError> {
    let mut env = EnvManager::new();
    env.load_dotenv()?;
    let config = SyncConfig::from_env(&env)?;

    let source = MySqlAdapter::connect(&config.source)
        .await
        .map_err(|e| CliError::Connect {
            role: "source",
            source: e,
        })?;

    let destination = match MySqlAdapter::connect(&config.destination).await {
        Ok(destination) => destination,
        Err(e) => {
            source.disconnect().await.ok();
            return Err(CliError::Connect {
                role: "destination",
                source: e,
            });
        }
    };

    let result = TableSyncer::new(&source, &destination, config.settings.clone())
        .run()
        .await;

    // Release both sessions before reporting, whatever the outcome.
    let source_closed = source.disconnect().await;
    let destination_closed = destination.disconnect().await;

    let report = result?;
    log_summary(&report);

    source_closed.map_err(|e| CliError::Disconnect {
        role: "source",
        source: e,
    })?;
    destination_closed.map_err(|e| CliError::Disconnect {
        role: "destination",
        source: e,
    })?;

    Ok(())
}

fn log_summary(report: &SyncReport) {
    for table in &report.tables {
        match &table.outcome {
            TableOutcome::Synced { rows, batches } => {
                info!(table = %table.table, rows, batches, "Synced");
            }
            TableOutcome::Skipped { reason } => {
                info!(table = %table.table, reason = ?reason, "Skipped");
            }
        }
    }

    info!(
        synced = report.synced_tables(),
        skipped = report.skipped_tables(),
        rows = report.total_rows(),
        elapsed = ?report.elapsed,
        "Sync complete"
    );

    if let Ok(json) = serde_json::to_string(report) {
        debug!(report = %json, "Sync report");
    }
}
