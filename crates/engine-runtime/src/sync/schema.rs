use crate::error::SyncError;
use connectors::sql::base::{destination::DbDestination, source::SourceCatalog};
use tracing::{info, warn};

/// Result of replaying a source `CREATE TABLE` on the destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaOutcome {
    Created,
    AlreadyExists,
    /// The destination rejected the statement for another reason.
    Failed(String),
}

/// Copies the table definition to the destination.
///
/// Only reading the definition can fail the run. The existing destination
/// table is never altered, and a rejected statement is logged and ignored:
/// the subsequent writes surface any real incompatibility.
pub async fn mirror_schema<S, D>(
    source: &S,
    destination: &D,
    table: &str,
) -> Result<SchemaOutcome, SyncError>
where
    S: SourceCatalog + ?Sized,
    D: DbDestination + ?Sized,
{
    let ddl = source
        .create_statement(table)
        .await
        .map_err(|e| SyncError::SchemaRetrieval {
            table: table.to_string(),
            source: e,
        })?;

    match destination.execute_ddl(&ddl).await {
        Ok(()) => {
            info!(table, "Created table on destination");
            Ok(SchemaOutcome::Created)
        }
        Err(e) if e.is_table_exists() => {
            warn!(table, "Table already exists on destination, keeping it");
            Ok(SchemaOutcome::AlreadyExists)
        }
        Err(e) => {
            warn!(table, error = %e, "Failed to create table on destination");
            Ok(SchemaOutcome::Failed(e.to_string()))
        }
    }
}
