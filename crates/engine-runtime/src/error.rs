use connectors::sql::base::error::DbError;
use thiserror::Error;

/// Errors that abort a sync run.
///
/// Relations that cannot be classified and CREATE statements the destination
/// rejects are not errors; they are logged and the run carries on.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Listing the source relations failed.
    #[error("Failed to enumerate source tables: {0}")]
    Enumerate(#[source] DbError),

    #[error("Failed to retrieve schema of `{table}`: {source}")]
    SchemaRetrieval { table: String, source: DbError },

    #[error("Failed to read rows of `{table}`: {source}")]
    Extract { table: String, source: DbError },

    #[error("Failed to write rows of `{table}`: {source}")]
    Write { table: String, source: DbError },

    #[error("Invalid sync settings: {0}")]
    InvalidSettings(String),
}

impl SyncError {
    /// The relation being synced when the error occurred, if any.
    pub fn table(&self) -> Option<&str> {
        match self {
            SyncError::SchemaRetrieval { table, .. }
            | SyncError::Extract { table, .. }
            | SyncError::Write { table, .. } => Some(table),
            SyncError::Enumerate(_) | SyncError::InvalidSettings(_) => None,
        }
    }
}
