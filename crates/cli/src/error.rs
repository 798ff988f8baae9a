use connectors::sql::base::error::{ConnectorError, DbError};
use engine_runtime::error::SyncError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    /// The `.env` file or an environment value could not be used.
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to connect to {role} database: {source}")]
    Connect {
        role: &'static str,
        source: ConnectorError,
    },

    #[error("Sync failed: {0}")]
    Sync(#[from] SyncError),

    #[error("Failed to disconnect from {role} database: {source}")]
    Disconnect {
        role: &'static str,
        source: DbError,
    },
}
