use crate::sql::base::error::DbError;
use async_trait::async_trait;
use model::records::batch::Batch;

/// Write side of a sync.
#[async_trait]
pub trait DbDestination: Send + Sync {
    /// Runs a DDL statement as-is.
    async fn execute_ddl(&self, ddl: &str) -> Result<(), DbError>;

    /// Inserts every row of `batch`, overwriting rows whose key already exists.
    async fn upsert(&self, batch: &Batch) -> Result<(), DbError>;
}
