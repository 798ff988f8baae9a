use crate::sql::base::{error::DbError, requests::FetchRowsRequest};
use async_trait::async_trait;
use model::records::batch::Batch;

/// Read side of a sync: catalog lookups and paged row extraction.
#[async_trait]
pub trait SourceCatalog: Send + Sync {
    /// Name of the database the catalog is connected to.
    fn database(&self) -> &str;

    /// Every relation of the database, base tables and views alike.
    async fn list_tables(&self) -> Result<Vec<String>, DbError>;

    async fn is_view(&self, database: &str, relation: &str) -> Result<bool, DbError>;

    /// The `CREATE TABLE` statement for `table`, verbatim.
    async fn create_statement(&self, table: &str) -> Result<String, DbError>;

    /// Name of the primary key column when the key is a single integer column.
    async fn integer_primary_key(&self, table: &str) -> Result<Option<String>, DbError>;

    async fn fetch_chunk(&self, request: FetchRowsRequest) -> Result<Batch, DbError>;
}
