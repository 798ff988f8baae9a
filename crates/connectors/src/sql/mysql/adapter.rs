use crate::sql::{
    base::{
        destination::DbDestination,
        error::{ConnectorError, DbError},
        query::generator::QueryGenerator,
        requests::FetchRowsRequest,
        source::SourceCatalog,
    },
    mysql::{
        connection,
        data_type::MySqlColumnDataType,
        row::{ColumnInfo, row_data},
    },
};
use async_trait::async_trait;
use model::{
    core::data_type::DataType, execution::connection::ConnectionTarget, records::batch::Batch,
    records::row::RowData,
};
use mysql_async::{Pool, Row, prelude::*};
use planner::query::dialect;
use tracing::{debug, trace};

const QUERY_LIST_TABLES_SQL: &str = include_str!("sql/list_tables.sql");
const QUERY_VIEW_EXISTS_SQL: &str = include_str!("sql/view_exists.sql");
const QUERY_PRIMARY_KEY_SQL: &str = include_str!("sql/primary_key.sql");

/// One MySQL database reached over a single pooled connection.
#[derive(Clone)]
pub struct MySqlAdapter {
    pool: Pool,
    database: String,
    dialect: dialect::MySql,
}

impl MySqlAdapter {
    pub async fn connect(target: &ConnectionTarget) -> Result<Self, ConnectorError> {
        let pool = connection::connect(target).await?;
        Ok(MySqlAdapter {
            pool,
            database: target.database.clone(),
            dialect: dialect::MySql,
        })
    }

    /// Closes the connection and waits for the pool to shut down.
    pub async fn disconnect(self) -> Result<(), DbError> {
        self.pool.disconnect().await?;
        Ok(())
    }

    pub async fn execute(&self, query: &str) -> Result<(), DbError> {
        let mut conn = self.pool.get_conn().await?;
        conn.query_drop(query).await?;
        Ok(())
    }
}

#[async_trait]
impl SourceCatalog for MySqlAdapter {
    fn database(&self) -> &str {
        &self.database
    }

    async fn list_tables(&self) -> Result<Vec<String>, DbError> {
        let mut conn = self.pool.get_conn().await?;
        let tables: Vec<String> = conn.query(QUERY_LIST_TABLES_SQL.trim()).await?;
        debug!("Found {} relations in `{}`", tables.len(), self.database);
        Ok(tables)
    }

    async fn is_view(&self, database: &str, relation: &str) -> Result<bool, DbError> {
        let mut conn = self.pool.get_conn().await?;
        let found: Option<String> = conn
            .exec_first(QUERY_VIEW_EXISTS_SQL, (database, relation))
            .await?;
        Ok(found.is_some())
    }

    async fn create_statement(&self, table: &str) -> Result<String, DbError> {
        let sql = QueryGenerator::new(&self.dialect).show_create_table(table);
        let mut conn = self.pool.get_conn().await?;
        let row: Option<Row> = conn.query_first(sql).await?;

        // columns are (Table, Create Table)
        row.and_then(|mut row| row.take::<String, _>(1))
            .ok_or_else(|| DbError::MissingCreateStatement(table.to_string()))
    }

    async fn integer_primary_key(&self, table: &str) -> Result<Option<String>, DbError> {
        let mut conn = self.pool.get_conn().await?;
        let key_columns: Vec<(String, String)> = conn
            .exec(QUERY_PRIMARY_KEY_SQL, (self.database.as_str(), table))
            .await?;

        let pk = match key_columns.as_slice() {
            [(name, column_type)] => DataType::from_mysql_type(column_type)
                .ok()
                .filter(DataType::is_integer)
                .map(|_| name.clone()),
            _ => None,
        };
        Ok(pk)
    }

    async fn fetch_chunk(&self, request: FetchRowsRequest) -> Result<Batch, DbError> {
        let sql = QueryGenerator::new(&self.dialect).select(&request);
        debug!("Generated SQL: {}", sql);

        let mut conn = self.pool.get_conn().await?;
        let result = conn.query_iter(sql).await?;

        let columns = result
            .columns()
            .map(|columns| {
                columns
                    .iter()
                    .map(|column| ColumnInfo {
                        name: column.name_str().into_owned(),
                        data_type: DataType::from_mysql_column(column),
                    })
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        let rows: Vec<Row> = result.collect_and_drop().await?;
        let rows: Vec<RowData> = rows
            .into_iter()
            .map(|row| row_data(&request.table, &columns, row))
            .collect();

        trace!("Fetched {} rows from `{}`", rows.len(), request.table);

        let names = columns.into_iter().map(|c| c.name).collect();
        Ok(Batch::new(&request.table, names, rows, request.cursor))
    }
}

#[async_trait]
impl DbDestination for MySqlAdapter {
    async fn execute_ddl(&self, ddl: &str) -> Result<(), DbError> {
        self.execute(ddl).await
    }

    async fn upsert(&self, batch: &Batch) -> Result<(), DbError> {
        if batch.is_empty() {
            return Ok(());
        }

        let sql = QueryGenerator::new(&self.dialect).upsert(batch)?;
        trace!("Upsert into `{}`: {} bytes of SQL", batch.table, sql.len());
        self.execute(&sql).await
    }
}
