use async_trait::async_trait;
use connectors::sql::base::{
    destination::DbDestination,
    error::{DbError, ER_TABLE_EXISTS},
    query::generator::QueryGenerator,
    requests::FetchRowsRequest,
    source::SourceCatalog,
};
use model::{
    core::{
        data_type::DataType,
        value::{FieldValue, Value},
    },
    pagination::cursor::Cursor,
    records::{batch::Batch, row::RowData},
};
use planner::query::dialect::MySql;
use std::{
    collections::{BTreeMap, HashMap, HashSet},
    sync::Mutex,
};

pub const COLUMNS: [&str; 2] = ["id", "note"];

pub fn order_row(table: &str, id: i64) -> RowData {
    RowData::new(
        table,
        vec![
            FieldValue {
                name: "id".to_string(),
                value: Value::Int(id),
                data_type: DataType::Int,
            },
            FieldValue {
                name: "note".to_string(),
                value: Value::String(format!("note {id}")),
                data_type: DataType::VarChar,
            },
        ],
    )
}

/// In-memory source database. Relations are listed in insertion order.
#[derive(Default)]
pub struct FakeSource {
    relations: Vec<String>,
    views: HashSet<String>,
    unclassifiable: HashSet<String>,
    missing_ddl: HashSet<String>,
    failing_fetches: HashSet<String>,
    primary_keys: HashMap<String, String>,
    data: HashMap<String, Vec<RowData>>,
    fail_enumerate: bool,
    pub fetches: Mutex<Vec<(String, Cursor)>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a table holding rows with ids `1..=rows`.
    pub fn with_table(self, table: &str, rows: i64) -> Self {
        let rows = (1..=rows).map(|id| order_row(table, id)).collect();
        self.with_rows(table, rows)
    }

    pub fn with_rows(mut self, table: &str, rows: Vec<RowData>) -> Self {
        self.relations.push(table.to_string());
        self.data.insert(table.to_string(), rows);
        self
    }

    pub fn with_view(mut self, view: &str) -> Self {
        self.relations.push(view.to_string());
        self.views.insert(view.to_string());
        self
    }

    pub fn with_primary_key(mut self, table: &str, column: &str) -> Self {
        self.primary_keys
            .insert(table.to_string(), column.to_string());
        self
    }

    pub fn unclassifiable(mut self, relation: &str) -> Self {
        self.unclassifiable.insert(relation.to_string());
        self
    }

    pub fn without_ddl(mut self, table: &str) -> Self {
        self.missing_ddl.insert(table.to_string());
        self
    }

    pub fn failing_fetch(mut self, table: &str) -> Self {
        self.failing_fetches.insert(table.to_string());
        self
    }

    pub fn failing_enumeration(mut self) -> Self {
        self.fail_enumerate = true;
        self
    }

    pub fn fetched(&self, table: &str) -> Vec<Cursor> {
        self.fetches
            .lock()
            .unwrap()
            .iter()
            .filter(|(t, _)| t == table)
            .map(|(_, c)| c.clone())
            .collect()
    }
}

#[async_trait]
impl SourceCatalog for FakeSource {
    fn database(&self) -> &str {
        "shop"
    }

    async fn list_tables(&self) -> Result<Vec<String>, DbError> {
        if self.fail_enumerate {
            return Err(DbError::Unknown("connection reset".to_string()));
        }
        Ok(self.relations.clone())
    }

    async fn is_view(&self, database: &str, relation: &str) -> Result<bool, DbError> {
        assert_eq!(database, "shop");
        if self.unclassifiable.contains(relation) {
            return Err(DbError::Unknown("information_schema unavailable".to_string()));
        }
        Ok(self.views.contains(relation))
    }

    async fn create_statement(&self, table: &str) -> Result<String, DbError> {
        if self.missing_ddl.contains(table) {
            return Err(DbError::MissingCreateStatement(table.to_string()));
        }
        Ok(format!(
            "CREATE TABLE `{table}` (`id` int NOT NULL, `note` varchar(64), PRIMARY KEY (`id`))"
        ))
    }

    async fn integer_primary_key(&self, table: &str) -> Result<Option<String>, DbError> {
        Ok(self.primary_keys.get(table).cloned())
    }

    async fn fetch_chunk(&self, request: FetchRowsRequest) -> Result<Batch, DbError> {
        self.fetches
            .lock()
            .unwrap()
            .push((request.table.clone(), request.cursor.clone()));

        if self.failing_fetches.contains(&request.table) {
            return Err(DbError::Unknown("lost connection during query".to_string()));
        }

        let rows = self.data.get(&request.table).cloned().unwrap_or_default();
        let start = match &request.cursor {
            Cursor::None => 0,
            Cursor::Offset { offset } => *offset,
            Cursor::Pk { pk_col, id } => rows
                .iter()
                .position(|r| r.get_value(pk_col).as_i128().is_some_and(|v| v > *id))
                .unwrap_or(rows.len()),
        };
        let page = rows.into_iter().skip(start).take(request.limit).collect();

        Ok(Batch::new(
            &request.table,
            COLUMNS.iter().map(|c| c.to_string()).collect(),
            page,
            request.cursor,
        ))
    }
}

/// In-memory destination keyed by `id`, so repeated upserts overwrite.
#[derive(Default)]
pub struct FakeDestination {
    existing: HashSet<String>,
    rejected_ddl: HashSet<String>,
    failing_writes: HashSet<String>,
    pub ddl: Mutex<Vec<String>>,
    pub statements: Mutex<Vec<String>>,
    pub tables: Mutex<HashMap<String, BTreeMap<i128, RowData>>>,
}

impl FakeDestination {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_existing(mut self, table: &str) -> Self {
        self.existing.insert(table.to_string());
        self
    }

    /// The destination refuses the CREATE statement for `table` (not as a
    /// duplicate) but still accepts rows for it.
    pub fn rejecting_ddl(mut self, table: &str) -> Self {
        self.rejected_ddl.insert(table.to_string());
        self
    }

    pub fn failing_writes(mut self, table: &str) -> Self {
        self.failing_writes.insert(table.to_string());
        self
    }

    pub fn row_count(&self, table: &str) -> usize {
        self.tables
            .lock()
            .unwrap()
            .get(table)
            .map_or(0, |rows| rows.len())
    }

    pub fn upserts_into(&self, table: &str) -> usize {
        let prefix = format!("INSERT INTO `{table}` ");
        self.statements
            .lock()
            .unwrap()
            .iter()
            .filter(|sql| sql.starts_with(&prefix))
            .count()
    }
}

fn table_exists_error(table: &str) -> DbError {
    DbError::MySql(mysql_async::Error::Server(mysql_async::ServerError {
        code: ER_TABLE_EXISTS,
        message: format!("Table '{table}' already exists"),
        state: "42S01".to_string(),
    }))
}

#[async_trait]
impl DbDestination for FakeDestination {
    async fn execute_ddl(&self, ddl: &str) -> Result<(), DbError> {
        self.ddl.lock().unwrap().push(ddl.to_string());

        let table = ddl.split('`').nth(1).unwrap_or_default().to_string();
        if self.existing.contains(&table) {
            return Err(table_exists_error(&table));
        }
        if self.rejected_ddl.contains(&table) {
            return Err(DbError::Unknown(format!(
                "CREATE command denied for table '{table}'"
            )));
        }
        self.tables.lock().unwrap().entry(table).or_default();
        Ok(())
    }

    async fn upsert(&self, batch: &Batch) -> Result<(), DbError> {
        if self.failing_writes.contains(&batch.table) {
            return Err(DbError::Unknown("disk full".to_string()));
        }

        let sql = QueryGenerator::new(&MySql).upsert(batch)?;
        self.statements.lock().unwrap().push(sql);

        let mut tables = self.tables.lock().unwrap();
        let rows = tables.entry(batch.table.clone()).or_default();
        for row in &batch.rows {
            let id = row.get_value("id").as_i128().unwrap();
            rows.insert(id, row.clone());
        }
        Ok(())
    }
}
