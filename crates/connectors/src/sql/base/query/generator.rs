use crate::sql::base::requests::FetchRowsRequest;
use model::records::batch::Batch;
use planner::query::{
    builder::{insert::InsertBuilder, select::SelectBuilder},
    dialect::Dialect,
    error::QueryBuildError,
    literal,
    renderer::{Render, Renderer},
    value,
};
use planner::table_ref;

pub struct QueryGenerator<'a> {
    dialect: &'a dyn Dialect,
}

impl<'a> QueryGenerator<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self { dialect }
    }

    /// `SELECT *` page of a table, paginated by the request's strategy.
    pub fn select(&self, request: &FetchRowsRequest) -> String {
        let select = SelectBuilder::new()
            .select(vec![literal("*")])
            .from(table_ref!(&request.table), None);

        let select_ast = request
            .strategy
            .apply_to_builder(select, &request.cursor, request.limit)
            .build();

        self.render_ast(select_ast)
    }

    /// Multi-row `INSERT .. ON DUPLICATE KEY UPDATE` covering every column of
    /// the batch, with all values inlined.
    pub fn upsert(&self, batch: &Batch) -> Result<String, QueryBuildError> {
        let columns = batch.columns.iter().map(String::as_str).collect::<Vec<_>>();
        let mut insert = InsertBuilder::new(table_ref!(&batch.table)).columns(&columns);

        for (index, row) in batch.rows.iter().enumerate() {
            // the SELECT column order is authoritative; a row must match it exactly
            if !row.column_names().eq(columns.iter().copied()) {
                return Err(QueryBuildError::ColumnOrderMismatch {
                    table: batch.table.clone(),
                    row: index,
                });
            }

            insert = insert.values(row.values().cloned().map(value).collect())?;
        }

        let insert_ast = insert.on_conflict_update_all().build()?;
        Ok(self.render_ast(insert_ast))
    }

    pub fn show_create_table(&self, table: &str) -> String {
        format!(
            "SHOW CREATE TABLE {}",
            self.dialect.quote_identifier(table)
        )
    }

    fn render_ast(&self, ast: impl Render) -> String {
        let mut renderer = Renderer::new(self.dialect);
        ast.render(&mut renderer);
        renderer.finish()
    }
}
