//! Pagination strategies for paging through a table in fixed-size chunks.

use crate::query::{
    ast::{
        common::OrderDir,
        expr::{BinaryOp, BinaryOperator, Expr},
    },
    builder::select::{FromState, SelectBuilder},
    error::QueryBuildError,
    ident, literal,
};
use model::{pagination::cursor::Cursor, records::row::RowData};

pub trait OffsetStrategy: Send + Sync {
    /// Applies the pagination logic (WHERE, ORDER BY, LIMIT, OFFSET) to a SelectBuilder.
    fn apply_to_builder(
        &self,
        builder: SelectBuilder<FromState>,
        cursor: &Cursor,
        limit: usize,
    ) -> SelectBuilder<FromState>;

    /// Cursor of the page that follows `rows`, which were read at `cursor`.
    fn next_cursor(&self, cursor: &Cursor, rows: &[RowData]) -> Result<Cursor, QueryBuildError>;

    fn name(&self) -> &'static str;
}

/// `LIMIT n OFFSET m` paging in natural table order.
///
/// Rows inserted or deleted on the source between two pages can shift the
/// window, so a row may be read twice or skipped.
#[derive(Debug, Clone, Default)]
pub struct LimitOffset;

/// Keyset paging on a strictly increasing integer primary key.
#[derive(Debug, Clone)]
pub struct PkOffset {
    pub pk: String,
}

impl OffsetStrategy for LimitOffset {
    fn apply_to_builder(
        &self,
        builder: SelectBuilder<FromState>,
        cursor: &Cursor,
        limit: usize,
    ) -> SelectBuilder<FromState> {
        builder
            .limit(literal(limit))
            .offset(literal(cursor.offset()))
    }

    fn next_cursor(&self, cursor: &Cursor, rows: &[RowData]) -> Result<Cursor, QueryBuildError> {
        Ok(Cursor::Offset {
            offset: cursor.offset() + rows.len(),
        })
    }

    fn name(&self) -> &'static str {
        "offset"
    }
}

impl OffsetStrategy for PkOffset {
    fn apply_to_builder(
        &self,
        mut builder: SelectBuilder<FromState>,
        cursor: &Cursor,
        limit: usize,
    ) -> SelectBuilder<FromState> {
        // WHERE pk > last_id; Cursor::None is the first page
        if let Cursor::Pk { id, .. } = cursor {
            builder = builder.and_where(Expr::BinaryOp(Box::new(BinaryOp {
                left: ident(&self.pk),
                op: BinaryOperator::Gt,
                right: literal(id),
            })));
        }

        builder
            .order_by(ident(&self.pk), Some(OrderDir::Asc))
            .limit(literal(limit))
    }

    fn next_cursor(&self, _cursor: &Cursor, rows: &[RowData]) -> Result<Cursor, QueryBuildError> {
        let invalid = |reason: String| QueryBuildError::InvalidCursor {
            column: self.pk.clone(),
            reason,
        };

        let last = rows
            .last()
            .ok_or_else(|| invalid("no rows in page".to_string()))?;
        let value = last.get_value(&self.pk);
        let id = value
            .as_i128()
            .ok_or_else(|| invalid(format!("value {value} is not an integer")))?;

        Ok(Cursor::Pk {
            pk_col: self.pk.clone(),
            id,
        })
    }

    fn name(&self) -> &'static str {
        "keyset"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{dialect::MySql, renderer::{Render, Renderer}};
    use crate::table_ref;
    use model::core::{
        data_type::DataType,
        value::{FieldValue, Value},
    };

    fn page_sql(strategy: &dyn OffsetStrategy, cursor: &Cursor) -> String {
        let builder = SelectBuilder::new()
            .select(vec![literal("*")])
            .from(table_ref!("orders"), None);
        let select = strategy.apply_to_builder(builder, cursor, 1000).build();

        let dialect = MySql;
        let mut renderer = Renderer::new(&dialect);
        select.render(&mut renderer);
        renderer.finish()
    }

    fn row(id: Value) -> RowData {
        RowData::new(
            "orders",
            vec![FieldValue {
                name: "id".to_string(),
                value: id,
                data_type: DataType::Int,
            }],
        )
    }

    #[test]
    fn test_limit_offset_pages() {
        assert_eq!(
            page_sql(&LimitOffset, &Cursor::None),
            "SELECT * FROM `orders` LIMIT 1000 OFFSET 0"
        );
        assert_eq!(
            page_sql(&LimitOffset, &Cursor::Offset { offset: 2000 }),
            "SELECT * FROM `orders` LIMIT 1000 OFFSET 2000"
        );
    }

    #[test]
    fn test_limit_offset_advances_by_page_len() {
        let rows = vec![row(Value::Int(1)); 1000];
        let next = LimitOffset
            .next_cursor(&Cursor::Offset { offset: 1000 }, &rows)
            .unwrap();
        assert_eq!(next, Cursor::Offset { offset: 2000 });
    }

    #[test]
    fn test_keyset_pages() {
        let strategy = PkOffset { pk: "id".to_string() };
        assert_eq!(
            page_sql(&strategy, &Cursor::None),
            "SELECT * FROM `orders` ORDER BY `id` ASC LIMIT 1000"
        );
        assert_eq!(
            page_sql(
                &strategy,
                &Cursor::Pk {
                    pk_col: "id".to_string(),
                    id: 42
                }
            ),
            "SELECT * FROM `orders` WHERE (`id` > 42) ORDER BY `id` ASC LIMIT 1000"
        );
    }

    #[test]
    fn test_keyset_cursor_from_last_row() {
        let strategy = PkOffset { pk: "id".to_string() };
        let rows = vec![row(Value::Int(-5)), row(Value::Uint(9))];
        assert_eq!(
            strategy.next_cursor(&Cursor::None, &rows).unwrap(),
            Cursor::Pk {
                pk_col: "id".to_string(),
                id: 9
            }
        );

        let bad = vec![row(Value::Null)];
        assert!(strategy.next_cursor(&Cursor::None, &bad).is_err());
    }
}
