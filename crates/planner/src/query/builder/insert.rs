//! Provides a fluent builder for constructing `Insert` ASTs.

use crate::query::{
    ast::{
        common::TableRef,
        expr::{Expr, FunctionCall},
        insert::{ConflictAssignment, Insert, OnConflict},
    },
    error::QueryBuildError,
    ident,
};

#[derive(Debug, Clone)]
pub struct InsertBuilder {
    ast: Insert,
}

impl InsertBuilder {
    pub fn new(table: TableRef) -> Self {
        Self {
            ast: Insert {
                table,
                ..Default::default()
            },
        }
    }

    pub fn columns(mut self, columns: &[&str]) -> Self {
        self.ast.columns = columns.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Adds a row of values to the insert statement.
    /// This can be called multiple times for a batch insert.
    pub fn values(mut self, values: Vec<Expr>) -> Result<Self, QueryBuildError> {
        if values.len() != self.ast.columns.len() {
            return Err(QueryBuildError::ArityMismatch {
                table: self.ast.table.name.clone(),
                row: self.ast.values.len(),
                expected: self.ast.columns.len(),
                actual: values.len(),
            });
        }
        self.ast.values.push(values);
        Ok(self)
    }

    /// On a key collision, overwrite every inserted column with the incoming
    /// value (`col = VALUES(col)`).
    pub fn on_conflict_update_all(mut self) -> Self {
        let assignments = self
            .ast
            .columns
            .iter()
            .map(|column| ConflictAssignment {
                column: column.clone(),
                value: Expr::FunctionCall(FunctionCall {
                    name: "VALUES".to_string(),
                    args: vec![ident(column)],
                }),
            })
            .collect();
        self.ast.on_conflict = Some(OnConflict { assignments });
        self
    }

    pub fn build(self) -> Result<Insert, QueryBuildError> {
        if self.ast.columns.is_empty() {
            return Err(QueryBuildError::NoColumns {
                table: self.ast.table.name,
            });
        }
        Ok(self.ast)
    }
}
