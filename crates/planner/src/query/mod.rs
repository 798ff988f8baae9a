use crate::query::ast::expr::{Expr, Ident};
use model::core::value::Value;

pub mod ast;
pub mod builder;
pub mod dialect;
pub mod error;
pub mod literal;
pub mod macros;
pub mod offsets;
pub mod renderer;

pub fn ident(name: &str) -> Expr {
    Expr::Identifier(Ident {
        qualifier: None,
        name: name.to_string(),
    })
}

pub fn value(val: Value) -> Expr {
    Expr::Value(val)
}

/// A raw SQL fragment such as a `LIMIT` count.
pub fn literal(sql: impl ToString) -> Expr {
    Expr::Literal(sql.to_string())
}
