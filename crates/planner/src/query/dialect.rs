//! Defines the `Dialect` trait for database-specific SQL syntax.

use crate::query::literal::{LiteralEncoder, MySqlLiteralEncoder};

pub trait Dialect: Send + Sync {
    /// Wraps an identifier (like a table or column name) in the correct
    /// quotation marks for the dialect.
    fn quote_identifier(&self, ident: &str) -> String;

    /// Encoder used to inline values into statements.
    fn literal_encoder(&self) -> &dyn LiteralEncoder;
}

#[derive(Debug, Clone, Default)]
pub struct MySql;

impl Dialect for MySql {
    /// MySQL uses backticks; an embedded backtick is doubled.
    fn quote_identifier(&self, ident: &str) -> String {
        format!("`{}`", ident.replace('`', "``"))
    }

    fn literal_encoder(&self) -> &dyn LiteralEncoder {
        &MySqlLiteralEncoder
    }
}
