use crate::{pagination::cursor::Cursor, records::row::RowData};

/// A page of rows read from one table.
#[derive(Debug, Clone)]
pub struct Batch {
    pub table: String,
    /// Column order of the SELECT; every row follows it.
    pub columns: Vec<String>,
    pub rows: Vec<RowData>,
    /// Cursor the page was read from.
    pub cursor: Cursor,
}

impl Batch {
    pub fn new(table: &str, columns: Vec<String>, rows: Vec<RowData>, cursor: Cursor) -> Self {
        Self {
            table: table.to_string(),
            columns,
            rows,
            cursor,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// A page shorter than the requested size is the last one.
    pub fn is_last(&self, chunk_size: usize) -> bool {
        self.rows.len() < chunk_size
    }
}
