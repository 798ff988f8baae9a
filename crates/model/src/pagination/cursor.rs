use serde::{Deserialize, Serialize};

/// Represents the pagination cursor.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum Cursor {
    /// First page, nothing read yet.
    None,

    /// Row offset into the table (`LIMIT .. OFFSET ..`).
    Offset { offset: usize },

    /// Last seen value of a strictly increasing integer primary key.
    Pk { pk_col: String, id: i128 },
}

impl Cursor {
    pub fn offset(&self) -> usize {
        match self {
            Cursor::Offset { offset } => *offset,
            _ => 0,
        }
    }
}
