use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryBuildError {
    #[error("INSERT into `{table}` has no columns")]
    NoColumns { table: String },

    #[error("row {row} has {actual} values but `{table}` expects {expected} columns")]
    ArityMismatch {
        table: String,
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("row {row} of `{table}` does not follow the batch column order")]
    ColumnOrderMismatch { table: String, row: usize },

    #[error("cannot advance cursor on `{column}`: {reason}")]
    InvalidCursor { column: String, reason: String },
}
