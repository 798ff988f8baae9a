use planner::query::error::QueryBuildError;
use thiserror::Error;

/// MySQL error code for `CREATE TABLE` on an existing table.
pub const ER_TABLE_EXISTS: u16 = 1050;

/// All errors coming from the database/query layer.
#[derive(Debug, Error)]
pub enum DbError {
    /// Any SQL driver error.
    #[error("MySQL error: {0}")]
    MySql(#[from] mysql_async::Error),

    /// An error occurred while building a SQL query.
    #[error("Query build error: {0}")]
    QueryBuild(#[from] QueryBuildError),

    /// `SHOW CREATE TABLE` returned no row.
    #[error("No CREATE statement returned for table `{0}`")]
    MissingCreateStatement(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl DbError {
    /// Server-side error code, if the server rejected the statement.
    pub fn server_code(&self) -> Option<u16> {
        match self {
            DbError::MySql(mysql_async::Error::Server(err)) => Some(err.code),
            _ => None,
        }
    }

    pub fn is_table_exists(&self) -> bool {
        self.server_code() == Some(ER_TABLE_EXISTS)
    }
}

/// Errors happening during adapter or connection setup.
#[derive(Debug, Error)]
pub enum ConnectorError {
    #[error("MySQL connection failed: {0}")]
    MySql(#[from] mysql_async::Error),

    #[error("Invalid host: {0}")]
    InvalidHost(String),
}
