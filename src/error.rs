// Error types
// Everything that can go wrong falls into one of two buckets: we could not
// open the database, or a query against it failed.
// The SQLite error is part of the message and is not exposed as a source.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The database file is missing, unreadable or not a database at all
    #[error("cannot open database '{}': {cause}", .path.display())]
    Connection { path: PathBuf, cause: rusqlite::Error },

    /// SQLite refused to prepare or run the statement
    #[error("query failed: {cause}")]
    Query { cause: rusqlite::Error },

    /// The SQL was rejected before it was handed to SQLite
    #[error("invalid query: {0}")]
    Statement(String),
}

impl Error {
    pub fn is_connection(&self) -> bool {
        matches!(self, Error::Connection { .. })
    }
}

impl From<rusqlite::Error> for Error {
    fn from(cause: rusqlite::Error) -> Self {
        Error::Query { cause }
    }
}
