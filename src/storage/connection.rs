// Connection helper
// Opens the dataset file and makes sure it really is a SQLite database

use crate::error::{Error, Result};
use rusqlite::{Connection, OpenFlags};
use std::path::Path;
use tracing::debug;

/// Where the dataset lives, relative to the working directory
pub const DATABASE_PATH: &str = "./database.sqlite";

/// Open the database at `path`
///
/// The file must already exist; we never create an empty database in its
/// place. SQLite opens lazily, so the schema is read once here to surface a
/// corrupt or foreign file as a connection error rather than a query error.
pub fn open(path: impl AsRef<Path>) -> Result<Connection> {
    let path = path.as_ref();
    let connection_error = |cause| Error::Connection {
        path: path.to_path_buf(),
        cause,
    };

    let flags = OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    let conn = Connection::open_with_flags(path, flags).map_err(connection_error)?;

    let tables: i64 = conn
        .query_row(
            "SELECT count(*) FROM sqlite_master WHERE type = 'table'",
            [],
            |row| row.get(0),
        )
        .map_err(connection_error)?;

    debug!(path = %path.display(), tables, "database opened");
    Ok(conn)
}
