// soccerdb - canned reports over the European soccer SQLite dataset
// This is the library root that exposes the public API

pub mod error;
pub mod query;
pub mod storage;

// Re-export commonly used types for convenience
pub use error::{Error, Result};
pub use query::{
    catalog::{Report, DEFAULT_QUERY},
    executor::{QueryExecutor, QueryResult},
    parser::QueryParser,
};
pub use storage::{connection::DATABASE_PATH, Row, Value};
