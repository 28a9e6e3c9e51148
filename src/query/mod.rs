// Query module - the report catalog plus running SQL and rendering results
pub mod catalog;
pub mod executor;
pub mod parser;

pub use catalog::Report;
pub use executor::{QueryExecutor, QueryResult};
pub use parser::QueryParser;
