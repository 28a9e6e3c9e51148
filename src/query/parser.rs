// SQL pre-flight
// User supplied SQL is run verbatim, but we take a quick look at it first
// using the sqlparser crate so obvious mistakes get a clear message

use crate::error::{Error, Result};
use sqlparser::ast::Statement;
use sqlparser::dialect::SQLiteDialect;
use sqlparser::parser::Parser;
use tracing::debug;

/// The query parser
pub struct QueryParser;

impl QueryParser {
    /// Check that `sql` holds exactly one statement
    ///
    /// sqlparser does not know every corner of SQLite's grammar, so text it
    /// cannot parse is let through and SQLite gets the final word on it.
    pub fn check(sql: &str) -> Result<()> {
        let dialect = SQLiteDialect {};
        let ast = match Parser::parse_sql(&dialect, sql) {
            Ok(ast) => ast,
            Err(e) => {
                debug!(error = %e, "sqlparser could not parse query, deferring to sqlite");
                return Ok(());
            }
        };

        match ast.len() {
            0 => Err(Error::Statement("no SQL statement given".to_string())),
            1 => {
                debug!(kind = Self::describe(&ast[0]), "query pre-flight passed");
                Ok(())
            }
            n => Err(Error::Statement(format!(
                "only single statements are supported, got {}",
                n
            ))),
        }
    }

    /// Short label for a statement, used in log output
    fn describe(statement: &Statement) -> &'static str {
        match statement {
            Statement::Query(_) => "select",
            Statement::Insert(_) => "insert",
            Statement::Update { .. } => "update",
            Statement::Delete(_) => "delete",
            Statement::CreateTable(_) | Statement::CreateIndex(_) | Statement::CreateView { .. } => {
                "ddl"
            }
            _ => "other",
        }
    }
}
