// Query Executor
// Runs one statement over an open connection and collects the result table

use super::{catalog::Report, parser::QueryParser};
use crate::error::Result;
use crate::storage::{connection, Row, Value};
use rusqlite::Connection;
use std::path::Path;
use tracing::{debug, warn};

/// Wraps the single connection a command uses
pub struct QueryExecutor {
    conn: Connection,
}

impl QueryExecutor {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Open the database at `path` and wrap it
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(connection::open(path)?))
    }

    /// Run one of the canned reports
    pub fn run(&self, report: Report) -> Result<QueryResult> {
        debug!(report = report.name(), "running report");
        let result = self.execute(report.sql())?;

        if report == Report::Describe && result.row_count() == 0 {
            warn!("database has no tables");
        }
        Ok(result)
    }

    /// Run SQL typed in by the user, verbatim after a pre-flight check
    pub fn run_user_query(&self, sql: &str) -> Result<QueryResult> {
        QueryParser::check(sql)?;
        self.execute(sql)
    }

    /// Execute a single statement and return the result
    /// Statements that produce no columns come back as a message
    pub fn execute(&self, sql: &str) -> Result<QueryResult> {
        let mut stmt = self.conn.prepare(sql.trim())?;
        let column_count = stmt.column_count();

        if column_count == 0 {
            let changed = stmt.execute([])?;
            debug!(changed, "statement executed");
            return Ok(QueryResult::Message(format!("{} row(s) affected", changed)));
        }

        let column_names: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();

        let mut rows = Vec::new();
        let mut cursor = stmt.query([])?;
        while let Some(row) = cursor.next()? {
            let mut values = Vec::with_capacity(column_count);
            for i in 0..column_count {
                values.push(Value::from(row.get_ref(i)?));
            }
            rows.push(Row { values });
        }

        debug!(rows = rows.len(), columns = column_count, "query returned");
        Ok(QueryResult::Rows { rows, column_names })
    }
}

/// Represents the result of a query execution
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResult {
    /// Rows returned by a query
    Rows {
        rows: Vec<Row>,
        column_names: Vec<String>,
    },
    /// A message for statements that return nothing
    Message(String),
}

impl QueryResult {
    pub fn rows(&self) -> &[Row] {
        match self {
            QueryResult::Rows { rows, .. } => rows,
            QueryResult::Message(_) => &[],
        }
    }

    pub fn column_names(&self) -> &[String] {
        match self {
            QueryResult::Rows { column_names, .. } => column_names,
            QueryResult::Message(_) => &[],
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows().len()
    }

    /// Values of the named column, top to bottom
    pub fn column(&self, name: &str) -> Option<Vec<&Value>> {
        let index = self.column_names().iter().position(|c| c == name)?;
        Some(self.rows().iter().map(|row| &row.values[index]).collect())
    }

    /// Format the result as a string for display
    /// Rows are drawn as a box table sized to the widest cell per column
    /// An empty result still shows its column labels
    pub fn format(&self) -> String {
        match self {
            QueryResult::Message(msg) => msg.clone(),
            QueryResult::Rows { rows, column_names } => {
                let cells: Vec<Vec<String>> = rows
                    .iter()
                    .map(|row| row.values.iter().map(Value::to_string).collect())
                    .collect();

                // Calculate column widths in characters, not bytes
                let mut widths: Vec<usize> =
                    column_names.iter().map(|c| c.chars().count()).collect();
                for row in &cells {
                    for (i, cell) in row.iter().enumerate() {
                        widths[i] = widths[i].max(cell.chars().count());
                    }
                }

                let mut result = String::new();

                result.push_str(&border(&widths, '┌', '┬', '┐'));
                result.push_str(&line(column_names, &widths));
                if !cells.is_empty() {
                    result.push_str(&border(&widths, '├', '┼', '┤'));
                    for row in &cells {
                        result.push_str(&line(row, &widths));
                    }
                }
                result.push_str(&border(&widths, '└', '┴', '┘'));

                if rows.is_empty() {
                    result.push_str("\nNo rows found");
                } else {
                    result.push_str(&format!("\n{} row(s) returned", rows.len()));
                }

                result
            }
        }
    }
}

fn border(widths: &[usize], left: char, middle: char, right: char) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{}{}{}\n", left, segments.join(&middle.to_string()), right)
}

fn line(cells: &[String], widths: &[usize]) -> String {
    let mut out = String::from("│");
    for (cell, width) in cells.iter().zip(widths) {
        out.push_str(&format!(" {:<width$} │", cell, width = width));
    }
    out.push('\n');
    out
}
