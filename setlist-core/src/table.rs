//! Column-oriented tabular output
//!
//! Results are gathered column by column, as name to value sequence, and
//! written out row by row as delimited text. All columns must have the same
//! length so that values align by row index.

use crate::error::TableError;
use std::io::Write;

/// A table of named, equal-length string columns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    columns: Vec<(String, Vec<String>)>,
}

impl Table {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column; fails if its length differs from existing columns
    pub fn push_column<I, V>(&mut self, name: impl Into<String>, values: I) -> Result<(), TableError>
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let name = name.into();
        if self.columns.iter().any(|(existing, _)| *existing == name) {
            return Err(TableError::DuplicateColumn(name));
        }

        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if let Some(expected) = self.row_count() {
            if values.len() != expected {
                return Err(TableError::MisalignedColumn {
                    column: name,
                    expected,
                    actual: values.len(),
                });
            }
        }

        self.columns.push((name, values));
        Ok(())
    }

    /// Number of rows, or `None` for a table without columns
    pub fn row_count(&self) -> Option<usize> {
        self.columns.first().map(|(_, values)| values.len())
    }

    /// Column names in insertion order
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    /// Write a header row followed by one row per index
    pub fn write_delimited<W: Write>(&self, writer: &mut W, delimiter: char) -> Result<(), TableError> {
        if self.columns.is_empty() {
            return Ok(());
        }

        let header: Vec<&str> = self.column_names().collect();
        write_row(writer, &header, delimiter)?;

        for row in 0..self.row_count().unwrap_or(0) {
            let fields: Vec<&str> = self
                .columns
                .iter()
                .map(|(_, values)| values[row].as_str())
                .collect();
            write_row(writer, &fields, delimiter)?;
        }

        writer.flush()?;
        Ok(())
    }
}

fn write_row<W: Write>(writer: &mut W, fields: &[&str], delimiter: char) -> std::io::Result<()> {
    let mut line = String::new();
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            line.push(delimiter);
        }
        line.push_str(&quote(field, delimiter));
    }
    writeln!(writer, "{line}")
}

/// Quote a field if it contains the delimiter, a quote, or a line break
fn quote(field: &str, delimiter: char) -> String {
    if field.contains(|c: char| c == delimiter || matches!(c, '"' | '\n' | '\r')) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
