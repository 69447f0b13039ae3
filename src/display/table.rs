use std::io::Write;

use crate::error::MetricsError;
use crate::metrics::{Snapshot, SnapshotSink};

use super::Column;

pub const FIELD_WIDTH: usize = 14;

/// Column names, then a dash rule as long as each name.
#[must_use]
pub fn render_header(columns: &[Column]) -> String {
    let names: Vec<String> = columns.iter().map(ToString::to_string).collect();
    let mut out = render_line(names.iter().map(String::as_str));
    let rules: Vec<String> = names.iter().map(|name| "-".repeat(name.chars().count())).collect();
    out.push_str(&render_line(rules.iter().map(String::as_str)));
    out
}

#[must_use]
pub fn render_row(columns: &[Column], snapshot: &Snapshot) -> String {
    let cells: Vec<String> = columns.iter().map(|column| column.value(snapshot)).collect();
    render_line(cells.iter().map(String::as_str))
}

fn render_line<'cell, I>(cells: I) -> String
where
    I: Iterator<Item = &'cell str>,
{
    let mut line: String = cells
        .map(|cell| format!("{:<width$} ", cell, width = FIELD_WIDTH))
        .collect();
    line.push('\n');
    line
}

/// Appends one row per snapshot to `writer`.
#[derive(Debug)]
pub struct TableDisplay<W> {
    writer: W,
    columns: Vec<Column>,
}

impl<W: Write> TableDisplay<W> {
    #[must_use]
    pub fn new(writer: W, columns: &[Column]) -> Self {
        Self {
            writer,
            columns: columns.to_vec(),
        }
    }

    /// Print the header and separator rule.
    ///
    /// # Errors
    ///
    /// Returns an error when the writer fails.
    pub fn print_header(&mut self) -> Result<(), MetricsError> {
        let header = render_header(&self.columns);
        self.write_all(&header)
    }

    /// Print one data row.
    ///
    /// # Errors
    ///
    /// Returns an error when the writer fails.
    pub fn print_row(&mut self, snapshot: &Snapshot) -> Result<(), MetricsError> {
        let row = render_row(&self.columns, snapshot);
        self.write_all(&row)
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_all(&mut self, text: &str) -> Result<(), MetricsError> {
        self.writer
            .write_all(text.as_bytes())
            .and_then(|()| self.writer.flush())
            .map_err(|err| MetricsError::Report { source: err })
    }
}

impl<W: Write + Send> SnapshotSink for TableDisplay<W> {
    fn publish(&mut self, snapshot: &Snapshot) -> Result<(), MetricsError> {
        self.print_row(snapshot)
    }
}
