use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{SparkError, SparkResult};

/// One table cell value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    Int(i64),
    Float(f64),
    Text(String),
    /// Numeric sequence plotted by the sparkline renderer.
    Series(Vec<f64>),
    /// Raw markup emitted verbatim when escaping is disabled.
    Html(String),
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<f64>> for Cell {
    fn from(value: Vec<f64>) -> Self {
        Self::Series(value)
    }
}

/// In-memory table of named columns and ordered rows.
///
/// Columns keep insertion order and every column holds exactly one cell per
/// row; transformations preserve row order and row count.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: IndexMap<String, Vec<Cell>>,
}

impl Table {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `(name, cells)` pairs.
    pub fn from_columns<N, I>(columns: I) -> SparkResult<Self>
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Vec<Cell>)>,
    {
        let mut table = Self::new();
        for (name, cells) in columns {
            table.insert_column(name, cells)?;
        }
        Ok(table)
    }

    /// Adds or overwrites one column.
    ///
    /// The first inserted column fixes the row count; every later column must
    /// match it.
    pub fn insert_column(&mut self, name: impl Into<String>, cells: Vec<Cell>) -> SparkResult<()> {
        if !self.columns.is_empty() {
            let expected = self.row_count();
            if cells.len() != expected {
                return Err(SparkError::ColumnLengthMismatch {
                    expected,
                    actual: cells.len(),
                });
            }
        }
        self.columns.insert(name.into(), cells);
        Ok(())
    }

    #[must_use]
    pub fn column(&self, name: &str) -> Option<&[Cell]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |(_, cells)| cells.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    /// Cells of one row in column order, `None` when out of range.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<Vec<&Cell>> {
        if row >= self.row_count() {
            return None;
        }
        Some(self.columns.values().map(|cells| &cells[row]).collect())
    }

    /// Serializes the table as JSON, mostly for snapshots and debugging.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
