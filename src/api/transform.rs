use tracing::debug;

use crate::core::{Cell, Table};
use crate::error::{SparkError, SparkResult};
use crate::render::{SparklineStyle, render_sparkline};

/// Request to attach one sparkline column.
#[derive(Debug, Clone)]
pub struct SparklineColumn {
    /// Column holding the numeric sequences to plot.
    pub source: String,
    /// Column receiving the rendered image markup.
    pub target: String,
    pub style: SparklineStyle,
}

impl SparklineColumn {
    /// Targets the default `"sparklines"` column with default styling.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: "sparklines".to_owned(),
            style: SparklineStyle::default(),
        }
    }

    #[must_use]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: SparklineStyle) -> Self {
        self.style = style;
        self
    }
}

/// Renders the source column and adds/overwrites the target column in place.
///
/// Rows are rendered independently and in order; row order and row count are
/// unchanged. Every row is rendered before the table is touched, so a failing
/// row leaves the table exactly as it was.
pub fn attach(table: &mut Table, column: &SparklineColumn) -> SparkResult<()> {
    let rendered = render_column(table, column)?;
    table.insert_column(column.target.clone(), rendered)?;
    debug!(
        source = %column.source,
        target = %column.target,
        rows = table.row_count(),
        "attached sparkline column"
    );
    Ok(())
}

/// Renders the source column into a new table, leaving the input untouched.
///
/// The result holds the `keep` columns in the requested order plus the target
/// column appended, or left in place when `keep` already names it. An empty
/// `keep` yields a table containing only the sparkline column.
pub fn attach_copy(table: &Table, column: &SparklineColumn, keep: &[&str]) -> SparkResult<Table> {
    let rendered = render_column(table, column)?;

    let mut out = Table::new();
    for &name in keep {
        if name == column.target {
            out.insert_column(name, rendered.clone())?;
        } else {
            let cells = table
                .column(name)
                .ok_or_else(|| SparkError::UnknownColumn(name.to_owned()))?;
            out.insert_column(name, cells.to_vec())?;
        }
    }
    if !out.has_column(&column.target) {
        out.insert_column(column.target.clone(), rendered)?;
    }
    debug!(
        source = %column.source,
        target = %column.target,
        columns = out.column_count(),
        "copied table with sparkline column"
    );
    Ok(out)
}

fn render_column(table: &Table, column: &SparklineColumn) -> SparkResult<Vec<Cell>> {
    let cells = table
        .column(&column.source)
        .ok_or_else(|| SparkError::UnknownColumn(column.source.clone()))?;

    cells
        .iter()
        .enumerate()
        .map(|(row, cell)| match cell {
            Cell::Series(values) => render_sparkline(values, &column.style).map(Cell::Html),
            _ => Err(SparkError::NotASequence {
                column: column.source.clone(),
                row,
            }),
        })
        .collect()
}
