use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::api::display::{DisplaySettings, WidenGuard};
use crate::api::html::{self, HtmlOptions};
use crate::core::Table;
use crate::error::{SparkError, SparkResult};

/// Inline stylesheet for exported documents: collapsed borders, plain cells,
/// shaded header row.
const TABLE_CSS: &str = "\
body { margin: 0; font-family: Helvetica; }
table.dataframe { border-collapse: collapse; border: none; }
table.dataframe tr { border: none; }
table.dataframe td, table.dataframe th { margin: 0; border: 1px solid #000000; padding-left: 0.25em; padding-right: 0.25em; }
table.dataframe th:not(:empty) { background-color: #f2f2f2; text-align: left; font-weight: bold; }
table.dataframe td { border: 1px solid #bababa; background-color: #ffffff; }
";

/// Emits tables with embedded sparkline markup.
///
/// The presenter owns its [`DisplaySettings`], so the widen/restore bracket
/// around each presentation is an ordinary scoped borrow rather than a
/// process-wide side effect.
#[derive(Debug, Default)]
pub struct Presenter {
    settings: DisplaySettings,
}

impl Presenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_settings(settings: DisplaySettings) -> Self {
        Self { settings }
    }

    /// Current display limits.
    #[must_use]
    pub fn settings(&self) -> DisplaySettings {
        self.settings
    }

    /// Renders the table as an HTML fragment for an interactive surface.
    ///
    /// Markup cells are left un-escaped so embedded `<img>` tags render as
    /// images, and row index labels are omitted. The display limits are
    /// widened for the duration of serialization and restored afterwards.
    #[must_use]
    pub fn show(&mut self, table: &Table) -> String {
        self.show_with(table, false)
    }

    /// [`Presenter::show`] with explicit control over row index labels.
    #[must_use]
    pub fn show_with(&mut self, table: &Table, index: bool) -> String {
        let widened = WidenGuard::new(&mut self.settings);
        let fragment = html::render_table(
            table,
            &widened,
            &HtmlOptions {
                index,
                escape: false,
            },
        );
        debug!(
            rows = table.row_count(),
            columns = table.column_count(),
            "rendered display fragment"
        );
        fragment
    }

    /// Writes the table to `<path>.html` as a standalone document.
    ///
    /// The `.html` suffix is appended to the caller-supplied path; the path
    /// actually written is returned. The display limits are widened around
    /// serialization and restored even when the write fails.
    pub fn export(&mut self, table: &Table, path: impl AsRef<Path>) -> SparkResult<PathBuf> {
        let fragment = {
            let widened = WidenGuard::new(&mut self.settings);
            html::render_table(
                table,
                &widened,
                &HtmlOptions {
                    index: true,
                    escape: false,
                },
            )
        };

        let mut file = path.as_ref().as_os_str().to_owned();
        file.push(".html");
        let file = PathBuf::from(file);

        let document = format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<style>\n{TABLE_CSS}</style>\n</head>\n<body>\n{fragment}\n</body>\n</html>\n"
        );
        fs::write(&file, document).map_err(|source| SparkError::Io {
            path: file.clone(),
            source,
        })?;

        info!(
            path = %file.display(),
            rows = table.row_count(),
            "exported sparkline table"
        );
        Ok(file)
    }
}
