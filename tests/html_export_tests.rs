use std::fs;

use sparktable::{
    Cell, DisplaySettings, PixelSize, Presenter, SparkError, SparklineColumn, SparklineStyle,
    Table, attach,
};
use tempfile::tempdir;

fn exported_table() -> Table {
    let mut table = Table::from_columns([
        (
            "id",
            vec![Cell::from(1i64), Cell::from(2i64), Cell::from(3i64)],
        ),
        (
            "trend",
            vec![
                Cell::from(vec![1.0, 2.0, 3.0]),
                Cell::from(vec![3.0, 2.0, 1.0]),
                Cell::from(vec![2.0, 4.0, 2.0]),
            ],
        ),
    ])
    .expect("table");

    let column = SparklineColumn::new("trend").with_style(SparklineStyle {
        size: PixelSize::new(60, 16),
        ..SparklineStyle::default()
    });
    attach(&mut table, &column).expect("attach");
    table
}

#[test]
fn export_appends_html_suffix_and_writes_document() {
    let dir = tempdir().expect("tempdir");
    let base = dir.path().join("report");
    let mut presenter = Presenter::new();

    let written = presenter.export(&exported_table(), &base).expect("export");

    assert_eq!(written, dir.path().join("report.html"));
    let contents = fs::read_to_string(&written).expect("read back");
    assert!(contents.starts_with("<!DOCTYPE html>"));
    assert!(contents.contains("<style>"));
    assert!(contents.contains("table.dataframe"));
    assert!(contents.trim_end().ends_with("</html>"));
}

#[test]
fn export_round_trips_row_and_column_counts() {
    let dir = tempdir().expect("tempdir");
    let table = exported_table();
    let mut presenter = Presenter::new();

    let written = presenter.export(&table, dir.path().join("out")).expect("export");
    let contents = fs::read_to_string(written).expect("read back");

    let rows = table.row_count();
    let columns = table.column_count();
    assert_eq!(contents.matches("<tr>").count(), rows + 1);
    // Header th cells (index blank + one per column) plus one index th per row.
    assert_eq!(contents.matches("<th>").count(), columns + 1 + rows);
    assert_eq!(contents.matches("<td>").count(), rows * columns);
}

#[test]
fn export_contains_inline_images() {
    let dir = tempdir().expect("tempdir");
    let mut presenter = Presenter::new();
    let written = presenter
        .export(&exported_table(), dir.path().join("charts"))
        .expect("export");
    let contents = fs::read_to_string(written).expect("read back");
    assert!(contents.contains("<img src=\"data:image/png;base64,"));
}

#[test]
fn export_restores_settings() {
    let dir = tempdir().expect("tempdir");
    let custom = DisplaySettings {
        max_col_width: Some(9),
        max_seq_items: Some(4),
    };
    let mut presenter = Presenter::with_settings(custom);
    presenter
        .export(&exported_table(), dir.path().join("settings"))
        .expect("export");
    assert_eq!(presenter.settings(), custom);
}

#[test]
fn unwritable_path_is_reported_as_io_error_and_settings_survive() {
    let dir = tempdir().expect("tempdir");
    let missing = dir.path().join("missing-subdir").join("report");
    let mut presenter = Presenter::new();

    let err = presenter
        .export(&exported_table(), &missing)
        .expect_err("must fail");

    assert!(matches!(
        &err,
        SparkError::Io { path, .. } if path.extension().is_some_and(|ext| ext == "html")
    ));
    assert_eq!(presenter.settings(), DisplaySettings::default());
}

#[test]
fn zero_row_export_writes_header_only_table() {
    let dir = tempdir().expect("tempdir");
    let table = Table::from_columns([("id", Vec::new()), ("sparklines", Vec::new())]).expect("table");
    let mut presenter = Presenter::new();

    let written = presenter.export(&table, dir.path().join("empty")).expect("export");
    let contents = fs::read_to_string(written).expect("read back");

    assert_eq!(contents.matches("<tr>").count(), 1);
    assert_eq!(contents.matches("<td>").count(), 0);
    assert_eq!(presenter.settings(), DisplaySettings::default());
}
