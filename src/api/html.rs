use std::fmt::Write as _;

use crate::api::display::DisplaySettings;
use crate::core::{Cell, Table};

/// Serialization switches for one HTML table render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Emit row index labels in a leading header column.
    pub index: bool,
    /// Entity-escape cell text; disable so markup cells render as images.
    pub escape: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            index: true,
            escape: true,
        }
    }
}

/// Renders a table as an HTML fragment honoring the display limits.
///
/// Structure and class names follow the familiar dataframe layout:
/// `<table class="dataframe">` with a `<thead>` header row and one `<tbody>`
/// row per table row.
#[must_use]
pub fn render_table(table: &Table, settings: &DisplaySettings, options: &HtmlOptions) -> String {
    let mut html = String::new();
    html.push_str("<table class=\"dataframe\">\n<thead>\n<tr>");
    if options.index {
        html.push_str("<th></th>");
    }
    for name in table.column_names() {
        html.push_str("<th>");
        html.push_str(&escape_text(name));
        html.push_str("</th>");
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");

    for row in 0..table.row_count() {
        html.push_str("<tr>");
        if options.index {
            let _ = write!(html, "<th>{row}</th>");
        }
        for cell in table.row(row).unwrap_or_default() {
            html.push_str("<td>");
            html.push_str(&render_cell(cell, settings, options));
            html.push_str("</td>");
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody>\n</table>");
    html
}

/// Formats one cell, applying the truncation/elision limits.
///
/// Markup cells bypass clipping and escaping when `escape` is off; with
/// `escape` on they are treated as ordinary text.
fn render_cell(cell: &Cell, settings: &DisplaySettings, options: &HtmlOptions) -> String {
    let text = match cell {
        Cell::Int(value) => value.to_string(),
        Cell::Float(value) => value.to_string(),
        Cell::Text(text) => clip(text, settings.max_col_width),
        Cell::Series(values) => format_series(values, settings.max_seq_items),
        Cell::Html(markup) => {
            if options.escape {
                clip(markup, settings.max_col_width)
            } else {
                return markup.clone();
            }
        }
    };
    if options.escape {
        escape_text(&text)
    } else {
        text
    }
}

fn format_series(values: &[f64], limit: Option<usize>) -> String {
    let shown = limit.unwrap_or(values.len()).min(values.len());
    let mut parts: Vec<String> = values[..shown].iter().map(ToString::to_string).collect();
    if shown < values.len() {
        parts.push("...".to_owned());
    }
    format!("[{}]", parts.join(", "))
}

fn clip(text: &str, limit: Option<usize>) -> String {
    match limit {
        Some(max) if text.chars().count() > max => {
            let mut out: String = text.chars().take(max.saturating_sub(3)).collect();
            out.push_str("...");
            out
        }
        _ => text.to_owned(),
    }
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
