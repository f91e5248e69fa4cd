//! sparktable: inline sparkline images for HTML tables.
//!
//! Rasterizes short numeric sequences into compact line-and-fill charts,
//! embeds each chart as a base64 `data:` URI inside an `<img>` tag, and
//! attaches the markup as a table column ready for any HTML-rendering
//! surface or a standalone file export.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{
    DisplaySettings, HtmlOptions, Presenter, SparklineColumn, WidenGuard, attach, attach_copy,
    render_table,
};
pub use core::{Cell, Table};
pub use error::{SparkError, SparkResult};
pub use render::{Color, MarkerShape, PixelSize, SparklineStyle, render_sparkline};
