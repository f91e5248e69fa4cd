mod display;
mod html;
mod presenter;
mod transform;

pub use display::{DisplaySettings, WidenGuard};
pub use html::{HtmlOptions, render_table};
pub use presenter::Presenter;
pub use transform::{SparklineColumn, attach, attach_copy};
