mod encode;
mod sparkline;
mod style;

pub use sparkline::render_sparkline;
pub use style::{Color, MarkerShape, PixelSize, SparklineStyle};
