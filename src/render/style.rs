use serde::{Deserialize, Serialize};

use crate::error::{SparkError, SparkResult};

/// RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    /// Default series-line blue of common plotting stacks.
    pub const LINE_BLUE: Self = Self::rgb(31, 119, 180);
}

/// Marker glyph drawn on the terminal point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MarkerShape {
    #[default]
    Dot,
    Cross,
    Triangle,
}

/// Output raster dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelSize {
    pub width: u32,
    pub height: u32,
}

impl PixelSize {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

impl Default for PixelSize {
    /// 4 x 0.25 inches at 100 dpi.
    fn default() -> Self {
        Self::new(400, 25)
    }
}

/// Style contract for one sparkline render.
///
/// Every field has an independent default; the defaults produce a blue line
/// with a light blue fill down to the sequence minimum and a red dot on the
/// rightmost point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparklineStyle {
    /// Draw a marker on the last (rightmost) point. Other marker locations
    /// are unsupported.
    pub point: bool,
    /// Marker edge color.
    pub point_color: Color,
    /// Marker fill color.
    pub point_fill: Color,
    pub point_marker: MarkerShape,
    /// Marker radius in pixels.
    pub point_size: u32,
    pub point_alpha: f64,
    /// Shade the area between the line and the sequence minimum.
    pub fill: bool,
    pub fill_color: Color,
    pub fill_alpha: f64,
    pub line_color: Color,
    /// Line stroke width in pixels.
    pub line_width: u32,
    pub background: Color,
    pub size: PixelSize,
}

impl Default for SparklineStyle {
    fn default() -> Self {
        Self {
            point: true,
            point_color: Color::RED,
            point_fill: Color::RED,
            point_marker: MarkerShape::Dot,
            point_size: 3,
            point_alpha: 1.0,
            fill: true,
            fill_color: Color::BLUE,
            fill_alpha: 0.1,
            line_color: Color::LINE_BLUE,
            line_width: 1,
            background: Color::WHITE,
            size: PixelSize::default(),
        }
    }
}

impl SparklineStyle {
    pub fn validate(&self) -> SparkResult<()> {
        if !self.size.is_valid() {
            return Err(SparkError::InvalidStyle(format!(
                "size must be non-zero, got {}x{}",
                self.size.width, self.size.height
            )));
        }
        for (field, value) in [
            ("point_alpha", self.point_alpha),
            ("fill_alpha", self.fill_alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(SparkError::InvalidStyle(format!(
                    "`{field}` must be finite and in [0, 1], got {value}"
                )));
            }
        }
        Ok(())
    }
}
