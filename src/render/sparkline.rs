use plotters::prelude::{
    AreaSeries, BitMapBackend, ChartBuilder, Circle, Color as _, Cross, IntoDrawingArea,
    LineSeries, RGBColor, TriangleMarker,
};
use tracing::trace;

use crate::error::{SparkError, SparkResult};
use crate::render::encode;
use crate::render::style::{Color, MarkerShape, SparklineStyle};

/// Renders one numeric sequence as an inline sparkline image.
///
/// The sequence is drawn as a connected line over `x = 0..len-1` with the
/// area down to the sequence's own minimum shaded; when point-marking is
/// enabled the last element is redrawn with distinct marker styling at the
/// rightmost position. Axis labels, ticks, meshes, and borders are all
/// suppressed and margins are pinned to near-zero.
///
/// Returns an `<img>` tag whose `src` is a base64 `data:image/png` URI, so
/// the result embeds into any HTML surface without external files. Each call
/// draws into its own pixel buffer; no plotting state survives the call.
pub fn render_sparkline(data: &[f64], style: &SparklineStyle) -> SparkResult<String> {
    if data.is_empty() {
        return Err(SparkError::EmptySequence);
    }
    if let Some(index) = data.iter().position(|value| !value.is_finite()) {
        return Err(SparkError::NonFiniteValue { index });
    }
    style.validate()?;

    let png = rasterize(data, style)?;
    trace!(points = data.len(), png_bytes = png.len(), "rendered sparkline");
    Ok(encode::inline_image_tag(&png))
}

fn rasterize(data: &[f64], style: &SparklineStyle) -> SparkResult<Vec<u8>> {
    let (width, height) = (style.size.width, style.size.height);
    let mut pixels = vec![0u8; width as usize * height as usize * 3];

    {
        let root = BitMapBackend::with_buffer(&mut pixels, (width, height)).into_drawing_area();
        root.fill(&rgb(style.background)).map_err(backend_err)?;

        let minimum = data.iter().copied().fold(f64::INFINITY, f64::min);
        let maximum = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        // Flat sequences still need a drawable value span.
        let pad = if maximum > minimum {
            (maximum - minimum) * 0.05
        } else {
            0.5
        };
        let x_max = if data.len() > 1 {
            (data.len() - 1) as f64
        } else {
            1.0
        };
        // Keep the terminal marker inside the raster instead of clipping it
        // at the right edge.
        let right_margin: i32 = if style.point {
            style.point_size as i32 + 1
        } else {
            1
        };

        let mut chart = ChartBuilder::on(&root)
            .margin(1)
            .margin_right(right_margin)
            .build_cartesian_2d(0.0..x_max, (minimum - pad)..(maximum + pad))
            .map_err(backend_err)?;

        let line = data.iter().enumerate().map(|(i, &value)| (i as f64, value));

        if style.fill {
            chart
                .draw_series(AreaSeries::new(
                    line.clone(),
                    minimum,
                    rgb(style.fill_color).mix(style.fill_alpha),
                ))
                .map_err(backend_err)?;
        }
        chart
            .draw_series(LineSeries::new(
                line,
                rgb(style.line_color).stroke_width(style.line_width),
            ))
            .map_err(backend_err)?;

        if style.point {
            let last = ((data.len() - 1) as f64, data[data.len() - 1]);
            let size = style.point_size as i32;
            let fill = rgb(style.point_fill).mix(style.point_alpha).filled();
            let edge = rgb(style.point_color)
                .mix(style.point_alpha)
                .stroke_width(1);
            // Filled glyph first, then the edge stroked on top of it.
            for marker in [fill, edge] {
                match style.point_marker {
                    MarkerShape::Dot => {
                        chart
                            .draw_series(std::iter::once(Circle::new(last, size, marker)))
                            .map_err(backend_err)?;
                    }
                    MarkerShape::Cross => {
                        chart
                            .draw_series(std::iter::once(Cross::new(last, size, marker)))
                            .map_err(backend_err)?;
                    }
                    MarkerShape::Triangle => {
                        chart
                            .draw_series(std::iter::once(TriangleMarker::new(last, size, marker)))
                            .map_err(backend_err)?;
                    }
                }
            }
        }

        root.present().map_err(backend_err)?;
    }

    encode::png_from_rgb(&pixels, width, height)
}

fn rgb(color: Color) -> RGBColor {
    RGBColor(color.red, color.green, color.blue)
}

fn backend_err<E: std::error::Error>(err: E) -> SparkError {
    SparkError::Backend(err.to_string())
}
