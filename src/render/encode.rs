use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::error::SparkResult;

/// Encodes a raw RGB8 pixel buffer as PNG bytes.
pub(crate) fn png_from_rgb(pixels: &[u8], width: u32, height: u32) -> SparkResult<Vec<u8>> {
    let mut png = Vec::new();
    PngEncoder::new(&mut png).write_image(pixels, width, height, ExtendedColorType::Rgb8)?;
    Ok(png)
}

/// Wraps PNG bytes as a self-contained inline `<img>` tag with a `data:` URI.
#[must_use]
pub(crate) fn inline_image_tag(png: &[u8]) -> String {
    format!(
        r#"<img src="data:image/png;base64,{}"/>"#,
        STANDARD.encode(png)
    )
}
