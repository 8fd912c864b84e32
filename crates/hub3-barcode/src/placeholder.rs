//! # Error Placeholder
//!
//! Grey 300×100 SVG shown where the barcode would have been.

use crate::image::BarcodeImage;

/// Text shown inside the placeholder.
pub const PLACEHOLDER_TEXT: &str = "Barcode generation error";

/// Builds the placeholder image.
pub fn error_placeholder() -> BarcodeImage {
    let svg = format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="300" height="100" viewBox="0 0 300 100">"#,
            r##"<rect width="100%" height="100%" fill="#f5f5f5"/>"##,
            r##"<text x="150" y="50" text-anchor="middle" fill="#999" font-family="sans-serif" font-size="14">"##,
            "{}",
            "</text>",
            "</svg>",
        ),
        PLACEHOLDER_TEXT
    );
    BarcodeImage::svg(svg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageFormat;

    #[test]
    fn test_placeholder_is_svg_with_message() {
        let image = error_placeholder();
        assert_eq!(image.format(), ImageFormat::Svg);

        let markup = String::from_utf8(image.into_bytes()).unwrap();
        assert!(markup.starts_with("<svg "));
        assert!(markup.ends_with("</svg>"));
        assert!(markup.contains(PLACEHOLDER_TEXT));
        assert!(markup.contains(r#"width="300" height="100""#));
    }
}
