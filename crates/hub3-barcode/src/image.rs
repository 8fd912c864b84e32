//! # Barcode Images
//!
//! Encoded symbol bytes plus the format needed to embed them.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::fmt;

/// Output format of an encoded symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFormat {
    /// Vector output, preferred for web pages.
    #[default]
    Svg,
    /// Raster output, for e-mail clients that block SVG.
    Png,
}

impl ImageFormat {
    /// MIME type used in `data:` URIs.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Svg => "image/svg+xml",
            ImageFormat::Png => "image/png",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageFormat::Svg => write!(f, "svg"),
            ImageFormat::Png => write!(f, "png"),
        }
    }
}

/// An encoded barcode (or the placeholder standing in for one).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarcodeImage {
    format: ImageFormat,
    bytes: Vec<u8>,
}

impl BarcodeImage {
    pub fn new(format: ImageFormat, bytes: Vec<u8>) -> Self {
        BarcodeImage { format, bytes }
    }

    pub fn svg(markup: impl Into<String>) -> Self {
        BarcodeImage::new(ImageFormat::Svg, markup.into().into_bytes())
    }

    pub fn png(bytes: Vec<u8>) -> Self {
        BarcodeImage::new(ImageFormat::Png, bytes)
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Base64 `data:` URI suitable for an `<img src>` attribute.
    ///
    /// ## Example
    /// ```rust
    /// use hub3_barcode::BarcodeImage;
    ///
    /// let image = BarcodeImage::svg("<svg/>");
    /// assert_eq!(image.to_data_uri(), "data:image/svg+xml;base64,PHN2Zy8+");
    /// ```
    pub fn to_data_uri(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.format.mime_type(),
            STANDARD.encode(&self.bytes)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_uri_prefixes() {
        assert!(BarcodeImage::svg("<svg/>")
            .to_data_uri()
            .starts_with("data:image/svg+xml;base64,"));
        assert!(BarcodeImage::png(vec![0x89, b'P', b'N', b'G'])
            .to_data_uri()
            .starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_data_uri_round_trips_payload() {
        let image = BarcodeImage::png(vec![0, 1, 2, 250, 255]);
        let uri = image.to_data_uri();
        let payload = uri.split_once(',').map(|(_, b64)| b64).unwrap();
        assert_eq!(STANDARD.decode(payload).unwrap(), image.bytes());
    }

    #[test]
    fn test_accessors() {
        let image = BarcodeImage::svg("<svg/>");
        assert_eq!(image.format(), ImageFormat::Svg);
        assert_eq!(image.clone().into_bytes(), b"<svg/>".to_vec());
    }
}
