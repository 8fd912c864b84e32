//! # Encoder Contract
//!
//! [`crate::pdf417::Pdf417Encoder`] is the stock encoder; anything that
//! implements [`BarcodeEncoder`] can be plugged in instead.
//!
//! ## Render Flow
//! ```text
//! render(encoder, text, options)
//!      │
//!      ├── encoder.encode(text) ── Ok(image) ──► image
//!      │
//!      └── Err(e) ──► warn!(error) ──► error_placeholder()
//! ```

use tracing::{debug, warn};

use hub3_core::Hub3Record;

use crate::error::{BarcodeError, BarcodeResult};
use crate::image::{BarcodeImage, ImageFormat};
use crate::placeholder::error_placeholder;

/// Symbol geometry and output format requested from the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    pub format: ImageFormat,
    /// Width of one module in output units.
    pub module_width: u32,
    /// Height of one matrix cell in output units. A PDF417 row spans
    /// several cells.
    pub module_height: u32,
    /// Quiet zone around the symbol, in module widths.
    pub quiet_zone: u32,
}

impl EncodeOptions {
    /// Web pages: vector output, 4× modules.
    pub fn svg() -> Self {
        EncodeOptions {
            format: ImageFormat::Svg,
            module_width: 4,
            module_height: 4,
            quiet_zone: 2,
        }
    }

    /// E-mail: raster output, 3× modules.
    pub fn png() -> Self {
        EncodeOptions {
            format: ImageFormat::Png,
            module_width: 3,
            module_height: 3,
            quiet_zone: 2,
        }
    }
}

impl EncodeOptions {
    /// Rejects geometry that cannot be drawn.
    pub fn check(&self) -> BarcodeResult<()> {
        if self.module_width == 0 || self.module_height == 0 {
            return Err(BarcodeError::Encoding(format!(
                "module size must be positive, got {}x{}",
                self.module_width, self.module_height
            )));
        }
        Ok(())
    }
}

impl Default for EncodeOptions {
    fn default() -> Self {
        EncodeOptions::svg()
    }
}

/// A 2D symbol encoder.
///
/// Implementations receive the exact HUB3 text (UTF-8, `\n`-separated) and
/// must encode that byte sequence unmodified, or fail.
pub trait BarcodeEncoder {
    fn encode(&self, text: &str, options: &EncodeOptions) -> BarcodeResult<BarcodeImage>;
}

/// Encodes `text`, substituting the placeholder image on failure.
pub fn render<E: BarcodeEncoder + ?Sized>(
    encoder: &E,
    text: &str,
    options: &EncodeOptions,
) -> BarcodeImage {
    match encoder.encode(text, options) {
        Ok(image) => {
            debug!(
                format = %image.format(),
                bytes = image.bytes().len(),
                "Barcode encoded"
            );
            image
        }
        Err(e) => {
            warn!(
                error = %e,
                text_len = text.len(),
                "Barcode generation failed, using placeholder"
            );
            error_placeholder()
        }
    }
}

/// Encodes a finished record. Never fails; see [`render`].
pub fn render_record<E: BarcodeEncoder + ?Sized>(
    encoder: &E,
    record: &Hub3Record,
    options: &EncodeOptions,
) -> BarcodeImage {
    render(encoder, &record.to_text(), options)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placeholder::PLACEHOLDER_TEXT;
    use hub3_core::{build_record, OrderFacts, RecipientConfig};
    use std::cell::RefCell;

    /// Records what it was asked to encode and returns it inside an SVG.
    #[derive(Default)]
    struct CapturingEncoder {
        seen: RefCell<Vec<String>>,
    }

    impl BarcodeEncoder for CapturingEncoder {
        fn encode(&self, text: &str, options: &EncodeOptions) -> BarcodeResult<BarcodeImage> {
            if options.format != ImageFormat::Svg {
                return Err(BarcodeError::UnsupportedFormat(options.format));
            }
            self.seen.borrow_mut().push(text.to_string());
            Ok(BarcodeImage::svg(format!("<svg><desc>{}</desc></svg>", text.len())))
        }
    }

    /// Rejects anything over a fixed byte capacity.
    struct CapacityEncoder(usize);

    impl BarcodeEncoder for CapacityEncoder {
        fn encode(&self, text: &str, _options: &EncodeOptions) -> BarcodeResult<BarcodeImage> {
            if text.len() > self.0 {
                return Err(BarcodeError::Encoding(format!(
                    "{} bytes exceed capacity of {}",
                    text.len(),
                    self.0
                )));
            }
            Ok(BarcodeImage::png(text.as_bytes().to_vec()))
        }
    }

    fn placeholder_text(image: BarcodeImage) -> String {
        String::from_utf8(image.into_bytes()).unwrap()
    }

    #[test]
    fn test_render_passes_text_through() {
        let encoder = CapturingEncoder::default();
        let image = render(&encoder, "HRVHUB30\nEUR", &EncodeOptions::svg());

        assert_eq!(image.format(), ImageFormat::Svg);
        assert_eq!(encoder.seen.borrow().as_slice(), ["HRVHUB30\nEUR".to_string()]);
    }

    #[test]
    fn test_render_falls_back_on_encoding_error() {
        let image = render(&CapacityEncoder(4), "HRVHUB30", &EncodeOptions::png());
        assert_eq!(image.format(), ImageFormat::Svg);
        assert!(placeholder_text(image).contains(PLACEHOLDER_TEXT));
    }

    #[test]
    fn test_render_falls_back_on_unsupported_format() {
        let encoder = CapturingEncoder::default();
        let image = render(&encoder, "HRVHUB30", &EncodeOptions::png());
        assert!(placeholder_text(image).contains(PLACEHOLDER_TEXT));
        assert!(encoder.seen.borrow().is_empty());
    }

    #[test]
    fn test_render_record_encodes_exact_wire_text() {
        let config = RecipientConfig::preview();
        let date = hub3_core::reference::parse_order_date("2026-01-31").unwrap();
        let facts = OrderFacts::preview(date);
        let record = build_record(&config, &facts).unwrap();

        let encoder = CapturingEncoder::default();
        render_record(&encoder, &record, &EncodeOptions::default());

        let seen = encoder.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0], record.to_text());
        assert!(!seen[0].ends_with('\n'));
    }

    #[test]
    fn test_check_rejects_zero_module_size() {
        assert!(EncodeOptions::svg().check().is_ok());
        let flat = EncodeOptions {
            module_height: 0,
            ..EncodeOptions::png()
        };
        assert!(matches!(flat.check(), Err(BarcodeError::Encoding(_))));
    }

    #[test]
    fn test_png_within_capacity() {
        let image = render(&CapacityEncoder(64), "HRVHUB30", &EncodeOptions::png());
        assert_eq!(image.format(), ImageFormat::Png);
        assert_eq!(image.bytes(), b"HRVHUB30");
    }
}
