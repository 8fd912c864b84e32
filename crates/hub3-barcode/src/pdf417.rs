//! # PDF417 Encoder
//!
//! The stock [`BarcodeEncoder`]: rxing builds the PDF417 module matrix, and
//! [`ModuleMatrix`] draws it.
//!
//! ## Encoding Flow
//! ```text
//! HUB3 text ──► rxing PDF417Writer (UTF-8, ECI) ──► BitMatrix
//!                                                     │
//!                                     crop to dark bounds
//!                                                     │
//!                                    ModuleMatrix ────┴──► SVG │ PNG
//! ```
//!
//! The text goes in as UTF-8 so Croatian letters (č, ć, đ, š, ž) survive
//! unchanged. Symbols are capped at 928 codewords; longer input is an
//! [`BarcodeError::Encoding`].

use std::collections::HashMap;

use rxing::pdf417::PDF417Writer;
use rxing::{BarcodeFormat, EncodeHintType, EncodeHintValue, Writer};
use tracing::debug;

use crate::encoder::{BarcodeEncoder, EncodeOptions};
use crate::error::{BarcodeError, BarcodeResult};
use crate::image::{BarcodeImage, ImageFormat};
use crate::matrix::ModuleMatrix;

/// Character set announced to readers via ECI.
const CHARACTER_SET: &str = "UTF-8";

/// PDF417 encoder backed by rxing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pdf417Encoder;

impl Pdf417Encoder {
    pub fn new() -> Self {
        Pdf417Encoder
    }

    /// Encodes `text` into a cropped module matrix.
    pub fn matrix(&self, text: &str) -> BarcodeResult<ModuleMatrix> {
        let mut hints = HashMap::new();
        hints.insert(
            EncodeHintType::CHARACTER_SET,
            EncodeHintValue::CharacterSet(CHARACTER_SET.to_string()),
        );

        // Zero width/height: no scaling, one cell per module
        let bits = PDF417Writer::default()
            .encode_with_hints(text, &BarcodeFormat::PDF_417, 0, 0, &hints)
            .map_err(|e| BarcodeError::Encoding(format!("{:?}", e)))?;

        let full = ModuleMatrix::from_fn(bits.getWidth(), bits.getHeight(), |x, y| {
            bits.get(x, y)
        });

        let matrix = full
            .crop_to_content()
            .ok_or_else(|| BarcodeError::Encoding("encoder produced an empty symbol".to_string()))?;

        debug!(
            width = matrix.width(),
            height = matrix.height(),
            text_len = text.len(),
            "PDF417 matrix built"
        );

        Ok(matrix)
    }
}

impl BarcodeEncoder for Pdf417Encoder {
    fn encode(&self, text: &str, options: &EncodeOptions) -> BarcodeResult<BarcodeImage> {
        options.check()?;
        let matrix = self.matrix(text)?;

        match options.format {
            ImageFormat::Svg => Ok(BarcodeImage::svg(matrix.to_svg(options))),
            ImageFormat::Png => Ok(BarcodeImage::png(matrix.to_png(options)?)),
        }
    }
}
