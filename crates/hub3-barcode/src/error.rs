//! # Barcode Error Types

use thiserror::Error;

use crate::image::ImageFormat;

/// Result type alias for encoder operations.
pub type BarcodeResult<T> = Result<T, BarcodeError>;

/// Encoder failures.
///
/// These never reach the HUB3 record: the renderer swaps in a placeholder
/// image and logs the error.
#[derive(Debug, Error)]
pub enum BarcodeError {
    /// The encoder could not represent the input (e.g. symbol capacity
    /// exceeded, unencodable bytes).
    #[error("Barcode encoding failed: {0}")]
    Encoding(String),

    /// The encoder does not produce the requested output format.
    #[error("Unsupported barcode image format: {0}")]
    UnsupportedFormat(ImageFormat),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = BarcodeError::Encoding("too many codewords".to_string());
        assert_eq!(err.to_string(), "Barcode encoding failed: too many codewords");

        let err = BarcodeError::UnsupportedFormat(ImageFormat::Png);
        assert_eq!(err.to_string(), "Unsupported barcode image format: png");
    }
}
