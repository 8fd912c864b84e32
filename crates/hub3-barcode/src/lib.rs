//! # hub3-barcode: PDF417 Rendering
//!
//! Turns a finished HUB3 record into a PDF417 barcode image.
//!
//! ## Modules
//!
//! - [`encoder`] - `BarcodeEncoder` trait, options, fallback rendering
//! - [`pdf417`] - the rxing-backed PDF417 encoder
//! - [`matrix`] - module grid and its SVG/PNG drawing
//! - [`image`] - encoded bytes and `data:` URIs
//! - [`placeholder`] - the image shown when encoding fails
//! - [`error`] - encoder errors
//!
//! ## Example Usage
//!
//! ```rust
//! use hub3_barcode::{render, EncodeOptions, Pdf417Encoder};
//!
//! let image = render(&Pdf417Encoder::new(), "HRVHUB30\nEUR", &EncodeOptions::svg());
//! assert!(image.to_data_uri().starts_with("data:image/svg+xml;base64,"));
//!
//! // A failure still yields an image: the placeholder
//! let oversized = "A".repeat(3000);
//! let image = render(&Pdf417Encoder::new(), &oversized, &EncodeOptions::png());
//! assert!(image.to_data_uri().starts_with("data:image/svg+xml;base64,"));
//! ```

pub mod encoder;
pub mod error;
pub mod image;
pub mod matrix;
pub mod pdf417;
pub mod placeholder;

pub use crate::encoder::{render, render_record, BarcodeEncoder, EncodeOptions};
pub use crate::error::{BarcodeError, BarcodeResult};
pub use crate::image::{BarcodeImage, ImageFormat};
pub use crate::matrix::ModuleMatrix;
pub use crate::pdf417::Pdf417Encoder;
pub use crate::placeholder::error_placeholder;
