//! # hub3-core: Pure HUB3 Record Serializer
//!
//! Turns a merchant's recipient settings and one order into the HUB3
//! payment-slip record: 14 newline-separated, width-limited lines that
//! Croatian banking apps read from a PDF417 barcode.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        HUB3 Barcode Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │            Shop / CLI (settings, orders, e-mail, HTML)          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ RecipientConfig + OrderFacts          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ hub3-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │ reference │  │ sanitize  │  │ template  │  │   │
//! │  │   │ 15-digit  │  │ poziv na  │  │ collapse  │  │ {order_*} │  │   │
//! │  │   │  cents    │  │   broj    │  │ truncate  │  │  tokens   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                        record::build_record                     │   │
//! │  │   NO I/O • NO LOGGING • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ HUB3 text                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              hub3-barcode (encoder seam, placeholder)           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - RecipientConfig, OrderFacts, ReferenceFormat, DateFormat
//! - [`money`] - integer cents and the 15-digit amount line
//! - [`sanitize`] - whitespace collapsing, code-point truncation, IBAN cleaning
//! - [`template`] - description token substitution
//! - [`reference`] - reference number derivation
//! - [`record`] - the 14-line record
//! - [`validation`] - configuration boundary checks
//! - [`preview`] - demo data for sample slips
//! - [`error`] - domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use hub3_core::{build_record, OrderFacts, RecipientConfig};
//!
//! let config = RecipientConfig {
//!     recipient_name: "Obrt Horvat".to_string(),
//!     recipient_iban: "HR1210010051863000160".to_string(),
//!     ..RecipientConfig::default()
//! };
//! let facts = OrderFacts {
//!     order_number: "45".to_string(),
//!     order_date: "2026-01-31".to_string(),
//!     total: "19.99".to_string(),
//!     currency: None,
//!     payer_name: "Ana Anić".to_string(),
//!     payer_address: "Ilica 1".to_string(),
//!     payer_city: "10000 Zagreb".to_string(),
//! };
//!
//! let text = build_record(&config, &facts).unwrap().to_text();
//! assert!(text.starts_with("HRVHUB30\nEUR\n000000000001999\n"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod preview;
pub mod record;
pub mod reference;
pub mod sanitize;
pub mod template;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use preview::PreviewMode;
pub use record::{build_record, Hub3Field, Hub3Record};
pub use reference::{build_reference, ReferenceBuilder};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// First line of every record.
pub const HUB3_HEADER: &str = "HRVHUB30";

/// Number of lines in a record.
pub const HUB3_LINE_COUNT: usize = 14;

/// Width of the zero-padded amount line.
pub const AMOUNT_WIDTH: usize = 15;

/// Currency used when the order does not name one.
pub const DEFAULT_CURRENCY: &str = "EUR";

/// "Bez kontrole": no check digit rules on the reference.
pub const DEFAULT_PAYMENT_MODEL: &str = "HR99";

/// "Ostalo" (other).
pub const DEFAULT_PURPOSE_CODE: &str = "OTHR";

/// Purpose code value that selects `purpose_code_custom`.
pub const CUSTOM_PURPOSE_CODE: &str = "custom";

/// Default line 14 template ("Payment for order #...").
pub const DEFAULT_PAYMENT_DESCRIPTION: &str = "Plaćanje narudžbe #{order_number}";
