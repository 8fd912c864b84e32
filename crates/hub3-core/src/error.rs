//! # Error Types
//!
//! Domain-specific error types for hub3-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  hub3-core errors (this file)                                          │
//! │  ├── CoreError        - Record building failures                       │
//! │  └── ValidationError  - Configuration boundary checks                  │
//! │                                                                         │
//! │  hub3-barcode errors (separate crate)                                  │
//! │  └── BarcodeError     - Encoder failures (never reach the record)      │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → caller decides (skip/placeholder) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending value in the message
//! 3. Errors are enum variants, never String
//! 4. Every failure is per-call; nothing here is process-fatal

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Failures surfaced by the record serializer.
///
/// The serializer never produces a partially valid record: any of these
/// aborts the whole `build` call.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The order date could not be parsed into a calendar date.
    #[error("Invalid order date: '{value}'")]
    InvalidDate { value: String },

    /// The order total is unparsable, negative, or does not fit in 15 digits
    /// once expressed in cents.
    ///
    /// ## When This Occurs
    /// ```text
    /// total = "-5.00"              → negative
    /// total = "12,50"              → not a decimal number
    /// total = "10000000000000.00"  → 16 digits of cents
    /// ```
    #[error("Invalid amount '{value}': {reason}")]
    InvalidAmount { value: String, reason: String },

    /// A field the record cannot be built without is empty.
    ///
    /// Only the recipient name and IBAN are required; everything else may be
    /// blank on the slip.
    #[error("Missing required field: {field}")]
    MissingRequiredField { field: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Configuration validation errors.
///
/// Raised at the configuration boundary, before the serializer runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Field value does not have the exact expected length.
    #[error("{field} must be exactly {len} characters")]
    WrongLength { field: String, len: usize },

    /// Invalid format (e.g., lowercase model, punctuation in an IBAN).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
