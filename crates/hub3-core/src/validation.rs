//! # Validation Module
//!
//! Checks applied to merchant configuration at the boundary, before the
//! serializer ever sees it.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Settings form / config file                                  │
//! │  └── Defaults for every field (serde)                                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Field shapes (model, purpose code, IBAN charset and width)        │
//! │  └── Normalisation of the custom purpose code                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Record builder                                               │
//! │  └── Required recipient name/IBAN, amount, date                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! IBAN check digits and ISO-4217 membership are not checked.

use crate::error::ValidationError;
use crate::sanitize::clean_iban;
use crate::types::RecipientConfig;
use crate::{CUSTOM_PURPOSE_CODE, Hub3Field};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Normalisation
// =============================================================================

/// Normalises a merchant-entered custom purpose code: letters only,
/// upper-cased, at most 4 characters.
///
/// ## Example
/// ```rust
/// use hub3_core::validation::normalize_purpose_code_custom;
///
/// assert_eq!(normalize_purpose_code_custom("ship"), "SHIP");
/// assert_eq!(normalize_purpose_code_custom("g-d 5s"), "GDS");
/// assert_eq!(normalize_purpose_code_custom("abcdef"), "ABCD");
/// ```
pub fn normalize_purpose_code_custom(code: &str) -> String {
    code.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .take(Hub3Field::PurposeCode.max_len())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a payment model.
///
/// ## Rules
/// - Exactly 4 characters
/// - ASCII uppercase letters and digits only (`HR99`, `HR01`, ...)
pub fn validate_payment_model(model: &str) -> ValidationResult<()> {
    let width = Hub3Field::Model.max_len();

    if model.chars().count() != width {
        return Err(ValidationError::WrongLength {
            field: "payment_model".to_string(),
            len: width,
        });
    }

    if !model
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    {
        return Err(ValidationError::InvalidFormat {
            field: "payment_model".to_string(),
            reason: "must contain only uppercase letters and digits".to_string(),
        });
    }

    Ok(())
}

/// Validates a purpose code together with its custom companion.
///
/// ## Rules
/// - `custom` requires a custom code with at least one letter
/// - anything else must be exactly 4 ASCII uppercase letters
pub fn validate_purpose_code(code: &str, custom: &str) -> ValidationResult<()> {
    if code == CUSTOM_PURPOSE_CODE {
        if normalize_purpose_code_custom(custom).is_empty() {
            return Err(ValidationError::Required {
                field: "purpose_code_custom".to_string(),
            });
        }
        return Ok(());
    }

    let width = Hub3Field::PurposeCode.max_len();
    if code.chars().count() != width {
        return Err(ValidationError::WrongLength {
            field: "purpose_code".to_string(),
            len: width,
        });
    }

    if !code.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(ValidationError::InvalidFormat {
            field: "purpose_code".to_string(),
            reason: "must contain only uppercase letters".to_string(),
        });
    }

    Ok(())
}

/// Validates the shape of an IBAN after cleaning.
///
/// ## Rules
/// - Empty is allowed here (the record builder reports it as missing)
/// - ASCII letters and digits only
/// - At most 21 characters, the width of the HUB3 IBAN line
pub fn validate_iban(iban: &str) -> ValidationResult<()> {
    let cleaned = clean_iban(iban);
    let width = Hub3Field::Iban.max_len();

    if !cleaned.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::InvalidFormat {
            field: "recipient_iban".to_string(),
            reason: "must contain only letters and digits".to_string(),
        });
    }

    if cleaned.chars().count() > width {
        return Err(ValidationError::TooLong {
            field: "recipient_iban".to_string(),
            max: width,
        });
    }

    Ok(())
}

/// Validates a currency code shape: exactly 3 ASCII letters.
pub fn validate_currency(code: &str) -> ValidationResult<()> {
    let width = Hub3Field::Currency.max_len();

    if code.chars().count() != width || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ValidationError::InvalidFormat {
            field: "currency".to_string(),
            reason: format!("must be {} letters", width),
        });
    }

    Ok(())
}

// =============================================================================
// Config Validation
// =============================================================================

/// Validates a whole recipient configuration and normalises the custom
/// purpose code in place.
///
/// ## User Workflow
/// ```text
/// load hub3.toml ──► apply HUB3_* overrides
///                         │
///                         ▼
///          validate_recipient_config ← THIS FUNCTION
///                         │
///                         ├── bad model / purpose / IBAN → ValidationError
///                         │
///                         └── OK → config handed to build_record
/// ```
pub fn validate_recipient_config(config: &mut RecipientConfig) -> ValidationResult<()> {
    config.purpose_code_custom = normalize_purpose_code_custom(&config.purpose_code_custom);

    validate_payment_model(&config.payment_model)?;
    validate_purpose_code(&config.purpose_code, &config.purpose_code_custom)?;
    validate_iban(&config.recipient_iban)?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
