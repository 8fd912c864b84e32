//! # HUB3 Record
//!
//! Assembles the 14-line payment-slip record.
//!
//! ## Wire Layout
//! ```text
//! ┌────┬──────────────────┬─────┬──────────────────────────────────────────┐
//! │ #  │ Line             │ Max │ Source                                   │
//! ├────┼──────────────────┼─────┼──────────────────────────────────────────┤
//! │  1 │ Header           │   8 │ HRVHUB30                                 │
//! │  2 │ Currency         │   3 │ order currency or EUR                    │
//! │  3 │ Amount           │  15 │ cents, zero padded                       │
//! │  4 │ Payer name       │  30 │ cleaned                                  │
//! │  5 │ Payer address    │  27 │ cleaned                                  │
//! │  6 │ Payer city       │  27 │ cleaned                                  │
//! │  7 │ Recipient name   │  25 │ cleaned                                  │
//! │  8 │ Recipient address│  25 │ cleaned                                  │
//! │  9 │ Recipient city   │  27 │ postal + " " + city, cleaned             │
//! │ 10 │ IBAN             │  21 │ uppercase, no whitespace, width checked  │
//! │ 11 │ Model            │   4 │ payment model or HR99                    │
//! │ 12 │ Reference        │  22 │ ReferenceBuilder                         │
//! │ 13 │ Purpose code     │   4 │ code, or custom code                     │
//! │ 14 │ Description      │  35 │ template substituted, cleaned            │
//! └────┴──────────────────┴─────┴──────────────────────────────────────────┘
//! ```
//!
//! Lines are joined with a single `\n`; there is no trailing newline. Banking
//! apps reject slips that deviate from this layout, so the order and widths
//! here are fixed.

use std::fmt;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::reference::ReferenceBuilder;
use crate::sanitize::{clean_and_truncate, clean_iban};
use crate::template::{substitute, TemplateVars};
use crate::types::{OrderFacts, RecipientConfig};
use crate::validation::{normalize_purpose_code_custom, validate_iban};
use crate::{
    CUSTOM_PURPOSE_CODE, DEFAULT_PAYMENT_MODEL, DEFAULT_PURPOSE_CODE, HUB3_HEADER,
    HUB3_LINE_COUNT,
};

// =============================================================================
// Fields
// =============================================================================

/// One line of the record, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hub3Field {
    Header,
    Currency,
    Amount,
    PayerName,
    PayerAddress,
    PayerCity,
    RecipientName,
    RecipientAddress,
    RecipientCity,
    Iban,
    Model,
    Reference,
    PurposeCode,
    Description,
}

impl Hub3Field {
    /// All fields in wire order.
    pub const ALL: [Hub3Field; HUB3_LINE_COUNT] = [
        Hub3Field::Header,
        Hub3Field::Currency,
        Hub3Field::Amount,
        Hub3Field::PayerName,
        Hub3Field::PayerAddress,
        Hub3Field::PayerCity,
        Hub3Field::RecipientName,
        Hub3Field::RecipientAddress,
        Hub3Field::RecipientCity,
        Hub3Field::Iban,
        Hub3Field::Model,
        Hub3Field::Reference,
        Hub3Field::PurposeCode,
        Hub3Field::Description,
    ];

    /// Maximum width in characters (code points).
    pub const fn max_len(&self) -> usize {
        match self {
            Hub3Field::Header => 8,
            Hub3Field::Currency => 3,
            Hub3Field::Amount => 15,
            Hub3Field::PayerName => 30,
            Hub3Field::PayerAddress => 27,
            Hub3Field::PayerCity => 27,
            Hub3Field::RecipientName => 25,
            Hub3Field::RecipientAddress => 25,
            Hub3Field::RecipientCity => 27,
            Hub3Field::Iban => 21,
            Hub3Field::Model => 4,
            Hub3Field::Reference => 22,
            Hub3Field::PurposeCode => 4,
            Hub3Field::Description => 35,
        }
    }

    /// Zero-based position in the record.
    pub const fn index(&self) -> usize {
        *self as usize
    }
}

// =============================================================================
// Record
// =============================================================================

/// A finished HUB3 record. Immutable; `Display` yields the wire text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hub3Record {
    lines: [String; HUB3_LINE_COUNT],
}

impl Hub3Record {
    /// Returns one line by field.
    pub fn line(&self, field: Hub3Field) -> &str {
        &self.lines[field.index()]
    }

    /// All lines in wire order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The `\n`-joined wire text handed to the barcode encoder.
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }
}

impl fmt::Display for Hub3Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Builds the record for one order.
///
/// ## Failure Order
/// ```text
/// recipient name blank         → MissingRequiredField("recipient_name")
/// recipient IBAN blank         → MissingRequiredField("recipient_iban")
/// IBAN not alphanumeric or > 21 → Validation
/// total unparsable / negative  → InvalidAmount
/// order date unparsable        → InvalidDate
/// ```
///
/// ## Example
/// ```rust
/// use hub3_core::{build_record, Hub3Field, OrderFacts, RecipientConfig};
///
/// let config = RecipientConfig {
///     recipient_name: "Obrt Horvat".to_string(),
///     recipient_iban: "HR12 1001 0051 8630 0016 0".to_string(),
///     ..RecipientConfig::default()
/// };
/// let facts = OrderFacts {
///     order_number: "123".to_string(),
///     order_date: "2026-01-31".to_string(),
///     total: "100.00".to_string(),
///     currency: None,
///     payer_name: "Ivan Horvat".to_string(),
///     payer_address: "Ilica 1".to_string(),
///     payer_city: "10000 Zagreb".to_string(),
/// };
///
/// let record = build_record(&config, &facts).unwrap();
/// assert_eq!(record.line(Hub3Field::Amount), "000000000010000");
/// assert_eq!(record.line(Hub3Field::Iban), "HR1210010051863000160");
/// assert_eq!(record.to_text().lines().count(), 14);
/// ```
pub fn build_record(config: &RecipientConfig, facts: &OrderFacts) -> CoreResult<Hub3Record> {
    if config.recipient_name.trim().is_empty() {
        return Err(CoreError::MissingRequiredField {
            field: "recipient_name".to_string(),
        });
    }

    let iban = clean_iban(&config.recipient_iban);
    if iban.is_empty() {
        return Err(CoreError::MissingRequiredField {
            field: "recipient_iban".to_string(),
        });
    }
    validate_iban(&iban)?;

    let amount = Money::from_decimal_str(&facts.total)?.to_hub3_amount()?;
    let reference =
        ReferenceBuilder::from_config(config).build(&facts.order_number, &facts.order_date)?;

    let description = substitute(
        &config.payment_description,
        TemplateVars {
            order_number: &facts.order_number,
            order_date: &facts.order_date,
        },
    );

    let recipient_city = format!("{} {}", config.recipient_postal, config.recipient_city);

    let model = if config.payment_model.trim().is_empty() {
        DEFAULT_PAYMENT_MODEL
    } else {
        config.payment_model.as_str()
    };

    let clean = |value: &str, field: Hub3Field| clean_and_truncate(value, field.max_len());

    Ok(Hub3Record {
        lines: [
            HUB3_HEADER.to_string(),
            clean(facts.currency_or_default(), Hub3Field::Currency),
            amount,
            clean(&facts.payer_name, Hub3Field::PayerName),
            clean(&facts.payer_address, Hub3Field::PayerAddress),
            clean(&facts.payer_city, Hub3Field::PayerCity),
            clean(&config.recipient_name, Hub3Field::RecipientName),
            clean(&config.recipient_address, Hub3Field::RecipientAddress),
            clean(&recipient_city, Hub3Field::RecipientCity),
            iban,
            clean(model, Hub3Field::Model),
            clean(&reference, Hub3Field::Reference),
            resolve_purpose_code(config),
            clean(&description, Hub3Field::Description),
        ],
    })
}

/// Line 13: the configured code, or the custom code when `custom` is picked.
///
/// `custom` with nothing usable in the custom field falls back to `OTHR`,
/// since the literal `custom` does not fit the 4-character line.
fn resolve_purpose_code(config: &RecipientConfig) -> String {
    if config.purpose_code == CUSTOM_PURPOSE_CODE {
        let custom = normalize_purpose_code_custom(&config.purpose_code_custom);
        if custom.is_empty() {
            return DEFAULT_PURPOSE_CODE.to_string();
        }
        return custom;
    }

    clean_and_truncate(&config.purpose_code, Hub3Field::PurposeCode.max_len())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::types::{DateFormat, ReferenceFormat};

    fn config() -> RecipientConfig {
        RecipientConfig {
            recipient_name: "Obrt Horvat".to_string(),
            recipient_address: "Vlaška 12".to_string(),
            recipient_postal: "10000".to_string(),
            recipient_city: "Zagreb".to_string(),
            recipient_iban: "hr12 1001 0051 8630 0016 0".to_string(),
            ..RecipientConfig::default()
        }
    }

    fn facts() -> OrderFacts {
        OrderFacts {
            order_number: "123".to_string(),
            order_date: "2026-01-31".to_string(),
            total: "100.00".to_string(),
            currency: Some("EUR".to_string()),
            payer_name: "Ivan Horvat".to_string(),
            payer_address: "Ilica 1".to_string(),
            payer_city: "10000 Zagreb".to_string(),
        }
    }

    fn assert_within_limits(record: &Hub3Record) {
        for field in Hub3Field::ALL {
            let line = record.line(field);
            assert!(
                line.chars().count() <= field.max_len(),
                "{field:?} too long: {line:?}"
            );
            assert!(!line.contains(&['\r', '\n', '\t'][..]), "{field:?}: {line:?}");
        }
    }

    #[test]
    fn test_full_record_text() {
        let record = build_record(&config(), &facts()).unwrap();
        let expected = [
            "HRVHUB30",
            "EUR",
            "000000000010000",
            "Ivan Horvat",
            "Ilica 1",
            "10000 Zagreb",
            "Obrt Horvat",
            "Vlaška 12",
            "10000 Zagreb",
            "HR1210010051863000160",
            "HR99",
            "123",
            "OTHR",
            "Plaćanje narudžbe #123",
        ]
        .join("\n");

        assert_eq!(record.to_text(), expected);
        assert_eq!(record.to_string(), expected);
        assert!(!record.to_text().ends_with('\n'));
    }

    #[test]
    fn test_fourteen_lines_within_limits_for_oversized_input() {
        let long = "Trg bana Josipa Jelačića \r\n\t".repeat(5);
        let config = RecipientConfig {
            recipient_name: long.clone(),
            recipient_address: long.clone(),
            recipient_city: long.clone(),
            reference_format: ReferenceFormat::OrderDate,
            date_format: DateFormat::YearMonthDay,
            reference_prefix: "1234567890".to_string(),
            payment_description: format!("{} {{order_number}}", long),
            ..config()
        };
        let facts = OrderFacts {
            payer_name: long.clone(),
            payer_address: long.clone(),
            payer_city: long,
            ..facts()
        };

        let record = build_record(&config, &facts).unwrap();
        assert_eq!(record.lines().len(), 14);
        assert_eq!(record.to_text().split('\n').count(), 14);
        assert_within_limits(&record);
        assert_eq!(record.line(Hub3Field::Reference), "1234567890123-20260131");
    }

    #[test]
    fn test_amount_rounding_in_record() {
        let facts = OrderFacts {
            total: "0.005".to_string(),
            ..facts()
        };
        let record = build_record(&config(), &facts).unwrap();
        assert_eq!(record.line(Hub3Field::Amount), "000000000000001");
    }

    #[test]
    fn test_currency_default() {
        let facts = OrderFacts {
            currency: None,
            ..facts()
        };
        let record = build_record(&config(), &facts).unwrap();
        assert_eq!(record.line(Hub3Field::Currency), "EUR");
    }

    #[test]
    fn test_reference_order_date() {
        let config = RecipientConfig {
            reference_format: ReferenceFormat::OrderDate,
            date_format: DateFormat::DayMonthYear,
            ..config()
        };
        let record = build_record(&config, &facts()).unwrap();
        assert_eq!(record.line(Hub3Field::Reference), "123-31012026");
    }

    #[test]
    fn test_empty_reference_is_accepted() {
        let config = RecipientConfig {
            reference_prefix: "INV".to_string(),
            ..config()
        };
        let facts = OrderFacts {
            order_number: "ABC".to_string(),
            ..facts()
        };
        let record = build_record(&config, &facts).unwrap();
        assert_eq!(record.line(Hub3Field::Reference), "");
        assert_eq!(record.to_text().split('\n').count(), 14);
    }

    #[test]
    fn test_custom_purpose_code() {
        let config = RecipientConfig {
            purpose_code: "custom".to_string(),
            purpose_code_custom: "ship".to_string(),
            ..config()
        };
        let record = build_record(&config, &facts()).unwrap();
        assert_eq!(record.line(Hub3Field::PurposeCode), "SHIP");

        let config = RecipientConfig {
            purpose_code_custom: String::new(),
            ..config
        };
        let record = build_record(&config, &facts()).unwrap();
        assert_eq!(record.line(Hub3Field::PurposeCode), "OTHR");
    }

    #[test]
    fn test_blank_model_falls_back() {
        let config = RecipientConfig {
            payment_model: " ".to_string(),
            ..config()
        };
        let record = build_record(&config, &facts()).unwrap();
        assert_eq!(record.line(Hub3Field::Model), "HR99");
    }

    #[test]
    fn test_description_template() {
        let config = RecipientConfig {
            payment_description: "Order #{order_number} on {order_date}".to_string(),
            ..config()
        };
        let facts = OrderFacts {
            order_number: "7".to_string(),
            order_date: "2026-01-01".to_string(),
            ..facts()
        };
        let record = build_record(&config, &facts).unwrap();
        assert_eq!(record.line(Hub3Field::Description), "Order #7 on 2026-01-01");
    }

    #[test]
    fn test_recipient_city_without_postal() {
        let config = RecipientConfig {
            recipient_postal: String::new(),
            ..config()
        };
        let record = build_record(&config, &facts()).unwrap();
        assert_eq!(record.line(Hub3Field::RecipientCity), "Zagreb");
    }

    #[test]
    fn test_missing_required_fields() {
        let config_without_name = RecipientConfig {
            recipient_name: "  ".to_string(),
            ..config()
        };
        let err = build_record(&config_without_name, &facts()).unwrap_err();
        assert!(
            matches!(err, CoreError::MissingRequiredField { ref field } if field == "recipient_name")
        );

        let config_without_iban = RecipientConfig {
            recipient_iban: " \t".to_string(),
            ..config()
        };
        let err = build_record(&config_without_iban, &facts()).unwrap_err();
        assert!(
            matches!(err, CoreError::MissingRequiredField { ref field } if field == "recipient_iban")
        );
    }

    #[test]
    fn test_iban_wider_than_line_is_rejected() {
        let config_wide = RecipientConfig {
            recipient_iban: "DE89 3704 0044 0532 0130 0099".to_string(),
            ..config()
        };
        let err = build_record(&config_wide, &facts()).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::TooLong { ref field, max: 21 })
                if field == "recipient_iban"
        ));

        let config = RecipientConfig {
            recipient_iban: "HR12-1001-0051".to_string(),
            ..config()
        };
        assert!(matches!(
            build_record(&config, &facts()).unwrap_err(),
            CoreError::Validation(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_invalid_amount_and_date() {
        let facts_negative = OrderFacts {
            total: "-1.00".to_string(),
            ..facts()
        };
        assert!(matches!(
            build_record(&config(), &facts_negative).unwrap_err(),
            CoreError::InvalidAmount { .. }
        ));

        let facts_bad_date = OrderFacts {
            order_date: "31/01/2026".to_string(),
            ..facts()
        };
        assert!(matches!(
            build_record(&config(), &facts_bad_date).unwrap_err(),
            CoreError::InvalidDate { .. }
        ));
    }

    #[test]
    fn test_field_table() {
        assert_eq!(Hub3Field::ALL.len(), 14);
        for (i, field) in Hub3Field::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
        assert_eq!(Hub3Field::Header.max_len(), HUB3_HEADER.len());
    }

    #[test]
    fn test_concurrent_builds_are_independent() {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                std::thread::spawn(move || {
                    let facts = OrderFacts {
                        order_number: i.to_string(),
                        ..facts()
                    };
                    build_record(&config(), &facts).unwrap()
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let record = handle.join().unwrap();
            assert_eq!(record.line(Hub3Field::Reference), i.to_string());
        }
    }
}
