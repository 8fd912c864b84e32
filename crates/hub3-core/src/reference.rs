//! # Reference Number
//!
//! Derives the payment reference (poziv na broj, line 12) from an order.
//!
//! ## Pipeline
//! ```text
//! order_date ──► DateFormat::render ──► "31012026"
//!                                          │
//! order_number ─────────────────┐          │
//!                               ▼          ▼
//!                     ReferenceFormat::combine  ──► "123-31012026"
//!                               │
//!                prefix + ... + suffix
//!                               │
//!                keep [0-9-] only   ──► "123-31012026"
//! ```
//!
//! The last step may leave nothing at all (e.g. prefix `INV`, order number
//! `ABC`); an empty reference is returned as-is.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::{CoreError, CoreResult};
use crate::sanitize::digits_and_hyphens;
use crate::types::{DateFormat, RecipientConfig, ReferenceFormat};

/// Parses the order date text.
///
/// ## Accepted Forms
/// ```text
/// 2026-01-31
/// 2026-01-31 14:05:00
/// 2026-01-31T14:05:00+01:00      (date part taken as written)
/// ```
pub fn parse_order_date(value: &str) -> CoreResult<NaiveDate> {
    let trimmed = value.trim();

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| {
            NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date())
        })
        .or_else(|_| DateTime::parse_from_rfc3339(trimmed).map(|dt| dt.date_naive()))
        .map_err(|_| CoreError::InvalidDate {
            value: value.to_string(),
        })
}

/// Builds reference numbers for one merchant configuration.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceBuilder<'a> {
    format: ReferenceFormat,
    date_format: DateFormat,
    prefix: &'a str,
    suffix: &'a str,
}

impl<'a> ReferenceBuilder<'a> {
    pub fn new(
        format: ReferenceFormat,
        date_format: DateFormat,
        prefix: &'a str,
        suffix: &'a str,
    ) -> Self {
        ReferenceBuilder {
            format,
            date_format,
            prefix,
            suffix,
        }
    }

    pub fn from_config(config: &'a RecipientConfig) -> Self {
        ReferenceBuilder::new(
            config.reference_format,
            config.date_format,
            &config.reference_prefix,
            &config.reference_suffix,
        )
    }

    /// Builds the cleaned reference for one order.
    ///
    /// The date is parsed even when the format does not use it, so a bad
    /// date is reported consistently whatever the merchant picked.
    ///
    /// ## Example
    /// ```rust
    /// use hub3_core::{DateFormat, ReferenceFormat};
    /// use hub3_core::reference::ReferenceBuilder;
    ///
    /// let builder = ReferenceBuilder::new(
    ///     ReferenceFormat::OrderDate,
    ///     DateFormat::DayMonthYear,
    ///     "",
    ///     "",
    /// );
    /// assert_eq!(builder.build("123", "2026-01-31").unwrap(), "123-31012026");
    /// ```
    pub fn build(&self, order_number: &str, order_date: &str) -> CoreResult<String> {
        let date = parse_order_date(order_date)?;
        let rendered = self.date_format.render(date);

        let combined = match self.format {
            ReferenceFormat::OrderNumber => order_number.to_string(),
            ReferenceFormat::OrderDate => format!("{}-{}", order_number, rendered),
            ReferenceFormat::DateOrder => format!("{}-{}", rendered, order_number),
            ReferenceFormat::OnlyDate => rendered,
        };

        let mut reference = String::with_capacity(
            self.prefix.len() + combined.len() + self.suffix.len(),
        );
        reference.push_str(self.prefix);
        reference.push_str(&combined);
        reference.push_str(self.suffix);

        Ok(digits_and_hyphens(&reference))
    }
}

/// One-shot form of [`ReferenceBuilder::build`].
pub fn build_reference(
    format: ReferenceFormat,
    date_format: DateFormat,
    prefix: &str,
    suffix: &str,
    order_number: &str,
    order_date: &str,
) -> CoreResult<String> {
    ReferenceBuilder::new(format, date_format, prefix, suffix).build(order_number, order_date)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(format: ReferenceFormat, date_format: DateFormat) -> String {
        build_reference(format, date_format, "", "", "123", "2026-01-31").unwrap()
    }

    #[test]
    fn test_formats() {
        assert_eq!(
            reference(ReferenceFormat::OrderNumber, DateFormat::DayMonthYear),
            "123"
        );
        assert_eq!(
            reference(ReferenceFormat::OrderDate, DateFormat::DayMonthYear),
            "123-31012026"
        );
        assert_eq!(
            reference(ReferenceFormat::DateOrder, DateFormat::YearMonthDay),
            "20260131-123"
        );
        assert_eq!(
            reference(ReferenceFormat::OnlyDate, DateFormat::ShortYearMonthDay),
            "260131"
        );
        assert_eq!(
            reference(ReferenceFormat::OrderDate, DateFormat::MonthDay),
            "123-0131"
        );
    }

    #[test]
    fn test_unknown_format_behaves_as_order_number() {
        let format = ReferenceFormat::from("legacy_value");
        assert_eq!(reference(format, DateFormat::DayMonthYear), "123");
    }

    #[test]
    fn test_prefix_and_suffix_are_cleaned() {
        let out = build_reference(
            ReferenceFormat::OrderNumber,
            DateFormat::DayMonthYear,
            "INV",
            "",
            "45",
            "2026-01-31",
        )
        .unwrap();
        assert_eq!(out, "45");

        let out = build_reference(
            ReferenceFormat::OrderDate,
            DateFormat::Year,
            "99-",
            "/7",
            "WC-1024",
            "2026-01-31",
        )
        .unwrap();
        assert_eq!(out, "99--1024-20267");
    }

    #[test]
    fn test_everything_stripped_yields_empty_reference() {
        let out = build_reference(
            ReferenceFormat::OrderNumber,
            DateFormat::DayMonthYear,
            "INV",
            "X",
            "ABC",
            "2026-01-31",
        )
        .unwrap();
        assert_eq!(out, "");
    }

    #[test]
    fn test_date_parsing_forms() {
        let expected = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
        assert_eq!(parse_order_date("2026-01-31").unwrap(), expected);
        assert_eq!(parse_order_date(" 2026-01-31 ").unwrap(), expected);
        assert_eq!(parse_order_date("2026-01-31 23:59:00").unwrap(), expected);
        assert_eq!(parse_order_date("2026-01-31T23:59:00+01:00").unwrap(), expected);
    }

    #[test]
    fn test_invalid_date() {
        for bad in ["", "31.01.2026", "2026-02-30", "yesterday"] {
            let err = parse_order_date(bad).unwrap_err();
            assert!(matches!(err, CoreError::InvalidDate { .. }), "{bad}");
        }

        let err = build_reference(
            ReferenceFormat::OrderNumber,
            DateFormat::DayMonthYear,
            "",
            "",
            "1",
            "not a date",
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::InvalidDate { .. }));
    }
}
