//! # Domain Types
//!
//! Input value objects for the HUB3 serializer.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌───────────────────────┐          ┌───────────────────────┐           │
//! │  │   RecipientConfig     │          │      OrderFacts       │           │
//! │  │  ───────────────────  │          │  ───────────────────  │           │
//! │  │  merchant settings    │          │  one order            │           │
//! │  │  long-lived           │          │  fresh per call       │           │
//! │  │  recipient_*          │          │  order_number/date    │           │
//! │  │  reference_format ────┼──┐       │  total, currency      │           │
//! │  │  date_format ─────────┼──┤       │  payer_*              │           │
//! │  │  purpose_code         │  │       └───────────────────────┘           │
//! │  └───────────────────────┘  │                                           │
//! │                             ▼                                           │
//! │              ReferenceFormat / DateFormat                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both structs are plain data: the serializer never mutates them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::{
    DEFAULT_CURRENCY, DEFAULT_PAYMENT_DESCRIPTION, DEFAULT_PAYMENT_MODEL, DEFAULT_PURPOSE_CODE,
};

// =============================================================================
// Reference Format
// =============================================================================

/// How the reference number (poziv na broj) is composed.
///
/// Deserialization never fails: any unknown value maps to
/// [`ReferenceFormat::OrderNumber`], matching how stale settings behave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReferenceFormat {
    /// `12345`
    #[default]
    OrderNumber,
    /// `12345-31012026`
    OrderDate,
    /// `31012026-12345`
    DateOrder,
    /// `31012026`
    OnlyDate,
}

impl ReferenceFormat {
    /// Setting value as stored in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceFormat::OrderNumber => "order_number",
            ReferenceFormat::OrderDate => "order_date",
            ReferenceFormat::DateOrder => "date_order",
            ReferenceFormat::OnlyDate => "only_date",
        }
    }
}

impl From<&str> for ReferenceFormat {
    fn from(value: &str) -> Self {
        match value.trim() {
            "order_date" => ReferenceFormat::OrderDate,
            "date_order" => ReferenceFormat::DateOrder,
            "only_date" => ReferenceFormat::OnlyDate,
            _ => ReferenceFormat::OrderNumber,
        }
    }
}

impl From<String> for ReferenceFormat {
    fn from(value: String) -> Self {
        ReferenceFormat::from(value.as_str())
    }
}

impl From<ReferenceFormat> for String {
    fn from(format: ReferenceFormat) -> Self {
        format.as_str().to_string()
    }
}

impl fmt::Display for ReferenceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Date Format
// =============================================================================

/// Digit-only date rendering used inside the reference number.
///
/// Tokens follow the setting values merchants already have stored
/// (`dmY`, `Ymd`, ...), so configuration files stay compatible.
///
/// ```text
/// 2026-01-31 rendered as:
///   dmY → 31012026    Ymd → 20260131
///   dmy → 310126      ymd → 260131
///   Y   → 2026        y   → 26
///   dm  → 3101        md  → 0131
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DateFormat {
    #[default]
    #[serde(rename = "dmY")]
    DayMonthYear,
    #[serde(rename = "Ymd")]
    YearMonthDay,
    #[serde(rename = "dmy")]
    DayMonthShortYear,
    #[serde(rename = "ymd")]
    ShortYearMonthDay,
    #[serde(rename = "Y")]
    Year,
    #[serde(rename = "y")]
    ShortYear,
    #[serde(rename = "dm")]
    DayMonth,
    #[serde(rename = "md")]
    MonthDay,
}

impl DateFormat {
    /// Setting token as stored in configuration.
    pub fn token(&self) -> &'static str {
        match self {
            DateFormat::DayMonthYear => "dmY",
            DateFormat::YearMonthDay => "Ymd",
            DateFormat::DayMonthShortYear => "dmy",
            DateFormat::ShortYearMonthDay => "ymd",
            DateFormat::Year => "Y",
            DateFormat::ShortYear => "y",
            DateFormat::DayMonth => "dm",
            DateFormat::MonthDay => "md",
        }
    }

    fn strftime(&self) -> &'static str {
        match self {
            DateFormat::DayMonthYear => "%d%m%Y",
            DateFormat::YearMonthDay => "%Y%m%d",
            DateFormat::DayMonthShortYear => "%d%m%y",
            DateFormat::ShortYearMonthDay => "%y%m%d",
            DateFormat::Year => "%Y",
            DateFormat::ShortYear => "%y",
            DateFormat::DayMonth => "%d%m",
            DateFormat::MonthDay => "%m%d",
        }
    }

    /// Renders `date` as a digit string.
    ///
    /// ## Example
    /// ```rust
    /// use chrono::NaiveDate;
    /// use hub3_core::DateFormat;
    ///
    /// let date = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
    /// assert_eq!(DateFormat::DayMonthYear.render(date), "31012026");
    /// assert_eq!(DateFormat::MonthDay.render(date), "0131");
    /// ```
    pub fn render(&self, date: NaiveDate) -> String {
        date.format(self.strftime()).to_string()
    }
}

impl FromStr for DateFormat {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "dmY" => Ok(DateFormat::DayMonthYear),
            "Ymd" => Ok(DateFormat::YearMonthDay),
            "dmy" => Ok(DateFormat::DayMonthShortYear),
            "ymd" => Ok(DateFormat::ShortYearMonthDay),
            "Y" => Ok(DateFormat::Year),
            "y" => Ok(DateFormat::ShortYear),
            "dm" => Ok(DateFormat::DayMonth),
            "md" => Ok(DateFormat::MonthDay),
            other => Err(ValidationError::InvalidFormat {
                field: "date_format".to_string(),
                reason: format!(
                    "unknown token '{}'. Valid options: dmY, Ymd, dmy, ymd, Y, y, dm, md",
                    other
                ),
            }),
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

// =============================================================================
// Catalogues
// =============================================================================

/// Payment models offered in merchant settings, with their Croatian labels.
///
/// Not exhaustive: any 4-character model passes validation.
pub const PAYMENT_MODELS: &[(&str, &str)] = &[
    ("HR99", "Bez kontrole"),
    ("HR00", "Bez poziva na broj"),
    ("HR01", "Jedan broj (P1)"),
    ("HR02", "Dva broja (P1-P2)"),
    ("HR03", "Tri broja (P1-P2-P3)"),
    ("HR04", "Jedan broj (P1)"),
];

/// Purpose codes offered in merchant settings, with their Croatian labels.
pub const PURPOSE_CODES: &[(&str, &str)] = &[
    ("OTHR", "Ostalo"),
    ("ADVA", "Unaprijed plaćeno"),
    ("COST", "Troškovi"),
    ("GDDS", "Kupnja robe"),
    ("GDSV", "Kupnja robe i usluga"),
    ("SCVE", "Kupnja usluga"),
    ("SUPP", "Plaćanje dobavljaču"),
];

// =============================================================================
// Recipient Configuration
// =============================================================================

/// Merchant-entered settings: who gets paid and how the slip is labelled.
///
/// Every field has a default, so a partially filled settings file or an empty
/// option store still deserializes. Required-ness (name and IBAN) is decided
/// by the serializer, not here.
///
/// ## Example Config File
/// ```toml
/// recipient_name = "Obrt Horvat"
/// recipient_address = "Ilica 1"
/// recipient_postal = "10000"
/// recipient_city = "Zagreb"
/// recipient_iban = "HR12 1001 0051 8630 0016 0"
/// payment_model = "HR00"
/// reference_format = "order_date"
/// date_format = "Ymd"
/// purpose_code = "custom"
/// purpose_code_custom = "ship"
/// payment_description = "Narudžba #{order_number}"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecipientConfig {
    pub recipient_name: String,
    pub recipient_address: String,
    pub recipient_postal: String,
    pub recipient_city: String,

    /// May contain spaces and lowercase letters; cleaned before use.
    pub recipient_iban: String,

    /// 4-character model code. Default: `HR99`.
    pub payment_model: String,

    pub reference_format: ReferenceFormat,
    pub date_format: DateFormat,

    /// Prepended to the reference before digit-only cleaning.
    pub reference_prefix: String,
    /// Appended to the reference before digit-only cleaning.
    pub reference_suffix: String,

    /// 4-letter code, or the literal `custom`. Default: `OTHR`.
    pub purpose_code: String,
    /// Used when `purpose_code == "custom"`.
    pub purpose_code_custom: String,

    /// Template for line 14. Supports `{order_number}`, `#{order_number}`
    /// and `{order_date}`.
    pub payment_description: String,
}

impl Default for RecipientConfig {
    fn default() -> Self {
        RecipientConfig {
            recipient_name: String::new(),
            recipient_address: String::new(),
            recipient_postal: String::new(),
            recipient_city: String::new(),
            recipient_iban: String::new(),
            payment_model: DEFAULT_PAYMENT_MODEL.to_string(),
            reference_format: ReferenceFormat::default(),
            date_format: DateFormat::default(),
            reference_prefix: String::new(),
            reference_suffix: String::new(),
            purpose_code: DEFAULT_PURPOSE_CODE.to_string(),
            purpose_code_custom: String::new(),
            payment_description: DEFAULT_PAYMENT_DESCRIPTION.to_string(),
        }
    }
}

// =============================================================================
// Order Facts
// =============================================================================

/// Everything the slip needs to know about one order.
///
/// `order_date` and `total` stay as text: the date text is substituted
/// verbatim into the description, and the total is parsed exactly (no
/// floating point) when the record is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderFacts {
    /// May carry a non-numeric prefix (e.g. `WC-1024`).
    pub order_number: String,

    /// `YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS`, or RFC 3339.
    pub order_date: String,

    /// Decimal text, e.g. `"100.00"`.
    pub total: String,

    /// 3-letter code; `EUR` when absent or blank.
    #[serde(default)]
    pub currency: Option<String>,

    #[serde(default)]
    pub payer_name: String,

    #[serde(default)]
    pub payer_address: String,

    /// Conventionally `"<postcode> <city>"`.
    #[serde(default)]
    pub payer_city: String,
}

/// Billing details as an order source exposes them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BillingAddress {
    pub first_name: String,
    pub last_name: String,
    pub address_1: String,
    pub address_2: Option<String>,
    pub postcode: String,
    pub city: String,
}

impl OrderFacts {
    /// Flattens billing details into payer lines.
    ///
    /// ```text
    /// first_name + " " + last_name           → payer_name
    /// address_1 [+ " " + address_2]          → payer_address
    /// postcode + " " + city                  → payer_city
    /// ```
    pub fn from_billing(
        order_number: impl Into<String>,
        order_date: impl Into<String>,
        total: impl Into<String>,
        currency: Option<String>,
        billing: &BillingAddress,
    ) -> Self {
        let mut payer_address = billing.address_1.clone();
        if let Some(line2) = billing.address_2.as_deref().filter(|l| !l.is_empty()) {
            payer_address.push(' ');
            payer_address.push_str(line2);
        }

        OrderFacts {
            order_number: order_number.into(),
            order_date: order_date.into(),
            total: total.into(),
            currency,
            payer_name: format!("{} {}", billing.first_name, billing.last_name),
            payer_address,
            payer_city: format!("{} {}", billing.postcode, billing.city),
        }
    }

    /// The currency for line 2, falling back to `EUR`.
    pub fn currency_or_default(&self) -> &str {
        self.currency
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CURRENCY)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
