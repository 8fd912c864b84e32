//! # Preview Data
//!
//! Demo values for rendering a sample slip before the merchant has filled in
//! their settings (settings page preview, `hub3 --preview`).
//!
//! The serializer never falls back to these on its own: callers opt in with
//! [`PreviewMode::DemoFallback`].

use chrono::NaiveDate;

use crate::types::{DateFormat, OrderFacts, RecipientConfig, ReferenceFormat};
use crate::{
    DEFAULT_CURRENCY, DEFAULT_PAYMENT_DESCRIPTION, DEFAULT_PAYMENT_MODEL, DEFAULT_PURPOSE_CODE,
};

/// Whether demo data may stand in for missing recipient settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewMode {
    /// Real slips: missing settings surface as `MissingRequiredField`.
    #[default]
    Off,
    /// Sample slips: blank settings are filled from the demo recipient.
    DemoFallback,
}

impl PreviewMode {
    /// Applies the mode to a loaded configuration.
    pub fn prepare(self, config: RecipientConfig) -> RecipientConfig {
        match self {
            PreviewMode::Off => config,
            PreviewMode::DemoFallback => config.with_preview_fallback(),
        }
    }
}

impl RecipientConfig {
    /// The demo recipient shown in previews.
    pub fn preview() -> Self {
        RecipientConfig {
            recipient_name: "Test Tvrtka d.o.o.".to_string(),
            recipient_address: "Testna ulica 1".to_string(),
            recipient_postal: "10000".to_string(),
            recipient_city: "Zagreb".to_string(),
            recipient_iban: "HR1234567890123456789".to_string(),
            payment_model: DEFAULT_PAYMENT_MODEL.to_string(),
            reference_format: ReferenceFormat::OrderNumber,
            date_format: DateFormat::DayMonthYear,
            reference_prefix: String::new(),
            reference_suffix: String::new(),
            purpose_code: DEFAULT_PURPOSE_CODE.to_string(),
            purpose_code_custom: String::new(),
            payment_description: DEFAULT_PAYMENT_DESCRIPTION.to_string(),
        }
    }

    /// Fills blank text settings from [`RecipientConfig::preview`], but only
    /// when the recipient name or IBAN is missing. A complete configuration
    /// comes back untouched.
    pub fn with_preview_fallback(self) -> Self {
        if !self.recipient_name.trim().is_empty() && !self.recipient_iban.trim().is_empty() {
            return self;
        }

        let demo = RecipientConfig::preview();
        let pick = |own: String, demo: String| if own.trim().is_empty() { demo } else { own };

        RecipientConfig {
            recipient_name: pick(self.recipient_name, demo.recipient_name),
            recipient_address: pick(self.recipient_address, demo.recipient_address),
            recipient_postal: pick(self.recipient_postal, demo.recipient_postal),
            recipient_city: pick(self.recipient_city, demo.recipient_city),
            recipient_iban: pick(self.recipient_iban, demo.recipient_iban),
            payment_model: pick(self.payment_model, demo.payment_model),
            purpose_code: pick(self.purpose_code, demo.purpose_code),
            payment_description: pick(self.payment_description, demo.payment_description),
            ..self
        }
    }
}

impl OrderFacts {
    /// The demo order shown in previews.
    pub fn preview(order_date: NaiveDate) -> Self {
        OrderFacts {
            order_number: "12345".to_string(),
            order_date: order_date.format("%Y-%m-%d").to_string(),
            total: "100.00".to_string(),
            currency: Some(DEFAULT_CURRENCY.to_string()),
            payer_name: "Ivan Horvat".to_string(),
            payer_address: "Ilica 1".to_string(),
            payer_city: "10000 Zagreb".to_string(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
