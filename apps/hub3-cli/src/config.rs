//! # Recipient Configuration Loading
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     HUB3_RECIPIENT_IBAN=HR1210010051863000160                          │
//! │     HUB3_REFERENCE_FORMAT=order_date                                   │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <path>, or                                                │
//! │     ~/.config/hub3-barcode/hub3.toml (Linux)                           │
//! │     ~/Library/Application Support/hr.hub3.hub3-barcode/hub3.toml      │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     HR99, OTHR, order_number, dmY, "Plaćanje narudžbe #{order_number}" │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The loaded value is validated before it leaves this module.

use std::path::{Path, PathBuf};

use hub3_core::validation::validate_recipient_config;
use hub3_core::{DateFormat, RecipientConfig, ReferenceFormat, ValidationError};
use tracing::{debug, info, warn};

/// Name of the settings file inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "hub3.toml";

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ValidationError),
}

/// Loads configuration from file, environment, and defaults.
///
/// ## Load Order (later overrides earlier)
/// 1. Default values
/// 2. Config file: an explicit path must exist; the default path is optional
/// 3. Environment variables
/// 4. Validation
pub fn load(config_path: Option<PathBuf>) -> Result<RecipientConfig, ConfigError> {
    load_with(config_path, |key| std::env::var(key).ok())
}

/// [`load`] with environment lookups routed through `lookup`.
pub fn load_with<F>(
    config_path: Option<PathBuf>,
    lookup: F,
) -> Result<RecipientConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match config_path {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::NotFound(path));
            }
            read_file(&path)?
        }
        None => match default_config_path() {
            Some(path) if path.exists() => read_file(&path)?,
            Some(path) => {
                debug!(?path, "Config file not found, using defaults");
                RecipientConfig::default()
            }
            None => RecipientConfig::default(),
        },
    };

    apply_env_overrides(&mut config, lookup);
    validate_recipient_config(&mut config)?;

    info!(
        recipient = %config.recipient_name,
        model = %config.payment_model,
        reference_format = %config.reference_format,
        "Recipient configuration loaded"
    );

    Ok(config)
}

fn read_file(path: &Path) -> Result<RecipientConfig, ConfigError> {
    info!(?path, "Loading recipient config from file");
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&contents)
}

/// Parses settings TOML. Missing keys take their defaults.
pub fn parse(contents: &str) -> Result<RecipientConfig, ConfigError> {
    Ok(toml::from_str(contents)?)
}

/// Applies `HUB3_*` overrides using `lookup` to read variables.
pub fn apply_env_overrides<F>(config: &mut RecipientConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let text_fields: [(&str, &mut String); 11] = [
        ("HUB3_RECIPIENT_NAME", &mut config.recipient_name),
        ("HUB3_RECIPIENT_ADDRESS", &mut config.recipient_address),
        ("HUB3_RECIPIENT_POSTAL", &mut config.recipient_postal),
        ("HUB3_RECIPIENT_CITY", &mut config.recipient_city),
        ("HUB3_RECIPIENT_IBAN", &mut config.recipient_iban),
        ("HUB3_PAYMENT_MODEL", &mut config.payment_model),
        ("HUB3_REFERENCE_PREFIX", &mut config.reference_prefix),
        ("HUB3_REFERENCE_SUFFIX", &mut config.reference_suffix),
        ("HUB3_PURPOSE_CODE", &mut config.purpose_code),
        ("HUB3_PURPOSE_CODE_CUSTOM", &mut config.purpose_code_custom),
        ("HUB3_PAYMENT_DESCRIPTION", &mut config.payment_description),
    ];

    for (key, field) in text_fields {
        if let Some(value) = lookup(key) {
            debug!(key, "Overriding setting from environment");
            *field = value;
        }
    }

    if let Some(format) = lookup("HUB3_REFERENCE_FORMAT") {
        config.reference_format = ReferenceFormat::from(format.as_str());
    }

    if let Some(token) = lookup("HUB3_DATE_FORMAT") {
        match token.parse::<DateFormat>() {
            Ok(format) => config.date_format = format,
            Err(e) => warn!(token = %token, error = %e, "Ignoring HUB3_DATE_FORMAT"),
        }
    }
}

/// Returns the default config file path.
pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("hr", "hub3", "hub3-barcode")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
