//! # CLI Configuration
//!
//! Letterhead and output settings loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`OFFERTORY_*`)
//! 2. Defaults (this file)
//!
//! | Variable                      | Default                                   |
//! |-------------------------------|-------------------------------------------|
//! | `OFFERTORY_CHURCH_NAME`       | `APOSTOLIC FAITH MISSION ZIMBABWE`        |
//! | `OFFERTORY_CHURCH_SUBTITLE`   | `Chegutu Town Assembly · Mid North ...`   |
//! | `OFFERTORY_CHURCH_SHORT_NAME` | `AFM Chegutu Assembly`                    |
//! | `OFFERTORY_CHURCH_ADDRESS`    | unset                                     |
//! | `OFFERTORY_CHURCH_PHONE`      | unset                                     |
//! | `OFFERTORY_CHURCH_EMAIL`      | unset                                     |
//! | `OFFERTORY_OUTPUT_DIR`        | `.`                                       |
//! | `OFFERTORY_TEXT_WIDTH`        | `80` (40..=200)                           |

use std::path::PathBuf;

use offertory_core::Letterhead;
use serde::{Deserialize, Serialize};

/// Narrowest and widest text render, in columns.
pub const TEXT_WIDTH_RANGE: (usize, usize) = (40, 200);

/// Exporter configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Printed at the top and bottom of every receipt.
    pub letterhead: Letterhead,

    /// Where receipts are written unless `--out` is given.
    pub output_dir: PathBuf,

    /// Column count for the plain-text renderer.
    pub text_width: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            letterhead: Letterhead::default(),
            output_dir: PathBuf::from("."),
            text_width: 80,
        }
    }
}

impl CliConfig {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration from any key lookup (the environment in
    /// production, a map in tests). Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = CliConfig::default();

        if let Some(name) = get("OFFERTORY_CHURCH_NAME") {
            config.letterhead.name = name;
        }
        if let Some(subtitle) = get("OFFERTORY_CHURCH_SUBTITLE") {
            config.letterhead.subtitle = subtitle;
        }
        if let Some(short_name) = get("OFFERTORY_CHURCH_SHORT_NAME") {
            config.letterhead.short_name = short_name;
        }
        config.letterhead.address = get("OFFERTORY_CHURCH_ADDRESS");
        config.letterhead.phone = get("OFFERTORY_CHURCH_PHONE");
        config.letterhead.email = get("OFFERTORY_CHURCH_EMAIL");

        if let Some(dir) = get("OFFERTORY_OUTPUT_DIR") {
            config.output_dir = PathBuf::from(dir);
        }

        if let Some(width) = get("OFFERTORY_TEXT_WIDTH") {
            let parsed: usize = width.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "OFFERTORY_TEXT_WIDTH".to_string(),
                value: width.clone(),
            })?;

            let (min, max) = TEXT_WIDTH_RANGE;
            if !(min..=max).contains(&parsed) {
                return Err(ConfigError::OutOfRange {
                    key: "OFFERTORY_TEXT_WIDTH".to_string(),
                    min,
                    max,
                });
            }
            config.text_width = parsed;
        }

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },

    #[error("{key} must be between {min} and {max}")]
    OutOfRange { key: String, min: usize, max: usize },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<CliConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CliConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_env() {
        let config = load(&[]).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.letterhead.short_name, "AFM Chegutu Assembly");
        assert_eq!(config.text_width, 80);
    }

    #[test]
    fn test_env_overrides() {
        let config = load(&[
            ("OFFERTORY_CHURCH_NAME", "AFM KADOMA"),
            ("OFFERTORY_CHURCH_PHONE", "+263 68 212 000"),
            ("OFFERTORY_OUTPUT_DIR", "/srv/receipts"),
            ("OFFERTORY_TEXT_WIDTH", "120"),
        ])
        .unwrap();

        assert_eq!(config.letterhead.name, "AFM KADOMA");
        assert_eq!(config.letterhead.phone.as_deref(), Some("+263 68 212 000"));
        assert_eq!(config.output_dir, PathBuf::from("/srv/receipts"));
        assert_eq!(config.text_width, 120);
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = load(&[("OFFERTORY_CHURCH_NAME", "  "), ("OFFERTORY_CHURCH_EMAIL", "")]).unwrap();
        assert_eq!(config.letterhead.name, Letterhead::default().name);
        assert_eq!(config.letterhead.email, None);
    }

    #[test]
    fn test_invalid_text_width() {
        let err = load(&[("OFFERTORY_TEXT_WIDTH", "wide")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));

        let err = load(&[("OFFERTORY_TEXT_WIDTH", "20")]).unwrap_err();
        assert_eq!(err.to_string(), "OFFERTORY_TEXT_WIDTH must be between 40 and 200");
    }
}
