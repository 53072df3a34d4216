// In: src/config.rs

//! Configuration for the integer block decoder.
//!
//! `DecoderConfig` is created once at the application boundary (e.g. from a JSON
//! settings file) and handed to `IntegerBlockDecoder::new`. It is plain, immutable
//! data: the decoder only reads it, so one config can back any number of
//! concurrent decode calls.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TsmIntError;

/// Settings that bound and instrument block decoding.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct DecoderConfig {
    /// Upper bound on the number of values a single block may decode to.
    /// `None` accepts any length the block metadata declares.
    #[serde(default)]
    pub max_values: Option<usize>,

    /// If true, blocks that fail to decode are reported through `log::debug!`.
    #[serde(default = "default_true")]
    pub log_decode_errors: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_values: None,
            log_decode_errors: true,
        }
    }
}

impl DecoderConfig {
    /// Parses a config from JSON text. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, TsmIntError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, TsmIntError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Rejects a declared block length that exceeds `max_values`.
    #[inline]
    pub(crate) fn check_len(&self, count: usize) -> Result<(), TsmIntError> {
        match self.max_values {
            Some(limit) if count > limit => Err(TsmIntError::TooManyValues {
                count: count as u128,
                limit,
            }),
            _ => Ok(()),
        }
    }
}

/// Helper for `serde` to default a boolean field to true.
fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = DecoderConfig::from_json_str("{}").unwrap();
        assert_eq!(config, DecoderConfig::default());
        assert!(config.log_decode_errors);
        assert_eq!(config.max_values, None);
    }

    #[test]
    fn test_partial_json_overrides() {
        let config = DecoderConfig::from_json_str(r#"{"max_values": 1000}"#).unwrap();
        assert_eq!(config.max_values, Some(1000));
        assert!(config.log_decode_errors);
    }

    #[test]
    fn test_invalid_json_is_serde_error() {
        let result = DecoderConfig::from_json_str(r#"{"max_values": "lots"}"#);
        assert!(matches!(result, Err(TsmIntError::SerdeJson(_))));
    }

    #[test]
    fn test_from_json_file() {
        let path = std::env::temp_dir().join(format!("tsmint-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"max_values": 5, "log_decode_errors": false}"#).unwrap();
        let config = DecoderConfig::from_json_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(
            config,
            DecoderConfig {
                max_values: Some(5),
                log_decode_errors: false
            }
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = DecoderConfig::from_json_file("/nonexistent/tsmint/config.json");
        assert!(matches!(result, Err(TsmIntError::Io(_))));
    }

    #[test]
    fn test_check_len() {
        let config = DecoderConfig {
            max_values: Some(3),
            ..DecoderConfig::default()
        };
        assert!(config.check_len(3).is_ok());
        assert!(matches!(
            config.check_len(4),
            Err(TsmIntError::TooManyValues { count: 4, limit: 3 })
        ));
        assert!(DecoderConfig::default().check_len(usize::MAX).is_ok());
    }
}
