// WiFi credentials domain model
use serde::{Deserialize, Serialize};
use std::fmt;

use super::validation::ValidationError;

const MAX_SSID_BYTES: usize = 32;
const MAX_PASSPHRASE_BYTES: usize = 64;

#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkCredentials {
    pub ssid: String,
    pub passphrase: String,
}

impl NetworkCredentials {
    pub fn new(ssid: impl Into<String>, passphrase: impl Into<String>) -> Self {
        Self {
            ssid: ssid.into(),
            passphrase: passphrase.into(),
        }
    }

    pub fn validate(&self, errors: &mut Vec<ValidationError>) {
        check_text("network.ssid", &self.ssid, MAX_SSID_BYTES, errors);
        check_text("network.passphrase", &self.passphrase, MAX_PASSPHRASE_BYTES, errors);
    }
}

fn check_text(field: &'static str, value: &str, max: usize, errors: &mut Vec<ValidationError>) {
    if value.is_empty() {
        errors.push(ValidationError::Empty { field });
    } else if value.len() > max {
        errors.push(ValidationError::TooLong {
            field,
            len: value.len(),
            max,
        });
    }
}

impl Default for NetworkCredentials {
    fn default() -> Self {
        Self::new("Mehar", "244466666")
    }
}

// Keep the passphrase out of logs
impl fmt::Debug for NetworkCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NetworkCredentials")
            .field("ssid", &self.ssid)
            .field("passphrase", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_passphrase() {
        let creds = NetworkCredentials::new("home", "hunter22");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("home"));
        assert!(!debug.contains("hunter22"));
    }

    #[test]
    fn test_validate_empty_and_oversized() {
        let creds = NetworkCredentials::new("", "x".repeat(65));
        let mut errors = Vec::new();
        creds.validate(&mut errors);

        assert_eq!(
            errors,
            vec![
                ValidationError::Empty {
                    field: "network.ssid"
                },
                ValidationError::TooLong {
                    field: "network.passphrase",
                    len: 65,
                    max: 64
                },
            ]
        );
    }

    #[test]
    fn test_ssid_limit() {
        let mut errors = Vec::new();
        NetworkCredentials::new("a".repeat(32), "secret").validate(&mut errors);
        assert!(errors.is_empty());

        NetworkCredentials::new("a".repeat(33), "secret").validate(&mut errors);
        assert_eq!(
            errors,
            vec![ValidationError::TooLong {
                field: "network.ssid",
                len: 33,
                max: 32
            }]
        );
    }

    #[test]
    fn test_ssid_limit_counts_bytes() {
        // 17 chars, 34 bytes
        let ssid = "é".repeat(17);
        assert_eq!(ssid.chars().count(), 17);

        let mut errors = Vec::new();
        NetworkCredentials::new(ssid, "secret").validate(&mut errors);
        assert_eq!(
            errors,
            vec![ValidationError::TooLong {
                field: "network.ssid",
                len: 34,
                max: 32
            }]
        );

        let mut errors = Vec::new();
        NetworkCredentials::new("é".repeat(16), "secret").validate(&mut errors);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_defaults_are_valid() {
        let mut errors = Vec::new();
        NetworkCredentials::default().validate(&mut errors);
        assert!(errors.is_empty());
    }
}
