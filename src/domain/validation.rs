// Validation errors for deployment-time configuration mistakes
use std::fmt;
use thiserror::Error;

use super::pins::PinRole;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field} is {len} bytes, limit is {max}")]
    TooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("backend.base_url {url:?} is not a valid URL: {reason}")]
    MalformedUrl { url: String, reason: String },

    #[error("backend.base_url {url:?} contains whitespace or control characters")]
    UrlWhitespace { url: String },

    #[error("backend.base_url scheme must be http or https, got {scheme:?}")]
    UnsupportedScheme { scheme: String },

    #[error("backend.base_url must not end with '/'")]
    TrailingSlash,

    #[error("backend.base_url must not carry a query or fragment")]
    UnexpectedUrlSuffix,

    #[error("backend.device_id {0:?} is not a legal HTTP header value")]
    IllegalHeaderValue(String),

    #[error("{field} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },

    #[error("GPIO{pin} ({role}) does not exist on the ESP32")]
    UnknownPin { role: PinRole, pin: u8 },

    #[error("GPIO{pin} is assigned to both {first} and {second}")]
    AliasedPin {
        pin: u8,
        first: PinRole,
        second: PinRole,
    },

    #[error("GPIO{pin} ({role}) is wired to the SPI flash")]
    FlashPin { role: PinRole, pin: u8 },

    #[error("GPIO{pin} ({role}) is input-only and has no internal pull-up")]
    NoPullUp { role: PinRole, pin: u8 },

    #[error("GPIO{pin} ({role}) is input-only and cannot drive PWM")]
    InputOnlyPin { role: PinRole, pin: u8 },

    #[error("GPIO{pin} ({role}) is not an ADC1 channel")]
    NotAnalogPin { role: PinRole, pin: u8 },

    #[error("haptics.left_channel and haptics.right_channel are both {0}")]
    SharedChannel(u8),

    #[error("haptics.duty {duty} exceeds {max} for {bits}-bit resolution")]
    DutyOverflow { duty: u32, max: u32, bits: u8 },
}

/// Every violation found in one pass over a configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} configuration error(s)", self.0.len())?;
        for error in &self.0 {
            write!(f, "\n  - {}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Push a `Zero` violation when `value` is 0.
pub(crate) fn require_positive(field: &'static str, value: u32, errors: &mut Vec<ValidationError>) {
    if value == 0 {
        errors.push(ValidationError::Zero { field });
    }
}

/// Push an `OutOfRange` violation unless `min <= value <= max`. NaN is out of range.
pub(crate) fn require_within(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
    errors: &mut Vec<ValidationError>,
) {
    if !(min..=max).contains(&value) {
        errors.push(ValidationError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
}
