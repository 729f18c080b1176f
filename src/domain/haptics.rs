// LEDC PWM tuning for the vibration motors
use serde::{Deserialize, Serialize};

use super::validation::{ValidationError, require_positive};

const LEDC_CHANNELS: u8 = 16;
const MAX_RESOLUTION_BITS: u8 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HapticConfig {
    pub left_channel: u8,
    pub right_channel: u8,
    pub freq_hz: u32,
    pub resolution_bits: u8,
    pub duty: u32,
}

impl HapticConfig {
    /// Largest duty value the timer resolution can express, `2^bits - 1`.
    pub fn max_duty(&self) -> u32 {
        match self.resolution_bits {
            0 => 0,
            bits if bits >= 32 => u32::MAX,
            bits => (1u32 << bits) - 1,
        }
    }

    /// Duty as a fraction of full scale. Zero when the resolution is zero.
    pub fn duty_fraction(&self) -> f64 {
        match self.max_duty() {
            0 => 0.0,
            max => f64::from(self.duty) / f64::from(max),
        }
    }

    pub fn validate(&self, errors: &mut Vec<ValidationError>) {
        for (field, channel) in [
            ("haptics.left_channel", self.left_channel),
            ("haptics.right_channel", self.right_channel),
        ] {
            if channel >= LEDC_CHANNELS {
                errors.push(ValidationError::OutOfRange {
                    field,
                    value: f64::from(channel),
                    min: 0.0,
                    max: f64::from(LEDC_CHANNELS - 1),
                });
            }
        }
        if self.left_channel == self.right_channel {
            errors.push(ValidationError::SharedChannel(self.left_channel));
        }

        require_positive("haptics.freq_hz", self.freq_hz, errors);

        if !(1..=MAX_RESOLUTION_BITS).contains(&self.resolution_bits) {
            errors.push(ValidationError::OutOfRange {
                field: "haptics.resolution_bits",
                value: f64::from(self.resolution_bits),
                min: 1.0,
                max: f64::from(MAX_RESOLUTION_BITS),
            });
        } else if self.duty > self.max_duty() {
            errors.push(ValidationError::DutyOverflow {
                duty: self.duty,
                max: self.max_duty(),
                bits: self.resolution_bits,
            });
        }
    }
}

impl Default for HapticConfig {
    fn default() -> Self {
        Self {
            left_channel: 0,
            right_channel: 1,
            // Low frequency suits the vibration motor
            freq_hz: 200,
            resolution_bits: 8,
            duty: 180,
        }
    }
}
