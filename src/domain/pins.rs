// GPIO role assignment for the ESP32 board
use serde::{Deserialize, Serialize};
use std::fmt;

use super::validation::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PinRole {
    PushButton,
    VibeLeft,
    VibeRight,
    LidarAnalog,
    WaterAnalog,
}

impl PinRole {
    pub fn key(self) -> &'static str {
        match self {
            PinRole::PushButton => "pins.push_button_pin",
            PinRole::VibeLeft => "pins.vibe_left_pin",
            PinRole::VibeRight => "pins.vibe_right_pin",
            PinRole::LidarAnalog => "pins.lidar_analog_pin",
            PinRole::WaterAnalog => "pins.water_analog_pin",
        }
    }
}

impl fmt::Display for PinRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// GPIO numbers that exist on the classic ESP32.
pub fn is_esp32_gpio(pin: u8) -> bool {
    pin <= 39 && !matches!(pin, 20 | 24 | 28..=31)
}

/// GPIO34-39 have no output driver.
pub fn is_input_only(pin: u8) -> bool {
    (34..=39).contains(&pin)
}

/// GPIO6-11 drive the module's SPI flash.
pub fn is_flash_reserved(pin: u8) -> bool {
    (6..=11).contains(&pin)
}

/// ADC1 stays usable while WiFi is running, ADC2 does not.
pub fn is_adc1(pin: u8) -> bool {
    (32..=39).contains(&pin)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PinAssignment {
    /// Wired with INPUT_PULLUP, button to GND.
    pub push_button_pin: u8,
    pub vibe_left_pin: u8,
    pub vibe_right_pin: u8,
    pub lidar_analog_pin: u8,
    pub water_analog_pin: u8,
}

impl PinAssignment {
    pub fn roles(&self) -> [(PinRole, u8); 5] {
        [
            (PinRole::PushButton, self.push_button_pin),
            (PinRole::VibeLeft, self.vibe_left_pin),
            (PinRole::VibeRight, self.vibe_right_pin),
            (PinRole::LidarAnalog, self.lidar_analog_pin),
            (PinRole::WaterAnalog, self.water_analog_pin),
        ]
    }

    pub fn validate(&self, errors: &mut Vec<ValidationError>) {
        let roles = self.roles();

        for (i, &(role, pin)) in roles.iter().enumerate() {
            if !is_esp32_gpio(pin) {
                errors.push(ValidationError::UnknownPin { role, pin });
                continue;
            }
            if is_flash_reserved(pin) {
                errors.push(ValidationError::FlashPin { role, pin });
                continue;
            }

            match role {
                PinRole::PushButton if is_input_only(pin) => {
                    errors.push(ValidationError::NoPullUp { role, pin });
                }
                PinRole::VibeLeft | PinRole::VibeRight if is_input_only(pin) => {
                    errors.push(ValidationError::InputOnlyPin { role, pin });
                }
                PinRole::LidarAnalog | PinRole::WaterAnalog if !is_adc1(pin) => {
                    errors.push(ValidationError::NotAnalogPin { role, pin });
                }
                _ => {}
            }

            // Report each alias once, against the first role holding the pin
            if let Some(&(first, _)) = roles[..i].iter().find(|(_, other)| *other == pin) {
                errors.push(ValidationError::AliasedPin {
                    pin,
                    first,
                    second: role,
                });
            }
        }
    }
}

impl Default for PinAssignment {
    fn default() -> Self {
        Self {
            push_button_pin: 14,
            vibe_left_pin: 25,
            vibe_right_pin: 26,
            lidar_analog_pin: 34,
            water_analog_pin: 35,
        }
    }
}
