// Periods of the device's periodic actions
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::validation::{ValidationError, require_positive};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingIntervals {
    pub gps_post_interval_ms: u32,
    pub steps_post_interval_ms: u32,
    pub auto_fall_after_ms: u32,
    /// No button press for this long is treated as a fall.
    pub button_failsafe_ms: u32,
}

impl TimingIntervals {
    pub fn gps_post_interval(&self) -> Duration {
        millis(self.gps_post_interval_ms)
    }

    pub fn steps_post_interval(&self) -> Duration {
        millis(self.steps_post_interval_ms)
    }

    pub fn auto_fall_after(&self) -> Duration {
        millis(self.auto_fall_after_ms)
    }

    pub fn button_failsafe(&self) -> Duration {
        millis(self.button_failsafe_ms)
    }

    pub fn validate(&self, errors: &mut Vec<ValidationError>) {
        require_positive("timing.gps_post_interval_ms", self.gps_post_interval_ms, errors);
        require_positive("timing.steps_post_interval_ms", self.steps_post_interval_ms, errors);
        require_positive("timing.auto_fall_after_ms", self.auto_fall_after_ms, errors);
        require_positive("timing.button_failsafe_ms", self.button_failsafe_ms, errors);
    }
}

fn millis(ms: u32) -> Duration {
    Duration::from_millis(u64::from(ms))
}

impl Default for TimingIntervals {
    fn default() -> Self {
        Self {
            gps_post_interval_ms: 10 * 1000,
            steps_post_interval_ms: 5 * 1000,
            auto_fall_after_ms: 30 * 1000,
            button_failsafe_ms: 10 * 1000,
        }
    }
}
