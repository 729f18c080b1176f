// Device configuration table - the aggregate every consumer reads
use serde::{Deserialize, Serialize};

use super::backend::{BackendEndpoint, Endpoint};
use super::haptics::HapticConfig;
use super::network::NetworkCredentials;
use super::pins::PinAssignment;
use super::position::SimulatedPositionParams;
use super::timing::TimingIntervals;
use super::validation::ValidationErrors;

/// Immutable after load. Share it behind an `Arc`, never mutate it in place.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    pub network: NetworkCredentials,
    pub backend: BackendEndpoint,
    pub gps: SimulatedPositionParams,
    pub timing: TimingIntervals,
    pub pins: PinAssignment,
    pub haptics: HapticConfig,
}

impl DeviceConfig {
    pub fn location_endpoint(&self) -> String {
        self.backend.location_endpoint()
    }

    pub fn steps_endpoint(&self) -> String {
        self.backend.steps_endpoint()
    }

    pub fn fall_endpoint(&self) -> String {
        self.backend.fall_endpoint()
    }

    pub fn endpoints(&self) -> [(Endpoint, String); 3] {
        Endpoint::ALL.map(|endpoint| (endpoint, self.backend.endpoint(endpoint)))
    }

    /// Check every section and report all violations together.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();
        self.network.validate(&mut errors);
        self.backend.validate(&mut errors);
        self.gps.validate(&mut errors);
        self.timing.validate(&mut errors);
        self.pins.validate(&mut errors);
        self.haptics.validate(&mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }
}
