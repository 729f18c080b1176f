// Source trait for loading the device configuration
use crate::domain::device_config::DeviceConfig;
use crate::domain::validation::ValidationErrors;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Source(#[from] config::ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] ValidationErrors),
}

pub trait DeviceConfigSource: Send + Sync {
    /// Produce a configuration. Validation is left to the caller.
    fn load(&self) -> Result<DeviceConfig, ConfigError>;
}
