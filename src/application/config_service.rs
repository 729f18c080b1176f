// Config service - Use case for loading the validated device configuration
use crate::application::config_source::{ConfigError, DeviceConfigSource};
use crate::domain::device_config::DeviceConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct DeviceConfigService {
    source: Arc<dyn DeviceConfigSource>,
}

impl DeviceConfigService {
    pub fn new(source: Arc<dyn DeviceConfigSource>) -> Self {
        Self { source }
    }

    /// Load once at startup and hand out a shared read-only handle.
    pub fn load(&self) -> Result<Arc<DeviceConfig>, ConfigError> {
        let config = self.source.load()?;

        if let Err(errors) = config.validate() {
            tracing::error!("Rejected device configuration: {}", errors);
            return Err(ConfigError::Invalid(errors));
        }

        tracing::info!(
            device_id = %config.backend.device_id,
            base_url = %config.backend.base_url,
            ssid = %config.network.ssid,
            "Loaded device configuration"
        );

        if config.backend.insecure_tls && config.backend.is_https() {
            tracing::warn!(
                "Certificate validation is disabled for {}; do not ship this build",
                config.backend.base_url
            );
        }

        tracing::debug!(
            "GPS every {:?}, steps every {:?}, auto fall after {:?}, button failsafe {:?}",
            config.timing.gps_post_interval(),
            config.timing.steps_post_interval(),
            config.timing.auto_fall_after(),
            config.timing.button_failsafe()
        );

        Ok(Arc::new(config))
    }
}
