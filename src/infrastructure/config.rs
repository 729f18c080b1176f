use crate::application::config_source::{ConfigError, DeviceConfigSource};
use crate::domain::device_config::DeviceConfig;
use config::{Config, Environment, File};

pub const DEFAULT_CONFIG_FILE: &str = "config/device";
pub const ENV_PREFIX: &str = "TRACKER";
/// Overrides the file path. Kept outside the `TRACKER_` namespace.
pub const CONFIG_FILE_VAR: &str = "DEVICE_CONFIG_FILE";

/// Compiled-in defaults, then an optional TOML file, then `TRACKER_*` variables.
#[derive(Debug, Clone)]
pub struct LayeredConfigSource {
    file: Option<String>,
    env_prefix: Option<String>,
    env_vars: Option<config::Map<String, String>>,
}

impl LayeredConfigSource {
    pub fn new() -> Self {
        Self {
            file: Some(DEFAULT_CONFIG_FILE.to_string()),
            env_prefix: Some(ENV_PREFIX.to_string()),
            env_vars: None,
        }
    }

    /// Only the compiled-in defaults.
    pub fn defaults_only() -> Self {
        Self {
            file: None,
            env_prefix: None,
            env_vars: None,
        }
    }

    pub fn with_file(mut self, path: impl Into<String>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Read overrides from `vars` instead of the process environment.
    pub fn with_env_vars(mut self, vars: config::Map<String, String>) -> Self {
        self.env_prefix.get_or_insert_with(|| ENV_PREFIX.to_string());
        self.env_vars = Some(vars);
        self
    }

    fn build(&self) -> Result<Config, config::ConfigError> {
        let defaults = Config::try_from(&DeviceConfig::default())?;
        let mut builder = Config::builder().add_source(defaults);

        if let Some(path) = &self.file {
            tracing::debug!("Reading device configuration file {}", path);
            builder = builder.add_source(File::with_name(path).required(false));
        }

        if let Some(prefix) = &self.env_prefix {
            // TRACKER_BACKEND__BASE_URL -> backend.base_url
            let env = Environment::with_prefix(prefix)
                .prefix_separator("_")
                .separator("__")
                .source(self.env_vars.clone());
            builder = builder.add_source(env);
        }

        builder.build()
    }
}

impl Default for LayeredConfigSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceConfigSource for LayeredConfigSource {
    fn load(&self) -> Result<DeviceConfig, ConfigError> {
        let settings = self.build()?;
        Ok(settings.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_temp_toml(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "tracker-config-{}-{}.toml",
            name,
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults_only() {
        let config = LayeredConfigSource::defaults_only().load().unwrap();
        assert_eq!(config, DeviceConfig::default());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let source = LayeredConfigSource::defaults_only().with_file("does/not/exist/device");
        assert_eq!(source.load().unwrap(), DeviceConfig::default());
    }

    #[test]
    fn test_shipped_sample_file_matches_defaults() {
        let source = LayeredConfigSource::defaults_only().with_file(DEFAULT_CONFIG_FILE);
        assert_eq!(source.load().unwrap(), DeviceConfig::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let path = write_temp_toml(
            "file-overrides",
            r#"
[backend]
base_url = "http://192.168.1.10:3000"

[timing]
gps_post_interval_ms = 2500

[haptics]
duty = 90
"#,
        );

        let source = LayeredConfigSource::defaults_only().with_file(path.to_string_lossy());
        let config = source.load().unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(
            config.fall_endpoint(),
            "http://192.168.1.10:3000/api/fall-detected"
        );
        assert_eq!(config.backend.device_id, "aneesh_bhaiyya");
        assert_eq!(config.timing.gps_post_interval_ms, 2500);
        assert_eq!(config.timing.steps_post_interval_ms, 5000);
        assert_eq!(config.haptics.duty, 90);
        assert_eq!(config.haptics.resolution_bits, 8);
    }

    #[test]
    fn test_env_overrides_file() {
        let path = write_temp_toml(
            "env-overrides",
            r#"
[backend]
device_id = "from_file"

[pins]
push_button_pin = 13
"#,
        );

        let mut vars = config::Map::new();
        vars.insert("TRACKER_BACKEND__DEVICE_ID".to_string(), "from_env".to_string());
        vars.insert("TRACKER_BACKEND__INSECURE_TLS".to_string(), "true".to_string());
        vars.insert("TRACKER_GPS__COORD_VARIATION".to_string(), "0.001".to_string());
        vars.insert("UNRELATED".to_string(), "ignored".to_string());

        let source = LayeredConfigSource::defaults_only()
            .with_file(path.to_string_lossy())
            .with_env_vars(vars);
        let config = source.load().unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.backend.device_id, "from_env");
        assert!(config.backend.insecure_tls);
        assert_eq!(config.pins.push_button_pin, 13);
        assert_eq!(config.gps.coord_variation, 0.001);
    }

    #[test]
    fn test_padded_env_base_url_fails_validation() {
        let mut vars = config::Map::new();
        vars.insert(
            "TRACKER_BACKEND__BASE_URL".to_string(),
            "http://192.168.1.10:3000 ".to_string(),
        );

        let config = LayeredConfigSource::defaults_only()
            .with_env_vars(vars)
            .load()
            .unwrap();
        assert_eq!(config.backend.base_url, "http://192.168.1.10:3000 ");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_file_var_stays_out_of_env_layer() {
        let mut vars = config::Map::new();
        vars.insert(CONFIG_FILE_VAR.to_string(), "elsewhere/device".to_string());
        vars.insert("TRACKER_CONFIG_FILE".to_string(), "elsewhere/device".to_string());

        let settings = LayeredConfigSource::defaults_only()
            .with_env_vars(vars)
            .build()
            .unwrap();
        assert!(settings.get_string("device_config_file").is_err());
        // The old name would have leaked in as a top-level key
        assert!(settings.get_string("config_file").is_ok());
    }

    #[test]
    fn test_type_mismatch_is_a_source_error() {
        let mut vars = config::Map::new();
        vars.insert("TRACKER_PINS__VIBE_LEFT_PIN".to_string(), "left".to_string());

        let source = LayeredConfigSource::defaults_only().with_env_vars(vars);
        assert!(matches!(source.load(), Err(ConfigError::Source(_))));
    }
}
