// Main entry point - Load, validate and report the device configuration
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use tracker_config::application::config_service::DeviceConfigService;
use tracker_config::infrastructure::config::{CONFIG_FILE_VAR, LayeredConfigSource};
use tracker_config::infrastructure::http_client::build_backend_client;
use tracker_config::presentation::report::{ConfigReport, ReportFormat};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let format = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<ReportFormat>()?,
        None => ReportFormat::Text,
    };

    // Load configuration
    let mut source = LayeredConfigSource::new();
    if let Ok(path) = std::env::var(CONFIG_FILE_VAR) {
        source = source.with_file(path);
    }
    let service = DeviceConfigService::new(Arc::new(source));
    let config = service.load()?;

    // Prove the backend settings produce a usable client
    build_backend_client(&config.backend)?;

    print!("{}", ConfigReport::from_config(&config).render(format)?);

    Ok(())
}
