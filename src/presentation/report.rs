// Resolved configuration report, secrets redacted
use crate::domain::device_config::DeviceConfig;
use crate::domain::haptics::HapticConfig;
use crate::domain::pins::PinAssignment;
use crate::domain::position::SimulatedPositionParams;
use crate::domain::timing::TimingIntervals;
use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

const REDACTED: &str = "<redacted>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
    Toml,
}

impl FromStr for ReportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "toml" => Ok(ReportFormat::Toml),
            other => anyhow::bail!("unknown report format {:?} (expected text, json or toml)", other),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ConfigReport {
    pub network: NetworkReport,
    pub backend: BackendReport,
    pub gps: SimulatedPositionParams,
    pub timing: TimingIntervals,
    pub pins: PinAssignment,
    pub haptics: HapticConfig,
}

#[derive(Debug, Serialize)]
pub struct NetworkReport {
    pub ssid: String,
    pub passphrase: &'static str,
}

#[derive(Debug, Serialize)]
pub struct BackendReport {
    pub base_url: String,
    pub device_id: String,
    pub tls_verification: bool,
    pub endpoints: BTreeMap<&'static str, String>,
}

impl ConfigReport {
    pub fn from_config(config: &DeviceConfig) -> Self {
        let endpoints = config
            .endpoints()
            .into_iter()
            .map(|(endpoint, url)| (endpoint.name(), url))
            .collect();

        Self {
            network: NetworkReport {
                ssid: config.network.ssid.clone(),
                passphrase: REDACTED,
            },
            backend: BackendReport {
                base_url: config.backend.base_url.clone(),
                device_id: config.backend.device_id.clone(),
                tls_verification: !config.backend.insecure_tls,
                endpoints,
            },
            gps: config.gps.clone(),
            timing: config.timing.clone(),
            pins: config.pins.clone(),
            haptics: config.haptics.clone(),
        }
    }

    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Text => Ok(self.to_string()),
            ReportFormat::Json => {
                serde_json::to_string_pretty(self).context("Failed to render report as JSON")
            }
            ReportFormat::Toml => {
                toml::to_string_pretty(self).context("Failed to render report as TOML")
            }
        }
    }
}

impl fmt::Display for ConfigReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "WiFi       {} (passphrase {})", self.network.ssid, self.network.passphrase)?;
        writeln!(f, "Backend    {} as {}", self.backend.base_url, self.backend.device_id)?;
        writeln!(
            f,
            "TLS        {}",
            if self.backend.tls_verification { "verified" } else { "INSECURE (certificates not checked)" }
        )?;
        for (name, url) in &self.backend.endpoints {
            writeln!(f, "  {:<9}{}", name, url)?;
        }
        writeln!(
            f,
            "GPS        {:.6}, {:.6} +/- {} deg (~{:.0} m)",
            self.gps.base_lat,
            self.gps.base_lng,
            self.gps.coord_variation,
            self.gps.variation_metres()
        )?;
        writeln!(
            f,
            "Timing     gps {}ms, steps {}ms, auto fall {}ms, button failsafe {}ms",
            self.timing.gps_post_interval_ms,
            self.timing.steps_post_interval_ms,
            self.timing.auto_fall_after_ms,
            self.timing.button_failsafe_ms
        )?;
        let pins: Vec<String> = self
            .pins
            .roles()
            .iter()
            .map(|(role, pin)| format!("{}=GPIO{}", role, pin))
            .collect();
        writeln!(f, "Pins       {}", pins.join(", "))?;
        writeln!(
            f,
            "Haptics    ch {}/{}, {} Hz, {}-bit, duty {}/{} ({:.0}%)",
            self.haptics.left_channel,
            self.haptics.right_channel,
            self.haptics.freq_hz,
            self.haptics.resolution_bits,
            self.haptics.duty,
            self.haptics.max_duty(),
            self.haptics.duty_fraction() * 100.0
        )
    }
}
