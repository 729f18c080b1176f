// Backend HTTP client factory
use crate::domain::backend::BackendEndpoint;
use anyhow::{Context, Result};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client preloaded with the device identity header and the TLS policy.
pub fn build_backend_client(backend: &BackendEndpoint) -> Result<reqwest::Client> {
    let mut headers = HeaderMap::new();
    headers.insert(
        HeaderName::from_static("x-device-id"),
        HeaderValue::from_str(&backend.device_id)
            .context("Device id is not a valid header value")?,
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    if backend.insecure_tls {
        tracing::warn!(
            "Building backend client without certificate validation for {}",
            backend.base_url
        );
    }

    reqwest::Client::builder()
        .default_headers(headers)
        .timeout(REQUEST_TIMEOUT)
        .danger_accept_invalid_certs(backend.insecure_tls)
        .build()
        .context("Failed to build backend HTTP client")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::backend::DEVICE_ID_HEADER;

    #[test]
    fn test_header_name_matches_contract() {
        assert!(HeaderName::from_static("x-device-id")
            .as_str()
            .eq_ignore_ascii_case(DEVICE_ID_HEADER));
    }

    #[test]
    fn test_builds_verifying_client() {
        let backend = BackendEndpoint::default();
        assert!(build_backend_client(&backend).is_ok());
    }

    #[test]
    fn test_builds_insecure_client() {
        let mut backend = BackendEndpoint::default();
        backend.insecure_tls = true;
        assert!(build_backend_client(&backend).is_ok());
    }

    #[test]
    fn test_rejects_unrepresentable_device_id() {
        let backend = BackendEndpoint::new("https://dipex-gps.vercel.app", "bad\r\nid");
        let err = build_backend_client(&backend).unwrap_err();
        assert!(err.to_string().contains("Device id"));
    }
}
