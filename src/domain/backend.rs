// Backend location, device identity and endpoint builders
use reqwest::Url;
use reqwest::header::HeaderValue;
use serde::{Deserialize, Serialize};

use super::validation::ValidationError;

/// Header the backend uses to attribute requests to a registered device.
pub const DEVICE_ID_HEADER: &str = "X-Device-ID";

/// The three routes the device posts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Location,
    Steps,
    Fall,
}

impl Endpoint {
    pub const ALL: [Endpoint; 3] = [Endpoint::Location, Endpoint::Steps, Endpoint::Fall];

    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Location => "/api/update-location",
            Endpoint::Steps => "/api/update-steps",
            Endpoint::Fall => "/api/fall-detected",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Endpoint::Location => "location",
            Endpoint::Steps => "steps",
            Endpoint::Fall => "fall",
        }
    }

    /// Literal concatenation of `base` and the route path.
    pub fn url(self, base: &str) -> String {
        format!("{}{}", base, self.path())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendEndpoint {
    pub base_url: String,
    pub device_id: String,
    /// Skip certificate validation on https. Testing only.
    pub insecure_tls: bool,
}

impl BackendEndpoint {
    pub fn new(base_url: impl Into<String>, device_id: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            device_id: device_id.into(),
            insecure_tls: false,
        }
    }

    pub fn location_endpoint(&self) -> String {
        Endpoint::Location.url(&self.base_url)
    }

    pub fn steps_endpoint(&self) -> String {
        Endpoint::Steps.url(&self.base_url)
    }

    pub fn fall_endpoint(&self) -> String {
        Endpoint::Fall.url(&self.base_url)
    }

    pub fn endpoint(&self, endpoint: Endpoint) -> String {
        endpoint.url(&self.base_url)
    }

    pub fn device_id_header(&self) -> (&'static str, &str) {
        (DEVICE_ID_HEADER, &self.device_id)
    }

    pub fn is_https(&self) -> bool {
        self.base_url
            .get(..8)
            .is_some_and(|scheme| scheme.eq_ignore_ascii_case("https://"))
    }

    pub fn validate(&self, errors: &mut Vec<ValidationError>) {
        self.validate_base_url(errors);

        if self.device_id.is_empty() {
            errors.push(ValidationError::Empty {
                field: "backend.device_id",
            });
        } else if HeaderValue::from_str(&self.device_id).is_err() {
            errors.push(ValidationError::IllegalHeaderValue(self.device_id.clone()));
        }
    }

    fn validate_base_url(&self, errors: &mut Vec<ValidationError>) {
        if self.base_url.is_empty() {
            errors.push(ValidationError::Empty {
                field: "backend.base_url",
            });
            return;
        }

        // Url::parse trims these, but the endpoints are built from the raw string
        if self
            .base_url
            .chars()
            .any(|c| c.is_whitespace() || c.is_control())
        {
            errors.push(ValidationError::UrlWhitespace {
                url: self.base_url.clone(),
            });
            return;
        }

        let url = match Url::parse(&self.base_url) {
            Ok(url) => url,
            Err(e) => {
                errors.push(ValidationError::MalformedUrl {
                    url: self.base_url.clone(),
                    reason: e.to_string(),
                });
                return;
            }
        };

        if !matches!(url.scheme(), "http" | "https") {
            errors.push(ValidationError::UnsupportedScheme {
                scheme: url.scheme().to_string(),
            });
        } else if url.host_str().is_none_or(str::is_empty) {
            errors.push(ValidationError::MalformedUrl {
                url: self.base_url.clone(),
                reason: "missing host".to_string(),
            });
        }

        if url.query().is_some() || url.fragment().is_some() {
            errors.push(ValidationError::UnexpectedUrlSuffix);
        }

        // Endpoints are joined literally, a trailing slash would produce "//api/..."
        if self.base_url.ends_with('/') {
            errors.push(ValidationError::TrailingSlash);
        }
    }
}

impl Default for BackendEndpoint {
    fn default() -> Self {
        Self::new("https://dipex-gps.vercel.app", "aneesh_bhaiyya")
    }
}
