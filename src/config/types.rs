use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::types::PanoramaError;

/// Settings for one sync run against a single controller.
#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    #[serde(default = "default_require_confirmation")]
    pub require_confirmation: bool,

    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,

    #[serde(default)]
    pub poll_backoff_max_secs: Option<u64>,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default)]
    pub accept_invalid_certs: bool,

    #[serde(default)]
    pub ca_cert_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: None,
            api_key: None,
            require_confirmation: default_require_confirmation(),
            poll_interval_secs: default_poll_interval_secs(),
            poll_backoff_max_secs: None,
            request_timeout_secs: default_request_timeout_secs(),
            accept_invalid_certs: false,
            ca_cert_path: None,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("url", &self.url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("require_confirmation", &self.require_confirmation)
            .field("poll_interval_secs", &self.poll_interval_secs)
            .field("poll_backoff_max_secs", &self.poll_backoff_max_secs)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .field("ca_cert_path", &self.ca_cert_path)
            .finish()
    }
}

fn default_require_confirmation() -> bool {
    true
}

fn default_poll_interval_secs() -> u64 {
    10
}

fn default_request_timeout_secs() -> u64 {
    30
}

/// Validated connection settings handed to the HTTP transport.
#[derive(Clone)]
pub struct ControllerSettings {
    pub base_url: String,
    pub api_key: String,
    pub request_timeout: Duration,
    pub accept_invalid_certs: bool,
    pub ca_cert_path: Option<PathBuf>,
}

impl Config {
    pub fn controller_settings(&self) -> Result<ControllerSettings, PanoramaError> {
        let base_url = non_empty(self.url.as_deref()).ok_or_else(|| {
            PanoramaError::Config("controller URL is not set (PAN_URL or --url)".to_string())
        })?;
        let api_key = non_empty(self.api_key.as_deref()).ok_or_else(|| {
            PanoramaError::Config("API key is not set (PAN_API_KEY)".to_string())
        })?;
        if self.request_timeout_secs == 0 {
            return Err(PanoramaError::Config(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }

        Ok(ControllerSettings {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            accept_invalid_certs: self.accept_invalid_certs,
            ca_cert_path: self.ca_cert_path.clone(),
        })
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs.max(1))
    }

    pub fn poll_backoff_ceiling(&self) -> Option<Duration> {
        self.poll_backoff_max_secs.map(Duration::from_secs)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
