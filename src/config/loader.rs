use std::env;
use std::path::Path;

use tokio::fs;
use tracing::{info, warn};

use crate::types::PanoramaError;

use super::{paths, Config};

impl Config {
    /// Load the config file (if any) and apply environment overrides.
    /// An explicit path must exist; the default path may be absent.
    pub async fn load(explicit: Option<&Path>) -> Result<Self, PanoramaError> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path).await?,
            None => {
                let path = paths::default_config_path();
                if path.exists() {
                    Self::from_file(&path).await?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env_with(|key| env::var(key).ok());

        info!(
            url = config.url.as_deref().unwrap_or("<unset>"),
            require_confirmation = config.require_confirmation,
            "Loaded configuration"
        );
        if config.accept_invalid_certs {
            warn!("TLS certificate validation is disabled for the controller connection");
        }
        Ok(config)
    }

    async fn from_file(path: &Path) -> Result<Self, PanoramaError> {
        let contents = fs::read_to_string(path).await.map_err(|err| {
            PanoramaError::Config(format!("Failed to read {}: {err}", path.display()))
        })?;

        serde_json::from_str(&contents).map_err(|err| {
            PanoramaError::Config(format!("Failed to parse {}: {err}", path.display()))
        })
    }

    /// Apply `PAN_URL`, `PAN_API_KEY` and `REQUIRE_CONFIRMATION` from the given lookup.
    pub fn apply_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("PAN_URL").filter(|v| !v.trim().is_empty()) {
            self.url = Some(url.trim().to_string());
        }
        if let Some(key) = lookup("PAN_API_KEY").filter(|v| !v.trim().is_empty()) {
            self.api_key = Some(key.trim().to_string());
        }
        if let Some(flag) = lookup("REQUIRE_CONFIRMATION") {
            match flag.trim().to_ascii_lowercase().as_str() {
                "true" => self.require_confirmation = true,
                "false" => self.require_confirmation = false,
                other => warn!(value = other, "Ignoring unrecognised REQUIRE_CONFIRMATION"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_env_overrides_file_values() {
        let mut config = Config {
            url: Some("https://from-file".to_string()),
            ..Config::default()
        };
        config.apply_env_with(lookup_from(&[
            ("PAN_URL", "https://from-env/"),
            ("PAN_API_KEY", "k3y"),
            ("REQUIRE_CONFIRMATION", "FALSE"),
        ]));
        assert_eq!(config.url.as_deref(), Some("https://from-env/"));
        assert_eq!(config.api_key.as_deref(), Some("k3y"));
        assert!(!config.require_confirmation);
    }

    #[test]
    fn test_unrecognised_confirmation_flag_keeps_value() {
        let mut config = Config::default();
        config.apply_env_with(lookup_from(&[("REQUIRE_CONFIRMATION", "maybe")]));
        assert!(config.require_confirmation);
    }

    #[test]
    fn test_blank_env_values_are_ignored() {
        let mut config = Config {
            api_key: Some("kept".to_string()),
            ..Config::default()
        };
        config.apply_env_with(lookup_from(&[("PAN_API_KEY", "  ")]));
        assert_eq!(config.api_key.as_deref(), Some("kept"));
    }

    #[tokio::test]
    async fn test_from_file_reads_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"url": "https://pano.lab", "api_key": "abc", "poll_backoff_max_secs": 60}}"#
        )
        .unwrap();

        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.url.as_deref(), Some("https://pano.lab"));
        assert_eq!(config.poll_backoff_max_secs, Some(60));
        assert_eq!(config.poll_interval_secs, 10);
    }

    #[tokio::test]
    async fn test_from_file_rejects_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = Config::from_file(file.path()).await.unwrap_err();
        assert!(matches!(err, PanoramaError::Config(_)));
    }

    #[tokio::test]
    async fn test_explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.json");
        assert!(Config::load(Some(missing.as_path())).await.is_err());
    }
}
