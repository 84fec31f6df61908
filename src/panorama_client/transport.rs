use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Certificate, Client};
use tokio::fs;
use tracing::{debug, warn};

use crate::config::ControllerSettings;
use crate::types::PanoramaError;

use super::api::ApiQuery;
use super::helpers::API_KEY_HEADER;

/// Sends one XML API query and returns the raw response body.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, query: &ApiQuery) -> Result<String, PanoramaError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn get(&self, query: &ApiQuery) -> Result<String, PanoramaError> {
        self.as_ref().get(query).await
    }
}

/// reqwest-backed transport for `{base}/api/`.
pub struct HttpTransport {
    http: Client,
    endpoint: String,
    api_key: String,
}

impl HttpTransport {
    pub async fn new(settings: &ControllerSettings) -> Result<Self, PanoramaError> {
        let mut builder = Client::builder()
            .timeout(settings.request_timeout)
            .danger_accept_invalid_certs(settings.accept_invalid_certs);

        if settings.accept_invalid_certs {
            warn!(url = %settings.base_url, "Accepting invalid TLS certificates");
        }

        if let Some(path) = &settings.ca_cert_path {
            let pem = fs::read(path).await.map_err(|err| {
                PanoramaError::Config(format!("Failed to read CA bundle {}: {err}", path.display()))
            })?;
            let certificate = Certificate::from_pem(&pem).map_err(|err| {
                PanoramaError::Config(format!("Invalid CA bundle {}: {err}", path.display()))
            })?;
            builder = builder.add_root_certificate(certificate);
        }

        let http = builder.build().map_err(PanoramaError::Http)?;

        Ok(Self {
            http,
            endpoint: format!("{}/api/", settings.base_url.trim_end_matches('/')),
            api_key: settings.api_key.clone(),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, query: &ApiQuery) -> Result<String, PanoramaError> {
        debug!(kind = query.kind, action = ?query.action, "Sending API request");
        let response = self
            .http
            .get(&self.endpoint)
            .header(API_KEY_HEADER, &self.api_key)
            .query(query)
            .send()
            .await
            .map_err(PanoramaError::Http)?;

        let status = response.status();
        let body = response.text().await.map_err(PanoramaError::Http)?;

        if !status.is_success() {
            return Err(PanoramaError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}
