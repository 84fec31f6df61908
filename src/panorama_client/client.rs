use std::sync::Arc;

use crate::config::ControllerSettings;
use crate::types::PanoramaError;

use super::api::{ApiQuery, ApiResponse};
use super::transport::{HttpTransport, Transport};

/// Client for one controller, constructed once per run.
#[derive(Clone)]
pub struct PanoramaClient {
    transport: Arc<dyn Transport>,
}

impl PanoramaClient {
    pub fn new<T>(transport: T) -> Self
    where
        T: Transport + 'static,
    {
        Self {
            transport: Arc::new(transport),
        }
    }

    /// Build a reqwest-backed client from validated settings.
    pub async fn connect(settings: &ControllerSettings) -> Result<Self, PanoramaError> {
        Ok(Self::new(HttpTransport::new(settings).await?))
    }

    /// Send a query and parse the response envelope.
    /// The `status` attribute is left for the caller to judge.
    pub(crate) async fn request(&self, query: &ApiQuery) -> Result<ApiResponse, PanoramaError> {
        let body = self.transport.get(query).await?;
        ApiResponse::parse(body)
    }
}
