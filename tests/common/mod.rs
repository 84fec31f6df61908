//! Scripted controller shared by the integration tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use panorama_sync::panorama_client::{ApiQuery, Transport};
use panorama_sync::PanoramaError;

/// Replays canned replies in order and records every query it receives.
#[derive(Default)]
pub struct FakeController {
    replies: Mutex<VecDeque<Result<String, PanoramaError>>>,
    seen: Mutex<Vec<ApiQuery>>,
}

impl FakeController {
    pub fn with(replies: Vec<Result<String, PanoramaError>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            seen: Mutex::default(),
        })
    }

    pub fn seen(&self) -> Vec<ApiQuery> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for FakeController {
    async fn get(&self, query: &ApiQuery) -> Result<String, PanoramaError> {
        self.seen.lock().unwrap().push(query.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(PanoramaError::protocol("no scripted reply", "")))
    }
}
