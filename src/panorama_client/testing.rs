use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::types::PanoramaError;

use super::api::ApiQuery;
use super::transport::Transport;

/// Replays canned responses in order and records every query it receives.
/// Once the script is exhausted every call fails with HTTP 503.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<String, PanoramaError>>>,
    queries: Mutex<Vec<ApiQuery>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, body: impl Into<String>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(body.into()));
        self
    }

    pub fn fail(self, err: PanoramaError) -> Self {
        self.responses.lock().unwrap().push_back(Err(err));
        self
    }

    pub fn queries(&self) -> Vec<ApiQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn get(&self, query: &ApiQuery) -> Result<String, PanoramaError> {
        self.queries.lock().unwrap().push(query.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(PanoramaError::HttpStatus {
                    status: 503,
                    body: "script exhausted".to_string(),
                })
            })
    }
}

pub fn job_xml(status: &str, result: &str, progress: &str) -> String {
    format!(
        r#"<response status="success"><result><job><id>7</id><type>CommitAll</type><status>{status}</status><result>{result}</result><progress>{progress}</progress></job></result></response>"#
    )
}
