use tracing::{error, info};

use crate::types::PanoramaError;

use super::super::api::ApiQuery;
use super::super::client::PanoramaClient;
use super::super::models::JobHandle;

impl PanoramaClient {
    /// Enqueue a commit-all and return the job handle.
    ///
    /// Never retried: a rejected request is surfaced with the controller's body.
    pub async fn submit_commit_all(&self, command: &str) -> Result<JobHandle, PanoramaError> {
        info!("Sending commit-all request");
        let response = self.request(&ApiQuery::commit_all(command)).await?;

        if !response.is_success() {
            error!(body = %response.body, "Commit-all was rejected");
            return Err(PanoramaError::SubmissionRejected {
                body: response.body,
            });
        }

        match response.root.find_text("job").map(str::trim) {
            Some(id) if !id.is_empty() => {
                let handle = JobHandle::new(id);
                info!(job = %handle, "Commit-all enqueued");
                Ok(handle)
            }
            _ => Err(PanoramaError::protocol(
                "commit-all succeeded but no job id was returned",
                response.body,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panorama_client::testing::ScriptedTransport;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_submit_returns_job_handle() {
        let transport = Arc::new(ScriptedTransport::new().reply(
            r#"<response status="success" code="19"><result><msg><line>Commit all job enqueued with jobid 1138</line></msg><job>1138</job></result></response>"#,
        ));
        let client = PanoramaClient::new(Arc::clone(&transport));

        let handle = client.submit_commit_all("<commit-all/>").await.unwrap();
        assert_eq!(handle.as_str(), "1138");
        assert_eq!(
            transport.queries(),
            vec![ApiQuery::commit_all("<commit-all/>")]
        );
    }

    #[tokio::test]
    async fn test_rejection_carries_body_and_is_not_retried() {
        let body = r#"<response status="error"><msg>Device group does not exist</msg></response>"#;
        let transport = Arc::new(
            ScriptedTransport::new()
                .reply(body)
                .reply(r#"<response status="success"><result><job>1</job></result></response>"#),
        );
        let client = PanoramaClient::new(Arc::clone(&transport));

        let err = client.submit_commit_all("<commit-all/>").await.unwrap_err();
        assert!(matches!(err, PanoramaError::SubmissionRejected { .. }));
        assert_eq!(err.raw_body(), Some(body));
        assert_eq!(transport.queries().len(), 1);
    }

    #[tokio::test]
    async fn test_success_without_job_is_protocol_error() {
        let client = PanoramaClient::new(
            ScriptedTransport::new().reply(r#"<response status="success"><result/></response>"#),
        );
        let err = client.submit_commit_all("<commit-all/>").await.unwrap_err();
        assert!(matches!(err, PanoramaError::Protocol { .. }));
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let client = PanoramaClient::new(ScriptedTransport::new());
        let err = client.submit_commit_all("<commit-all/>").await.unwrap_err();
        assert!(err.is_transport());
    }
}
