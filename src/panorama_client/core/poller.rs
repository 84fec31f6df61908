//! Job status polling.
//!
//! The poller queries the job once per tick until the controller reports the
//! finished sentinel. Failed ticks (transport errors, unparseable bodies, a
//! missing `<job>` node) are logged and retried without limit; only the
//! cancellation signal ends an unfinished poll.

use std::time::Duration;

use tracing::{info, warn};

use crate::cancel::Cancellation;
use crate::types::PanoramaError;

use super::super::api::ApiQuery;
use super::super::client::PanoramaClient;
use super::super::models::{JobHandle, JobStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub interval: Duration,
    /// When set, consecutive failures double the wait up to this ceiling.
    pub backoff_ceiling: Option<Duration>,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(10),
            backoff_ceiling: None,
        }
    }
}

impl PollPolicy {
    pub fn fixed(interval: Duration) -> Self {
        Self {
            interval,
            backoff_ceiling: None,
        }
    }

    /// Wait before the next tick given the current run of failed ticks.
    pub fn delay_after(&self, consecutive_failures: u32) -> Duration {
        let Some(ceiling) = self.backoff_ceiling else {
            return self.interval;
        };
        if consecutive_failures <= 1 {
            return self.interval;
        }
        let factor = 1u32 << (consecutive_failures - 1).min(16);
        self.interval
            .saturating_mul(factor)
            .min(ceiling.max(self.interval))
    }
}

#[derive(Debug, Clone)]
pub enum PollOutcome {
    Finished(JobStatus),
    Cancelled,
}

pub struct JobPoller<'a> {
    client: &'a PanoramaClient,
    policy: PollPolicy,
}

impl<'a> JobPoller<'a> {
    pub fn new(client: &'a PanoramaClient, policy: PollPolicy) -> Self {
        Self { client, policy }
    }

    pub async fn poll(&self, handle: &JobHandle, mut cancel: Cancellation) -> PollOutcome {
        info!(job = %handle, interval_secs = self.policy.interval.as_secs(), "Monitoring job");
        let mut consecutive_failures: u32 = 0;

        loop {
            if cancel.is_cancelled() {
                info!(job = %handle, "Job monitoring cancelled");
                return PollOutcome::Cancelled;
            }

            match self.client.job_status(handle).await {
                Ok(status) => {
                    consecutive_failures = 0;
                    info!(
                        job = %handle,
                        status = %status.status,
                        result = status.result.as_deref().unwrap_or("-"),
                        progress = status.progress_percent,
                        "Job status"
                    );
                    if status.is_terminal() {
                        return PollOutcome::Finished(status);
                    }
                }
                Err(err) => {
                    consecutive_failures = consecutive_failures.saturating_add(1);
                    warn!(
                        job = %handle,
                        failures = consecutive_failures,
                        error = %err,
                        "Failed to query job status"
                    );
                }
            }

            if cancel.is_cancelled() {
                info!(job = %handle, "Job monitoring cancelled");
                return PollOutcome::Cancelled;
            }

            let delay = self.policy.delay_after(consecutive_failures);
            tokio::select! {
                _ = tokio::time::sleep(delay) => {}
                _ = cancel.cancelled() => {
                    info!(job = %handle, "Job monitoring cancelled");
                    return PollOutcome::Cancelled;
                }
            }
        }
    }
}

impl PanoramaClient {
    /// Query a job once. A controller error status or a missing `<job>` node
    /// is a protocol error.
    pub async fn job_status(&self, handle: &JobHandle) -> Result<JobStatus, PanoramaError> {
        let response = self.request(&ApiQuery::job_status(handle)).await?;
        if !response.is_success() {
            return Err(PanoramaError::protocol(
                "job status query was not successful",
                response.body,
            ));
        }
        match response.root.find("job") {
            Some(job) => Ok(JobStatus::from_node(job)),
            None => Err(PanoramaError::protocol(
                "job status response has no <job> node",
                response.body,
            )),
        }
    }
}
