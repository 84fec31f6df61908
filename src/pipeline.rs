//! One sync run: discover, gate, submit, poll, render.

use serde::Serialize;
use tracing::{info, warn};

use crate::cancel::Cancellation;
use crate::gate::ConfirmationGate;
use crate::panorama_client::{
    filter_out_of_sync, render, GroupedCommand, JobHandle, JobPoller, JobReport,
    OutOfSyncDevice, PanoramaClient, PollOutcome, PollPolicy,
};
use crate::types::PanoramaError;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RunOutcome {
    NothingToSync,
    DryRun {
        candidates: Vec<OutOfSyncDevice>,
    },
    Declined {
        candidates: Vec<OutOfSyncDevice>,
    },
    /// Interrupted before anything was submitted.
    Aborted {
        candidates: Vec<OutOfSyncDevice>,
    },
    Cancelled {
        job: JobHandle,
    },
    Completed {
        job: JobHandle,
        report: JobReport,
    },
}

pub struct Pipeline {
    client: PanoramaClient,
    poll_policy: PollPolicy,
    dry_run: bool,
}

impl Pipeline {
    pub fn new(client: PanoramaClient, poll_policy: PollPolicy) -> Self {
        Self {
            client,
            poll_policy,
            dry_run: false,
        }
    }

    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    pub async fn run(
        &self,
        gate: &dyn ConfirmationGate,
        cancel: Cancellation,
    ) -> Result<RunOutcome, PanoramaError> {
        let records = self.client.fetch_inventory().await?;
        let candidates = filter_out_of_sync(&records);

        if candidates.is_empty() {
            info!("No out-of-sync devices found");
            return Ok(RunOutcome::NothingToSync);
        }

        for device in &candidates {
            info!(
                group = %device.group_id,
                device = %device.device_id,
                connected = %device.connectivity,
                "Out-of-sync device"
            );
        }

        if self.dry_run {
            return Ok(RunOutcome::DryRun { candidates });
        }

        if cancel.is_cancelled() {
            warn!("Interrupted before confirmation, nothing submitted");
            return Ok(RunOutcome::Aborted { candidates });
        }

        if !gate.decide(&candidates)? {
            return Ok(RunOutcome::Declined { candidates });
        }

        let command = GroupedCommand::from_devices(&candidates);
        info!(
            groups = command.groups().len(),
            devices = command.device_count(),
            "Built commit-all command"
        );
        if cancel.is_cancelled() {
            warn!("Interrupted before submission, nothing submitted");
            return Ok(RunOutcome::Aborted { candidates });
        }
        let job = self.client.submit_commit_all(&command.to_xml()).await?;

        match JobPoller::new(&self.client, self.poll_policy)
            .poll(&job, cancel)
            .await
        {
            PollOutcome::Finished(status) => {
                let report = render(&status);
                Ok(RunOutcome::Completed { job, report })
            }
            PollOutcome::Cancelled => Ok(RunOutcome::Cancelled { job }),
        }
    }
}
