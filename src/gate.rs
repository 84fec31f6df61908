//! Decision point between discovery and submission.

use std::io;

use dialoguer::Confirm;
use tokio::runtime::{Handle, RuntimeFlavor};
use tracing::info;

use crate::output;
use crate::panorama_client::OutOfSyncDevice;
use crate::types::PanoramaError;

/// Decides whether the commit-all for `candidates` may proceed.
pub trait ConfirmationGate {
    fn decide(&self, candidates: &[OutOfSyncDevice]) -> Result<bool, PanoramaError>;
}

impl<F> ConfirmationGate for F
where
    F: Fn(&[OutOfSyncDevice]) -> Result<bool, PanoramaError>,
{
    fn decide(&self, candidates: &[OutOfSyncDevice]) -> Result<bool, PanoramaError> {
        self(candidates)
    }
}

/// Headless mode: always proceeds.
pub struct AutoApprove;

impl ConfirmationGate for AutoApprove {
    fn decide(&self, candidates: &[OutOfSyncDevice]) -> Result<bool, PanoramaError> {
        info!(devices = candidates.len(), "Confirmation disabled, proceeding with commit-all");
        Ok(true)
    }
}

/// Lists the candidates on the terminal and asks before proceeding.
pub struct InteractivePrompt;

impl ConfirmationGate for InteractivePrompt {
    fn decide(&self, candidates: &[OutOfSyncDevice]) -> Result<bool, PanoramaError> {
        output::write_candidates(&mut io::stderr().lock(), candidates)?;
        let prompt = format!(
            "Push policy with commit-all to the {} device(s) above?",
            candidates.len()
        );
        let confirmed = run_blocking(|| Confirm::new().with_prompt(prompt).default(false).interact())?;
        if !confirmed {
            info!("Commit-all declined by operator");
        }
        Ok(confirmed)
    }
}

/// Run a blocking call without stalling other tasks on a multi-thread runtime.
/// `block_in_place` panics on a current-thread runtime, so there the call runs inline.
fn run_blocking<T>(call: impl FnOnce() -> T) -> T {
    match Handle::try_current() {
        Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
            tokio::task::block_in_place(call)
        }
        _ => call(),
    }
}
