use super::super::helpers::UNKNOWN_GROUP;
use super::super::models::{DeviceOutcome, JobReport, JobStatus};

/// Flatten a finished job into per-device outcomes.
///
/// The device group comes from the `dgname` attribute of the entry's `<msg>`
/// metadata and falls back to `Unknown`. Without any device entries the job's
/// own result and status are reported.
pub fn render(terminal: &JobStatus) -> JobReport {
    let entries = terminal.node.find_all("devices/entry");

    if entries.is_empty() {
        return JobReport::JobLevel {
            result: terminal.result.clone().unwrap_or_default(),
            status: terminal.status.clone(),
        };
    }

    let outcomes = entries
        .into_iter()
        .map(|entry| DeviceOutcome {
            device_id: entry
                .child_text("serial-no")
                .or_else(|| entry.attr("name"))
                .unwrap_or_default()
                .to_string(),
            owning_group: entry
                .find("msg")
                .and_then(|msg| msg.attr("dgname"))
                .unwrap_or(UNKNOWN_GROUP)
                .to_string(),
            result: entry.child_text("result").unwrap_or_default().to_string(),
            status: entry.child_text("status").unwrap_or_default().to_string(),
        })
        .collect();

    JobReport::Devices { outcomes }
}
