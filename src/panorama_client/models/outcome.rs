use serde::Serialize;

const RESULT_OK: &str = "OK";

/// Commit outcome for a single device in a finished job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceOutcome {
    pub device_id: String,
    pub owning_group: String,
    pub result: String,
    pub status: String,
}

/// Rendered summary of a finished job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum JobReport {
    Devices { outcomes: Vec<DeviceOutcome> },
    /// The job report carried no device entries.
    JobLevel { result: String, status: String },
}

impl JobReport {
    pub fn outcomes(&self) -> &[DeviceOutcome] {
        match self {
            Self::Devices { outcomes } => outcomes,
            Self::JobLevel { .. } => &[],
        }
    }

    pub fn all_succeeded(&self) -> bool {
        match self {
            Self::Devices { outcomes } => outcomes.iter().all(|o| o.result == RESULT_OK),
            Self::JobLevel { result, .. } => result == RESULT_OK,
        }
    }
}
