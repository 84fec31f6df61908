use std::fmt;

use serde::Serialize;

use crate::panorama_client::helpers::JOB_FINISHED;
use crate::panorama_client::xml::XmlNode;

/// Opaque job identifier issued by the controller on submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct JobHandle(String);

impl JobHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobState {
    Running,
    Terminal,
}

impl JobState {
    pub fn from_status(status: &str) -> Self {
        if status == JOB_FINISHED {
            Self::Terminal
        } else {
            Self::Running
        }
    }
}

/// Snapshot of a job from a single status query.
#[derive(Debug, Clone, Serialize)]
pub struct JobStatus {
    pub state: JobState,
    /// Status text as reported, e.g. `ACT`, `PEND`, `FIN`.
    pub status: String,
    pub progress_percent: u8,
    pub result: Option<String>,
    #[serde(skip)]
    pub node: XmlNode,
}

impl JobStatus {
    pub fn from_node(node: &XmlNode) -> Self {
        let status = node.child_text("status").unwrap_or_default().to_string();
        let state = JobState::from_status(&status);
        let progress_percent = parse_progress(node.child_text("progress"), state);
        let result = node
            .child_text("result")
            .filter(|r| !r.is_empty())
            .map(str::to_string);

        Self {
            state,
            status,
            progress_percent,
            result,
            node: node.clone(),
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.state == JobState::Terminal
    }
}

// Finished jobs report a completion timestamp in <progress> instead of a number.
fn parse_progress(raw: Option<&str>, state: JobState) -> u8 {
    match raw.map(str::trim).and_then(|p| p.parse::<u32>().ok()) {
        Some(value) => value.min(100) as u8,
        None if state == JobState::Terminal => 100,
        None => 0,
    }
}
