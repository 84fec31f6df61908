use serde::Serialize;

use crate::panorama_client::models::JobHandle;

/// Query-string parameters of one XML API call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiQuery {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<&'static str>,
    pub cmd: String,
}

impl ApiQuery {
    pub fn op(cmd: impl Into<String>) -> Self {
        Self {
            kind: "op",
            action: None,
            cmd: cmd.into(),
        }
    }

    pub fn commit_all(cmd: impl Into<String>) -> Self {
        Self {
            kind: "commit",
            action: Some("all"),
            cmd: cmd.into(),
        }
    }

    pub fn device_groups() -> Self {
        Self::op("<show><devicegroups></devicegroups></show>")
    }

    pub fn job_status(handle: &JobHandle) -> Self {
        Self::op(format!(
            "<show><jobs><id>{}</id></jobs></show>",
            crate::panorama_client::helpers::escape_xml(handle.as_str())
        ))
    }
}
