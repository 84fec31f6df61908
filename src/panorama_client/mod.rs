mod api;
mod client;
mod core;
mod helpers;
mod models;
mod transport;
mod xml;

#[cfg(test)]
pub(crate) mod testing;

pub use api::{ApiQuery, ApiResponse};
pub use client::PanoramaClient;
pub use self::core::{
    build_commit_command, filter_out_of_sync, parse_inventory, render, GroupedCommand,
    GroupTarget, JobPoller, PollOutcome, PollPolicy, COMMIT_POLICY_FLAGS,
};
pub use helpers::{escape_xml, JOB_FINISHED, OUT_OF_SYNC, UNKNOWN_GROUP};
pub use models::{
    DeviceOutcome, DeviceRecord, JobHandle, JobReport, JobState, JobStatus, OutOfSyncDevice,
};
pub use transport::{HttpTransport, Transport};
pub use xml::XmlNode;
