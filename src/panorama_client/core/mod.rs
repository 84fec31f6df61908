mod command;
mod inventory;
mod poller;
mod report;
mod submit;

pub use command::{build_commit_command, GroupTarget, GroupedCommand, COMMIT_POLICY_FLAGS};
pub use inventory::{filter_out_of_sync, parse_inventory};
pub use poller::{JobPoller, PollOutcome, PollPolicy};
pub use report::render;
