mod device;
mod job;
mod outcome;

pub use device::{DeviceRecord, OutOfSyncDevice};
pub use job::{JobHandle, JobState, JobStatus};
pub use outcome::{DeviceOutcome, JobReport};
