use serde::Serialize;

use crate::panorama_client::helpers::OUT_OF_SYNC;

/// One managed device as listed under its device group in the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceRecord {
    pub group_id: String,
    pub device_id: String,
    pub connectivity: String,
    pub sync_state: String,
}

impl DeviceRecord {
    pub fn is_out_of_sync(&self) -> bool {
        self.sync_state == OUT_OF_SYNC
    }
}

/// A device whose local policy has drifted from its group's managed policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutOfSyncDevice {
    pub group_id: String,
    pub device_id: String,
    pub connectivity: String,
}

impl From<&DeviceRecord> for OutOfSyncDevice {
    fn from(record: &DeviceRecord) -> Self {
        Self {
            group_id: record.group_id.clone(),
            device_id: record.device_id.clone(),
            connectivity: record.connectivity.clone(),
        }
    }
}
