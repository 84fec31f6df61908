use tracing::{error, info};

use crate::types::PanoramaError;

use super::super::api::ApiQuery;
use super::super::client::PanoramaClient;
use super::super::models::{DeviceRecord, OutOfSyncDevice};
use super::super::xml::XmlNode;

impl PanoramaClient {
    /// List every managed device, grouped by device group, in document order.
    ///
    /// A response the controller flags as failed, or one that cannot be parsed,
    /// is logged verbatim and yields an empty inventory. Transport failures are
    /// returned to the caller.
    pub async fn fetch_inventory(&self) -> Result<Vec<DeviceRecord>, PanoramaError> {
        info!("Querying controller for device groups");

        let response = match self.request(&ApiQuery::device_groups()).await {
            Ok(response) => response,
            Err(err @ PanoramaError::Protocol { .. }) => {
                error!(
                    error = %err,
                    body = err.raw_body().unwrap_or_default(),
                    "Inventory response could not be parsed"
                );
                return Ok(Vec::new());
            }
            Err(err) => return Err(err),
        };

        if !response.is_success() {
            error!(
                status = response.status().unwrap_or("<missing>"),
                body = %response.body,
                "Controller reported an error for the inventory query"
            );
            return Ok(Vec::new());
        }

        let records = parse_inventory(&response.root);
        info!(devices = records.len(), "Inventory fetched");
        Ok(records)
    }
}

pub fn parse_inventory(root: &XmlNode) -> Vec<DeviceRecord> {
    let mut records = Vec::new();
    for group in root.find_all("devicegroups/entry") {
        let group_id = group.attr("name").unwrap_or_default();
        for device in group.find_all("devices/entry") {
            records.push(DeviceRecord {
                group_id: group_id.to_string(),
                device_id: device.attr("name").unwrap_or_default().to_string(),
                connectivity: device.child_text("connected").unwrap_or_default().to_string(),
                sync_state: device
                    .child_text("shared-policy-status")
                    .unwrap_or_default()
                    .to_string(),
            });
        }
    }
    records
}

/// Keep only devices whose policy state is exactly `Out of Sync`.
pub fn filter_out_of_sync(records: &[DeviceRecord]) -> Vec<OutOfSyncDevice> {
    records
        .iter()
        .filter(|record| record.is_out_of_sync())
        .map(OutOfSyncDevice::from)
        .collect()
}
