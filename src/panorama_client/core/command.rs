//! Commit-all command construction.
//!
//! Devices are grouped under their device group in first-seen order and
//! serialized as the `<commit-all>` body. The trailing policy flags are part
//! of the wire contract and are always sent with the same values.

use std::collections::HashMap;

use serde::Serialize;

use super::super::helpers::escape_xml;
use super::super::models::OutOfSyncDevice;

/// Fixed `<shared-policy>` flags sent with every commit-all.
pub const COMMIT_POLICY_FLAGS: [(&str, &str); 5] = [
    ("include-template", "no"),
    ("include-firewall-cluster", "no"),
    ("merge-with-candidate-cfg", "yes"),
    ("force-template-values", "no"),
    ("validate-only", "no"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupTarget {
    pub group_id: String,
    pub device_ids: Vec<String>,
}

/// Devices to push, nested under their owning device group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GroupedCommand {
    groups: Vec<GroupTarget>,
}

impl GroupedCommand {
    pub fn from_devices(devices: &[OutOfSyncDevice]) -> Self {
        let mut groups: Vec<GroupTarget> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for device in devices {
            let slot = *index.entry(device.group_id.as_str()).or_insert_with(|| {
                groups.push(GroupTarget {
                    group_id: device.group_id.clone(),
                    device_ids: Vec::new(),
                });
                groups.len() - 1
            });
            let target = &mut groups[slot];
            if !target.device_ids.contains(&device.device_id) {
                target.device_ids.push(device.device_id.clone());
            }
        }

        Self { groups }
    }

    pub fn groups(&self) -> &[GroupTarget] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn device_count(&self) -> usize {
        self.groups.iter().map(|g| g.device_ids.len()).sum()
    }

    pub fn to_xml(&self) -> String {
        let mut xml = String::from("<commit-all><shared-policy><device-group>");
        for group in &self.groups {
            xml.push_str(&format!(
                r#"<entry name="{}"><devices>"#,
                escape_xml(&group.group_id)
            ));
            for device_id in &group.device_ids {
                xml.push_str(&format!(r#"<entry name="{}"/>"#, escape_xml(device_id)));
            }
            xml.push_str("</devices></entry>");
        }
        xml.push_str("</device-group>");
        for (flag, value) in COMMIT_POLICY_FLAGS {
            xml.push_str(&format!("<{flag}>{value}</{flag}>"));
        }
        xml.push_str("</shared-policy></commit-all>");
        xml
    }
}

pub fn build_commit_command(devices: &[OutOfSyncDevice]) -> String {
    GroupedCommand::from_devices(devices).to_xml()
}
