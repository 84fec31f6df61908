/// Header carrying the controller API key.
pub const API_KEY_HEADER: &str = "X-PAN-KEY";

/// `shared-policy-status` value of a drifted device.
pub const OUT_OF_SYNC: &str = "Out of Sync";

/// Job `status` value of a finished job.
pub const JOB_FINISHED: &str = "FIN";

/// Group label used when a job report does not name the device group.
pub const UNKNOWN_GROUP: &str = "Unknown";

/// Escape text for use in XML element content or a quoted attribute.
pub fn escape_xml(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}
