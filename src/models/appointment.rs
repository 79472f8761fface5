use chrono::{DateTime, Utc};
use serde_json::Value;

/// Extract Patient references from an Appointment's participant list.
/// Document order and duplicates are preserved.
pub fn patient_participant_refs(content: &Value) -> Vec<String> {
    let mut refs = Vec::new();

    if let Some(participants) = content.get("participant").and_then(|p| p.as_array()) {
        for participant in participants {
            if let Some(reference) = participant
                .get("actor")
                .and_then(|a| a.get("reference"))
                .and_then(|r| r.as_str())
            {
                if reference.starts_with("Patient/") {
                    refs.push(reference.to_string());
                }
            }
        }
    }

    refs
}

/// Parse the appointment start instant.
pub fn start(content: &Value) -> Option<DateTime<Utc>> {
    content
        .get("start")
        .and_then(|s| s.as_str())
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}
