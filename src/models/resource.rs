use serde_json::Value;

use crate::error::{FhirError, Result};

/// A resource about to be returned to a client, dispatched by kind at the
/// server boundary.
#[derive(Debug, Clone)]
pub enum Resource {
    Appointment(Value),
    Patient(Value),
    SearchParameter(Value),
    Other { resource_type: String, content: Value },
}

impl Resource {
    /// Dispatch raw resource content on its `resourceType` field.
    pub fn from_content(content: Value) -> Result<Self> {
        let resource_type = content
            .get("resourceType")
            .and_then(|r| r.as_str())
            .ok_or_else(|| FhirError::InvalidResource("Missing resourceType".to_string()))?
            .to_string();

        Ok(match resource_type.as_str() {
            "Appointment" => Resource::Appointment(content),
            "Patient" => Resource::Patient(content),
            "SearchParameter" => Resource::SearchParameter(content),
            _ => Resource::Other {
                resource_type,
                content,
            },
        })
    }

    pub fn resource_type(&self) -> &str {
        match self {
            Resource::Appointment(_) => "Appointment",
            Resource::Patient(_) => "Patient",
            Resource::SearchParameter(_) => "SearchParameter",
            Resource::Other { resource_type, .. } => resource_type,
        }
    }

    pub fn content(&self) -> &Value {
        match self {
            Resource::Appointment(content) => content,
            Resource::Patient(content) => content,
            Resource::SearchParameter(content) => content,
            Resource::Other { content, .. } => content,
        }
    }
}
