use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Definition of a custom search parameter registered with the store's
/// indexing subsystem at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchParameterDef {
    pub name: String,
    pub code: String,
    pub description: String,
    pub url: String,
    pub base: String,
    #[serde(rename = "type")]
    pub param_type: String,
    pub xpath: String,
}

impl SearchParameterDef {
    /// Render the definition as SearchParameter resource content.
    pub fn to_resource(&self) -> Value {
        json!({
            "resourceType": "SearchParameter",
            "name": self.name,
            "code": self.code,
            "description": self.description,
            "url": self.url,
            "status": "active",
            "base": self.base,
            "type": self.param_type,
            "xpathUsage": "normal",
            "xpath": self.xpath,
        })
    }

    /// Extension url targeted by an xpath of the form
    /// `Patient.extension('http://...')`.
    pub fn extension_url(&self) -> Option<&str> {
        let start = self.xpath.find("extension('")? + "extension('".len();
        let rest = &self.xpath[start..];
        let end = rest.find("')")?;
        Some(&rest[..end])
    }
}
