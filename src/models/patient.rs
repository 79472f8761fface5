use serde_json::{json, Value};

/// All extension entries on the resource carrying the given url.
pub fn extension_entries<'a>(content: &'a Value, url: &str) -> Vec<&'a Value> {
    content
        .get("extension")
        .and_then(|e| e.as_array())
        .map(|entries| {
            entries
                .iter()
                .filter(|entry| entry.get("url").and_then(|u| u.as_str()) == Some(url))
                .collect()
        })
        .unwrap_or_default()
}

/// Integer value of the first extension entry with the given url.
pub fn integer_extension(content: &Value, url: &str) -> Option<i64> {
    extension_entries(content, url)
        .first()
        .and_then(|entry| entry.get("valueInteger"))
        .and_then(|v| v.as_i64())
}

/// Code value of the first extension entry with the given url.
pub fn code_extension<'a>(content: &'a Value, url: &str) -> Option<&'a str> {
    extension_entries(content, url)
        .first()
        .and_then(|entry| entry.get("valueCode"))
        .and_then(|v| v.as_str())
}

/// Upsert an integer extension on the resource.
///
/// Appends a new entry when none with the url exists. When one or more exist,
/// only the first entry is overwritten; later duplicates are left untouched.
pub fn set_integer_extension(content: &mut Value, url: &str, value: i64) {
    let obj = match content.as_object_mut() {
        Some(obj) => obj,
        None => return,
    };

    let entries = obj
        .entry("extension")
        .or_insert_with(|| Value::Array(Vec::new()));

    let entries = match entries.as_array_mut() {
        Some(entries) => entries,
        None => return,
    };

    for entry in entries.iter_mut() {
        if entry.get("url").and_then(|u| u.as_str()) == Some(url) {
            if let Some(entry_obj) = entry.as_object_mut() {
                entry_obj.insert("valueInteger".to_string(), json!(value));
            }
            return;
        }
    }

    entries.push(json!({ "url": url, "valueInteger": value }));
}
