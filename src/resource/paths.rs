//! Path extraction over structured responses.
//!
//! Paths are dot-separated field names with two extras: a numeric segment
//! indexes into an array, and a trailing `[]` asserts the final value is a
//! list. `Buckets[]`, `Contents[]` and `Owner.DisplayName` are all valid.

use serde_json::Value;

/// Extract the value at `path` within `value`.
///
/// Returns `None` when any segment fails to resolve, or when the path
/// carries the `[]` list marker and the final value is not an array. An
/// empty path resolves to the whole value.
pub fn extract(path: &str, value: &Value) -> Option<Value> {
    let (path, want_list) = match path.strip_suffix("[]") {
        Some(stripped) => (stripped, true),
        None => (path, false),
    };

    let mut current = value;
    if !path.is_empty() {
        for part in path.split('.') {
            current = if let Ok(idx) = part.parse::<usize>() {
                current.get(idx)?
            } else {
                current.get(part)?
            };
        }
    }

    if want_list && !current.is_array() {
        return None;
    }
    Some(current.clone())
}

/// Extract a list at `path`, treating a resolvable non-list as absent.
pub fn extract_list(path: &str, value: &Value) -> Option<Vec<Value>> {
    match extract(path, value)? {
        Value::Array(items) => Some(items),
        _ => None,
    }
}
