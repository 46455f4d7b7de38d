//! JSON document helpers used by create and update operations.

use serde_json::Value;

/// Key under which every document stores its identity.
pub const ID_FIELD: &str = "id";

/// Shallow-merge `updates` into `existing`. Keys in `updates` overwrite
/// keys in `existing`; keys only in `existing` are preserved. An explicit
/// `null` in `updates` is kept as `null`.
///
/// Both arguments must be JSON objects. Non-object inputs are returned as
/// `existing` unchanged.
pub fn merge_document(existing: &Value, updates: &Value) -> Value {
    let (Some(base), Some(patch)) = (existing.as_object(), updates.as_object()) else {
        return existing.clone();
    };

    let mut merged = base.clone();
    for (k, v) in patch {
        merged.insert(k.clone(), v.clone());
    }
    Value::Object(merged)
}

/// Stamp `id` onto an object document, replacing any id the client sent.
///
/// Non-object documents are returned unchanged; validation rejects them.
pub fn with_id(mut doc: Value, id: &str) -> Value {
    if let Some(map) = doc.as_object_mut() {
        map.insert(ID_FIELD.to_string(), Value::String(id.to_string()));
    }
    doc
}
