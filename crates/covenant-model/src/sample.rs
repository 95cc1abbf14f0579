//! Sample-value markers inside opaque request/response payloads.
//!
//! Older tooling records response bodies wrapped in
//! `{"json_class": "Pact::SomethingLike", "contents": ...}` to mean "match
//! the shape of this sample". Loading keeps the wrapper inert so documents
//! round-trip unchanged; extraction unwraps it to the concrete sample on
//! demand.

use serde_json::Value;

pub const SAMPLE_MARKER_JSON_CLASS: &str = "Pact::SomethingLike";

fn sample_contents(value: &Value) -> Option<&Value> {
    let object = value.as_object()?;
    if object.get("json_class")?.as_str()? != SAMPLE_MARKER_JSON_CLASS {
        return None;
    }
    object.get("contents")
}

/// True when the value is a recognized sample-value marker.
pub fn is_sample_marker(value: &Value) -> bool {
    sample_contents(value).is_some()
}

/// Replaces every sample-value marker in the tree with the concrete sample
/// it carries, recursing through arrays, objects, and nested markers. All
/// other structure is inert payload and passes through untouched.
pub fn unwrap_sample_values(value: &Value) -> Value {
    if let Some(contents) = sample_contents(value) {
        return unwrap_sample_values(contents);
    }

    match value {
        Value::Array(items) => Value::Array(items.iter().map(unwrap_sample_values).collect()),
        Value::Object(fields) => Value::Object(
            fields
                .iter()
                .map(|(key, item)| (key.clone(), unwrap_sample_values(item)))
                .collect(),
        ),
        other => other.clone(),
    }
}
