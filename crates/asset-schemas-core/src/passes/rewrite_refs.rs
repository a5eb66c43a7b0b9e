//! Reference-path rewriting.
//!
//! The generator writes cross-document references against the raw shared
//! file (`common.json#/definitions/<Name>`). Published documents reference
//! the cleaned common document instead (`common.schema.json#/$defs/<Name>`).
//! Every other `$ref` value — self-document pointers, base-document refs —
//! passes through unchanged.

use serde_json::Value;

use crate::refs::{COMMON_REF_PREFIX, LEGACY_COMMON_REF_PREFIX};

/// Rewrite legacy common-document `$ref` values throughout the tree.
pub fn rewrite_common_refs(node: &Value) -> Value {
    match node {
        Value::Array(items) => Value::Array(items.iter().map(rewrite_common_refs).collect()),
        Value::Object(obj) => Value::Object(
            obj.iter()
                .map(|(key, value)| {
                    if key == "$ref" {
                        (key.clone(), rewrite_ref_value(value))
                    } else {
                        (key.clone(), rewrite_common_refs(value))
                    }
                })
                .collect(),
        ),
        other => other.clone(),
    }
}

fn rewrite_ref_value(value: &Value) -> Value {
    match value.as_str().and_then(|s| s.strip_prefix(LEGACY_COMMON_REF_PREFIX)) {
        Some(rest) => Value::String(format!("{COMMON_REF_PREFIX}{rest}")),
        None => value.clone(),
    }
}
