//! Deep metadata strip.
//!
//! Walks a raw schema fragment top-down and rebuilds it without generator
//! noise:
//!
//! 1. Vendor metadata keys are dropped at every level.
//! 2. Editor metadata keys are dropped only when the current node is an
//!    entry of a `properties` map — the traversal carries an explicit
//!    `inside_properties` flag for this, since the same key names are real
//!    schema content elsewhere.
//! 3. `enumDescriptions` / `markdownEnumDescriptions` arrays whose every
//!    element is the empty string are placeholder output and are dropped.
//! 4. `markdownDescription` identical to the sibling `description` is
//!    dropped.
//!
//! After rebuilding each object node, the union simplifier
//! ([`super::unions::simplify_any_of`]) runs on it, so nullable `anyOf`
//! nesting is flattened bottom-up during the same walk.
//!
//! The input is never mutated; collections that filter to nothing are kept
//! as empty collections.

use serde_json::{Map, Value};

use crate::metadata::{is_editor_key, is_vendor_key};

use super::unions::simplify_any_of;

/// Recursively clean a schema fragment.
///
/// `inside_properties` is true only while visiting the immediate values of a
/// `properties` map; it resets to false for array elements and for every
/// other descent.
pub fn deep_clean(node: &Value, inside_properties: bool) -> Value {
    match node {
        Value::Array(items) => {
            Value::Array(items.iter().map(|item| deep_clean(item, false)).collect())
        }
        Value::Object(obj) => {
            let mut cleaned = Map::new();

            for (key, value) in obj {
                if is_vendor_key(key) {
                    continue;
                }
                if inside_properties && is_editor_key(key) {
                    continue;
                }
                if (key == "enumDescriptions" || key == "markdownEnumDescriptions")
                    && is_empty_string_array(value)
                {
                    continue;
                }
                if key == "markdownDescription" && obj.get("description") == Some(value) {
                    continue;
                }

                let next_inside_properties = key == "properties";
                cleaned.insert(key.clone(), deep_clean(value, next_inside_properties));
            }

            Value::Object(simplify_any_of(cleaned))
        }
        other => other.clone(),
    }
}

/// Placeholder enum-description arrays contain only empty strings (an empty
/// array counts — the generator emits those too).
fn is_empty_string_array(value: &Value) -> bool {
    value
        .as_array()
        .is_some_and(|items| items.iter().all(|item| item.as_str() == Some("")))
}
