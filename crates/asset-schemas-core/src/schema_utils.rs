//! Small shared predicates over schema nodes.
//!
//! The union and pattern passes all match on the same handful of node
//! shapes; keeping the predicates here keeps the matching rules consistent.

use serde_json::{Map, Value};

/// True when the node declares exactly `"type": <type_name>`.
pub(crate) fn type_is(node: &Value, type_name: &str) -> bool {
    node.get("type").and_then(Value::as_str) == Some(type_name)
}

/// True when the node's `pattern` string contains `needle`.
pub(crate) fn pattern_contains(node: &Value, needle: &str) -> bool {
    node.get("pattern")
        .and_then(Value::as_str)
        .is_some_and(|pattern| pattern.contains(needle))
}

/// True for the generator's string spelling of Infinity/NaN: a string type
/// whose `pattern` mentions `Infinity`.
pub(crate) fn is_special_number_string(node: &Value) -> bool {
    type_is(node, "string") && pattern_contains(node, "Infinity")
}

/// Copy of `map` without `key`, preserving entry order.
pub(crate) fn without_key(map: &Map<String, Value>, key: &str) -> Map<String, Value> {
    map.iter()
        .filter(|(k, _)| k.as_str() != key)
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}
