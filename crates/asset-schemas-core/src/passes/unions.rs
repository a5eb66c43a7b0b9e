//! Nullable-union simplification.
//!
//! For "nullable" fields the generator wraps the real schema in an extra
//! union level: `{ anyOf: [ <inner>, { type: "null" } ] }`, where `<inner>`
//! often carries its own `anyOf`. Three shapes are recognized, checked in
//! order on any node whose `anyOf` has exactly two entries with exactly one
//! `{ "type": "null" }`:
//!
//! 1. **Nullable number-or-special** — the inner union pairs `type: number`
//!    with the string spellings of Infinity/NaN. The whole node collapses to
//!    a `$ref` to the shared `NullableNumberOrSpecial` definition; siblings
//!    of both levels are merged, inner keys winning on conflict (the inner
//!    entry carries the more specific metadata).
//! 2. **String-or-reference** — the inner union pairs a `"Reference to ..."`
//!    titled string with a `$ref`. The outer union becomes exactly
//!    `[minimal string entry, $ref entry, null entry]`.
//! 3. **Generic flatten** — any other inner `anyOf` is spliced into the
//!    outer union, null entry last.
//!
//! Steps repeat until none applies, so a single call is idempotent even when
//! one flatten exposes another collapsible level.

use serde_json::{Map, Value};

use crate::refs::NULLABLE_NUMBER_OR_SPECIAL_REF;
use crate::schema_utils::{is_special_number_string, type_is, without_key};

/// Simplify the nullable-union shapes on one (already cleaned) object node.
///
/// Returns the node unchanged when no shape matches.
pub fn simplify_any_of(obj: Map<String, Value>) -> Map<String, Value> {
    let mut current = obj;
    // Each step either leaves the two-entry nullable precondition behind or
    // strictly reduces union nesting, so this terminates.
    loop {
        match simplify_step(&current) {
            Some(next) => current = next,
            None => return current,
        }
    }
}

/// Apply the first matching rule once; `None` means nothing matched.
fn simplify_step(obj: &Map<String, Value>) -> Option<Map<String, Value>> {
    let Some(Value::Array(items)) = obj.get("anyOf") else {
        return None;
    };
    if items.len() != 2 {
        return None;
    }

    let null_idx = items.iter().position(|item| type_is(item, "null"))?;
    let other = &items[1 - null_idx];
    if type_is(other, "null") {
        return None;
    }
    let null_item = items[null_idx].clone();
    let other_obj = other.as_object()?;
    let Some(Value::Array(nested)) = other_obj.get("anyOf") else {
        return None;
    };

    // Rule 1: number-or-Infinity/NaN inner union → shared nullable def.
    let has_number = nested.iter().any(|item| type_is(item, "number"));
    let has_special = nested.iter().any(is_special_number_string);
    if has_number && has_special {
        let mut merged = without_key(obj, "anyOf");
        for (key, value) in without_key(other_obj, "anyOf") {
            merged.insert(key, value);
        }
        merged.insert(
            "$ref".to_string(),
            Value::String(NULLABLE_NUMBER_OR_SPECIAL_REF.to_string()),
        );
        return Some(merged);
    }

    // Rule 2: string-reference-or-inline-object inner union.
    if nested.len() == 2 {
        let string_entry = nested.iter().find(|item| {
            type_is(item, "string")
                && item
                    .get("title")
                    .and_then(Value::as_str)
                    .is_some_and(|title| title.starts_with("Reference to"))
        });
        let ref_entry = nested.iter().find(|item| item.get("$ref").is_some());

        if let (Some(string_entry), Some(ref_entry)) = (string_entry, ref_entry) {
            let mut minimal = Map::new();
            minimal.insert("type".to_string(), Value::String("string".to_string()));
            if let Some(title) = string_entry.get("title") {
                minimal.insert("title".to_string(), title.clone());
            }

            let mut result = without_key(obj, "anyOf");
            result.insert(
                "anyOf".to_string(),
                Value::Array(vec![Value::Object(minimal), ref_entry.clone(), null_item]),
            );
            return Some(result);
        }
    }

    // Rule 3: splice the inner union into the outer one, null last.
    let mut flattened = nested.clone();
    flattened.push(null_item);
    let mut result = without_key(obj, "anyOf");
    result.insert("anyOf".to_string(), Value::Array(flattened));
    Some(result)
}
