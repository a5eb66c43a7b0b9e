//! Number-or-special-value pattern replacement.
//!
//! Numeric fields that may hold `Infinity`, `-Infinity`, or `NaN` are
//! emitted as a union of `type: number` and a string pattern spelling those
//! values out. The nullable variant of this shape is already collapsed by
//! the union simplifier; this pass picks up the remaining forms:
//!
//! - a two-entry `anyOf` without a null arm → `NumberOrSpecial`;
//! - the same detection on `oneOf`, with the null arm selecting the
//!   `NullableNumberOrSpecial` variant.
//!
//! Sibling keys (`default`, `description`, ...) are preserved on the
//! replaced node.

use serde_json::{Map, Value};

use crate::refs::{NULLABLE_NUMBER_OR_SPECIAL_REF, NUMBER_OR_SPECIAL_REF};
use crate::schema_utils::{is_special_number_string, type_is, without_key};

/// Replace number-or-Infinity/NaN unions with refs to the base document.
pub fn replace_number_patterns(node: &Value) -> Value {
    match node {
        Value::Array(items) => {
            Value::Array(items.iter().map(replace_number_patterns).collect())
        }
        Value::Object(obj) => {
            if let Some(replaced) = try_replace(obj) {
                // Replaced wholesale; siblings are kept as-is, not revisited.
                return Value::Object(replaced);
            }
            Value::Object(
                obj.iter()
                    .map(|(key, value)| (key.clone(), replace_number_patterns(value)))
                    .collect(),
            )
        }
        other => other.clone(),
    }
}

fn try_replace(obj: &Map<String, Value>) -> Option<Map<String, Value>> {
    if let Some(Value::Array(items)) = obj.get("anyOf") {
        if items.len() == 2 {
            let has_number = items.iter().any(|item| type_is(item, "number"));
            let has_special = items.iter().any(is_special_number_string);
            let has_null = items.iter().any(|item| type_is(item, "null"));

            if has_number && has_special && !has_null {
                let mut rest = without_key(obj, "anyOf");
                rest.insert(
                    "$ref".to_string(),
                    Value::String(NUMBER_OR_SPECIAL_REF.to_string()),
                );
                return Some(rest);
            }
        }
    }

    if let Some(Value::Array(items)) = obj.get("oneOf") {
        let has_number = items.iter().any(|item| type_is(item, "number"));
        let has_special = items.iter().any(is_special_number_string);
        let has_null = items.iter().any(|item| type_is(item, "null"));

        if has_number && has_special {
            let target = if has_null {
                NULLABLE_NUMBER_OR_SPECIAL_REF
            } else {
                NUMBER_OR_SPECIAL_REF
            };
            let mut rest = without_key(obj, "oneOf");
            rest.insert("$ref".to_string(), Value::String(target.to_string()));
            return Some(rest);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn non_nullable_any_of_replaced_preserving_siblings() {
        let input = json!({
            "description": "attack range",
            "default": 5.0,
            "anyOf": [
                { "type": "number" },
                { "type": "string", "pattern": "^(Infinity|-Infinity|NaN)$" }
            ]
        });

        let output = replace_number_patterns(&input);
        assert_eq!(
            output,
            json!({
                "description": "attack range",
                "default": 5.0,
                "$ref": "base.schema.json#/$defs/NumberOrSpecial"
            })
        );
    }

    #[test]
    fn nullable_any_of_is_left_for_the_union_simplifier() {
        let input = json!({
            "anyOf": [
                { "type": "number" },
                { "type": "string", "pattern": "Infinity" },
                { "type": "null" }
            ]
        });

        // Three entries: not this pass's shape.
        assert_eq!(replace_number_patterns(&input), input);
    }

    #[test]
    fn one_of_variant_selects_nullable_ref_when_null_present() {
        let input = json!({
            "oneOf": [
                { "type": "number" },
                { "type": "string", "pattern": "^(Infinity|-Infinity|NaN)$" },
                { "type": "null" }
            ]
        });

        assert_eq!(
            replace_number_patterns(&input),
            json!({ "$ref": "base.schema.json#/$defs/NullableNumberOrSpecial" })
        );
    }

    #[test]
    fn one_of_variant_without_null() {
        let input = json!({
            "default": 0,
            "oneOf": [
                { "type": "number" },
                { "type": "string", "pattern": "Infinity" }
            ]
        });

        assert_eq!(
            replace_number_patterns(&input),
            json!({
                "default": 0,
                "$ref": "base.schema.json#/$defs/NumberOrSpecial"
            })
        );
    }

    #[test]
    fn replacement_happens_inside_nested_structures() {
        let input = json!({
            "$defs": {
                "Range": {
                    "anyOf": [
                        { "type": "number" },
                        { "type": "string", "pattern": "Infinity" }
                    ]
                }
            }
        });

        let output = replace_number_patterns(&input);
        assert_eq!(
            output["$defs"]["Range"],
            json!({ "$ref": "base.schema.json#/$defs/NumberOrSpecial" })
        );
    }

    #[test]
    fn unrelated_unions_pass_through() {
        let input = json!({
            "anyOf": [
                { "type": "number" },
                { "type": "string" }
            ],
            "oneOf": [
                { "type": "boolean" },
                { "type": "integer" }
            ]
        });

        assert_eq!(replace_number_patterns(&input), input);
    }
}
