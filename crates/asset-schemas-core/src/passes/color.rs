//! Color RGB pattern replacement.
//!
//! Color fields come out of the generator as an inline union of a hex-string
//! pattern and an `rgb(...)` function-call pattern, repeated in every schema
//! that uses a color. Published documents reference the shared `ColorRGB`
//! definition in the base document instead.

use serde_json::{json, Map, Value};

use crate::refs::COLOR_RGB_REF;
use crate::schema_utils::pattern_contains;

/// Replace inline Color RGB unions with a `$ref` to the base document.
///
/// A matched node is replaced wholesale; its children are not visited.
pub fn replace_color_patterns(node: &Value) -> Value {
    match node {
        Value::Array(items) => {
            Value::Array(items.iter().map(replace_color_patterns).collect())
        }
        Value::Object(obj) => {
            if is_color_rgb(obj) {
                return json!({ "$ref": COLOR_RGB_REF });
            }
            Value::Object(
                obj.iter()
                    .map(|(key, value)| (key.clone(), replace_color_patterns(value)))
                    .collect(),
            )
        }
        other => other.clone(),
    }
}

fn is_color_rgb(obj: &Map<String, Value>) -> bool {
    if obj.get("title").and_then(Value::as_str) != Some("Color RGB") {
        return false;
    }
    let Some(Value::Array(items)) = obj.get("anyOf") else {
        return false;
    };
    let has_hex = items.iter().any(|item| pattern_contains(item, "#([0-9a-fA-F]"));
    let has_rgb = items.iter().any(|item| pattern_contains(item, "rgb\\("));
    has_hex && has_rgb
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn color_rgb_union_replaced_with_ref() {
        let input = json!({
            "title": "Color RGB",
            "anyOf": [
                { "type": "string", "pattern": "^#([0-9a-fA-F]{6}|[0-9a-fA-F]{3})$" },
                { "type": "string", "pattern": "^rgb\\((\\d+), (\\d+), (\\d+)\\)$" }
            ]
        });

        assert_eq!(
            replace_color_patterns(&input),
            json!({ "$ref": "base.schema.json#/$defs/ColorRGB" })
        );
    }

    #[test]
    fn replacement_happens_inside_nested_structures() {
        let input = json!({
            "properties": {
                "Tint": {
                    "title": "Color RGB",
                    "anyOf": [
                        { "pattern": "#([0-9a-fA-F]{6})" },
                        { "pattern": "rgb\\(" }
                    ]
                }
            }
        });

        let output = replace_color_patterns(&input);
        assert_eq!(
            output["properties"]["Tint"],
            json!({ "$ref": "base.schema.json#/$defs/ColorRGB" })
        );
    }

    #[test]
    fn requires_title_and_both_patterns() {
        // Right union, wrong title.
        let wrong_title = json!({
            "title": "Tint",
            "anyOf": [
                { "pattern": "#([0-9a-fA-F]{6})" },
                { "pattern": "rgb\\(" }
            ]
        });
        assert_eq!(replace_color_patterns(&wrong_title), wrong_title);

        // Right title, missing the rgb() arm.
        let hex_only = json!({
            "title": "Color RGB",
            "anyOf": [
                { "pattern": "#([0-9a-fA-F]{6})" }
            ]
        });
        assert_eq!(replace_color_patterns(&hex_only), hex_only);

        // Right title, no union at all.
        let no_union = json!({ "title": "Color RGB", "type": "string" });
        assert_eq!(replace_color_patterns(&no_union), no_union);
    }
}
