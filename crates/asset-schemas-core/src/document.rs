//! Document assembly.
//!
//! Turns one raw generator document into one publishable document. Asset
//! documents get fixed framing (dialect marker, base-document `allOf`) plus
//! their own cleaned properties and local definitions; the shared
//! common-definitions file becomes `common.schema.json` with fixed
//! document-level metadata and its `definitions` map renamed to `$defs`.

use serde_json::{json, Map, Value};
use tracing::debug;

use crate::error::CleanError;
use crate::metadata::is_editor_key;
use crate::passes::normalize_fragment;
use crate::refs::{BASE_SCHEMA_REF, COMMON_SCHEMA_ID, SCHEMA_DIALECT};

/// Fields every asset type shares. They are defined once in the base
/// document and excluded from per-asset `properties`.
pub const BASE_PROPERTIES: &[&str] = &["Parent", "Tags"];

/// Clean one raw asset-type document into its publishable form.
///
/// The raw document must be a JSON object with a string `title`; anything
/// else is rejected so the driver can report and skip the file. A missing
/// `description` falls back to `"<title> asset type"`.
pub fn clean_asset_schema(raw: &Value) -> Result<Value, CleanError> {
    let obj = raw.as_object().ok_or(CleanError::NotAnObject)?;
    let title = obj
        .get("title")
        .and_then(Value::as_str)
        .ok_or(CleanError::MissingTitle)?;
    let description = obj
        .get("description")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_else(|| format!("{title} asset type"));

    let mut cleaned = Map::new();
    cleaned.insert(
        "$schema".to_string(),
        Value::String(SCHEMA_DIALECT.to_string()),
    );
    if let Some(id) = obj.get("$id") {
        cleaned.insert("$id".to_string(), id.clone());
    }
    cleaned.insert("title".to_string(), Value::String(title.to_string()));
    cleaned.insert("description".to_string(), Value::String(description));
    cleaned.insert("type".to_string(), Value::String("object".to_string()));
    cleaned.insert(
        "allOf".to_string(),
        json!([{ "$ref": BASE_SCHEMA_REF }]),
    );

    if let Some(Value::Object(props)) = obj.get("properties") {
        let mut asset_props = Map::new();
        for (key, prop) in props {
            if BASE_PROPERTIES.contains(&key.as_str()) || is_editor_key(key) {
                continue;
            }
            asset_props.insert(key.clone(), normalize_fragment(prop));
        }
        debug!(
            title,
            properties = asset_props.len(),
            "cleaned asset properties"
        );
        if !asset_props.is_empty() {
            cleaned.insert("properties".to_string(), Value::Object(asset_props));
        }
    }

    if let Some(defs) = obj.get("$defs") {
        if defs.as_object().is_some_and(|map| !map.is_empty()) {
            cleaned.insert("$defs".to_string(), normalize_fragment(defs));
        }
    }

    Ok(Value::Object(cleaned))
}

/// Clean the shared common-definitions document into `common.schema.json`.
///
/// Document-level metadata is fixed, not copied from the input; only the
/// `definitions` entries survive, renamed to `$defs` and individually run
/// through the fragment pipeline.
pub fn clean_common_schema(raw: &Value) -> Result<Value, CleanError> {
    let obj = raw.as_object().ok_or(CleanError::NotAnObject)?;

    let mut cleaned = Map::new();
    cleaned.insert(
        "$schema".to_string(),
        Value::String(SCHEMA_DIALECT.to_string()),
    );
    cleaned.insert(
        "$id".to_string(),
        Value::String(COMMON_SCHEMA_ID.to_string()),
    );
    cleaned.insert(
        "title".to_string(),
        Value::String("Common Definitions".to_string()),
    );
    cleaned.insert(
        "description".to_string(),
        Value::String("Shared type definitions used across Hytale asset schemas".to_string()),
    );

    if let Some(Value::Object(definitions)) = obj.get("definitions") {
        if !definitions.is_empty() {
            let mut defs = Map::new();
            for (name, definition) in definitions {
                defs.insert(name.clone(), normalize_fragment(definition));
            }
            debug!(definitions = defs.len(), "cleaned common definitions");
            cleaned.insert("$defs".to_string(), Value::Object(defs));
        }
    }

    Ok(Value::Object(cleaned))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn asset_document_gets_fixed_framing() {
        let raw = json!({
            "$id": "Sword.json",
            "title": "Sword",
            "description": "A sharp thing"
        });

        let cleaned = clean_asset_schema(&raw).unwrap();
        assert_eq!(
            cleaned,
            json!({
                "$schema": "https://json-schema.org/draft/2020-12/schema",
                "$id": "Sword.json",
                "title": "Sword",
                "description": "A sharp thing",
                "type": "object",
                "allOf": [{ "$ref": "base.schema.json" }]
            })
        );
    }

    #[test]
    fn missing_description_falls_back_to_title() {
        let cleaned = clean_asset_schema(&json!({ "title": "Sword" })).unwrap();
        assert_eq!(cleaned["description"], "Sword asset type");
    }

    #[test]
    fn base_properties_and_editor_keys_excluded() {
        let raw = json!({
            "title": "Sword",
            "properties": {
                "Parent": { "type": "string" },
                "Tags": { "type": "array" },
                "$WorkspaceID": "w-1",
                "Health": { "type": "number" }
            }
        });

        let cleaned = clean_asset_schema(&raw).unwrap();
        assert_eq!(
            cleaned["properties"],
            json!({ "Health": { "type": "number" } })
        );
    }

    #[test]
    fn empty_properties_after_exclusion_are_omitted() {
        let raw = json!({
            "title": "Marker",
            "properties": {
                "Parent": { "type": "string" },
                "Tags": { "type": "array" }
            }
        });

        let cleaned = clean_asset_schema(&raw).unwrap();
        assert!(cleaned.get("properties").is_none());
    }

    #[test]
    fn local_defs_run_through_the_pipeline() {
        let raw = json!({
            "title": "Sword",
            "$defs": {
                "Attack": {
                    "hytale": { "internalKeys": [] },
                    "type": "object",
                    "properties": {
                        "Target": { "$ref": "common.json#/definitions/EntityRef" }
                    }
                }
            }
        });

        let cleaned = clean_asset_schema(&raw).unwrap();
        assert_eq!(
            cleaned["$defs"],
            json!({
                "Attack": {
                    "type": "object",
                    "properties": {
                        "Target": { "$ref": "common.schema.json#/$defs/EntityRef" }
                    }
                }
            })
        );
    }

    #[test]
    fn empty_defs_are_omitted() {
        let raw = json!({ "title": "Sword", "$defs": {} });
        let cleaned = clean_asset_schema(&raw).unwrap();
        assert!(cleaned.get("$defs").is_none());
    }

    #[test]
    fn non_object_document_rejected() {
        assert!(matches!(
            clean_asset_schema(&json!([1, 2, 3])),
            Err(CleanError::NotAnObject)
        ));
    }

    #[test]
    fn document_without_title_rejected() {
        assert!(matches!(
            clean_asset_schema(&json!({ "type": "object" })),
            Err(CleanError::MissingTitle)
        ));
        assert!(matches!(
            clean_asset_schema(&json!({ "title": 42 })),
            Err(CleanError::MissingTitle)
        ));
    }

    #[test]
    fn common_document_metadata_is_fixed() {
        let raw = json!({
            "$id": "ignored.json",
            "title": "ignored",
            "definitions": {
                "Vector3": {
                    "type": "object",
                    "hytaleCommonAsset": true,
                    "properties": {
                        "x": { "type": "number" },
                        "y": { "type": "number" },
                        "z": { "type": "number" }
                    }
                }
            }
        });

        let cleaned = clean_common_schema(&raw).unwrap();
        assert_eq!(cleaned["$id"], "common.schema.json");
        assert_eq!(cleaned["title"], "Common Definitions");
        assert_eq!(
            cleaned["$defs"]["Vector3"],
            json!({
                "type": "object",
                "properties": {
                    "x": { "type": "number" },
                    "y": { "type": "number" },
                    "z": { "type": "number" }
                }
            })
        );
        // Legacy container name must not survive.
        assert!(cleaned.get("definitions").is_none());
    }

    #[test]
    fn common_document_without_definitions_has_no_defs() {
        let cleaned = clean_common_schema(&json!({})).unwrap();
        assert!(cleaned.get("$defs").is_none());
    }
}
