//! Vendor and editor metadata carried by generated schemas.
//!
//! The generator annotates schemas with two kinds of non-schema data:
//!
//! - **Vendor metadata** — `hytale*` keys describing asset registry wiring
//!   (asset directory, file extension, id provider). Stripped at every level
//!   of every published document.
//! - **Editor metadata** — `$`-prefixed keys written by the visual node
//!   editor (canvas positions, comments, workspace ids). These key names are
//!   only authoring artifacts when they appear as entries of a `properties`
//!   map; elsewhere the same names are legitimate schema content, so they
//!   are stripped only inside `properties`.

use serde::Deserialize;
use serde_json::Value;

/// Vendor annotation keys, removed from all schema objects.
pub const VENDOR_METADATA_KEYS: &[&str] = &[
    "hytale",
    "hytaleCommonAsset",
    "hytaleSchemaTypeField",
    "hytaleAssetRef",
];

/// Node-editor authoring keys, removed only from `properties` maps.
pub const EDITOR_METADATA_KEYS: &[&str] = &[
    "$Title",
    "$Comment",
    "$Author",
    "$TODO",
    "$Position",
    "$FloatingFunctionNodes",
    "$Groups",
    "$WorkspaceID",
    "$NodeId",
    "$NodeEditorMetadata",
];

pub fn is_vendor_key(key: &str) -> bool {
    VENDOR_METADATA_KEYS.contains(&key)
}

pub fn is_editor_key(key: &str) -> bool {
    EDITOR_METADATA_KEYS.contains(&key)
}

/// Typed view of the `hytale` annotation object on a raw asset schema.
///
/// Read off the raw document before cleaning; the driver uses [`Self::path`]
/// to keep the asset-type index current.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorMetadata {
    /// Asset directory relative to the pack root (e.g. `"Item/Items"`).
    pub path: Option<String>,
    /// On-disk file extension for assets of this type.
    pub extension: Option<String>,
    pub id_provider: Option<String>,
    #[serde(default)]
    pub internal_keys: Vec<String>,
}

impl VendorMetadata {
    /// Extract the vendor annotation from a raw document, if present and
    /// well-formed. A malformed annotation is treated as absent.
    pub fn from_document(doc: &Value) -> Option<Self> {
        let meta = doc.get("hytale")?;
        serde_json::from_value(meta.clone()).ok()
    }
}
