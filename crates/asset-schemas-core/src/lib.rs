//! Normalization of generated game asset JSON Schemas.
//!
//! The game server emits one JSON Schema per asset type, cluttered with
//! vendor annotations, node-editor authoring metadata, and inconsistently
//! nested `anyOf` unions. This crate turns those raw documents into clean
//! draft 2020-12 schemas suitable for publishing on the documentation site.
//!
//! Everything here is a pure transform over [`serde_json::Value`] — no
//! filesystem or network I/O. The driver (the `asset-schemas` CLI) scans the
//! generator's output directory, feeds each file through
//! [`clean_asset_schema`] (or [`clean_common_schema`] for the shared
//! definitions file), and persists the results plus the asset-type index.
//!
//! ## Pipeline
//!
//! Each schema fragment goes through four passes, in order:
//!
//! 1. [`passes::rewrite_refs`] — legacy `common.json#/definitions/` refs are
//!    rewritten to `common.schema.json#/$defs/`.
//! 2. [`passes::clean`] — vendor and editor metadata is stripped and
//!    nullable `anyOf` unions are simplified.
//! 3. [`passes::color`] — inline Color RGB unions are replaced with a shared
//!    base definition.
//! 4. [`passes::numeric`] — number-or-Infinity/NaN unions are replaced with
//!    a shared base definition.
//!
//! ```rust
//! use asset_schemas_core::clean_asset_schema;
//! use serde_json::json;
//!
//! let raw = json!({
//!     "title": "Sword",
//!     "properties": {
//!         "Damage": { "type": "number", "hytale": { "internalKeys": [] } },
//!         "Parent": { "type": "string" }
//!     }
//! });
//!
//! let cleaned = clean_asset_schema(&raw).unwrap();
//! assert_eq!(cleaned["description"], "Sword asset type");
//! assert_eq!(cleaned["properties"]["Damage"], json!({ "type": "number" }));
//! assert!(cleaned["properties"].get("Parent").is_none());
//! ```

pub mod document;
pub mod error;
pub mod index;
pub mod metadata;
pub mod passes;
pub mod refs;
mod schema_utils;

pub use document::{clean_asset_schema, clean_common_schema, BASE_PROPERTIES};
pub use error::CleanError;
pub use index::{AssetTypeIndex, IndexEntry};
pub use metadata::VendorMetadata;
pub use passes::normalize_fragment;
