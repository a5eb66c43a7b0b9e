//! Cross-document reference constants.
//!
//! All published documents reference shared definitions with the
//! `<file>.schema.json#/$defs/<Name>` convention. Self-document references
//! (`#/$defs/<Name>`) pass through the pipeline untouched.

/// Dialect marker stamped onto every published document.
pub const SCHEMA_DIALECT: &str = "https://json-schema.org/draft/2020-12/schema";

/// The base document every asset type extends via `allOf`.
pub const BASE_SCHEMA_REF: &str = "base.schema.json";

pub const COLOR_RGB_REF: &str = "base.schema.json#/$defs/ColorRGB";
pub const NUMBER_OR_SPECIAL_REF: &str = "base.schema.json#/$defs/NumberOrSpecial";
pub const NULLABLE_NUMBER_OR_SPECIAL_REF: &str =
    "base.schema.json#/$defs/NullableNumberOrSpecial";

/// Reference prefix the generator emits for shared definitions.
pub const LEGACY_COMMON_REF_PREFIX: &str = "common.json#/definitions/";

/// Reference prefix of the published common-definitions document.
pub const COMMON_REF_PREFIX: &str = "common.schema.json#/$defs/";

/// `$id` of the published common-definitions document.
pub const COMMON_SCHEMA_ID: &str = "common.schema.json";
