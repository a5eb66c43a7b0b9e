//! Normalization pass modules.
//!
//! Each pass is a self-contained `Value -> Value` tree rewrite. A fragment
//! (one property value, or one definitions map) is run through all four in a
//! fixed order; every pass is a total no-op on shapes it does not target, so
//! the composition is safe to apply to arbitrary trees.

pub mod clean;
pub mod color;
pub mod numeric;
pub mod rewrite_refs;
pub mod unions;

use serde_json::Value;

/// Run the full fragment pipeline in canonical order:
/// ref rewrite → deep clean (with union simplification) → color → numeric.
pub fn normalize_fragment(node: &Value) -> Value {
    let node = rewrite_refs::rewrite_common_refs(node);
    let node = clean::deep_clean(&node, false);
    let node = color::replace_color_patterns(&node);
    numeric::replace_number_patterns(&node)
}
