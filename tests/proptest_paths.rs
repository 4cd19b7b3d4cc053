//! Property-based tests using proptest
//!
//! These tests verify the path extraction rules the engine relies on for
//! record lists, attribute sub-paths and tag sets, using randomized
//! response shapes.

use proptest::prelude::*;
use serde_json::{json, Value};

use awsweep::resource::paths::{extract, extract_list};

/// Generate field names shaped like response keys
fn arb_key() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9]{0,11}"
}

/// Generate scalar field values
fn arb_scalar() -> impl Strategy<Value = String> {
    "[a-z0-9 .-]{0,24}"
}

proptest! {
    /// A single-segment path behaves like a direct field lookup
    #[test]
    fn flat_lookup_matches_get(key in arb_key(), value in arb_scalar()) {
        let response = json!({ key.as_str(): &value });
        prop_assert_eq!(extract(&key, &response), Some(Value::String(value)));
    }

    /// A dotted path walks nested objects segment by segment
    #[test]
    fn nested_lookup_walks_segments(
        outer in arb_key(),
        inner in arb_key(),
        value in arb_scalar()
    ) {
        let response = json!({ outer.as_str(): { inner.as_str(): &value } });
        let path = format!("{}.{}", outer, inner);
        prop_assert_eq!(extract(&path, &response), Some(Value::String(value)));
    }

    /// A path into an absent field resolves to nothing, never panics
    #[test]
    fn missing_field_is_none(key in arb_key(), other in arb_key(), value in arb_scalar()) {
        prop_assume!(key != other);
        let response = json!({ key.as_str(): &value });
        prop_assert_eq!(extract(&other, &response), None);
    }

    /// The list marker returns every element of an array field
    #[test]
    fn list_marker_returns_whole_array(
        key in arb_key(),
        items in prop::collection::vec(arb_scalar(), 0..20)
    ) {
        let response = json!({ key.as_str(): items.clone() });
        let path = format!("{}[]", key);
        let extracted = extract_list(&path, &response).expect("array field should extract");
        prop_assert_eq!(extracted.len(), items.len());
    }

    /// The list marker rejects scalar fields of the same name
    #[test]
    fn list_marker_rejects_scalars(key in arb_key(), value in arb_scalar()) {
        let response = json!({ key.as_str(): &value });
        let path = format!("{}[]", key);
        prop_assert_eq!(extract(&path, &response), None);
    }

    /// Numeric segments index into arrays
    #[test]
    fn numeric_segment_indexes_arrays(
        key in arb_key(),
        items in prop::collection::vec(arb_scalar(), 1..20)
    ) {
        let idx = items.len() - 1;
        let response = json!({ key.as_str(): items.clone() });
        let path = format!("{}.{}", key, idx);
        prop_assert_eq!(
            extract(&path, &response),
            Some(Value::String(items[idx].clone()))
        );
    }

    /// Extraction is read-only: repeating it yields the same result
    #[test]
    fn extraction_is_idempotent(key in arb_key(), value in arb_scalar()) {
        let response = json!({ key.as_str(): &value });
        let first = extract(&key, &response);
        let second = extract(&key, &response);
        prop_assert_eq!(first, second);
    }
}
