//! Integration tests for cycle-safe serialization.

use indexmap::IndexMap;
use quilljson::document::convert::{parse_json, parse_value};
use quilljson::{stringify_circular, JsonNode, JsonValue};

/// Acyclic, unshared trees serialize exactly like standard JSON.
#[test]
fn test_acyclic_trees_match_standard_json() {
    let inputs = [
        r#"{"name":"Alice","tags":["a","b"],"meta":{"active":true,"score":1.5}}"#,
        r#"[1,[2,[3,null]]]"#,
        r#""just a string""#,
        "false",
    ];

    for json in inputs {
        let value: serde_json::Value = serde_json::from_str(json).unwrap();
        let tree = parse_value(&value);
        assert_eq!(stringify_circular(&tree), value.to_string());
    }
}

/// A self-reference closes a cycle; the cycle-closing member is dropped and
/// the original object survives.
#[test]
fn test_self_referencing_object() {
    let tree = parse_json(r#"{"n": 42}"#).unwrap();
    if let JsonValue::Object(fields) = &mut *tree.value_mut() {
        fields.insert("self".to_string(), tree.clone());
    }

    assert_eq!(stringify_circular(&tree), r#"{"n":42}"#);
}

/// A cycle through an intermediate container is cut where it closes.
#[test]
fn test_indirect_cycle() {
    let root = parse_json(r#"{"name": "root"}"#).unwrap();
    let child = parse_json(r#"{"name": "child"}"#).unwrap();

    if let JsonValue::Object(fields) = &mut *child.value_mut() {
        fields.insert("parent".to_string(), root.clone());
    }
    if let JsonValue::Object(fields) = &mut *root.value_mut() {
        fields.insert("child".to_string(), child);
    }

    assert_eq!(
        stringify_circular(&root),
        r#"{"name":"root","child":{"name":"child"}}"#
    );
}

/// A cycle through an array drops the cycle-closing element, shrinking the
/// array by one.
#[test]
fn test_cycle_through_array() {
    let root = parse_json(r#"{"items": [1, 2]}"#).unwrap();
    let items = quilljson::path::get(&root, &["items"]).remove(0).unwrap();
    if let JsonValue::Array(elements) = &mut *items.value_mut() {
        elements.push(root.clone());
    }

    assert_eq!(stringify_circular(&root), r#"{"items":[1,2]}"#);
}

/// Diamond sharing: the second sibling reference to the same (acyclic)
/// container is omitted.
#[test]
fn test_diamond_shared_subtree_kept_once() {
    let shared = parse_json(r#"{"v": 1}"#).unwrap();
    let mut fields = IndexMap::new();
    fields.insert("left".to_string(), shared.clone());
    fields.insert("right".to_string(), shared);
    let root = JsonNode::new(JsonValue::Object(fields));

    assert_eq!(stringify_circular(&root), r#"{"left":{"v":1}}"#);
}

/// Identity, not structure, decides deduplication.
#[test]
fn test_structural_twins_are_not_deduplicated() {
    let mut fields = IndexMap::new();
    fields.insert("left".to_string(), parse_json(r#"{"v": 1}"#).unwrap());
    fields.insert("right".to_string(), parse_json(r#"{"v": 1}"#).unwrap());
    let root = JsonNode::new(JsonValue::Object(fields));

    assert_eq!(
        stringify_circular(&root),
        r#"{"left":{"v":1},"right":{"v":1}}"#
    );
}

/// Scalars repeat freely; only containers carry identity.
#[test]
fn test_shared_scalars_always_survive() {
    let leaf = JsonNode::new(JsonValue::String("x".to_string()));
    let root = JsonNode::new(JsonValue::Array(vec![
        leaf.clone(),
        leaf.clone(),
        leaf,
    ]));

    assert_eq!(stringify_circular(&root), r#"["x","x","x"]"#);
}

/// The visited set is per call: serializing twice gives the same text.
#[test]
fn test_visited_state_not_retained_across_calls() {
    let tree = parse_json(r#"{"n": 42}"#).unwrap();
    if let JsonValue::Object(fields) = &mut *tree.value_mut() {
        fields.insert("self".to_string(), tree.clone());
    }

    assert_eq!(stringify_circular(&tree), stringify_circular(&tree));
}
