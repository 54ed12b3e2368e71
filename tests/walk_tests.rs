//! Integration tests for lazy depth-first leaf traversal.

use quilljson::document::convert::parse_json;
use quilljson::{walk_through, JsonNumber, JsonValue};

#[test]
fn test_walk_yields_leaves_depth_first() {
    let tree = parse_json(r#"{"a": 10, "g": [{"h": 10}, 40]}"#).unwrap();

    let pairs: Vec<_> = walk_through(&tree).collect();
    assert_eq!(pairs.len(), 3);

    assert_eq!(pairs[0].0, vec!["a"]);
    assert!(matches!(
        *pairs[0].1.value(),
        JsonValue::Number(JsonNumber::Integer(10))
    ));

    assert_eq!(pairs[1].0, vec!["g", "0", "h"]);
    assert!(matches!(
        *pairs[1].1.value(),
        JsonValue::Number(JsonNumber::Integer(10))
    ));

    assert_eq!(pairs[2].0, vec!["g", "1"]);
    assert!(matches!(
        *pairs[2].1.value(),
        JsonValue::Number(JsonNumber::Integer(40))
    ));
}

/// Array membership is invisible in the emitted paths: indices are plain
/// numeric string segments.
#[test]
fn test_walk_paths_do_not_distinguish_arrays_from_objects() {
    let from_array = parse_json(r#"{"g": ["x"]}"#).unwrap();
    let from_object = parse_json(r#"{"g": {"0": "x"}}"#).unwrap();

    let array_paths: Vec<_> = walk_through(&from_array).map(|(p, _)| p).collect();
    let object_paths: Vec<_> = walk_through(&from_object).map(|(p, _)| p).collect();
    assert_eq!(array_paths, object_paths);
}

/// Null is emitted as a leaf, never descended into.
#[test]
fn test_walk_null_is_a_leaf() {
    let tree = parse_json(r#"{"a": null, "b": [null], "c": {"d": null}}"#).unwrap();

    let pairs: Vec<_> = walk_through(&tree).collect();
    assert_eq!(pairs.len(), 3);
    for (_, leaf) in &pairs {
        assert!(matches!(*leaf.value(), JsonValue::Null));
    }
    let paths: Vec<String> = pairs.iter().map(|(p, _)| p.join(".")).collect();
    assert_eq!(paths, vec!["a", "b.0", "c.d"]);
}

/// Every call produces a fresh traversal; consuming one does not affect
/// another.
#[test]
fn test_walk_restartable_and_independent() {
    let tree = parse_json(r#"{"a": 1, "b": [2, 3]}"#).unwrap();

    let mut first = walk_through(&tree);
    let mut second = walk_through(&tree);

    // Advance the first walker past two leaves.
    first.next();
    first.next();

    // The second walker still starts at the beginning.
    let (path, _) = second.next().unwrap();
    assert_eq!(path, vec!["a"]);

    // And the first continues where it left off.
    let (path, _) = first.next().unwrap();
    assert_eq!(path, vec!["b", "1"]);
    assert!(first.next().is_none());
}

/// Partial consumption is valid; the remainder is simply abandoned.
#[test]
fn test_walk_partial_consumption() {
    let tree = parse_json(r#"{"a": 1, "b": 2, "c": 3, "d": 4}"#).unwrap();

    let taken: Vec<_> = walk_through(&tree).take(2).map(|(p, _)| p).collect();
    assert_eq!(taken, vec![vec!["a"], vec!["b"]]);

    // The tree is unaffected and walkable again in full.
    assert_eq!(walk_through(&tree).count(), 4);
}

#[test]
fn test_walk_empty_and_scalar_roots() {
    assert_eq!(walk_through(&parse_json("{}").unwrap()).count(), 0);
    assert_eq!(walk_through(&parse_json("[]").unwrap()).count(), 0);
    assert_eq!(walk_through(&parse_json("42").unwrap()).count(), 0);
    assert_eq!(walk_through(&parse_json("null").unwrap()).count(), 0);
}

/// Leaves come back as shared handles into the walked tree.
#[test]
fn test_walk_leaves_share_identity_with_tree() {
    let tree = parse_json(r#"{"a": {"b": "leaf"}}"#).unwrap();

    let (_, leaf) = walk_through(&tree).next().unwrap();
    let direct = quilljson::path::get(&tree, &["a.b"]).remove(0).unwrap();
    assert!(leaf.is_same(&direct));
}
