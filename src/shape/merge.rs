//! Single-level merge and iteration primitives.
//!
//! These are deliberately shallow: `deep_merge` walks no deeper than one
//! level, and any recursive merging happens only because the caller's
//! combiner recurses.

use crate::document::node::{JsonNode, JsonValue};
use indexmap::IndexMap;

/// Snapshots a node's object entries; non-objects have none.
fn mapping_of(node: &JsonNode) -> IndexMap<String, JsonNode> {
    let value = node.value();
    match &*value {
        JsonValue::Object(fields) => fields.clone(),
        _ => IndexMap::new(),
    }
}

/// Merges two mappings over the union of their keys.
///
/// The result contains every key present in at least one side: first `a`'s
/// keys in `a`'s order, then `b`'s keys that are new, in `b`'s order. For
/// each key the combiner is called with the key and both sides' values
/// (`None` for a missing side) and its return value becomes the entry. The
/// merger itself never recurses; pass a combiner that calls `deep_merge`
/// again to merge nested mappings.
///
/// Non-object inputs contribute no keys.
///
/// # Example
///
/// ```
/// use quilljson::document::convert::parse_json;
/// use quilljson::document::node::{JsonNode, JsonValue};
/// use quilljson::document::stringify::stringify_circular;
/// use quilljson::shape::deep_merge;
///
/// let a = parse_json(r#"{"a": true, "b": 1}"#).unwrap();
/// let b = parse_json(r#"{"a": false, "c": 2}"#).unwrap();
///
/// let merged = deep_merge(&a, &b, |key, x, y| {
///     if key == "a" {
///         let both = x.map_or(false, JsonNode::is_truthy) && y.map_or(false, JsonNode::is_truthy);
///         JsonNode::new(JsonValue::Boolean(both))
///     } else {
///         x.or(y).cloned().unwrap_or_else(|| JsonNode::new(JsonValue::Null))
///     }
/// });
///
/// assert_eq!(stringify_circular(&merged), r#"{"a":false,"b":1,"c":2}"#);
/// ```
pub fn deep_merge<F>(a: &JsonNode, b: &JsonNode, mut combine: F) -> JsonNode
where
    F: FnMut(&str, Option<&JsonNode>, Option<&JsonNode>) -> JsonNode,
{
    let left = mapping_of(a);
    let right = mapping_of(b);

    let mut merged = IndexMap::new();
    for (key, value) in &left {
        merged.insert(key.clone(), combine(key, Some(value), right.get(key)));
    }
    for (key, value) in &right {
        if left.contains_key(key) {
            continue;
        }
        merged.insert(key.clone(), combine(key, None, Some(value)));
    }

    JsonNode::new(JsonValue::Object(merged))
}

/// Left-to-right fold over a mapping's entries.
///
/// The accumulator threads through `fold(acc, value, key)` in the mapping's
/// key iteration order. A non-object input folds over nothing and returns
/// the initial accumulator.
pub fn transform<T, F>(obj: &JsonNode, mut fold: F, init: T) -> T
where
    F: FnMut(T, &JsonNode, &str) -> T,
{
    let entries = mapping_of(obj);
    let mut acc = init;
    for (key, value) in &entries {
        acc = fold(acc, value, key);
    }
    acc
}

/// Returns a value's ordered `(key, value)` pairs.
///
/// Dispatch goes through the entries capability: objects yield their fields
/// in insertion order, arrays yield string-indexed pairs in index order, and
/// values without an entry enumeration yield an empty sequence.
pub fn to_pairs(node: &JsonNode) -> Vec<(String, JsonNode)> {
    let value = node.value();
    value.entries().unwrap_or_default()
}
