//! One-level key utilities: renaming and derived-key aggregation.

use crate::document::node::{JsonNode, JsonNumber, JsonValue};
use indexmap::IndexMap;

/// Returns a copy of an object with its top-level keys renamed.
///
/// Keys present in `renames` take their new name; everything else keeps its
/// own. Order is preserved and values are shared, not copied. Only the top
/// level is touched. Non-object inputs yield an empty object.
///
/// # Example
///
/// ```
/// use quilljson::document::convert::parse_json;
/// use quilljson::document::stringify::stringify_circular;
/// use quilljson::flat::rename_keys;
/// use indexmap::IndexMap;
///
/// let obj = parse_json(r#"{"first": "Ada", "last": "Lovelace"}"#).unwrap();
/// let mut renames = IndexMap::new();
/// renames.insert("first".to_string(), "given".to_string());
///
/// assert_eq!(
///     stringify_circular(&rename_keys(&obj, &renames)),
///     r#"{"given":"Ada","last":"Lovelace"}"#
/// );
/// ```
pub fn rename_keys(obj: &JsonNode, renames: &IndexMap<String, String>) -> JsonNode {
    let mut out = IndexMap::new();
    if let JsonValue::Object(fields) = &*obj.value() {
        for (key, value) in fields {
            let name = renames.get(key).cloned().unwrap_or_else(|| key.clone());
            out.insert(name, value.clone());
        }
    }
    JsonNode::new(JsonValue::Object(out))
}

/// Counts array elements by a derived string key.
///
/// Returns an object mapping each derived key to how many elements produced
/// it, keys in first-seen order. Non-array inputs count nothing.
pub fn count_by<F>(seq: &JsonNode, mut key_fn: F) -> JsonNode
where
    F: FnMut(&JsonNode) -> String,
{
    let items = array_items(seq);
    let mut counts: IndexMap<String, i64> = IndexMap::new();
    for item in &items {
        *counts.entry(key_fn(item)).or_insert(0) += 1;
    }

    let fields = counts
        .into_iter()
        .map(|(key, n)| {
            (
                key,
                JsonNode::new(JsonValue::Number(JsonNumber::Integer(n))),
            )
        })
        .collect();
    JsonNode::new(JsonValue::Object(fields))
}

/// Groups array elements by a derived string key.
///
/// Returns an object mapping each derived key to the array of elements that
/// produced it, keys in first-seen order and elements in source order.
/// Elements are shared, not copied.
pub fn group_by<F>(seq: &JsonNode, mut key_fn: F) -> JsonNode
where
    F: FnMut(&JsonNode) -> String,
{
    let items = array_items(seq);
    let mut groups: IndexMap<String, Vec<JsonNode>> = IndexMap::new();
    for item in items {
        let key = key_fn(&item);
        groups.entry(key).or_default().push(item);
    }

    let fields = groups
        .into_iter()
        .map(|(key, members)| (key, JsonNode::new(JsonValue::Array(members))))
        .collect();
    JsonNode::new(JsonValue::Object(fields))
}

fn array_items(seq: &JsonNode) -> Vec<JsonNode> {
    let value = seq.value();
    match &*value {
        JsonValue::Array(items) => items.clone(),
        _ => Vec::new(),
    }
}
