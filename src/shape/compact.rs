//! Recursive falsy pruning.

use crate::document::node::{JsonNode, JsonValue};
use indexmap::IndexMap;

/// Returns a copy of the tree with every falsy value removed, recursively.
///
/// Falsy means null, `false`, numeric zero, or the empty string. Containers
/// are always retained, even when pruning leaves them empty: emptiness does
/// not make a container falsy. Retained containers are replaced by their
/// pruned copies; retained scalars are shared. Arrays close their gaps, so
/// indices stay contiguous.
///
/// The result has the same top-level kind as the input; a scalar input is
/// returned as-is.
///
/// # Example
///
/// ```
/// use quilljson::document::convert::parse_json;
/// use quilljson::document::stringify::stringify_circular;
/// use quilljson::shape::compact_object;
///
/// let tree = parse_json(r#"{"a": null, "b": false, "c": true, "h": [null, false, 1]}"#).unwrap();
/// let pruned = compact_object(&tree);
///
/// assert_eq!(stringify_circular(&pruned), r#"{"c":true,"h":[1]}"#);
/// ```
pub fn compact_object(node: &JsonNode) -> JsonNode {
    let value = node.value();
    match &*value {
        JsonValue::Object(fields) => {
            let mut kept = IndexMap::new();
            for (key, child) in fields {
                if child.is_falsy() {
                    continue;
                }
                let pruned = if child.is_container() {
                    compact_object(child)
                } else {
                    child.clone()
                };
                kept.insert(key.clone(), pruned);
            }
            JsonNode::new(JsonValue::Object(kept))
        }
        JsonValue::Array(items) => {
            let kept = items
                .iter()
                .filter(|child| !child.is_falsy())
                .map(|child| {
                    if child.is_container() {
                        compact_object(child)
                    } else {
                        child.clone()
                    }
                })
                .collect();
            JsonNode::new(JsonValue::Array(kept))
        }
        _ => node.clone(),
    }
}
