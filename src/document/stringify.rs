//! Cycle-safe JSON serialization.
//!
//! Trees built from shared `JsonNode` handles may contain cycles or shared
//! sub-trees. `stringify_circular` serializes such a tree to compact JSON
//! text by tracking the identity of every container it has emitted during
//! the call: the first occurrence of a container is kept, and every later
//! occurrence (including the reference that closes a cycle) is omitted from
//! its parent entirely. This is lossy on purpose; no placeholder is written
//! and no error is raised.
//!
//! Scalars are never identity-tracked, so repeating the same string or
//! number is not affected. Structurally equal but separately constructed
//! containers are distinct identities and both survive.
//!
//! # Example
//!
//! ```
//! use quilljson::document::convert::parse_json;
//! use quilljson::document::node::JsonValue;
//! use quilljson::document::stringify::stringify_circular;
//!
//! let tree = parse_json(r#"{"n": 42}"#).unwrap();
//!
//! // Close a cycle: the object now contains itself under "self".
//! if let JsonValue::Object(fields) = &mut *tree.value_mut() {
//!     fields.insert("self".to_string(), tree.clone());
//! }
//!
//! assert_eq!(stringify_circular(&tree), r#"{"n":42}"#);
//! ```

use super::node::{JsonNode, JsonNumber, JsonValue};
use serde_json::Value as SerdeValue;
use std::collections::HashSet;

/// Serializes a tree to compact JSON text, omitting repeated containers.
///
/// Object member order and array index order are preserved. An acyclic tree
/// with no shared containers serializes exactly as standard JSON.
pub fn stringify_circular(node: &JsonNode) -> String {
    to_value(node).to_string()
}

/// Converts a tree into an acyclic `serde_json::Value`.
///
/// The visited set is fresh per call and spans the whole conversion, so a
/// container shared between two siblings appears only under the first.
pub fn to_value(node: &JsonNode) -> SerdeValue {
    let mut seen = HashSet::new();
    // The root cannot have been seen before the call starts.
    collect(node, &mut seen).unwrap_or(SerdeValue::Null)
}

/// Recursively converts one node, returning `None` for a container whose
/// identity was already emitted.
fn collect(node: &JsonNode, seen: &mut HashSet<usize>) -> Option<SerdeValue> {
    let value = node.value();
    match &*value {
        JsonValue::Object(fields) => {
            if !seen.insert(node.identity()) {
                return None;
            }
            let mut map = serde_json::Map::new();
            for (key, child) in fields {
                if let Some(converted) = collect(child, seen) {
                    map.insert(key.clone(), converted);
                }
            }
            Some(SerdeValue::Object(map))
        }
        JsonValue::Array(items) => {
            if !seen.insert(node.identity()) {
                return None;
            }
            let mut elements = Vec::with_capacity(items.len());
            for child in items {
                if let Some(converted) = collect(child, seen) {
                    elements.push(converted);
                }
            }
            Some(SerdeValue::Array(elements))
        }
        JsonValue::String(s) => Some(SerdeValue::String(s.clone())),
        JsonValue::Number(JsonNumber::Integer(i)) => Some(SerdeValue::from(*i)),
        JsonValue::Number(JsonNumber::Float(f)) => Some(
            // Non-finite floats have no JSON representation and become null.
            serde_json::Number::from_f64(*f)
                .map(SerdeValue::Number)
                .unwrap_or(SerdeValue::Null),
        ),
        JsonValue::Boolean(b) => Some(SerdeValue::Bool(*b)),
        JsonValue::Null => Some(SerdeValue::Null),
    }
}
