//! Rebuilding nested trees from flat dot-keyed mappings, and the inverse.

use crate::document::node::{JsonNode, JsonValue};
use crate::document::walk::walk_through;
use crate::path::{join_path, parse_index, split_flat_key};
use indexmap::IndexMap;

/// Rebuilds a nested tree from a flat mapping of dot-delimited keys.
///
/// Keys are processed in their iteration order. Each key is split into
/// segments; intermediate containers are created as the path is walked, and
/// the kind of a created container is decided by the *next* segment: numeric
/// means array, anything else means object. The root container's kind comes
/// from the first segment of the first key. The leaf value is attached at
/// the final segment.
///
/// When an earlier key already created a container at some position, that
/// container is reused as-is, whatever its kind — first writer wins. A
/// mapping key landing in an existing array has no slot and is dropped; a
/// numeric segment landing in an existing object is used as an ordinary
/// string key. A scalar sitting where a later key needs a container is
/// replaced by a fresh container. Array writes past the end pad the gap
/// with nulls so indices stay contiguous.
///
/// A non-object input has no keys to process and yields an empty object.
///
/// # Example
///
/// ```
/// use quilljson::document::convert::parse_json;
/// use quilljson::document::stringify::stringify_circular;
/// use quilljson::shape::unflatten_object;
///
/// let flat = parse_json(r#"{"a.b.0": 8, "d": 3}"#).unwrap();
/// assert_eq!(
///     stringify_circular(&unflatten_object(&flat)),
///     r#"{"a":{"b":[8]},"d":3}"#
/// );
/// ```
pub fn unflatten_object(flat: &JsonNode) -> JsonNode {
    let entries = {
        let value = flat.value();
        match &*value {
            JsonValue::Object(fields) => fields
                .iter()
                .map(|(key, leaf)| (key.clone(), leaf.clone()))
                .collect::<Vec<_>>(),
            _ => Vec::new(),
        }
    };

    let mut root: Option<JsonNode> = None;
    for (key, leaf) in entries {
        let path = split_flat_key(&key);
        let root_node = root
            .get_or_insert_with(|| new_container(parse_index(&path[0]).is_some()));
        place(root_node, &path, &leaf);
    }

    root.unwrap_or_else(|| JsonNode::new(JsonValue::Object(IndexMap::new())))
}

/// Collapses a tree into a flat object mapping dot-joined walker paths to
/// their scalar leaves.
///
/// Leaves are shared, not copied. On trees with no empty containers and no
/// numeric-key ambiguity this is the inverse of [`unflatten_object`].
pub fn flatten_object(root: &JsonNode) -> JsonNode {
    let mut flat = IndexMap::new();
    for (path, leaf) in walk_through(root) {
        flat.insert(join_path(&path), leaf);
    }
    JsonNode::new(JsonValue::Object(flat))
}

fn new_container(indexed: bool) -> JsonNode {
    if indexed {
        JsonNode::new(JsonValue::Array(Vec::new()))
    } else {
        JsonNode::new(JsonValue::Object(IndexMap::new()))
    }
}

/// Walks one flat key's path from the root, creating containers as needed,
/// and attaches the leaf at the final segment.
fn place(root: &JsonNode, path: &[String], leaf: &JsonNode) {
    let mut current = root.clone();
    for i in 0..path.len() - 1 {
        let segment = &path[i];
        let next_indexed = parse_index(&path[i + 1]).is_some();
        let next = match child_container(&current, segment) {
            Some(existing) => existing,
            None => {
                let created = new_container(next_indexed);
                attach(&current, segment, created.clone());
                created
            }
        };
        current = next;
    }
    attach(&current, &path[path.len() - 1], leaf.clone());
}

/// Looks up an existing container child. Scalar children are not returned,
/// so the caller replaces them with a fresh container.
fn child_container(parent: &JsonNode, segment: &str) -> Option<JsonNode> {
    let value = parent.value();
    let child = match &*value {
        JsonValue::Object(fields) => fields.get(segment).cloned(),
        JsonValue::Array(items) => parse_index(segment).and_then(|idx| items.get(idx).cloned()),
        _ => None,
    };
    child.filter(|node| node.is_container())
}

/// Attaches a child into a container at the given segment.
///
/// Objects accept any segment as a key. Arrays accept only numeric segments,
/// padding with nulls past the end; anything else has no representable slot
/// and is dropped.
fn attach(parent: &JsonNode, segment: &str, child: JsonNode) {
    let mut value = parent.value_mut();
    match &mut *value {
        JsonValue::Object(fields) => {
            fields.insert(segment.to_string(), child);
        }
        JsonValue::Array(items) => {
            if let Some(idx) = parse_index(segment) {
                if idx < items.len() {
                    items[idx] = child;
                } else {
                    while items.len() < idx {
                        items.push(JsonNode::new(JsonValue::Null));
                    }
                    items.push(child);
                }
            }
        }
        _ => {}
    }
}
