//! Lazy depth-first traversal of scalar leaves.
//!
//! `walk_through` produces an iterator over `(Path, JsonNode)` pairs, one
//! per scalar leaf, in depth-first order. Object children are visited in
//! insertion order and array elements in index order; array indices appear
//! in the emitted path as numeric string segments, indistinguishable from
//! object keys. Null is a scalar leaf and is emitted, never descended into.
//!
//! Each call builds a fresh iterator with its own cursor, so traversals are
//! restartable and partial consumption simply abandons the rest. The
//! traversal assumes an acyclic tree; only the serializer is cycle-safe.
//!
//! # Example
//!
//! ```
//! use quilljson::document::convert::parse_json;
//! use quilljson::document::walk::walk_through;
//!
//! let tree = parse_json(r#"{"a": 10, "g": [{"h": 10}, 40]}"#).unwrap();
//! let paths: Vec<Vec<String>> = walk_through(&tree).map(|(path, _)| path).collect();
//!
//! assert_eq!(paths, vec![
//!     vec!["a".to_string()],
//!     vec!["g".to_string(), "0".to_string(), "h".to_string()],
//!     vec!["g".to_string(), "1".to_string()],
//! ]);
//! ```

use super::node::JsonNode;
use crate::path::Path;

/// Depth-first iterator over `(Path, JsonNode)` scalar-leaf pairs.
///
/// Created by [`walk_through`]. Holds no state beyond its own stack; two
/// iterators over the same tree are independent.
pub struct WalkThrough {
    stack: Vec<(Path, JsonNode)>,
}

impl Iterator for WalkThrough {
    type Item = (Path, JsonNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((path, node)) = self.stack.pop() {
            let children = {
                let value = node.value();
                value.entries()
            };
            match children {
                Some(entries) => {
                    // Reversed so the stack pops children in natural order.
                    for (segment, child) in entries.into_iter().rev() {
                        let mut child_path = path.clone();
                        child_path.push(segment);
                        self.stack.push((child_path, child));
                    }
                }
                None => return Some((path, node)),
            }
        }
        None
    }
}

/// Returns a fresh depth-first traversal over the given tree.
///
/// A scalar root yields nothing: paths address members of a container, and a
/// bare scalar has none. Empty containers also contribute nothing.
pub fn walk_through(root: &JsonNode) -> WalkThrough {
    let mut stack = Vec::new();
    if root.is_container() {
        stack.push((Vec::new(), root.clone()));
    }
    WalkThrough { stack }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::convert::parse_value;
    use crate::document::node::{JsonNumber, JsonValue};

    fn leaf_paths(tree: &JsonNode) -> Vec<String> {
        walk_through(tree).map(|(path, _)| path.join(".")).collect()
    }

    #[test]
    fn test_walk_depth_first_order() {
        let tree = parse_value(&serde_json::json!({"a": 10, "g": [{"h": 10}, 40]}));
        let pairs: Vec<(Vec<String>, JsonNode)> = walk_through(&tree).collect();

        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0].0, vec!["a"]);
        assert!(matches!(
            *pairs[0].1.value(),
            JsonValue::Number(JsonNumber::Integer(10))
        ));
        assert_eq!(pairs[1].0, vec!["g", "0", "h"]);
        assert_eq!(pairs[2].0, vec!["g", "1"]);
        assert!(matches!(
            *pairs[2].1.value(),
            JsonValue::Number(JsonNumber::Integer(40))
        ));
    }

    #[test]
    fn test_walk_emits_null_as_leaf() {
        let tree = parse_value(&serde_json::json!({"a": null, "b": {"c": null}}));
        assert_eq!(leaf_paths(&tree), vec!["a", "b.c"]);
    }

    #[test]
    fn test_walk_scalar_root_yields_nothing() {
        let tree = parse_value(&serde_json::json!(42));
        assert_eq!(walk_through(&tree).count(), 0);

        let tree = parse_value(&serde_json::json!(null));
        assert_eq!(walk_through(&tree).count(), 0);
    }

    #[test]
    fn test_walk_empty_containers_yield_nothing() {
        let tree = parse_value(&serde_json::json!({"a": {}, "b": []}));
        assert_eq!(walk_through(&tree).count(), 0);
    }

    #[test]
    fn test_walk_is_restartable() {
        let tree = parse_value(&serde_json::json!({"a": 1, "b": [2, 3]}));

        let first: Vec<String> = leaf_paths(&tree);
        let second: Vec<String> = leaf_paths(&tree);
        assert_eq!(first, second);
        assert_eq!(first, vec!["a", "b.0", "b.1"]);
    }

    #[test]
    fn test_walk_partial_consumption() {
        let tree = parse_value(&serde_json::json!({"a": 1, "b": 2, "c": 3}));

        let mut walker = walk_through(&tree);
        let (path, _) = walker.next().unwrap();
        assert_eq!(path, vec!["a"]);
        // Dropping the iterator abandons the rest; a new walk starts over.
        drop(walker);
        assert_eq!(walk_through(&tree).count(), 3);
    }

    #[test]
    fn test_walk_array_root() {
        let tree = parse_value(&serde_json::json!(["x", ["y"]]));
        assert_eq!(leaf_paths(&tree), vec!["0", "1.0"]);
    }
}
