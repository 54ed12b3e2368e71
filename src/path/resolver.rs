//! Selector resolution against a tree.

use super::{parse_index, parse_selector};
use crate::document::node::{JsonNode, JsonValue};

/// Resolves one or more selectors against a tree.
///
/// Returns one result per selector, in selector order. A selector whose path
/// is missing at any step resolves to `None`; nothing is ever raised.
///
/// # Example
///
/// ```
/// use quilljson::document::convert::parse_json;
/// use quilljson::path::get;
///
/// let tree = parse_json(r#"{"a": {"b": [10, 20]}}"#).unwrap();
/// let results = get(&tree, &["a.b[1]", "a.missing"]);
///
/// assert!(results[0].is_some());
/// assert!(results[1].is_none());
/// ```
pub fn get(root: &JsonNode, selectors: &[&str]) -> Vec<Option<JsonNode>> {
    selectors
        .iter()
        .map(|selector| resolve(root, &parse_selector(selector)))
        .collect()
}

/// Walks a parsed path from the root, one segment at a time.
///
/// Objects are stepped into by key (numeric-looking segments included);
/// arrays only by a numeric segment in bounds. Stepping into a scalar, or a
/// container that lacks the segment, short-circuits to `None`. An empty path
/// resolves to the root itself.
pub fn resolve(root: &JsonNode, path: &[String]) -> Option<JsonNode> {
    let mut current = root.clone();
    for segment in path {
        let next = {
            let value = current.value();
            match &*value {
                JsonValue::Object(fields) => fields.get(segment.as_str()).cloned(),
                JsonValue::Array(items) => {
                    parse_index(segment).and_then(|idx| items.get(idx).cloned())
                }
                _ => None,
            }
        };
        match next {
            Some(node) => current = node,
            None => return None,
        }
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::convert::parse_value;
    use crate::document::node::JsonNumber;

    fn sample() -> JsonNode {
        parse_value(&serde_json::json!({
            "selector": {"to": {"val": "x"}},
            "target": [1, 2, {"a": "t"}]
        }))
    }

    #[test]
    fn test_get_multiple_selectors_in_order() {
        let tree = sample();
        let results = get(&tree, &["selector.to.val", "target[0]", "target[2].a"]);

        assert_eq!(results.len(), 3);
        match &*results[0].as_ref().unwrap().value() {
            JsonValue::String(s) => assert_eq!(s, "x"),
            other => panic!("Expected string, got {:?}", other),
        }
        assert!(matches!(
            *results[1].as_ref().unwrap().value(),
            JsonValue::Number(JsonNumber::Integer(1))
        ));
        match &*results[2].as_ref().unwrap().value() {
            JsonValue::String(s) => assert_eq!(s, "t"),
            other => panic!("Expected string, got {:?}", other),
        }
    }

    #[test]
    fn test_get_missing_path_is_none() {
        let tree = sample();
        let results = get(&tree, &["selector.missing.val", "target[9]", "nope"]);
        assert!(results.iter().all(Option::is_none));
    }

    #[test]
    fn test_resolve_through_scalar_is_none() {
        let tree = sample();
        // "val" is a string; stepping further cannot succeed.
        assert!(resolve(
            &tree,
            &["selector".into(), "to".into(), "val".into(), "deep".into()]
        )
        .is_none());
    }

    #[test]
    fn test_resolve_empty_path_is_root() {
        let tree = sample();
        let resolved = resolve(&tree, &[]).unwrap();
        assert!(resolved.is_same(&tree));
    }

    #[test]
    fn test_resolve_numeric_key_on_object() {
        let tree = parse_value(&serde_json::json!({"0": "zero"}));
        let results = get(&tree, &["[0]"]);
        match &*results[0].as_ref().unwrap().value() {
            JsonValue::String(s) => assert_eq!(s, "zero"),
            other => panic!("Expected string, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_non_numeric_segment_on_array() {
        let tree = parse_value(&serde_json::json!([1, 2, 3]));
        assert!(resolve(&tree, &["length".into()]).is_none());
        assert!(resolve(&tree, &["01".into()]).is_none());
    }
}
