//! JSON parsing into the shared node model.
//!
//! This module converts JSON text and `serde_json::Value` trees into
//! `JsonNode` structures. serde_json does the actual parsing; the conversion
//! here only reshapes its value tree into quilljson's shared-handle model.
//!
//! # Example
//!
//! ```
//! use quilljson::document::convert::parse_json;
//!
//! let tree = parse_json(r#"{"name": "Alice", "age": 30}"#).unwrap();
//! assert!(tree.is_container());
//! ```

use super::node::{JsonNode, JsonNumber, JsonValue};
use anyhow::{Context, Result};
use serde_json::Value as SerdeValue;

/// Parses a JSON string into a `JsonNode` tree.
///
/// # Errors
///
/// Returns an error if the input is not valid JSON.
///
/// # Example
///
/// ```
/// use quilljson::document::convert::parse_json;
///
/// assert!(parse_json(r#"[1, 2, 3]"#).is_ok());
/// assert!(parse_json(r#"{"unclosed": "#).is_err());
/// ```
pub fn parse_json(json_str: &str) -> Result<JsonNode> {
    let value: SerdeValue = serde_json::from_str(json_str).context("Failed to parse JSON")?;
    Ok(parse_value(&value))
}

/// Converts a `serde_json::Value` into a `JsonNode`.
///
/// Object member order is preserved (serde_json is built with
/// `preserve_order`). Integer-representable numbers become
/// `JsonNumber::Integer`; everything else becomes `JsonNumber::Float`.
pub fn parse_value(value: &SerdeValue) -> JsonNode {
    let json_value = match value {
        SerdeValue::Object(map) => {
            let entries = map
                .iter()
                .map(|(key, child)| (key.clone(), parse_value(child)))
                .collect();
            JsonValue::Object(entries)
        }
        SerdeValue::Array(arr) => {
            let elements = arr.iter().map(parse_value).collect();
            JsonValue::Array(elements)
        }
        SerdeValue::String(s) => JsonValue::String(s.clone()),
        SerdeValue::Number(n) => match n.as_i64() {
            Some(i) => JsonValue::Number(JsonNumber::Integer(i)),
            None => JsonValue::Number(JsonNumber::Float(n.as_f64().unwrap_or(0.0))),
        },
        SerdeValue::Bool(b) => JsonValue::Boolean(*b),
        SerdeValue::Null => JsonValue::Null,
    };

    JsonNode::new(json_value)
}
