//! Query-string parsing into flat string mappings.

use crate::document::node::{JsonNode, JsonValue};
use indexmap::IndexMap;

/// Parses a query string into a flat object of string values.
///
/// Everything after the first `?` is parsed (the whole input when there is
/// no `?`). Pairs are separated by `&`; the first `=` splits key from value,
/// and a pair without `=` gets an empty value. Keys and values are
/// percent-decoded with `+` treated as a space. Nothing is ever raised:
/// undecodable sequences are kept verbatim, and a repeated key keeps its
/// first position with the last value.
///
/// # Example
///
/// ```
/// use quilljson::document::stringify::stringify_circular;
/// use quilljson::flat::parse_query_string;
///
/// let parsed = parse_query_string("https://example.com?a=1&b=two%20words&c");
/// assert_eq!(
///     stringify_circular(&parsed),
///     r#"{"a":"1","b":"two words","c":""}"#
/// );
/// ```
pub fn parse_query_string(input: &str) -> JsonNode {
    let query = match input.find('?') {
        Some(pos) => &input[pos + 1..],
        None => input,
    };

    let mut fields = IndexMap::new();
    for pair in query.split('&') {
        if pair.is_empty() {
            continue;
        }
        let (raw_key, raw_value) = match pair.find('=') {
            Some(pos) => (&pair[..pos], &pair[pos + 1..]),
            None => (pair, ""),
        };
        fields.insert(
            decode_component(raw_key),
            JsonNode::new(JsonValue::String(decode_component(raw_value))),
        );
    }

    JsonNode::new(JsonValue::Object(fields))
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}
