//! Path grammar and selector resolution.
//!
//! A path is an ordered sequence of string segments addressing a location in
//! a tree. A segment that parses as a non-negative base-10 integer with no
//! leading zeros ("0" itself allowed) is *numeric* and addresses an array
//! index; any other segment addresses an object key. Segments are never
//! re-interpreted once split, and there is no escaping mechanism for literal
//! dots or brackets inside keys.
//!
//! # Supported selector syntax
//!
//! - `.` separates object-key segments
//! - `[x]` wraps an index or key segment
//!
//! `a.b[0].c` normalizes to the segments `a`, `b`, `0`, `c`.

pub mod parser;
pub mod resolver;

pub use parser::{parse_selector, split_flat_key};
pub use resolver::{get, resolve};

/// A path into a tree: ordered string segments.
pub type Path = Vec<String>;

/// Parses a segment as an array index.
///
/// Returns `Some` only for a non-negative base-10 integer with no leading
/// zeros; `"0"` itself qualifies. Everything else (including `"01"`, `"-1"`,
/// and the empty string) is an object key.
///
/// # Example
///
/// ```
/// use quilljson::path::parse_index;
///
/// assert_eq!(parse_index("0"), Some(0));
/// assert_eq!(parse_index("12"), Some(12));
/// assert_eq!(parse_index("01"), None);
/// assert_eq!(parse_index("-1"), None);
/// assert_eq!(parse_index("name"), None);
/// ```
pub fn parse_index(segment: &str) -> Option<usize> {
    if segment == "0" {
        return Some(0);
    }
    if segment.is_empty() || segment.starts_with('0') {
        return None;
    }
    if !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

/// Joins path segments with dots, the flat-key encoding used by
/// `flatten_object` and understood by `unflatten_object`.
pub fn join_path(path: &[String]) -> String {
    path.join(".")
}
