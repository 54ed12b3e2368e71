//! Selector string and flat key parsing.

use super::Path;

/// Parses a selector string into path segments.
///
/// Normalization replaces each bracket with a dot, splits on dots, and
/// discards empty segments, so `a.b[0].c`, `a.b.0.c`, and `a..b[0]..c` all
/// yield the same path. There is no quoting: a key containing a literal dot
/// or bracket cannot be addressed.
///
/// # Example
///
/// ```
/// use quilljson::path::parse_selector;
///
/// assert_eq!(parse_selector("a.b[0].c"), vec!["a", "b", "0", "c"]);
/// assert_eq!(parse_selector("[1][2]"), vec!["1", "2"]);
/// assert!(parse_selector("").is_empty());
/// ```
pub fn parse_selector(selector: &str) -> Path {
    let mut normalized = String::with_capacity(selector.len());
    for ch in selector.chars() {
        match ch {
            '[' | ']' => normalized.push('.'),
            _ => normalized.push(ch),
        }
    }
    normalized
        .split('.')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Splits a flat key into path segments on dots, verbatim.
///
/// Unlike selectors, flat keys are not normalized: there is no bracket
/// syntax and empty segments are kept, so the split is the exact inverse of
/// joining with dots.
pub fn split_flat_key(key: &str) -> Path {
    key.split('.').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selector_dots_and_brackets() {
        assert_eq!(parse_selector("a.b.c"), vec!["a", "b", "c"]);
        assert_eq!(parse_selector("a.b[0].c"), vec!["a", "b", "0", "c"]);
        assert_eq!(parse_selector("target[2].a"), vec!["target", "2", "a"]);
    }

    #[test]
    fn test_parse_selector_bracket_only() {
        assert_eq!(parse_selector("[0]"), vec!["0"]);
        assert_eq!(parse_selector("[0][1]"), vec!["0", "1"]);
    }

    #[test]
    fn test_parse_selector_drops_empty_segments() {
        assert_eq!(parse_selector("a..b"), vec!["a", "b"]);
        assert_eq!(parse_selector(".a."), vec!["a"]);
        assert!(parse_selector("").is_empty());
        assert!(parse_selector(".").is_empty());
    }

    #[test]
    fn test_parse_selector_keeps_bracket_keys_as_segments() {
        // Bracketed keys are split like anything else; quoting is not
        // supported, so the quotes stay in the segment.
        assert_eq!(parse_selector("a[key]"), vec!["a", "key"]);
        assert_eq!(parse_selector("a['key']"), vec!["a", "'key'"]);
    }

    #[test]
    fn test_split_flat_key_verbatim() {
        assert_eq!(split_flat_key("a.b.0"), vec!["a", "b", "0"]);
        assert_eq!(split_flat_key("d"), vec!["d"]);
        assert_eq!(split_flat_key("a..b"), vec!["a", "", "b"]);
        assert_eq!(split_flat_key(""), vec![""]);
    }
}
