//! Structural utilities for JSON-like trees.
//!
//! quilljson operates on arbitrarily nested trees of scalars, ordered
//! arrays, and insertion-ordered objects, held behind shared [`JsonNode`]
//! handles so sub-trees can be aliased or even cyclic. On top of that model
//! it provides:
//!
//! - selector-based lookup ([`path::get`])
//! - recursive falsy pruning ([`shape::compact_object`])
//! - key-path flattening and unflattening ([`shape::flatten_object`],
//!   [`shape::unflatten_object`])
//! - lazy depth-first leaf enumeration ([`document::walk_through`])
//! - cycle-safe serialization ([`document::stringify_circular`])
//! - single-level merge and iteration primitives ([`shape::deep_merge`],
//!   [`shape::transform`], [`shape::to_pairs`])
//! - flat-mapping collaborators: CSV conversion, query-string parsing, and
//!   key utilities ([`flat`])
//! - file loading and saving with gzip support ([`file`])
//!
//! Every operation is synchronous, takes its input by reference, and never
//! mutates a caller's tree; missing paths and malformed shapes are data
//! (`None`, empty results), not errors.
//!
//! # Example
//!
//! ```
//! use quilljson::document::convert::parse_json;
//! use quilljson::document::stringify::stringify_circular;
//! use quilljson::path::get;
//! use quilljson::shape::compact_object;
//!
//! let tree = parse_json(r#"{"a": {"b": [10, null, 30]}, "keep": true}"#).unwrap();
//!
//! let found = get(&tree, &["a.b[2]", "a.missing"]);
//! assert!(found[0].is_some());
//! assert!(found[1].is_none());
//!
//! let pruned = compact_object(&tree);
//! assert_eq!(
//!     stringify_circular(&pruned),
//!     r#"{"a":{"b":[10,30]},"keep":true}"#
//! );
//! ```

pub mod document;
pub mod file;
pub mod flat;
pub mod path;
pub mod shape;

pub use document::node::{JsonNode, JsonNumber, JsonValue};
pub use document::stringify::stringify_circular;
pub use document::walk::{walk_through, WalkThrough};
pub use path::get;
pub use shape::{compact_object, deep_merge, flatten_object, to_pairs, transform, unflatten_object};
