//! The tree model and the operations that live directly on it.
//!
//! - [`node`] — `JsonValue` / `JsonNode`: the tagged value kinds and the
//!   shared, identity-bearing handle.
//! - [`convert`] — parsing JSON text and `serde_json::Value` trees into
//!   nodes.
//! - [`walk`] — lazy depth-first enumeration of scalar leaves.
//! - [`stringify`] — cycle-safe serialization back to JSON text.

pub mod convert;
pub mod node;
pub mod stringify;
pub mod walk;

pub use convert::{parse_json, parse_value};
pub use node::{JsonNode, JsonNumber, JsonValue};
pub use stringify::{stringify_circular, to_value};
pub use walk::{walk_through, WalkThrough};
