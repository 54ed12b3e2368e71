//! Shape-changing transformations over whole trees.
//!
//! - [`compact`] — recursive removal of falsy values.
//! - [`unflatten`] — rebuilding a nested tree from dot-keyed flat mappings,
//!   and the inverse flattener.
//! - [`merge`] — the single-level merge and iteration primitives.

pub mod compact;
pub mod merge;
pub mod unflatten;

pub use compact::compact_object;
pub use merge::{deep_merge, to_pairs, transform};
pub use unflatten::{flatten_object, unflatten_object};
