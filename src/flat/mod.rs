//! Thin, single-pass utilities over flat mappings.
//!
//! Everything here exchanges flat trees with the structural core but does no
//! structural recursion of its own: tabular text conversion, query-string
//! parsing, and one-level key utilities.

pub mod csv;
pub mod keys;
pub mod query;

pub use csv::{from_csv, to_csv, CsvError, CsvOptions};
pub use keys::{count_by, group_by, rename_keys};
pub use query::parse_query_string;
