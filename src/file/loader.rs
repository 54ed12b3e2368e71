//! JSON file loading functionality.
//!
//! This module loads JSON documents from the filesystem into `JsonNode`
//! trees, transparently decompressing files with a `.gz` extension.

use crate::document::convert::parse_json;
use crate::document::node::JsonNode;
use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Loads and parses a JSON file from the filesystem.
///
/// Files ending in `.gz` are gunzipped before parsing.
///
/// # Errors
///
/// This function will return an error if:
/// - The file cannot be read (doesn't exist, permission denied, etc.)
/// - Decompression fails for a `.gz` file
/// - The contents are not valid JSON
///
/// # Example
///
/// ```no_run
/// use quilljson::file::loader::load_json_file;
///
/// let tree = load_json_file("config.json").unwrap();
/// assert!(tree.is_container() || tree.is_scalar());
/// ```
pub fn load_json_file<P: AsRef<Path>>(path: P) -> Result<JsonNode> {
    let path_ref = path.as_ref();

    // Check if file is gzipped
    let is_gzipped = path_ref
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let content = if is_gzipped {
        read_gzipped_file(path_ref)?
    } else {
        fs::read_to_string(path_ref).context("Failed to read file")?
    };

    parse_json(&content)
}

/// Reads and decompresses a gzipped file to a string.
fn read_gzipped_file(path: &Path) -> Result<String> {
    let file = fs::File::open(path).context("Failed to open gzipped file")?;
    let mut decoder = GzDecoder::new(file);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped file")?;
    Ok(content)
}
