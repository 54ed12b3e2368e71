//! JSON file saving functionality.
//!
//! This module serializes `JsonNode` trees to files with atomic write
//! operations and optional backup creation. Serialization goes through the
//! cycle-safe conversion, so shared or cyclic trees save without error
//! (repeated containers are omitted, matching `stringify_circular`).

use crate::document::node::JsonNode;
use crate::document::stringify::to_value;
use anyhow::{Context, Result};
use flate2::write::GzEncoder;
use flate2::Compression;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Options controlling how a tree is written to disk.
///
/// # Example
///
/// ```
/// use quilljson::file::SaveOptions;
///
/// let options = SaveOptions::default();
/// assert!(options.pretty);
/// assert_eq!(options.indent_size, 2);
/// assert!(!options.create_backup);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveOptions {
    /// Write indented output instead of compact
    #[serde(default = "default_pretty")]
    pub pretty: bool,

    /// Number of spaces per indentation level
    #[serde(default = "default_indent_size")]
    pub indent_size: usize,

    /// Create a .bak copy of the target before overwriting it
    #[serde(default)]
    pub create_backup: bool,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
            indent_size: default_indent_size(),
            create_backup: false,
        }
    }
}

fn default_pretty() -> bool {
    true
}

fn default_indent_size() -> usize {
    2
}

/// Saves a JSON tree to a file.
///
/// The write is atomic: the serialized text goes to a temporary file in the
/// same directory, which is then renamed over the target, so the target is
/// never left partially written. Targets ending in `.gz` are gzipped. With
/// `create_backup` set, an existing target is first copied to `<name>.bak`.
///
/// # Errors
///
/// This function will return an error if:
/// - Backup creation fails (if requested)
/// - Writing the temporary file fails
/// - Renaming the temporary file to the target fails
///
/// # Example
///
/// ```no_run
/// use quilljson::document::convert::parse_json;
/// use quilljson::file::saver::{save_json_file, SaveOptions};
///
/// let tree = parse_json(r#"{"a": 1}"#).unwrap();
/// save_json_file("output.json", &tree, &SaveOptions::default()).unwrap();
/// ```
pub fn save_json_file<P: AsRef<Path>>(
    path: P,
    tree: &JsonNode,
    options: &SaveOptions,
) -> Result<()> {
    let path = path.as_ref();

    if options.create_backup && path.exists() {
        create_backup(path)?;
    }

    let text = render(tree, options)?;

    let is_gzipped = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let temp_path = path.with_extension("tmp");
    if is_gzipped {
        let file = fs::File::create(&temp_path).context("Failed to create temp file")?;
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder
            .write_all(text.as_bytes())
            .context("Failed to write gzipped JSON")?;
        encoder.finish().context("Failed to finish gzip stream")?;
    } else {
        fs::write(&temp_path, &text).context("Failed to write temp file")?;
    }

    fs::rename(&temp_path, path).context("Failed to replace target file")?;
    Ok(())
}

/// Serializes the tree to text honoring the pretty/indent settings.
fn render(tree: &JsonNode, options: &SaveOptions) -> Result<String> {
    let value = to_value(tree);
    if !options.pretty {
        return Ok(value.to_string());
    }

    let indent = " ".repeat(options.indent_size);
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .context("Failed to serialize JSON")?;
    let mut text = String::from_utf8(buf).context("Serialized JSON was not valid UTF-8")?;
    text.push('\n');
    Ok(text)
}

/// Creates a backup of a file by copying it with a .bak extension.
fn create_backup<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    let mut backup_path = path.to_path_buf();
    let original_name = backup_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow::anyhow!("Invalid file name"))?;
    backup_path.set_file_name(format!("{}.bak", original_name));
    fs::copy(path, backup_path).context("Failed to create backup")?;
    Ok(())
}
