//! Conversion between row-record trees and delimited text.
//!
//! Rows are flat objects; columns are the union of every row's keys in
//! first-seen order. Every emitted field is quoted, with embedded quotes
//! doubled. Scalars coerce to their display text; null and missing columns
//! render as empty text. Parsing reverses the process into flat
//! string-to-string objects.

use crate::document::node::{JsonNode, JsonValue};
use crate::document::stringify::stringify_circular;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Options for delimited-text conversion.
///
/// # Example
///
/// ```
/// use quilljson::flat::CsvOptions;
///
/// let options = CsvOptions::default();
/// assert_eq!(options.delimiter, ',');
///
/// let tabs = CsvOptions { delimiter: '\t' };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsvOptions {
    /// Field delimiter
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
        }
    }
}

fn default_delimiter() -> char {
    ','
}

/// Errors that can occur while parsing delimited text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsvError {
    /// A quoted field was still open at end of input.
    UnterminatedQuote { line: usize },
}

impl fmt::Display for CsvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CsvError::UnterminatedQuote { line } => {
                write!(f, "Unterminated quoted field starting on line {}", line)
            }
        }
    }
}

impl std::error::Error for CsvError {}

/// Renders row-record objects as delimited text.
///
/// The first line is the header: the union of all rows' keys in first-seen
/// order. Every field, header included, is quoted. Rows that are not objects
/// contribute no keys and render as a line of empty fields.
///
/// # Example
///
/// ```
/// use quilljson::document::convert::parse_json;
/// use quilljson::flat::{to_csv, CsvOptions};
///
/// let rows = vec![
///     parse_json(r#"{"name": "Alice", "age": 30}"#).unwrap(),
///     parse_json(r#"{"name": "Bob"}"#).unwrap(),
/// ];
///
/// let text = to_csv(&rows, &CsvOptions::default());
/// assert_eq!(text, "\"name\",\"age\"\n\"Alice\",\"30\"\n\"Bob\",\"\"\n");
/// ```
pub fn to_csv(rows: &[JsonNode], options: &CsvOptions) -> String {
    let mut columns: IndexSet<String> = IndexSet::new();
    for row in rows {
        if let JsonValue::Object(fields) = &*row.value() {
            for key in fields.keys() {
                columns.insert(key.clone());
            }
        }
    }

    let mut out = String::new();
    write_record(&mut out, columns.iter().map(String::as_str), options.delimiter);

    for row in rows {
        let fields = {
            let value = row.value();
            match &*value {
                JsonValue::Object(fields) => fields.clone(),
                _ => IndexMap::new(),
            }
        };
        let texts: Vec<String> = columns
            .iter()
            .map(|column| fields.get(column).map(field_text).unwrap_or_default())
            .collect();
        write_record(&mut out, texts.iter().map(String::as_str), options.delimiter);
    }

    out
}

/// Parses delimited text back into row-record objects.
///
/// The first record is the header; every following record becomes a flat
/// object mapping header names to string values. Short rows fill the
/// remaining columns with empty text; fields beyond the header are dropped.
/// Blank records are skipped.
///
/// # Errors
///
/// Returns [`CsvError::UnterminatedQuote`] if a quoted field never closes.
pub fn from_csv(text: &str, options: &CsvOptions) -> Result<Vec<JsonNode>, CsvError> {
    let mut records = parse_records(text, options.delimiter)?.into_iter();
    let header = match records.next() {
        Some(columns) => columns,
        None => return Ok(Vec::new()),
    };

    let rows = records
        .map(|fields| {
            let mut row = IndexMap::new();
            for (idx, column) in header.iter().enumerate() {
                let text = fields.get(idx).cloned().unwrap_or_default();
                row.insert(column.clone(), JsonNode::new(JsonValue::String(text)));
            }
            JsonNode::new(JsonValue::Object(row))
        })
        .collect();

    Ok(rows)
}

/// Coerces one field value to text. Null renders as empty; nested
/// containers fall back to their JSON text.
fn field_text(node: &JsonNode) -> String {
    let value = node.value();
    match &*value {
        JsonValue::String(s) => s.clone(),
        JsonValue::Number(n) => n.to_string(),
        JsonValue::Boolean(b) => b.to_string(),
        JsonValue::Null => String::new(),
        JsonValue::Object(_) | JsonValue::Array(_) => stringify_circular(node),
    }
}

fn write_record<'a>(out: &mut String, fields: impl Iterator<Item = &'a str>, delimiter: char) {
    let mut first = true;
    for field in fields {
        if !first {
            out.push(delimiter);
        }
        first = false;
        out.push('"');
        for ch in field.chars() {
            if ch == '"' {
                out.push('"');
            }
            out.push(ch);
        }
        out.push('"');
    }
    out.push('\n');
}

/// Single-pass, quote-aware record splitter. Newlines inside quoted fields
/// belong to the field; `\r\n` line endings are accepted.
fn parse_records(text: &str, delimiter: char) -> Result<Vec<Vec<String>>, CsvError> {
    let mut records = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut line = 1;
    let mut quote_line = 1;

    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                '\n' => {
                    line += 1;
                    field.push(ch);
                }
                _ => field.push(ch),
            }
        } else {
            match ch {
                '"' => {
                    in_quotes = true;
                    quote_line = line;
                }
                '\r' => {}
                '\n' => {
                    line += 1;
                    fields.push(std::mem::take(&mut field));
                    push_record(&mut records, std::mem::take(&mut fields));
                }
                c if c == delimiter => fields.push(std::mem::take(&mut field)),
                _ => field.push(ch),
            }
        }
    }

    if in_quotes {
        return Err(CsvError::UnterminatedQuote { line: quote_line });
    }
    if !field.is_empty() || !fields.is_empty() {
        fields.push(field);
        push_record(&mut records, fields);
    }

    Ok(records)
}

fn push_record(records: &mut Vec<Vec<String>>, fields: Vec<String>) {
    // A lone empty field is a blank line, not a record.
    if fields.len() == 1 && fields[0].is_empty() {
        return;
    }
    records.push(fields);
}
