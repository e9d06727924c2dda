//! Content item metadata

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Metadata key holding the script declarations
pub const JS_KEY: &str = "js";

/// A single metadata value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataValue {
    /// Raw text as written by the author
    Text(String),
    /// Resolved list, e.g. formatted script tags
    List(Vec<String>),
}

impl MetadataValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MetadataValue::Text(text) => Some(text),
            MetadataValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            MetadataValue::List(items) => Some(items),
            MetadataValue::Text(_) => None,
        }
    }
}

/// Key-value metadata attached to a content item
pub type Metadata = BTreeMap<String, MetadataValue>;

fn header_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^([A-Za-z][A-Za-z0-9_-]*):\s*(.*)$").unwrap())
}

fn rst_field_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^:([A-Za-z][A-Za-z0-9_-]*):\s*(.*)$").unwrap())
}

/// Read `Key: value` header lines at the top of a content file.
///
/// Keys are lowercased. The header stops at the first blank or non-matching
/// line.
pub fn parse_header(text: &str) -> Metadata {
    let mut metadata = Metadata::new();
    for line in text.lines() {
        let Some(captures) = header_regex().captures(line.trim_end()) else {
            break;
        };
        metadata.insert(
            captures[1].to_lowercase(),
            MetadataValue::Text(captures[2].to_string()),
        );
    }
    metadata
}

/// Read the `:key: value` field list of a reStructuredText document.
///
/// The field list may follow a title block, which ends at the first blank
/// line. Keys are lowercased and the list stops at the first line that is not
/// a field.
pub fn parse_rst_fields(text: &str) -> Metadata {
    let mut lines = text
        .lines()
        .map(str::trim_end)
        .skip_while(|line| line.is_empty())
        .peekable();

    if lines
        .peek()
        .is_some_and(|line| !rst_field_regex().is_match(line))
    {
        // title block, up to and including the blank line after it
        lines.by_ref().take_while(|line| !line.is_empty()).for_each(drop);
    }

    let mut metadata = Metadata::new();
    for line in lines.skip_while(|line| line.is_empty()) {
        let Some(captures) = rst_field_regex().captures(line) else {
            break;
        };
        metadata.insert(
            captures[1].to_lowercase(),
            MetadataValue::Text(captures[2].to_string()),
        );
    }
    metadata
}
