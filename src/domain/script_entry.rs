//! Parsing of single `name(position)` entries from the `js` metadata value

use crate::error::{JsEmbedError, Result};
use regex::Regex;
use std::sync::OnceLock;

/// Trailing parenthesized position, e.g. `(head)` at the end of `app.js(head)`
fn position_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\(\w+\)$").unwrap())
}

/// Remove all whitespace and split on commas.
///
/// Empty entries are kept so that they fail later when parsed.
pub fn split_metadata(metastring: &str) -> Vec<String> {
    let compact: String = metastring.chars().filter(|c| !c.is_whitespace()).collect();
    compact.split(',').map(str::to_string).collect()
}

/// A script reference declared by a content item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptEntry {
    /// File name relative to the js directory
    pub name: String,
    /// Position marker including the parentheses, e.g. `(head)`
    pub position: String,
}

impl ScriptEntry {
    /// Parse an entry of the form `name(position)`.
    ///
    /// Only the trailing group is extracted; anything before it is the name.
    pub fn parse(entry: &str) -> Result<Self> {
        let found = position_regex()
            .find(entry)
            .ok_or_else(|| JsEmbedError::MalformedEntry(entry.to_string()))?;

        Ok(ScriptEntry {
            name: entry[..found.start()].to_string(),
            position: found.as_str().to_string(),
        })
    }

    /// Position word without the parentheses
    pub fn marker(&self) -> &str {
        self.position
            .trim_start_matches('(')
            .trim_end_matches(')')
    }
}
