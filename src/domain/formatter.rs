//! Tag formatting for the `js` metadata value

use crate::domain::script_entry::{split_metadata, ScriptEntry};
use crate::domain::template::{ScriptTemplate, SITE_URL_PLACEHOLDER};
use crate::error::Result;

/// Turn a `js` metadata string into one formatted tag per entry.
///
/// Output keeps input order. The site url stays as the `%s` placeholder.
/// A single malformed entry fails the whole string.
pub fn format_js(metastring: &str, template: &ScriptTemplate) -> Result<Vec<String>> {
    split_metadata(metastring)
        .iter()
        .map(|raw| {
            let entry = ScriptEntry::parse(raw)?;
            Ok(template.render(SITE_URL_PLACEHOLDER, &entry.name, &entry.position))
        })
        .collect()
}
