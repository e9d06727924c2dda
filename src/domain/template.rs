//! Script tag templates with positional slots

use crate::error::{JsEmbedError, Result};
use std::fmt;
use std::str::FromStr;

/// Template used for the `js` metadata key.
///
/// The position marker ends up after `</script>` verbatim; page templates are
/// expected to pick tags by that marker text.
pub const SCRIPT_TEMPLATE: &str = r#"<script src="{0}/js/{1}"></script>{2}"#;

/// Directory under both content and output holding the scripts; the default
/// template links into it
pub const JS_DIR: &str = "js";

/// Stand-in for the site url, filled in by the page templating step
pub const SITE_URL_PLACEHOLDER: &str = "%s";

const SLOT_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Slot(usize),
}

/// A template with slots `{0}` (site url), `{1}` (file name) and `{2}` (position).
///
/// `{{` and `}}` produce literal braces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl ScriptTemplate {
    /// Parse a template, rejecting unknown slots and stray braces
    pub fn new(source: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    literal.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    literal.push('}');
                }
                '{' => {
                    let mut index = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some(d) => index.push(d),
                            None => {
                                return Err(JsEmbedError::Template(format!(
                                    "unclosed '{{' in '{}'",
                                    source
                                )))
                            }
                        }
                    }
                    let slot = index
                        .parse::<usize>()
                        .ok()
                        .filter(|i| *i < SLOT_COUNT)
                        .ok_or_else(|| {
                            JsEmbedError::Template(format!(
                                "unknown slot {{{}}} in '{}'",
                                index, source
                            ))
                        })?;
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Slot(slot));
                }
                '}' => {
                    return Err(JsEmbedError::Template(format!(
                        "single '}}' in '{}'",
                        source
                    )))
                }
                _ => literal.push(c),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(ScriptTemplate {
            source: source.to_string(),
            segments,
        })
    }

    /// Substitute the three slots
    pub fn render(&self, site_url: &str, name: &str, position: &str) -> String {
        let values = [site_url, name, position];
        let mut output = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Slot(i) => output.push_str(values[*i]),
            }
        }
        output
    }

    /// The template text as given
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl Default for ScriptTemplate {
    fn default() -> Self {
        ScriptTemplate {
            source: SCRIPT_TEMPLATE.to_string(),
            segments: vec![
                Segment::Literal("<script src=\"".to_string()),
                Segment::Slot(0),
                Segment::Literal("/js/".to_string()),
                Segment::Slot(1),
                Segment::Literal("\"></script>".to_string()),
                Segment::Slot(2),
            ],
        }
    }
}

impl FromStr for ScriptTemplate {
    type Err = JsEmbedError;

    fn from_str(s: &str) -> Result<Self> {
        ScriptTemplate::new(s)
    }
}

impl fmt::Display for ScriptTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Replace the site url placeholder in a formatted tag.
///
/// Only the first `%s` is the url slot; later ones belong to file names.
pub fn resolve_site_url(tag: &str, site_url: &str) -> String {
    tag.replacen(SITE_URL_PLACEHOLDER, site_url.trim_end_matches('/'), 1)
}
