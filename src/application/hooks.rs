//! Plugin hooks invoked by the host build

use crate::domain::{format_js, Metadata, MetadataValue, ScriptTemplate, JS_DIR, JS_KEY};
use crate::error::Result;
use crate::infrastructure::{copy_resources, Generator};
use std::path::PathBuf;

/// Plugin settings shared by both hooks
#[derive(Debug, Clone)]
pub struct JsEmbed {
    /// Extensions collected from the js directory
    pub extensions: Vec<String>,
    /// Template applied to each `js` entry
    pub template: ScriptTemplate,
}

impl Default for JsEmbed {
    fn default() -> Self {
        JsEmbed {
            extensions: vec!["js".to_string()],
            template: ScriptTemplate::default(),
        }
    }
}

impl JsEmbed {
    /// Replace a textual `js` value with its formatted tags.
    ///
    /// No other key is touched. A value that is already a list was resolved
    /// earlier and is left alone.
    pub fn add_tags(&self, _gen: &dyn Generator, metadata: &mut Metadata) -> Result<()> {
        let Some(MetadataValue::Text(raw)) = metadata.get(JS_KEY) else {
            return Ok(());
        };
        let tags = format_js(raw, &self.template)?;
        metadata.insert(JS_KEY.to_string(), MetadataValue::List(tags));
        Ok(())
    }

    /// Copy every script under the content js dir into the output js dir.
    ///
    /// Returns the copied files, relative to the content root.
    pub fn move_resources(&self, gen: &dyn Generator) -> Result<Vec<PathBuf>> {
        let js_files = gen.get_files(JS_DIR, &self.extensions)?;
        let js_dest = gen.output_path().join(JS_DIR);
        copy_resources(gen.path(), &js_dest, &js_files)?;
        Ok(js_files)
    }
}

/// Metadata hook with the default settings
pub fn add_tags(gen: &dyn Generator, metadata: &mut Metadata) -> Result<()> {
    JsEmbed::default().add_tags(gen, metadata)
}

/// Finalization hook with the default settings
pub fn move_resources(gen: &dyn Generator) -> Result<()> {
    JsEmbed::default().move_resources(gen).map(|_| ())
}
