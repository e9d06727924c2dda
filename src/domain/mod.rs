//! Domain layer - Script entries, templates and tag formatting

pub mod formatter;
pub mod metadata;
pub mod script_entry;
pub mod template;

pub use formatter::format_js;
pub use metadata::{Metadata, MetadataValue, JS_KEY};
pub use script_entry::ScriptEntry;
pub use template::{ScriptTemplate, JS_DIR, SCRIPT_TEMPLATE, SITE_URL_PLACEHOLDER};
