//! Error types for jsembed

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for jsembed
#[derive(Debug, Error)]
pub enum JsEmbedError {
    #[error("Malformed js entry: '{0}'")]
    MalformedEntry(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to copy {path}: {source}")]
    Copy {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File discovery error: {0}")]
    Discovery(#[from] walkdir::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl JsEmbedError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            JsEmbedError::MalformedEntry(_) => 2,
            JsEmbedError::CreateDir { .. }
            | JsEmbedError::Copy { .. }
            | JsEmbedError::Discovery(_)
            | JsEmbedError::Io(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            JsEmbedError::MalformedEntry(entry) => {
                format!(
                    "Malformed js entry: '{}'\n\n\
                    Every entry needs a trailing position in parentheses:\n\
                    • js: app.js(head)\n\
                    • js: app.js(head), widgets.js(body)\n\n\
                    Empty entries (e.g. a trailing comma) are not allowed.",
                    entry
                )
            }
            JsEmbedError::Copy { path, .. } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that {} exists in the content js directory\n\
                    • Check write permissions on the output directory",
                    self,
                    path.display()
                )
            }
            JsEmbedError::Template(msg) => {
                format!(
                    "Template error: {}\n\n\
                    Templates may use {{0}} (site url), {{1}} (file name) and {{2}} (position).\n\
                    Example: <script src=\"{{0}}/js/{{1}}\"></script>{{2}}",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using JsEmbedError
pub type Result<T> = std::result::Result<T, JsEmbedError>;
