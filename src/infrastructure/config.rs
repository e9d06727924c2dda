//! Configuration management

use crate::error::{JsEmbedError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the config file at the project root
pub const CONFIG_FILE: &str = "jsembed.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Content directory, relative to the project root
    pub content: PathBuf,
    /// Output directory, relative to the project root
    pub output: PathBuf,
    /// Site url substituted for the placeholder when printing resolved tags
    pub site_url: String,
    /// File extensions picked up from the content js directory
    pub extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            content: PathBuf::from("content"),
            output: PathBuf::from("output"),
            site_url: String::new(),
            extensions: vec!["js".to_string()],
        }
    }
}

impl Config {
    /// Load config from jsembed.toml in the given directory, falling back to defaults
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(JsEmbedError::Io(e)),
        };

        let config: Config = toml::from_str(&contents)
            .map_err(|e| JsEmbedError::Config(format!("Failed to parse {}: {}", CONFIG_FILE, e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to jsembed.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path.join(CONFIG_FILE), contents)?;
        Ok(())
    }

    /// Apply JSEMBED_CONTENT, JSEMBED_OUTPUT and JSEMBED_SITE_URL
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(content) = std::env::var("JSEMBED_CONTENT") {
            self.content = PathBuf::from(content);
        }
        if let Ok(output) = std::env::var("JSEMBED_OUTPUT") {
            self.output = PathBuf::from(output);
        }
        if let Ok(site_url) = std::env::var("JSEMBED_SITE_URL") {
            self.site_url = site_url;
        }
        self
    }

    /// Content directory resolved against a project root
    pub fn content_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.content)
    }

    /// Output directory resolved against a project root
    pub fn output_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.output)
    }

    fn validate(&self) -> Result<()> {
        if self.extensions.is_empty() {
            return Err(JsEmbedError::Config(
                "extensions must list at least one extension".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.content, PathBuf::from("content"));
        assert_eq!(config.output, PathBuf::from("output"));
        assert_eq!(config.extensions, vec!["js".to_string()]);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let config = Config {
            site_url: "https://example.org".to_string(),
            output: PathBuf::from("public"),
            ..Config::default()
        };

        config.save_to_dir(temp.path()).unwrap();
        assert!(temp.path().join(CONFIG_FILE).exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "output = \"public\"\n").unwrap();

        let config = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(config.output, PathBuf::from("public"));
        assert_eq!(config.content, PathBuf::from("content"));
    }

    #[test]
    fn test_invalid_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "output = [").unwrap();

        match Config::load_from_dir(temp.path()) {
            Err(JsEmbedError::Config(msg)) => assert!(msg.contains(CONFIG_FILE)),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_extensions_rejected() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "extensions = []\n").unwrap();
        assert!(Config::load_from_dir(temp.path()).is_err());
    }

    #[test]
    fn test_resolved_dirs() {
        let config = Config::default();
        let root = Path::new("/site");
        assert_eq!(config.content_dir(root), PathBuf::from("/site/content"));
        assert_eq!(config.output_dir(root), PathBuf::from("/site/output"));
    }
}
