//! Initialize project use case

use crate::domain::JS_DIR;
use crate::error::{JsEmbedError, Result};
use crate::infrastructure::config::CONFIG_FILE;
use crate::infrastructure::Config;
use std::fs;
use std::path::Path;

/// Write a default jsembed.toml and create the content js directory.
pub fn init(path: &Path) -> Result<()> {
    // Create the directory if it doesn't exist
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    if path.join(CONFIG_FILE).exists() {
        return Err(JsEmbedError::Config(format!(
            "Directory already initialized: {}",
            path.display()
        )));
    }

    let config = Config::default();
    fs::create_dir_all(config.content_dir(path).join(JS_DIR))?;
    config.save_to_dir(path)?;

    println!("Initialized jsembed project at {}", path.display());
    println!(
        "Put scripts in {}",
        config.content.join(JS_DIR).display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_layout() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("site");

        init(&root).unwrap();

        assert!(root.join(CONFIG_FILE).exists());
        assert!(root.join("content/js").is_dir());
        assert_eq!(Config::load_from_dir(&root).unwrap(), Config::default());
    }

    #[test]
    fn test_init_twice_fails() {
        let temp = TempDir::new().unwrap();
        init(temp.path()).unwrap();
        assert!(matches!(init(temp.path()), Err(JsEmbedError::Config(_))));
    }
}
