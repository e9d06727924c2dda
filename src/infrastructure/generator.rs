//! Generator context handed to plugin hooks

use crate::error::Result;
use crate::infrastructure::discovery::discover_files;
use crate::infrastructure::Config;
use std::path::{Path, PathBuf};

/// The host's view of the current build run
pub trait Generator {
    /// Content root
    fn path(&self) -> &Path;

    /// Output root
    fn output_path(&self) -> &Path;

    /// Files below `subdir` of the content root with one of `extensions`,
    /// relative to the content root
    fn get_files(&self, subdir: &str, extensions: &[String]) -> Result<Vec<PathBuf>>;
}

/// File system implementation of Generator
#[derive(Debug, Clone)]
pub struct FileSystemGenerator {
    pub path: PathBuf,
    pub output_path: PathBuf,
}

impl FileSystemGenerator {
    pub fn new(path: PathBuf, output_path: PathBuf) -> Self {
        FileSystemGenerator { path, output_path }
    }

    /// Build a generator for the content and output dirs of a project
    pub fn from_config(root: &Path, config: &Config) -> Self {
        FileSystemGenerator::new(config.content_dir(root), config.output_dir(root))
    }
}

impl Generator for FileSystemGenerator {
    fn path(&self) -> &Path {
        &self.path
    }

    fn output_path(&self) -> &Path {
        &self.output_path
    }

    fn get_files(&self, subdir: &str, extensions: &[String]) -> Result<Vec<PathBuf>> {
        discover_files(&self.path, subdir, extensions)
    }
}
