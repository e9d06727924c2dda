//! File discovery under the content tree

use crate::error::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// List files below `root/subdir` whose extension is one of `extensions`.
///
/// Paths are relative to `root` and sorted. Hidden directories are skipped.
/// A missing `subdir` yields an empty list.
pub fn discover_files(root: &Path, subdir: &str, extensions: &[String]) -> Result<Vec<PathBuf>> {
    let base = root.join(subdir);
    if !base.is_dir() {
        return Ok(Vec::new());
    }

    let walker = WalkDir::new(&base).into_iter().filter_entry(|entry| {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return true;
        }
        entry
            .file_name()
            .to_str()
            .is_none_or(|name| !name.starts_with('.'))
    });

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() || !has_extension(entry.path(), extensions) {
            continue;
        }
        let Ok(rel) = entry.path().strip_prefix(root) else {
            continue;
        };
        files.push(rel.to_path_buf());
    }

    files.sort();
    Ok(files)
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|wanted| wanted == ext))
}
