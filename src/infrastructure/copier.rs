//! Copying declared JavaScript files into the output tree

use crate::error::{JsEmbedError, Result};
use std::fs::{self, File, FileTimes};
use std::path::{Path, PathBuf};

/// Copy every file in `file_list` (relative to `src`) into `dest`.
///
/// `dest` is created with any missing parents first. Files land at
/// `dest/<file name>` and existing files are overwritten. The first failure
/// aborts the copy; files already copied stay in place.
pub fn copy_resources<P: AsRef<Path>>(src: &Path, dest: &Path, file_list: &[P]) -> Result<()> {
    if !dest.exists() {
        fs::create_dir_all(dest).map_err(|source| JsEmbedError::CreateDir {
            path: dest.to_path_buf(),
            source,
        })?;
    }

    for file in file_list {
        copy_preserving(&src.join(file), dest)?;
    }

    Ok(())
}

/// Copy one file into a directory, keeping permissions and access/modification times.
///
/// Returns the path of the copy.
pub fn copy_preserving(from: &Path, to_dir: &Path) -> Result<PathBuf> {
    let copy_err = |source: std::io::Error| JsEmbedError::Copy {
        path: from.to_path_buf(),
        source,
    };

    let file_name = from.file_name().ok_or_else(|| {
        copy_err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "path has no file name",
        ))
    })?;
    let target = to_dir.join(file_name);

    // fs::copy carries the permission bits over
    fs::copy(from, &target).map_err(copy_err)?;

    let metadata = fs::metadata(from).map_err(copy_err)?;
    let times = FileTimes::new()
        .set_accessed(metadata.accessed().map_err(copy_err)?)
        .set_modified(metadata.modified().map_err(copy_err)?);
    // Owners may set times through a read-only handle on unix
    #[cfg(unix)]
    let handle = File::open(&target);
    #[cfg(not(unix))]
    let handle = fs::OpenOptions::new().write(true).open(&target);
    handle
        .and_then(|file| file.set_times(times))
        .map_err(copy_err)?;

    Ok(target)
}
