//! Recursive copy.

use std::fs;
use std::path::Path;

use tidyfile_core::OpError;

/// Copy a file or directory tree, returning the number of bytes copied.
///
/// Directories are recreated under `destination` with `create_dir_all`,
/// then every direct child is copied recursively. Non-regular nodes
/// (sockets, device files, unfollowed symlinks) are skipped. There is no
/// rollback: a failure partway through a tree leaves already-copied
/// children in place.
pub fn copy_recursive(source: &Path, destination: &Path) -> Result<u64, OpError> {
    let metadata = fs::symlink_metadata(source).map_err(|e| OpError::io(source, e))?;

    if metadata.is_dir() {
        copy_dir_recursive(source, destination)
    } else if metadata.is_file() {
        copy_file(source, destination)
    } else {
        tracing::debug!(path = %source.display(), "skipping non-regular entry");
        Ok(0)
    }
}

/// Copy a single file, returning its size in bytes.
fn copy_file(source: &Path, destination: &Path) -> Result<u64, OpError> {
    fs::copy(source, destination).map_err(|e| OpError::io(destination, e))
}

/// Recursively copy a directory.
fn copy_dir_recursive(source: &Path, destination: &Path) -> Result<u64, OpError> {
    fs::create_dir_all(destination).map_err(|e| OpError::io(destination, e))?;

    let mut total_bytes = 0u64;

    let entries = fs::read_dir(source).map_err(|e| OpError::io(source, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| OpError::io(source, e))?;
        let file_type = entry.file_type().map_err(|e| OpError::io(entry.path(), e))?;
        let path = entry.path();
        let dest_path = destination.join(entry.file_name());

        if file_type.is_dir() {
            total_bytes += copy_dir_recursive(&path, &dest_path)?;
        } else if file_type.is_file() {
            total_bytes += copy_file(&path, &dest_path)?;
        } else {
            tracing::debug!(path = %path.display(), "skipping non-regular entry");
        }
    }

    Ok(total_bytes)
}
