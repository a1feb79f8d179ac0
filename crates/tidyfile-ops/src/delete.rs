//! Recursive delete.

use std::fs;
use std::path::Path;

use tidyfile_core::OpError;

/// Delete a file or directory tree.
///
/// Directory contents are removed children-first, then the directory
/// itself. Symlinks are unlinked without touching their target. Deletion
/// is immediate and permanent; nothing is moved to a trash folder, so
/// previewing a plan before applying it is the caller's responsibility.
pub fn delete_recursive(path: &Path) -> Result<(), OpError> {
    let metadata = fs::symlink_metadata(path).map_err(|e| OpError::io(path, e))?;

    if metadata.is_dir() {
        delete_dir_recursive(path)
    } else {
        fs::remove_file(path).map_err(|e| OpError::io(path, e))
    }
}

/// Recursively delete a directory's children, then the directory.
fn delete_dir_recursive(path: &Path) -> Result<(), OpError> {
    let entries = fs::read_dir(path).map_err(|e| OpError::io(path, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| OpError::io(path, e))?;
        let file_type = entry.file_type().map_err(|e| OpError::io(entry.path(), e))?;
        let child = entry.path();

        if file_type.is_dir() {
            delete_dir_recursive(&child)?;
        } else {
            fs::remove_file(&child).map_err(|e| OpError::io(&child, e))?;
        }
    }

    fs::remove_dir(path).map_err(|e| OpError::io(path, e))
}
