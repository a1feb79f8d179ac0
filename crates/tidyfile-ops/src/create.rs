//! Folder and file creation.

use std::fs;
use std::path::Path;

use tidyfile_core::OpError;

/// Create a directory and all missing ancestors.
///
/// Succeeds when the directory already exists (idempotent).
pub fn ensure_folder(path: &Path) -> Result<(), OpError> {
    fs::create_dir_all(path).map_err(|e| OpError::io(path, e))
}

/// Write `content` to a file, creating missing ancestor directories and
/// truncating any existing content.
pub fn write_file(path: &Path, content: &str) -> Result<(), OpError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| OpError::io(parent, e))?;
        }
    }
    fs::write(path, content).map_err(|e| OpError::io(path, e))
}
