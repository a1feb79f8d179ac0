//! Move and rename.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tidyfile_core::OpError;

use crate::copy::copy_recursive;
use crate::delete::delete_recursive;

/// Move a file or directory to a new path.
///
/// Tries an atomic `fs::rename` first and falls back to copy + delete
/// only when the rename fails because source and destination live on
/// different filesystems. The fallback refuses a source containing
/// symlinks or other non-regular nodes, since the copy phase skips what
/// the delete phase would remove. A destination inside the source
/// subtree is rejected up front. No existence pre-check is made on the
/// destination: whether an existing destination is replaced or reported
/// as an error is whatever the platform's rename does.
pub fn move_item(source: &Path, destination: &Path) -> Result<(), OpError> {
    // Missing sources get a uniform NotFound instead of whatever the
    // platform rename reports.
    fs::symlink_metadata(source).map_err(|e| OpError::io(source, e))?;

    // A destination inside the source subtree would make the cross-device
    // fallback copy the tree into itself.
    if destination != source && destination.starts_with(source) {
        return Err(OpError::io(
            destination,
            std::io::Error::new(ErrorKind::InvalidInput, "destination is inside the source"),
        ));
    }

    match fs::rename(source, destination) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::CrossesDevices => {
            tracing::debug!(
                source = %source.display(),
                destination = %destination.display(),
                "rename crosses filesystems, falling back to copy + delete"
            );
            copy_then_delete(source, destination)
        }
        Err(e) => Err(OpError::io(source, e)),
    }
}

/// Cross-device fallback: copy the tree to the destination, then delete
/// the source.
///
/// The copy phase skips symlinks and other non-regular nodes while the
/// delete phase removes them, so a source containing any such node is
/// refused before anything is touched.
fn copy_then_delete(source: &Path, destination: &Path) -> Result<(), OpError> {
    if let Some(node) = first_non_regular(source)? {
        return Err(OpError::io(
            node,
            std::io::Error::new(
                ErrorKind::Unsupported,
                "cross-device move cannot preserve non-regular entries",
            ),
        ));
    }
    copy_recursive(source, destination)?;
    delete_recursive(source)
}

/// Find the first symlink or other non-regular node under `path`.
fn first_non_regular(path: &Path) -> Result<Option<PathBuf>, OpError> {
    let metadata = fs::symlink_metadata(path).map_err(|e| OpError::io(path, e))?;
    if metadata.is_file() {
        return Ok(None);
    }
    if !metadata.is_dir() {
        return Ok(Some(path.to_path_buf()));
    }
    let entries = fs::read_dir(path).map_err(|e| OpError::io(path, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| OpError::io(path, e))?;
        if let Some(node) = first_non_regular(&entry.path())? {
            return Ok(Some(node));
        }
    }
    Ok(None)
}
