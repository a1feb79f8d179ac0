//! Single-operation executor with unified result handling.

use std::path::PathBuf;

use tidyfile_core::{OpError, Operation, OperationResult};

use crate::copy::copy_recursive;
use crate::create::{ensure_folder, write_file};
use crate::delete::delete_recursive;
use crate::move_op::move_item;

/// Execute one operation and convert the outcome into a result record.
///
/// This is the boundary where errors stop propagating: a missing source,
/// a permission denial, or any other filesystem failure becomes
/// `{success: false, error}` on the returned record instead of an `Err`.
pub fn execute(operation: Operation) -> OperationResult {
    match apply(&operation) {
        Ok(()) => {
            tracing::debug!(
                kind = %operation.kind(),
                path = %operation.primary_path().display(),
                "operation succeeded"
            );
            OperationResult::ok(operation)
        }
        Err(e) => {
            tracing::warn!(
                kind = %operation.kind(),
                path = %operation.primary_path().display(),
                "operation failed: {e}"
            );
            OperationResult::failed(operation, e.to_string())
        }
    }
}

/// Dispatch one operation to the filesystem primitives.
fn apply(operation: &Operation) -> Result<(), OpError> {
    match operation {
        Operation::Move {
            source,
            destination,
        } => move_item(source, destination),
        Operation::Copy {
            source,
            destination,
        } => copy_recursive(source, destination).map(|_| ()),
        Operation::Delete { path } => delete_recursive(path),
        Operation::Rename { old_path, new_path } => move_item(old_path, new_path),
        Operation::CreateFolder { path } => ensure_folder(path),
        Operation::CreateFile { path, content } => write_file(path, content),
    }
}

/// Move a file or directory.
pub fn move_path(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> OperationResult {
    execute(Operation::move_to(source, destination))
}

/// Copy a file or directory subtree.
pub fn copy_path(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> OperationResult {
    execute(Operation::copy(source, destination))
}

/// Delete a file or directory subtree.
pub fn delete_path(path: impl Into<PathBuf>) -> OperationResult {
    execute(Operation::delete(path))
}

/// Rename a file or directory.
pub fn rename_path(old_path: impl Into<PathBuf>, new_path: impl Into<PathBuf>) -> OperationResult {
    execute(Operation::rename(old_path, new_path))
}

/// Create a directory and all missing ancestors.
pub fn create_folder(path: impl Into<PathBuf>) -> OperationResult {
    execute(Operation::create_folder(path))
}

/// Create a file with the given content.
pub fn create_file(path: impl Into<PathBuf>, content: impl Into<String>) -> OperationResult {
    execute(Operation::create_file(path, content))
}
