//! Declarative file operation types and the JSON boundary.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::OpError;

/// A single declarative filesystem mutation.
///
/// Exactly one variant tag per operation; each variant carries only the
/// fields its tag requires. Operations are pure data: building one touches
/// nothing on disk.
///
/// On the wire the tag lives in a `type` field with camelCase names, so
/// `Operation::Move` serializes as
/// `{"type":"move","source":...,"destination":...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Operation {
    /// Move a file or directory to a new path.
    Move {
        source: PathBuf,
        destination: PathBuf,
    },
    /// Copy a file or directory subtree to a new path.
    Copy {
        source: PathBuf,
        destination: PathBuf,
    },
    /// Delete a file or directory subtree.
    Delete { path: PathBuf },
    /// Rename a file or directory (a move within one directory).
    Rename {
        old_path: PathBuf,
        new_path: PathBuf,
    },
    /// Create a directory and all missing ancestors.
    CreateFolder { path: PathBuf },
    /// Create a file with the given content, truncating any existing file.
    CreateFile {
        path: PathBuf,
        #[serde(default)]
        content: String,
    },
}

impl Operation {
    /// Create a move operation.
    pub fn move_to(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self::Move {
            source: source.into(),
            destination: destination.into(),
        }
    }

    /// Create a copy operation.
    pub fn copy(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self::Copy {
            source: source.into(),
            destination: destination.into(),
        }
    }

    /// Create a delete operation.
    pub fn delete(path: impl Into<PathBuf>) -> Self {
        Self::Delete { path: path.into() }
    }

    /// Create a rename operation.
    pub fn rename(old_path: impl Into<PathBuf>, new_path: impl Into<PathBuf>) -> Self {
        Self::Rename {
            old_path: old_path.into(),
            new_path: new_path.into(),
        }
    }

    /// Create a folder creation operation.
    pub fn create_folder(path: impl Into<PathBuf>) -> Self {
        Self::CreateFolder { path: path.into() }
    }

    /// Create a file creation operation.
    pub fn create_file(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self::CreateFile {
            path: path.into(),
            content: content.into(),
        }
    }

    /// The kind of this operation, for logging and summaries.
    pub fn kind(&self) -> OperationKind {
        match self {
            Self::Move { .. } => OperationKind::Move,
            Self::Copy { .. } => OperationKind::Copy,
            Self::Delete { .. } => OperationKind::Delete,
            Self::Rename { .. } => OperationKind::Rename,
            Self::CreateFolder { .. } => OperationKind::CreateFolder,
            Self::CreateFile { .. } => OperationKind::CreateFile,
        }
    }

    /// The path the operation acts on (the source side for two-path
    /// operations).
    pub fn primary_path(&self) -> &Path {
        match self {
            Self::Move { source, .. } => source,
            Self::Copy { source, .. } => source,
            Self::Delete { path } => path,
            Self::Rename { old_path, .. } => old_path,
            Self::CreateFolder { path } => path,
            Self::CreateFile { path, .. } => path,
        }
    }
}

/// The kind of an operation, independent of its paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationKind {
    Move,
    Copy,
    Delete,
    Rename,
    CreateFolder,
    CreateFile,
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Move => write!(f, "Move"),
            Self::Copy => write!(f, "Copy"),
            Self::Delete => write!(f, "Delete"),
            Self::Rename => write!(f, "Rename"),
            Self::CreateFolder => write!(f, "Create folder"),
            Self::CreateFile => write!(f, "Create file"),
        }
    }
}

/// Parse an ordered operation list from boundary JSON.
///
/// This is the untrusted edge of the engine: an unrecognized tag or a
/// missing required field maps to [`OpError::InvalidOperation`].
pub fn operations_from_json(input: &str) -> Result<Vec<Operation>, OpError> {
    serde_json::from_str(input).map_err(|e| OpError::invalid(e.to_string()))
}
