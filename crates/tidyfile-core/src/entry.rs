//! File entry snapshot types.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Read-only snapshot of one filesystem node at scan time.
///
/// A `FileEntry` reflects the node as it was when the directory was read.
/// It becomes stale the moment the underlying filesystem changes; nothing
/// ties it to current disk state once operations have run. Serialized field
/// names are camelCase to match the boundary format.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    /// File or directory name (not the full path).
    pub name: CompactString,

    /// Absolute path to the node.
    pub path: PathBuf,

    /// Whether the node is a directory.
    #[serde(rename = "isDirectory")]
    pub is_dir: bool,

    /// Size in bytes (0 for directories).
    pub size: u64,

    /// Last modification time.
    pub modified_at: DateTime<Utc>,

    /// Creation time, when the platform reports one.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub created_at: Option<DateTime<Utc>>,

    /// Lowercased extension including the leading dot (`".txt"`); `None`
    /// for directories and for files without an extension.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub extension: Option<CompactString>,
}

impl FileEntry {
    /// Create a file entry. The extension is derived from `name`.
    pub fn file(
        name: impl Into<CompactString>,
        path: impl Into<PathBuf>,
        size: u64,
        modified_at: DateTime<Utc>,
    ) -> Self {
        let name = name.into();
        let extension = extension_of(&name);
        Self {
            name,
            path: path.into(),
            is_dir: false,
            size,
            modified_at,
            created_at: None,
            extension,
        }
    }

    /// Create a directory entry.
    pub fn directory(
        name: impl Into<CompactString>,
        path: impl Into<PathBuf>,
        modified_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            is_dir: true,
            size: 0,
            modified_at,
            created_at: None,
            extension: None,
        }
    }

    /// Set the creation timestamp.
    pub fn with_created_at(mut self, created_at: Option<DateTime<Utc>>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Check if this entry is a regular file.
    pub fn is_file(&self) -> bool {
        !self.is_dir
    }
}

/// Derive the lowercased, dot-prefixed extension from a file name.
///
/// Returns `None` when the name has no extension. Dotfiles such as
/// `".gitignore"` count as extensionless, matching [`Path::extension`].
pub fn extension_of(name: &str) -> Option<CompactString> {
    let ext = Path::new(name).extension()?.to_str()?;
    let mut out = CompactString::new(".");
    out.push_str(&ext.to_lowercase());
    Some(out)
}
