//! Turning buckets and suggestions into operation plans.
//!
//! Plan builders are as pure as the classifiers: they produce an ordered
//! [`Operation`] list and never touch the disk. Executing the plan is the
//! batch runner's job.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use tidyfile_core::Operation;

use crate::groups::BucketMap;

/// Grouping shape supplied by an external collaborator: category or
/// project name to member file paths. Names and membership are treated
/// as opaque here; validating them is the caller's responsibility.
pub type GroupingMap = IndexMap<String, Vec<PathBuf>>;

/// A rename proposal from an external collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameSuggestion {
    /// Path of the file to rename.
    pub original: PathBuf,
    /// Proposed new file name (a name, not a path).
    pub suggested: String,
    /// Why the new name was proposed.
    pub reason: String,
}

/// Build a plan that sorts bucketed files into per-bucket subfolders.
///
/// Each bucket becomes a `CreateFolder` under `base` followed by one
/// `Move` per member file. The folder name is the bucket key with any
/// leading dot trimmed, so extension buckets do not produce hidden
/// directories. Bucket order and member order carry through to the plan
/// unchanged.
pub fn organize_operations(base: impl AsRef<Path>, buckets: &BucketMap) -> Vec<Operation> {
    let base = base.as_ref();
    let mut operations = Vec::new();

    for (bucket, entries) in buckets {
        let folder = base.join(bucket.trim_start_matches('.'));
        operations.push(Operation::create_folder(&folder));
        for entry in entries {
            operations.push(Operation::move_to(
                &entry.path,
                folder.join(entry.name.as_str()),
            ));
        }
    }

    operations
}

/// Build a plan from an externally supplied grouping map.
///
/// Same shape as [`organize_operations`], but membership arrives as plain
/// paths. Each path moves to `base/<group>/<file name>`.
pub fn grouping_operations(base: impl AsRef<Path>, groups: &GroupingMap) -> Vec<Operation> {
    let base = base.as_ref();
    let mut operations = Vec::new();

    for (group, paths) in groups {
        let folder = base.join(group);
        operations.push(Operation::create_folder(&folder));
        for path in paths {
            let name = path.file_name().unwrap_or_default();
            operations.push(Operation::move_to(path, folder.join(name)));
        }
    }

    operations
}

/// Build rename operations from suggestions.
///
/// Each suggestion renames `original` to the suggested name inside the
/// same directory. The reason is advisory and does not carry into the
/// operation.
pub fn rename_operations(suggestions: &[RenameSuggestion]) -> Vec<Operation> {
    suggestions
        .iter()
        .map(|s| {
            let parent = s.original.parent().unwrap_or(Path::new(""));
            Operation::rename(&s.original, parent.join(&s.suggested))
        })
        .collect()
}
