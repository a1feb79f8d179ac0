//! Walkdir-based directory scanner.

use std::fs::Metadata;
use std::io::ErrorKind;
use std::path::Path;

use chrono::{DateTime, Utc};
use walkdir::{DirEntry, WalkDir};

use tidyfile_core::{FileEntry, OpError};

use crate::ScanOptions;

/// List the direct children of a directory in lexicographic name order.
///
/// Equivalent to [`scan`] with default options: hidden entries included,
/// symlinks not followed, depth limited to direct children.
pub fn list_directory(path: impl AsRef<Path>) -> Result<Vec<FileEntry>, OpError> {
    scan(path, &ScanOptions::default())
}

/// Walk a directory according to `options`.
///
/// Entries are yielded parent-first, sorted by name within each directory
/// level. Non-regular nodes (sockets, device files, unfollowed symlinks)
/// and entries whose metadata cannot be read are logged and skipped rather
/// than failing the whole scan. Returns an error only when the root itself
/// is missing, unreadable, or not a directory.
pub fn scan(path: impl AsRef<Path>, options: &ScanOptions) -> Result<Vec<FileEntry>, OpError> {
    let path = path.as_ref();
    let root = path.canonicalize().map_err(|e| OpError::io(path, e))?;

    // Verify root is a directory
    if !root.is_dir() {
        return Err(OpError::io(
            &root,
            std::io::Error::from(ErrorKind::NotADirectory),
        ));
    }

    let mut walker = WalkDir::new(&root)
        .min_depth(1)
        .follow_links(options.follow_symlinks)
        .sort_by_file_name();
    if let Some(depth) = options.max_depth {
        walker = walker.max_depth(depth);
    }

    // With min_depth(1) the root never reaches the predicate, so a hidden
    // root is still walked.
    let mut entries = Vec::new();
    for item in walker
        .into_iter()
        .filter_entry(|e| !options.should_skip_hidden(&e.file_name().to_string_lossy()))
    {
        let item = match item {
            Ok(item) => item,
            Err(e) => {
                tracing::warn!("skipping unreadable entry: {e}");
                continue;
            }
        };
        if let Some(entry) = to_entry(&item) {
            entries.push(entry);
        }
    }

    tracing::debug!(
        root = %root.display(),
        count = entries.len(),
        "scan complete"
    );
    Ok(entries)
}

/// Convert a walkdir entry, returning None for nodes the scan skips.
fn to_entry(item: &DirEntry) -> Option<FileEntry> {
    let file_type = item.file_type();
    let name = item.file_name().to_string_lossy();
    let path = item.path().to_path_buf();

    let metadata = match item.metadata() {
        Ok(metadata) => metadata,
        Err(e) => {
            tracing::warn!(path = %path.display(), "failed to read metadata: {e}");
            return None;
        }
    };

    if file_type.is_dir() {
        Some(
            FileEntry::directory(name.as_ref(), path, modified_at(&metadata))
                .with_created_at(created_at(&metadata)),
        )
    } else if file_type.is_file() {
        Some(
            FileEntry::file(name.as_ref(), path, metadata.len(), modified_at(&metadata))
                .with_created_at(created_at(&metadata)),
        )
    } else {
        tracing::debug!(path = %path.display(), "skipping non-regular entry");
        None
    }
}

fn modified_at(metadata: &Metadata) -> DateTime<Utc> {
    metadata
        .modified()
        .map(DateTime::<Utc>::from)
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

fn created_at(metadata: &Metadata) -> Option<DateTime<Utc>> {
    metadata.created().ok().map(DateTime::<Utc>::from)
}
