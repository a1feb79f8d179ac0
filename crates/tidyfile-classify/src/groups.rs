//! Extension and month bucketing.

use indexmap::IndexMap;

use tidyfile_core::FileEntry;

/// Bucket key for files without an extension.
pub const NO_EXTENSION_KEY: &str = "no-extension";

/// Mapping from bucket key to the entries that landed in it.
///
/// Keys keep first-encounter order: the bucket of the first matching file
/// comes first. Callers wanting alphabetical output sort explicitly.
pub type BucketMap = IndexMap<String, Vec<FileEntry>>;

/// Bucket non-directory entries by extension.
///
/// Directories are ignored. Files without an extension land under
/// [`NO_EXTENSION_KEY`]. Every non-directory entry appears in exactly
/// one bucket.
pub fn group_by_extension(entries: &[FileEntry]) -> BucketMap {
    let mut buckets = BucketMap::new();
    for entry in entries.iter().filter(|e| e.is_file()) {
        let key = entry
            .extension
            .as_deref()
            .unwrap_or(NO_EXTENSION_KEY)
            .to_string();
        buckets.entry(key).or_default().push(entry.clone());
    }
    buckets
}

/// Bucket non-directory entries by modification month.
///
/// Keys are `YYYY-MM` with a zero-padded month, computed in UTC so the
/// bucketing does not depend on the local timezone of the machine that
/// ran the scan.
pub fn group_by_month(entries: &[FileEntry]) -> BucketMap {
    let mut buckets = BucketMap::new();
    for entry in entries.iter().filter(|e| e.is_file()) {
        let key = entry.modified_at.format("%Y-%m").to_string();
        buckets.entry(key).or_default().push(entry.clone());
    }
    buckets
}
