//! Size-based analysis: duplicate candidates and largest files.

use derive_builder::Builder;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use tidyfile_core::FileEntry;

/// How many entries [`largest_files`] returns by default.
pub const DEFAULT_LARGEST_COUNT: usize = 10;

/// Configuration for duplicate candidate detection.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct DuplicateOptions {
    /// Minimum file size to consider. The default of 1 skips empty
    /// files, which would otherwise all land in one giant group.
    #[builder(default = "1")]
    pub min_size: u64,

    /// Maximum number of groups to return (0 = unlimited).
    #[builder(default = "0")]
    pub max_groups: usize,
}

impl Default for DuplicateOptions {
    fn default() -> Self {
        Self {
            min_size: 1,
            max_groups: 0,
        }
    }
}

impl DuplicateOptions {
    /// Create a new options builder.
    pub fn builder() -> DuplicateOptionsBuilder {
        DuplicateOptionsBuilder::default()
    }
}

/// A group of files sharing the same byte size.
///
/// Size equality is a heuristic: two files of equal size may still differ
/// in content, so a group marks *candidate* duplicates for a human or a
/// hashing pass to confirm.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuplicateGroup {
    /// Size of each file in bytes.
    pub size: u64,

    /// The entries sharing this size, in encounter order.
    pub entries: Vec<FileEntry>,

    /// Wasted space if all but one copy were removed: size * (count - 1).
    pub wasted_bytes: u64,
}

impl DuplicateGroup {
    /// Get the number of files in this group.
    pub fn count(&self) -> usize {
        self.entries.len()
    }
}

/// Find duplicate candidates with default options.
pub fn find_duplicates_by_size(entries: &[FileEntry]) -> Vec<DuplicateGroup> {
    find_duplicates_with(entries, &DuplicateOptions::default())
}

/// Group non-directory entries by exact byte size.
///
/// Only sizes shared by two or more files produce a group. Groups come
/// back sorted by wasted space descending; the sort is stable, so groups
/// wasting the same amount keep encounter order.
pub fn find_duplicates_with(
    entries: &[FileEntry],
    options: &DuplicateOptions,
) -> Vec<DuplicateGroup> {
    let mut by_size: IndexMap<u64, Vec<FileEntry>> = IndexMap::new();
    for entry in entries.iter().filter(|e| e.is_file()) {
        if entry.size < options.min_size {
            continue;
        }
        by_size.entry(entry.size).or_default().push(entry.clone());
    }

    // Single-member sizes are not duplicates
    by_size.retain(|_, group| group.len() > 1);

    let mut groups: Vec<DuplicateGroup> = by_size
        .into_iter()
        .map(|(size, entries)| {
            let wasted_bytes = size * (entries.len() as u64 - 1);
            DuplicateGroup {
                size,
                entries,
                wasted_bytes,
            }
        })
        .collect();

    groups.sort_by(|a, b| b.wasted_bytes.cmp(&a.wasted_bytes));

    if options.max_groups > 0 && groups.len() > options.max_groups {
        groups.truncate(options.max_groups);
    }

    groups
}

/// Rank non-directory entries by size descending and keep the top `count`.
///
/// The sort is stable: entries of equal size keep their original relative
/// order. Pass [`DEFAULT_LARGEST_COUNT`] for the conventional top ten.
pub fn largest_files(entries: &[FileEntry], count: usize) -> Vec<FileEntry> {
    let mut files: Vec<FileEntry> = entries.iter().filter(|e| e.is_file()).cloned().collect();
    files.sort_by(|a, b| b.size.cmp(&a.size));
    files.truncate(count);
    files
}
