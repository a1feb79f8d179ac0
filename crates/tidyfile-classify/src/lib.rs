//! Classification and organization planning for tidyfile.
//!
//! This crate buckets in-memory [`FileEntry`] lists and turns the buckets
//! into operation plans. Everything here is pure: no function reads or
//! writes the filesystem, so the whole crate is testable with hand-built
//! entry lists.
//!
//! - **Extension buckets** - group files by lowercased extension
//! - **Month buckets** - group files by `YYYY-MM` of their modification time
//! - **Category buckets** - fixed extension-to-category table (Documents, Images, ...)
//! - **Duplicate candidates** - group files by exact byte size
//! - **Largest files** - rank files by size descending
//! - **Plans** - turn a bucket map or rename list into an [`Operation`] list
//!
//! # Example
//!
//! ```rust,ignore
//! use tidyfile_classify::{group_by_extension, organize_operations};
//! use tidyfile_scan::list_directory;
//! use tidyfile_ops::run_batch;
//!
//! let entries = list_directory("/downloads").unwrap();
//! let buckets = group_by_extension(&entries);
//! let plan = organize_operations("/downloads", &buckets);
//! let report = run_batch(plan);
//!
//! println!("{}", report.summary());
//! ```

mod categories;
mod groups;
mod plan;
mod size;

pub use categories::{OTHER_CATEGORY, category_for, group_by_category};
pub use groups::{BucketMap, NO_EXTENSION_KEY, group_by_extension, group_by_month};
pub use plan::{
    GroupingMap, RenameSuggestion, grouping_operations, organize_operations, rename_operations,
};
pub use size::{
    DEFAULT_LARGEST_COUNT, DuplicateGroup, DuplicateOptions, DuplicateOptionsBuilder,
    find_duplicates_by_size, find_duplicates_with, largest_files,
};

// Re-export core types
pub use tidyfile_core::{FileEntry, Operation};
