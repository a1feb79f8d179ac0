//! Fallback extension-to-category mapping.
//!
//! Used when no semantic grouping is available: a fixed table maps known
//! extensions to broad category names, and everything else lands in the
//! "Other" bucket.

use tidyfile_core::FileEntry;

use crate::groups::BucketMap;

/// Category for extensions not covered by the table.
pub const OTHER_CATEGORY: &str = "Other";

/// Fixed mapping from category name to the extensions it covers.
///
/// Extensions are lowercased and dot-prefixed, matching the form
/// [`FileEntry`] stores.
const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Documents",
        &[
            ".pdf", ".doc", ".docx", ".txt", ".md", ".rtf", ".odt", ".xls", ".xlsx", ".ppt",
            ".pptx", ".csv",
        ],
    ),
    (
        "Images",
        &[
            ".jpg", ".jpeg", ".png", ".gif", ".bmp", ".svg", ".webp", ".tiff", ".ico", ".heic",
        ],
    ),
    (
        "Videos",
        &[".mp4", ".mov", ".avi", ".mkv", ".wmv", ".flv", ".webm", ".m4v"],
    ),
    (
        "Audio",
        &[".mp3", ".wav", ".flac", ".aac", ".ogg", ".m4a", ".wma"],
    ),
    (
        "Archives",
        &[".zip", ".tar", ".gz", ".bz2", ".xz", ".rar", ".7z"],
    ),
    (
        "Code",
        &[
            ".rs", ".py", ".js", ".ts", ".jsx", ".tsx", ".c", ".cpp", ".h", ".hpp", ".java",
            ".go", ".rb", ".sh", ".html", ".css", ".json", ".yaml", ".yml", ".toml", ".sql",
        ],
    ),
];

/// Look up the category for an extension.
///
/// Both a missing extension and an extension outside the table map to
/// [`OTHER_CATEGORY`].
pub fn category_for(extension: Option<&str>) -> &'static str {
    let Some(extension) = extension else {
        return OTHER_CATEGORY;
    };
    CATEGORIES
        .iter()
        .find(|(_, extensions)| extensions.contains(&extension))
        .map(|(name, _)| *name)
        .unwrap_or(OTHER_CATEGORY)
}

/// Bucket non-directory entries by category.
///
/// Buckets appear in first-encounter order. Categories with no matching
/// files are absent from the map rather than present and empty.
pub fn group_by_category(entries: &[FileEntry]) -> BucketMap {
    let mut buckets = BucketMap::new();
    for entry in entries.iter().filter(|e| e.is_file()) {
        let key = category_for(entry.extension.as_deref()).to_string();
        buckets.entry(key).or_default().push(entry.clone());
    }
    buckets
}
