//! Scan configuration types.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Configuration for directory scans.
///
/// The default configuration lists direct children only. Use
/// [`ScanOptions::recursive`] or set `max_depth` to `None` to walk a whole
/// subtree.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into))]
pub struct ScanOptions {
    /// Include hidden entries (names starting with `.`).
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub include_hidden: bool,

    /// Follow symbolic links.
    #[builder(default = "false")]
    #[serde(default)]
    pub follow_symlinks: bool,

    /// Maximum depth to traverse (None = unlimited, 1 = direct children).
    #[builder(default = "Some(1)")]
    #[serde(default = "default_max_depth")]
    pub max_depth: Option<usize>,
}

fn default_true() -> bool {
    true
}

fn default_max_depth() -> Option<usize> {
    Some(1)
}

impl ScanOptions {
    /// Create a new scan options builder.
    pub fn builder() -> ScanOptionsBuilder {
        ScanOptionsBuilder::default()
    }

    /// Options for an unbounded recursive walk.
    pub fn recursive() -> Self {
        Self {
            max_depth: None,
            ..Self::default()
        }
    }

    /// Check if an entry name should be skipped as hidden.
    pub fn should_skip_hidden(&self, name: &str) -> bool {
        !self.include_hidden && name.starts_with('.')
    }
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            include_hidden: true,
            follow_symlinks: false,
            max_depth: Some(1),
        }
    }
}
