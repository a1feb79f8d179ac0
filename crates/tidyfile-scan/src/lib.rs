//! Directory scanning for tidyfile.
//!
//! This crate turns directories into flat lists of [`FileEntry`] records
//! that the classification and planning layers consume.
//!
//! # Overview
//!
//! `tidyfile-scan` walks a directory with walkdir and produces entries in
//! lexicographic name order per directory level. Key features:
//!
//! - **Shallow or recursive** listing via a depth limit
//! - **Hidden-file filtering** that prunes whole hidden subtrees
//! - **Resilient traversal** that logs and skips unreadable entries
//!
//! # Example
//!
//! ```rust,no_run
//! use tidyfile_scan::{ScanOptions, scan};
//!
//! let options = ScanOptions::recursive();
//! let entries = scan("/path/to/dir", &options).unwrap();
//!
//! for entry in &entries {
//!     println!("{} ({} bytes)", entry.path.display(), entry.size);
//! }
//! ```

mod options;
mod scanner;

pub use options::{ScanOptions, ScanOptionsBuilder};
pub use scanner::{list_directory, scan};

// Re-export core types for convenience
pub use tidyfile_core::{FileEntry, OpError};
