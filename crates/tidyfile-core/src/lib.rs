//! Core types for tidyfile.
//!
//! This crate provides the data model shared across the tidyfile
//! ecosystem: file entry snapshots, declarative operations, per-operation
//! results, batch reports, and the operation error taxonomy.

mod entry;
mod error;
mod operation;
mod report;

pub use entry::{FileEntry, extension_of};
pub use error::OpError;
pub use operation::{Operation, OperationKind, operations_from_json};
pub use report::{BatchReport, OperationResult};
