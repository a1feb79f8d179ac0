//! File operations engine for tidyfile.
//!
//! This crate executes declarative file operations (move, copy, delete,
//! rename, create-folder, create-file) against the filesystem. Every
//! failure is converted into a structured result record at the executor
//! boundary, so a batch of operations always runs to completion and
//! reports per-operation outcomes instead of aborting on the first error.

mod batch;
mod copy;
mod create;
mod delete;
mod executor;
mod move_op;

pub use batch::{BatchRunner, CANCELLED_MESSAGE, run_batch};
pub use copy::copy_recursive;
pub use create::{ensure_folder, write_file};
pub use delete::delete_recursive;
pub use executor::{
    copy_path, create_file, create_folder, delete_path, execute, move_path, rename_path,
};
pub use move_op::move_item;

// Re-export core types for convenience
pub use tidyfile_core::{BatchReport, OpError, Operation, OperationResult};
