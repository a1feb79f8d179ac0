//! Batch execution of ordered operation lists.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tidyfile_core::{BatchReport, Operation, OperationResult};

use crate::executor::execute;

/// Error message recorded for operations skipped after cancellation.
pub const CANCELLED_MESSAGE: &str = "batch cancelled before execution";

/// Sequential batch runner.
///
/// Operations run strictly in input order, one at a time. The runner
/// never stops early on failure: every operation is attempted and its
/// outcome recorded. An optional cancel flag is checked between
/// operations; once it is set, the remaining operations are recorded as
/// failures so the report still accounts for every input.
#[derive(Debug, Default)]
pub struct BatchRunner {
    cancel: Option<Arc<AtomicBool>>,
}

impl BatchRunner {
    /// Create a runner without cancellation support.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a runner that checks `cancel` between operations.
    pub fn with_cancel_flag(cancel: Arc<AtomicBool>) -> Self {
        Self {
            cancel: Some(cancel),
        }
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    /// Run every operation and report per-operation outcomes.
    pub fn run(&self, operations: Vec<Operation>) -> BatchReport {
        let mut results = Vec::with_capacity(operations.len());

        for operation in operations {
            if self.is_cancelled() {
                results.push(OperationResult::failed(operation, CANCELLED_MESSAGE));
                continue;
            }
            results.push(execute(operation));
        }

        let report = BatchReport::from_results(results);
        tracing::info!(
            total = report.total,
            successful = report.successful,
            failed = report.failed,
            "batch finished"
        );
        report
    }
}

/// Run a batch of operations with the default runner.
pub fn run_batch(operations: Vec<Operation>) -> BatchReport {
    BatchRunner::new().run(operations)
}
